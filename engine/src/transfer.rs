use tutte_ir::{Bag, Link};
use tutte_ring::RingElement;

use crate::operators::{Table, TutteOperators};

/// Computes the transfer table accumulated at `bag`, by first recursing
/// into each child, reducing its table down to the vertices it shares with
/// `bag`, fusing it in, and finally applying every genuine edge owned by
/// `bag` itself.
pub fn recurse<R: RingElement>(op: &TutteOperators<R>, bag: &Link<Bag>) -> Table<R> {
    let b = bag.borrow();
    let mut table = op.empty_state(b.vertices.len());

    for child in &b.children {
        let mut child_table = recurse(op, child);
        let child_vertices = child.borrow().vertices.clone();
        let mut scratch = child_vertices.clone();

        let leaving: Vec<usize> = child_vertices.iter().filter(|&v| !b.vertices.contains(v)).collect();
        for v in leaving {
            let idx = scratch.index_of(v).expect("vertex leaving the boundary is still in scratch");
            child_table = op.delete_operator(idx, &child_table);
            scratch.remove(v);
        }

        let a_to_b: Vec<usize> = (0..scratch.len())
            .map(|i| {
                let v = scratch.at(i);
                b.vertices.index_of(v).expect("surviving child vertex must be in parent bag")
            })
            .collect();
        table = op.table_fusion(&a_to_b, &child_table, &table);
    }

    for &(u, w) in &b.edges {
        let i = b.vertices.index_of(u).expect("edge endpoint must be in its own bag");
        let j = b.vertices.index_of(w).expect("edge endpoint must be in its own bag");
        table = op.join_operator(i, j, &table);
    }

    table
}

/// Runs the full recursion from `root` down and reduces away every
/// remaining boundary vertex, leaving a single weight: the Tutte
/// polynomial of the whole graph.
///
/// A final table of any size other than one is a bug in the recursion or
/// the decomposition that built `root`, not a data problem — it is
/// reported by assertion, not `Result`.
pub fn transfer<R: RingElement>(op: &TutteOperators<R>, root: &Link<Bag>) -> R {
    let mut table = recurse(op, root);
    let vertices = root.borrow().vertices.clone();
    let mut scratch = vertices.clone();
    for v in vertices.iter() {
        let idx = scratch.index_of(v).expect("root vertex must be in scratch");
        table = op.delete_operator(idx, &table);
        scratch.remove(v);
    }
    assert_eq!(
        table.len(),
        1,
        "transfer recursion left {} final connectivity states, expected exactly 1",
        table.len()
    );
    table.into_values().next().expect("exactly one entry checked above")
}
