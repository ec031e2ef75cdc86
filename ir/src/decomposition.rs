use tutte_pass::Pass;

use crate::bag::Bag;
use crate::error::DecompositionError;
use crate::graph::Graph;
use crate::link::Link;

/// Builds a rooted tree decomposition from a graph and an elimination
/// order. Runs on a private copy of the graph; the order is replayed
/// exactly as vertex elimination would, except each bag is recorded before
/// its vertex disappears.
pub struct BuildTreeDecomposition;

impl Pass for BuildTreeDecomposition {
    type Input = (Graph, Vec<usize>);
    type Output = Link<Bag>;
    type Error = DecompositionError;

    fn run(&mut self, (graph, order): (Graph, Vec<usize>)) -> Result<Link<Bag>, DecompositionError> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(DecompositionError::EmptyGraph);
        }
        if order.len() != n {
            return Err(DecompositionError::WrongLength { got: order.len(), expected: n });
        }
        let mut seen = vec![false; n];
        for &v in &order {
            if v >= n || seen[v] {
                return Err(DecompositionError::NotAPermutation { n, vertex: v });
            }
            seen[v] = true;
        }

        let mut g = graph;
        let mut bags: Vec<Option<Link<Bag>>> = (0..n).map(|_| None).collect();
        let mut parent: Vec<Option<usize>> = vec![None; n];

        for (pos, &v) in order.iter().enumerate() {
            let mut bag = Bag::new();
            bag.vertices.insert(v);
            for &eid in g.incident_edges(v) {
                let e = g.edge(eid);
                let other = if e.u == v { e.v } else { e.u };
                bag.vertices.insert(other);
                if !e.fill_in {
                    bag.edges.push((v, other));
                }
            }

            // Parent is the neighbor of v appearing earliest among the
            // vertices still to be processed. The last vertex in the order
            // has no remaining neighbors and becomes the root.
            if !g.incident_edges(v).is_empty() {
                for &candidate in &order[pos + 1..] {
                    if g.adjacent(v, candidate) {
                        parent[v] = Some(candidate);
                        break;
                    }
                }
            }

            g.eliminate_vertex(v);
            bags[v] = Some(Link::new(bag));
        }

        for &v in order.iter().rev() {
            if let Some(p) = parent[v] {
                let child = bags[v].clone().expect("bag built for every vertex");
                let parent_bag = bags[p].as_ref().expect("bag built for every vertex");
                parent_bag.borrow_mut().children.push(child);
            }
        }

        let root_vertex = order[n - 1];
        Ok(bags[root_vertex].clone().expect("root bag built"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::tree_width;

    fn triangle() -> Graph {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        g
    }

    #[test]
    fn builds_a_tree_covering_every_edge_once() {
        let root = BuildTreeDecomposition.run((triangle(), vec![0, 1, 2])).unwrap();

        fn collect_edges(bag: &Link<Bag>, out: &mut Vec<(usize, usize)>) {
            let b = bag.borrow();
            out.extend(b.edges.iter().copied());
            for child in &b.children {
                collect_edges(child, out);
            }
        }
        let mut edges = Vec::new();
        collect_edges(&root, &mut edges);
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn rejects_non_permutation_orders() {
        let result = BuildTreeDecomposition.run((triangle(), vec![0, 0, 2]));
        assert!(matches!(result, Err(DecompositionError::NotAPermutation { .. })));
    }

    #[test]
    fn rejects_wrong_length_orders() {
        let result = BuildTreeDecomposition.run((triangle(), vec![0, 1]));
        assert!(matches!(result, Err(DecompositionError::WrongLength { .. })));
    }

    #[test]
    fn tree_width_of_triangle_is_two() {
        let root = BuildTreeDecomposition.run((triangle(), vec![0, 1, 2])).unwrap();
        assert_eq!(tree_width(&root), 2);
    }
}
