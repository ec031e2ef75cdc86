use std::collections::HashMap;

use tutte_ir::ConnectivityState;
use tutte_ring::RingElement;

/// A transfer table: the weight accumulated under each boundary
/// connectivity seen so far. Absent keys denote a zero weight; no entry
/// is ever stored with a zero value.
pub type Table<R> = HashMap<ConnectivityState, R>;

/// The four operators the transfer recursion is built from, parameterized
/// over a weight ring `R` — in practice `Polynomial<i64>` for the master
/// run, `Polynomial<BigInt>` for a direct big-integer run, or
/// `Polynomial<Zp>` for one leg of a Chinese-remainder run.
///
/// `one`, `q`, and `v` are supplied by the caller rather than derived from
/// `R::one()`/`R::q()`: `Zp` has no context-free multiplicative identity
/// (it needs a modulus), so the identity element travels in as a value
/// instead of being conjured from a trait bound.
pub struct TutteOperators<R> {
    one: R,
    q: R,
    v: R,
}

impl<R: RingElement> TutteOperators<R> {
    pub fn new(one: R, q: R, v: R) -> Self {
        TutteOperators { one, q, v }
    }

    /// A table with a single key: the all-singletons connectivity of size
    /// `n`, weighted by the ring's multiplicative identity.
    pub fn empty_state(&self, n: usize) -> Table<R> {
        let mut table = HashMap::new();
        table.insert(ConnectivityState::new(n), self.one.clone());
        table
    }

    /// Applies the effect of adding an edge between bag-positions `i` and
    /// `j`: each configuration contributes itself unchanged (edge absent)
    /// and, with the two positions merged, itself scaled by `v` (edge
    /// present).
    pub fn join_operator(&self, i: usize, j: usize, table: &Table<R>) -> Table<R> {
        let mut out = Table::new();
        for (c, w) in table {
            accumulate(&mut out, *c, w.clone());
            let mut merged = *c;
            merged.connect(i, j);
            merged.canonicalize();
            accumulate(&mut out, merged, w.clone() * self.v.clone());
        }
        out
    }

    /// Removes position `i` from every configuration. A position leaving
    /// the boundary alone (a singleton block) closes off a component and
    /// contributes a factor `q`; a position that was already joined to
    /// another contributes nothing extra.
    pub fn delete_operator(&self, i: usize, table: &Table<R>) -> Table<R> {
        let mut out = Table::new();
        for (c, w) in table {
            let closes_component = c.singleton(i);
            let mut reduced = *c;
            reduced.delete_node(i);
            reduced.canonicalize();
            let value = if closes_component { w.clone() * self.q.clone() } else { w.clone() };
            accumulate(&mut out, reduced, value);
        }
        out
    }

    /// Merges a child's table `a` into a parent's table `b`, after `a`'s
    /// boundary has been permuted into `b`'s index space via `a_to_b`.
    pub fn table_fusion(&self, a_to_b: &[usize], a: &Table<R>, b: &Table<R>) -> Table<R> {
        let mut out = Table::new();
        for (a_state, wa) in a {
            for (b_state, wb) in b {
                let mut merged = *b_state;
                a_state.decompose(|p, q| merged.connect(a_to_b[p], a_to_b[q]));
                merged.canonicalize();
                accumulate(&mut out, merged, wa.clone() * wb.clone());
            }
        }
        out
    }
}

fn accumulate<R: RingElement>(table: &mut Table<R>, key: ConnectivityState, value: R) {
    if value.is_zero() {
        return;
    }
    match table.remove(&key) {
        Some(existing) => {
            let combined = existing + value;
            if !combined.is_zero() {
                table.insert(key, combined);
            }
        }
        None => {
            table.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops() -> TutteOperators<i64> {
        TutteOperators::new(1, 7, 11)
    }

    #[test]
    fn empty_state_has_identity_weight() {
        let table = ops().empty_state(2);
        assert_eq!(table.len(), 1);
        assert_eq!(*table.values().next().unwrap(), 1);
    }

    #[test]
    fn join_then_delete_closes_a_component() {
        let table = ops().empty_state(2);
        let joined = ops().join_operator(0, 1, &table);
        // two configurations: edge absent (weight 1), edge present (weight v)
        assert_eq!(joined.len(), 2);
        let deleted = ops().delete_operator(0, &joined);
        let total: i64 = deleted.values().copied().sum();
        // absent contributes q (closed singleton), present contributes v
        assert_eq!(total, 7 + 11);
    }
}
