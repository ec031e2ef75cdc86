/// Errors raised while building a vertex ordering or a tree decomposition.
///
/// These are data errors: something about the input graph or a
/// user-supplied ordering is wrong. A broken invariant of the decomposition
/// algorithm itself is a bug, not a `DecompositionError`, and is reported by
/// `assert!`/`debug_assert!` instead (see `transfer` in `tutte-engine`).
#[derive(Debug, thiserror::Error)]
pub enum DecompositionError {
    #[error("elimination order has {got} entries, expected {expected}")]
    WrongLength { got: usize, expected: usize },

    #[error("elimination order is not a permutation of 0..{n} (repeated or out-of-range vertex {vertex})")]
    NotAPermutation { n: usize, vertex: usize },

    #[error("graph has no vertices")]
    EmptyGraph,
}
