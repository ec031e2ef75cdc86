//! Graphs, tree decompositions, connectivity states, and the four
//! elimination-order heuristics used to build a decomposition.
//!
//! This crate knows nothing about the Tutte polynomial itself; it only
//! produces the tree that `tutte-engine` runs its transfer recursion over.

mod bag;
mod connectivity;
mod decomposition;
mod error;
mod graph;
mod heuristics;
mod link;
mod vertex_set;

pub use bag::{tree_width, Bag};
pub use connectivity::{ConnectivityState, MAX_TREEWIDTH_CEILING};
pub use decomposition::BuildTreeDecomposition;
pub use error::DecompositionError;
pub use graph::{Edge, Graph};
pub use heuristics::{GreedyDegree, GreedyFillIn, GreedyLocalDegree, GreedyLocalFillIn};
pub use link::Link;
pub use vertex_set::VertexSet;
