use std::fmt;

use crate::link::Link;
use crate::vertex_set::VertexSet;

/// A node of a tree decomposition: the vertices it covers, the genuine
/// graph edges it is responsible for, and its children. Shared via [Link]
/// since the tree is built bottom-up and a bag is referenced both by its
/// parent and, transiently, by the recursion frame that just finished it.
#[derive(Debug, Clone)]
pub struct Bag {
    pub vertices: VertexSet,
    pub edges: Vec<(usize, usize)>,
    pub children: Vec<Link<Bag>>,
}

impl Bag {
    pub fn new() -> Self {
        Bag { vertices: VertexSet::new(), edges: Vec::new(), children: Vec::new() }
    }
}

impl Default for Bag {
    fn default() -> Self {
        Bag::new()
    }
}

/// Largest bag size across the whole tree, minus one.
pub fn tree_width(root: &Link<Bag>) -> usize {
    fn max_bag_size(bag: &Link<Bag>) -> usize {
        let b = bag.borrow();
        b.children.iter().map(max_bag_size).fold(b.vertices.len(), usize::max)
    }
    max_bag_size(root).saturating_sub(1)
}

impl fmt::Display for Bag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for v in self.vertices.iter() {
            write!(f, " {}", v)?;
        }
        if !self.edges.is_empty() {
            write!(f, " |")?;
            for (u, w) in &self.edges {
                write!(f, " {}-{}", u, w)?;
            }
        }
        write!(f, " )")?;
        if !self.children.is_empty() {
            write!(f, " {{")?;
            for child in &self.children {
                write!(f, " {}", child.borrow())?;
            }
            write!(f, " }}")?;
        }
        Ok(())
    }
}
