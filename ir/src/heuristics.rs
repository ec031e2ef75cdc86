use tutte_pass::Pass;

use crate::error::DecompositionError;
use crate::graph::Graph;

/// Runs a plain greedy elimination: at each step, eliminate the active
/// vertex of minimum `cost`. Ties go to whichever vertex a left-to-right
/// scan reaches first, matching `Iterator::min_by_key`'s documented
/// behavior.
fn greedy_order(mut g: Graph, cost: impl Fn(&Graph, usize) -> usize) -> Vec<usize> {
    let n = g.vertex_count();
    let mut active: Vec<usize> = (0..n).collect();
    let mut order = Vec::with_capacity(n);
    for _ in 0..n {
        let v = *active.iter().min_by_key(|&&v| cost(&g, v)).expect("active vertices remain");
        order.push(v);
        g.eliminate_vertex(v);
        active.retain(|&x| x != v);
    }
    order
}

/// Runs the "local" variant: after eliminating the current vertex, the next
/// one is chosen from the current vertex's neighbors (computed before it is
/// eliminated), not from the whole remaining graph. Falls back to a global
/// minimum when the current vertex has no remaining neighbors, which can
/// only happen on the final step for a connected input.
fn greedy_local_order(mut g: Graph, cost: impl Fn(&Graph, usize) -> usize) -> Vec<usize> {
    let n = g.vertex_count();
    let mut active: Vec<usize> = (0..n).collect();
    let mut order = Vec::with_capacity(n);
    let mut current = *active.iter().min_by_key(|&&v| cost(&g, v)).expect("active vertices remain");
    for _ in 0..n {
        order.push(current);
        let candidates: Vec<usize> =
            g.neighbors(current).into_iter().filter(|c| active.contains(c)).collect();
        let next = candidates.iter().copied().min_by_key(|&v| cost(&g, v));
        g.eliminate_vertex(current);
        active.retain(|&x| x != current);
        current = match next.or_else(|| active.iter().min_by_key(|&&v| cost(&g, v)).copied()) {
            Some(v) => v,
            None => break,
        };
    }
    order
}

/// Eliminates vertices of minimum current degree first.
pub struct GreedyDegree;

impl Pass for GreedyDegree {
    type Input = Graph;
    type Output = Vec<usize>;
    type Error = DecompositionError;

    fn run(&mut self, input: Graph) -> Result<Vec<usize>, DecompositionError> {
        if input.vertex_count() == 0 {
            return Err(DecompositionError::EmptyGraph);
        }
        Ok(greedy_order(input, Graph::degree))
    }
}

/// Eliminates vertices of minimum fill-in cost first, preserving the
/// reference algorithm's inverted cost function (see `Graph::fillin_cost`).
pub struct GreedyFillIn;

impl Pass for GreedyFillIn {
    type Input = Graph;
    type Output = Vec<usize>;
    type Error = DecompositionError;

    fn run(&mut self, input: Graph) -> Result<Vec<usize>, DecompositionError> {
        if input.vertex_count() == 0 {
            return Err(DecompositionError::EmptyGraph);
        }
        Ok(greedy_order(input, Graph::fillin_cost))
    }
}

/// Like [GreedyDegree], but the next vertex is chosen from the current
/// vertex's neighbors.
pub struct GreedyLocalDegree;

impl Pass for GreedyLocalDegree {
    type Input = Graph;
    type Output = Vec<usize>;
    type Error = DecompositionError;

    fn run(&mut self, input: Graph) -> Result<Vec<usize>, DecompositionError> {
        if input.vertex_count() == 0 {
            return Err(DecompositionError::EmptyGraph);
        }
        Ok(greedy_local_order(input, Graph::degree))
    }
}

/// Like [GreedyFillIn], but the next vertex is chosen from the current
/// vertex's neighbors.
pub struct GreedyLocalFillIn;

impl Pass for GreedyLocalFillIn {
    type Input = Graph;
    type Output = Vec<usize>;
    type Error = DecompositionError;

    fn run(&mut self, input: Graph) -> Result<Vec<usize>, DecompositionError> {
        if input.vertex_count() == 0 {
            return Err(DecompositionError::EmptyGraph);
        }
        Ok(greedy_local_order(input, Graph::fillin_cost))
    }
}
