use crate::errors::{Result, RouteError};
use super::ShortestPathTree;

/// Construct the shortest path from the goal node back to the source
/// Returns the ordered path as a vector of node ids from source to goal
/// tree: ShortestPathTree<C> - distances and predecessor links from a single source
/// goal: usize - id of the goal node
pub fn shortest_path<C: Copy>(tree: &ShortestPathTree<C>, goal: usize) -> Result<Vec<usize>> {
    let len = tree.len();
    let source = tree.source();

    if goal >= len {
        return Err(RouteError::OutOfRange { node: goal, len });
    }
    if tree.distance(goal).is_none() {
        return Err(RouteError::Unreachable { from: source, to: goal });
    }

    let malformed = RouteError::MalformedChain { from: source, to: goal, limit: len };
    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to source, a valid chain visits each node at most once
    while current != source {
        let parent = match tree.predecessors.get(current) {
            Some(&parent) if parent != current && path.len() < len => parent,
            _ => return Err(malformed),
        };
        path.push(parent);
        current = parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
