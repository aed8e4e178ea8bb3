use crate::errors::{Result, RouteError};
use crate::graph::CampusGraph;
use super::ShortestPathTree;

use num_traits::{CheckedAdd, Zero};
use tracing::debug;



/// Single-source shortest paths using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Dense O(V^2) variant: the map is small, so the next node is found by a linear
/// scan instead of a priority queue. Ties go to the lowest node id.
/// Requires non-negative edge weights
pub fn dijkstra<C>(graph: &CampusGraph<C>, source: usize) -> Result<ShortestPathTree<C>>
where
    C: Zero + Ord + Copy + CheckedAdd,
{
    let len = graph.len();
    graph.check(source)?;

    let mut distances: Vec<Option<C>> = vec![None; len];
    let mut predecessors: Vec<usize> = (0..len).collect();
    let mut visited = vec![false; len];
    distances[source] = Some(Zero::zero());

    for _ in 0..len {
        // every node left unvisited is unreachable
        let Some((nearest, cost)) = nearest_unvisited(&distances, &visited) else {
            break;
        };
        visited[nearest] = true;

        for (neighbor, edge_cost) in graph.neighbors(nearest)? {
            if visited[neighbor] {
                continue;
            }

            let new_cost = match cost.checked_add(&edge_cost) {
                Some(new_cost) => new_cost,
                // a sum past the type's max never beats a distance that fits
                None if distances[neighbor].is_some() => continue,
                None => return Err(RouteError::DistanceOverflow { from: nearest, to: neighbor }),
            };

            // strict improvement only, the first path found keeps ties
            if distances[neighbor].is_none_or(|current| new_cost < current) {
                distances[neighbor] = Some(new_cost);
                predecessors[neighbor] = nearest;
            }
        }
    }

    debug!(
        source,
        reached = distances.iter().filter(|d| d.is_some()).count(),
        "shortest path tree built"
    );

    Ok(ShortestPathTree { source, distances, predecessors })
}


/// Unvisited node with the smallest known distance, lowest id on ties
fn nearest_unvisited<C: Ord + Copy>(distances: &[Option<C>], visited: &[bool]) -> Option<(usize, C)> {
    distances.iter()
        .zip(visited)
        .enumerate()
        .filter(|&(_, (_, &done))| !done)
        .filter_map(|(node, (distance, _))| distance.map(|d| (node, d)))
        .min_by_key(|&(_, d)| d) // first minimum wins
}
