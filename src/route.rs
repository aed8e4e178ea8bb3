use std::fmt;

use crate::errors::{Result, RouteError};
use crate::graph::CampusGraph;
use crate::graph_algos::{ShortestPathTree, shortest_path};


/// Display-ready route, rendered from the destination back toward the source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<C> {
    pub source: String,
    pub destination: String,
    /// Intermediate landmarks in travel order, endpoints excluded
    pub hops: Vec<String>,
    pub distance: C,
}

impl<C: Copy> Route<C> {

    /// Rebuild the route to `destination` from a search rooted at the route's source
    pub fn reconstruct(graph: &CampusGraph<C>, tree: &ShortestPathTree<C>, destination: usize) -> Result<Self> {
        let path = shortest_path(tree, destination)?;
        let distance = tree.distance(destination)
            .ok_or(RouteError::Unreachable { from: tree.source(), to: destination })?;

        let hops = match path.as_slice() {
            [_, middle @ .., _] => middle.iter()
                .map(|&node| graph.name(node).map(str::to_string))
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            source: graph.name(tree.source())?.to_string(),
            destination: graph.name(destination)?.to_string(),
            hops,
            distance,
        })
    }
}

impl<C: fmt::Display> fmt::Display for Route<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.destination)?;
        for hop in self.hops.iter().rev() {
            write!(f, " <--- {hop}")?;
        }
        write!(f, "\nTotal Distance {}", self.distance)
    }
}
