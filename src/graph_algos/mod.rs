
pub mod dijkstra;
mod shortest_path;

pub use dijkstra::dijkstra;
pub use shortest_path::shortest_path;

/// Result of a single-source search over the whole map
/// distances: best known cost from the source, `None` = unreachable
/// predecessors: node immediately before each node on its shortest path
/// - the source and unreached nodes point at themselves
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathTree<C> {
    source: usize,
    distances: Vec<Option<C>>,
    predecessors: Vec<usize>,
}

impl<C: Copy> ShortestPathTree<C> {

    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of nodes covered by the tree
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distances(&self) -> &[Option<C>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[usize] {
        &self.predecessors
    }

    /// Cost from the source to `node`, `None` if unreachable or out of range
    pub fn distance(&self, node: usize) -> Option<C> {
        self.distances.get(node).copied().flatten()
    }
}
