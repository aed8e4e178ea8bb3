use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Debug, Error)]
pub enum RouteError {
    /// Node identifier outside `[0, len)`
    #[error("node {node} is out of range for a map of {len} landmarks")]
    OutOfRange { node: usize, len: usize },

    #[error("unknown landmark: {0}")]
    UnknownLandmark(String),

    /// Goal has no path from the start node
    #[error("no route from node {from} to node {to}")]
    Unreachable { from: usize, to: usize },

    /// Predecessor links loop or dead-end before reaching the start node
    #[error("predecessor chain from node {to} does not reach node {from} within {limit} steps")]
    MalformedChain { from: usize, to: usize, limit: usize },

    #[error("distance overflow relaxing edge {from} -> {to}")]
    DistanceOverflow { from: usize, to: usize },

    /// A node's edge to itself is always 0 and cannot be consumed
    #[error("cannot consume the self edge of node {node}")]
    SelfEdge { node: usize },

    #[error("invalid map: {0}")]
    InvalidMap(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}
