use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::graph::CampusGraph;


/// Sentinel used by the built-in map for "no direct edge"
pub const DEFAULT_NO_EDGE: u32 = 999;

const SAMPLE_LANDMARKS: [&str; 8] = [
    "Agriculture Block",
    "A Block",
    "AI & Future Centre Block",
    "C Block",
    "D & E Block",
    "OAT",
    "G & H Block",
    "Library",
];

const N: u32 = DEFAULT_NO_EDGE;
const SAMPLE_WEIGHTS: [[u32; 8]; 8] = [
    [0, 250, 400, N, N, N, N, N],
    [250, 0, 100, 100, N, N, N, N],
    [400, 100, 0, N, N, N, N, N],
    [N, 100, N, 0, 200, 100, 300, N],
    [N, N, N, 200, 0, 100, 100, N],
    [N, N, N, 100, 100, 0, 200, N],
    [N, N, N, 300, 100, 200, 0, 70],
    [N, N, N, N, N, N, 70, 0],
];


/// Static description of a campus map, loadable from TOML
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampusConfig {
    /// Landmark names, node id = position in this list
    pub landmarks: Vec<String>,

    /// Weight value meaning "no direct edge"
    #[serde(default = "default_no_edge")]
    pub no_edge: u32,

    /// Remove both directions of an edge when it is reserved
    #[serde(default)]
    pub mirror_reservations: bool,

    /// Row-major weights, one row and one column per landmark
    pub weights: Vec<Vec<u32>>,
}

fn default_no_edge() -> u32 {
    DEFAULT_NO_EDGE
}

impl CampusConfig {

    /// The built-in eight landmark campus
    pub fn sample() -> Self {
        Self {
            landmarks: SAMPLE_LANDMARKS.iter().map(|name| name.to_string()).collect(),
            no_edge: DEFAULT_NO_EDGE,
            mirror_reservations: false,
            weights: SAMPLE_WEIGHTS.iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a map from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading map");
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate the map and build the graph it describes
    pub fn to_graph(&self) -> Result<CampusGraph<u32>> {
        CampusGraph::from_sentinel_matrix(self.landmarks.iter().cloned(), &self.weights, self.no_edge)
    }
}
