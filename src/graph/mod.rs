use num_traits::Zero;
use tracing::info;

use crate::collections::FxIndexSet;
use crate::errors::{Result, RouteError};


/// Campus map: a fixed set of named landmarks and a dense edge weight matrix
/// Node ids are the landmark's position in the name set, `[0, len)`
/// `None` in the matrix means there is no direct edge
/// Weights must be non-negative - shortest path search is undefined otherwise
#[derive(Clone, Debug)]
pub struct CampusGraph<C> {
    landmarks: FxIndexSet<String>,
    weights: Vec<Option<C>>, // row-major, len * len
}

impl<C: Zero + Copy> CampusGraph<C> {

    /// Build a graph from landmark names and matrix rows
    /// Every row must have one cell per landmark and the diagonal must be zero
    pub fn new<I, S>(landmarks: I, rows: Vec<Vec<Option<C>>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = FxIndexSet::default();
        for name in landmarks {
            let name = name.into();
            if !names.insert(name.clone()) {
                return Err(RouteError::InvalidMap(format!("duplicate landmark {name:?}")));
            }
        }

        let len = names.len();
        if len == 0 {
            return Err(RouteError::InvalidMap("map has no landmarks".to_string()));
        }
        if rows.len() != len {
            return Err(RouteError::InvalidMap(format!(
                "{len} landmarks but {} matrix rows", rows.len()
            )));
        }

        let mut weights = Vec::with_capacity(len * len);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != len {
                return Err(RouteError::InvalidMap(format!(
                    "row {i} has {} cells, expected {len}", row.len()
                )));
            }
            if !row[i].is_some_and(|w| w.is_zero()) {
                return Err(RouteError::InvalidMap(format!("diagonal cell {i} must be 0")));
            }
            weights.extend(row);
        }

        Ok(Self { landmarks: names, weights })
    }

    /// Build a graph from a plain matrix where `no_edge` marks a missing edge
    pub fn from_sentinel_matrix<I, S>(landmarks: I, rows: &[Vec<C>], no_edge: C) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        C: PartialEq,
    {
        let rows = rows.iter()
            .map(|row| row.iter().map(|&w| (w != no_edge).then_some(w)).collect())
            .collect();
        Self::new(landmarks, rows)
    }
}

impl<C: Copy> CampusGraph<C> {

    /// Number of landmarks
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Validate a node id against the map size
    pub fn check(&self, node: usize) -> Result<usize> {
        if node < self.len() {
            Ok(node)
        } else {
            Err(RouteError::OutOfRange { node, len: self.len() })
        }
    }

    /// Display name of a landmark
    pub fn name(&self, node: usize) -> Result<&str> {
        self.landmarks.get_index(node)
            .map(String::as_str)
            .ok_or(RouteError::OutOfRange { node, len: self.len() })
    }

    /// Resolve a landmark name to its node id
    pub fn id_of(&self, name: &str) -> Result<usize> {
        self.landmarks.get_index_of(name)
            .ok_or_else(|| RouteError::UnknownLandmark(name.to_string()))
    }

    /// All landmarks in id order
    pub fn landmarks(&self) -> impl Iterator<Item = (usize, &str)> {
        self.landmarks.iter().map(String::as_str).enumerate()
    }

    /// Direct edge weight from `from` to `to`, `None` if there is no edge
    pub fn weight(&self, from: usize, to: usize) -> Result<Option<C>> {
        Ok(self.weights[self.index(from, to)?])
    }

    /// Direct edges leaving `node` as (neighbor, weight), self edge excluded
    pub fn neighbors(&self, node: usize) -> Result<impl Iterator<Item = (usize, C)> + '_> {
        let start = self.index(node, 0)?;
        let row = &self.weights[start..start + self.len()];
        Ok(row.iter()
            .enumerate()
            .filter(move |&(to, _)| to != node)
            .filter_map(|(to, w)| w.map(|w| (to, w))))
    }

    /// Permanently remove the direct edge `from -> to`
    /// Returns the weight it had, `None` when the edge was already gone
    /// The reverse edge is left untouched
    pub fn consume_edge(&mut self, from: usize, to: usize) -> Result<Option<C>>
    where
        C: std::fmt::Debug,
    {
        let index = self.index(from, to)?;
        if from == to {
            return Err(RouteError::SelfEdge { node: from });
        }
        let weight = self.weights[index].take();
        info!(from, to, weight = ?weight, "edge consumed");
        Ok(weight)
    }

    fn index(&self, from: usize, to: usize) -> Result<usize> {
        Ok(self.check(from)? * self.len() + self.check(to)?)
    }
}
