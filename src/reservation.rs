use std::fmt::Debug;

use tracing::{info, warn};

use crate::errors::Result;
use crate::graph::CampusGraph;


/// Request to take the direct edge `from -> to` out of the map
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRequest {
    pub from: usize,
    pub to: usize,
}

/// What a fired reservation consumed
/// weight is `None` when the edge had already been removed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reservation<C> {
    pub from: usize,
    pub to: usize,
    pub weight: Option<C>,
}

/// One-shot guard around edge consumption
/// A request arms the guard, firing consumes the edge and disarms it, so
/// firing again without a new request does nothing
#[derive(Debug, Default)]
pub struct ReservationGuard {
    pending: Option<EdgeRequest>,
}

impl ReservationGuard {

    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the guard, replacing any request that has not fired yet
    pub fn arm(&mut self, request: EdgeRequest) {
        if let Some(previous) = self.pending.replace(request) {
            warn!(?previous, ?request, "replacing reservation that never fired");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending request against the graph
    /// mirror also removes the reverse edge `to -> from`
    /// The guard is disarmed even when the request turns out to be invalid
    pub fn fire<C: Copy + Debug>(&mut self, graph: &mut CampusGraph<C>, mirror: bool) -> Result<Option<Reservation<C>>> {
        let Some(EdgeRequest { from, to }) = self.pending.take() else {
            return Ok(None);
        };

        let weight = graph.consume_edge(from, to)?;
        if mirror {
            graph.consume_edge(to, from)?;
        }

        match weight {
            Some(weight) => info!(from, to, ?weight, mirror, "reservation applied"),
            None => warn!(from, to, "reservation found no edge to consume"),
        }

        Ok(Some(Reservation { from, to, weight }))
    }
}
