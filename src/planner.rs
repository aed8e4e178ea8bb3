use std::fmt::Debug;

use num_traits::{CheckedAdd, Zero};
use tracing::debug;

use crate::config::CampusConfig;
use crate::errors::Result;
use crate::graph::CampusGraph;
use crate::graph_algos::dijkstra;
use crate::reservation::{EdgeRequest, Reservation, ReservationGuard};
use crate::route::Route;


/// Query entry point over a campus map
/// Owns the map, so the one mutation the map allows (edge reservations)
/// goes through here and is seen by every later query
#[derive(Debug)]
pub struct RoutePlanner<C = u32> {
    graph: CampusGraph<C>,
    guard: ReservationGuard,
    mirror_reservations: bool,
    last_reservation: Option<Reservation<C>>,
}

impl RoutePlanner<u32> {

    /// Planner over the map described by a config
    pub fn from_config(config: &CampusConfig) -> Result<Self> {
        Ok(Self::new(config.to_graph()?).with_mirrored_reservations(config.mirror_reservations))
    }
}

impl<C> RoutePlanner<C>
where
    C: Zero + Ord + Copy + CheckedAdd + Debug,
{
    pub fn new(graph: CampusGraph<C>) -> Self {
        Self {
            graph,
            guard: ReservationGuard::new(),
            mirror_reservations: false,
            last_reservation: None,
        }
    }

    /// Also remove the reverse edge when a reservation fires
    pub fn with_mirrored_reservations(mut self, mirror: bool) -> Self {
        self.mirror_reservations = mirror;
        self
    }

    pub fn graph(&self) -> &CampusGraph<C> {
        &self.graph
    }

    /// Shortest route between two node ids
    pub fn route(&self, source: usize, destination: usize) -> Result<Route<C>> {
        self.graph.check(source)?;
        self.graph.check(destination)?;
        debug!(source, destination, "route query");

        let tree = dijkstra(&self.graph, source)?;
        Route::reconstruct(&self.graph, &tree, destination)
    }

    /// Shortest route between two landmarks given by name
    pub fn route_by_name(&self, source: &str, destination: &str) -> Result<Route<C>> {
        let source = self.graph.id_of(source)?;
        let destination = self.graph.id_of(destination)?;
        self.route(source, destination)
    }

    /// Queue the direct edge `from -> to` for removal
    /// Ids are validated here; nothing changes until the reservation is applied
    pub fn request_reservation(&mut self, from: usize, to: usize) -> Result<()> {
        self.graph.check(from)?;
        self.graph.check(to)?;
        self.guard.arm(EdgeRequest { from, to });
        Ok(())
    }

    /// Apply the queued reservation, if any
    /// Returns `None` when nothing was queued
    pub fn apply_pending_reservation(&mut self) -> Result<Option<Reservation<C>>> {
        let fired = self.guard.fire(&mut self.graph, self.mirror_reservations)?;
        if fired.is_some() {
            self.last_reservation = fired;
        }
        Ok(fired)
    }

    /// Most recent reservation that fired
    pub fn last_reservation(&self) -> Option<&Reservation<C>> {
        self.last_reservation.as_ref()
    }
}
