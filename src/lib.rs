//! Shortest routes between landmarks on a small campus map.
//!
//! ```
//! use campus_route::{CampusConfig, RoutePlanner};
//!
//! let planner = RoutePlanner::from_config(&CampusConfig::sample()).unwrap();
//! let route = planner.route_by_name("A Block", "Library").unwrap();
//! assert_eq!(route.distance, 470);
//! println!("{route}");
//! ```

mod collections;
pub mod config;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod planner;
pub mod reservation;
pub mod route;

pub use config::CampusConfig;
pub use errors::{Result, RouteError};
pub use graph::CampusGraph;
pub use planner::RoutePlanner;
pub use reservation::{EdgeRequest, Reservation, ReservationGuard};
pub use route::Route;
