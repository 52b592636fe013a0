//! Fuelroute library entry points.
//!
//! This crate finds the cheapest way to drive a truck across a directed road
//! network with unevenly priced gas stations: not the shortest path, but the
//! one whose fuel bill is lowest. Higher-level consumers (the CLI, tests)
//! should only depend on the functions exported here.
//!
//! # Quick Start
//!
//! The typical workflow is:
//!
//! 1. **Build a roadmap** with [`RoadMap::add_point`] and
//!    [`RoadMap::add_road`], or load one from a JSON document with
//!    [`load_roadmap`]
//! 2. **Describe the truck** with [`Truck`] and [`TruckState`]
//! 3. **Search** with [`find_path`], optionally passing mandatory waypoints
//! 4. **Present the result** with [`RouteSummary`]
//!
//! # Example
//!
//! ```
//! use fuelroute_lib::{find_path, GasStation, Road, RoadMap, RouteSummary, Truck, TruckState};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> fuelroute_lib::Result<()> {
//! let mut map = RoadMap::new();
//! let depot = map.add_point("Depot", Some(GasStation { price: Decimal::TWO }))?;
//! let stop = map.add_point("Stop", None)?;
//! let city = map.add_point("City", None)?;
//! map.add_road(depot, stop, Road { length: Decimal::TEN })?;
//! map.add_road(stop, city, Road { length: Decimal::TEN })?;
//!
//! let state = TruckState {
//!     truck: Truck {
//!         capacity: Decimal::ONE_HUNDRED,
//!         min_volume: Decimal::ZERO,
//!         mpg: Decimal::ONE,
//!     },
//!     volume: Decimal::ZERO,
//! };
//!
//! let route = find_path(&map, depot, city, [stop], state)?;
//! let summary = RouteSummary::from_route(&map, &route);
//! println!("{}", summary.render_plain());
//! # Ok(())
//! # }
//! ```
//!
//! # How the search works
//!
//! Partial routes are developed best-first by committed fuel cost. Fuel is
//! never bought eagerly: every station a route passes stays open as a
//! purchase option, and each travelled leg is billed retroactively to the
//! cheapest upstream option whose tank headroom still allows it. See the
//! [`routing`] module docs for the details.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Unknown
//! point names carry fuzzy suggestions; an exhausted search surfaces
//! [`Error::NoSolution`]. Dead-end legs inside the search are handled
//! internally and never reach the caller.

pub mod error;
pub mod loader;
pub mod output;
pub mod roadmap;
pub mod routing;
mod sorted;
pub mod truck;

pub use error::{Error, Result};
pub use loader::{load_roadmap, parse_roadmap};
pub use output::{RefuelStop, RouteStep, RouteSummary};
pub use roadmap::{GasStation, MapPoint, PointId, Road, RoadMap};
pub use routing::{find_path, FuelPool, FuelPossibility, Refuel, Route, RoutePoint};
pub use truck::{Truck, TruckState};
