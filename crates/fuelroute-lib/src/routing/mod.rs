//! Least-fuel-cost route search.
//!
//! This module provides:
//! - [`Route`] / [`RoutePoint`] - immutable route records
//! - [`FuelPool`] / [`FuelPossibility`] / [`Refuel`] - the fuel plan attached
//!   to every route
//! - [`find_path`] - the search entry point
//!
//! # Search strategy
//!
//! The search enumerates partial routes best-first by committed fuel cost.
//! The cheapest open route is popped and extended along every outgoing road;
//! each extension re-runs the fuel bookkeeping, which bills the new leg to
//! the cheapest upstream station that still has headroom. A route that
//! reaches the destination with no mandatory waypoint left becomes a
//! completed candidate; open routes that can no longer beat the best
//! candidate are dropped. The search ends when no open route remains.
//!
//! Legs that cannot be fueled end their branch quietly; only a search that
//! finishes with no completed route at all surfaces an error.

mod fuel;
mod manager;
mod pool;
mod route;

pub use fuel::{FuelPool, FuelPossibility, Refuel};
pub use route::{Route, RoutePoint};

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::roadmap::{PointId, RoadMap};
use crate::truck::TruckState;

use manager::RouteManager;

/// Find the cheapest route from `from_point` to `to_point` that visits every
/// point in `across_points` at least once.
///
/// The truck starts with `truck_state.volume` fuel, of which the reserve
/// below `min_volume` is never spent. Returns the completed [`Route`] with a
/// finalized fuel plan (refuels sorted by route position), or
/// [`Error::NoSolution`] when no route satisfies the fuel constraints.
///
/// # Example
///
/// ```
/// use fuelroute_lib::{find_path, GasStation, Road, RoadMap, Truck, TruckState};
/// use rust_decimal::Decimal;
///
/// # fn main() -> fuelroute_lib::Result<()> {
/// let mut map = RoadMap::new();
/// let depot = map.add_point("Depot", Some(GasStation { price: Decimal::TWO }))?;
/// let city = map.add_point("City", None)?;
/// map.add_road(depot, city, Road { length: Decimal::TEN })?;
///
/// let state = TruckState {
///     truck: Truck {
///         capacity: Decimal::ONE_HUNDRED,
///         min_volume: Decimal::ZERO,
///         mpg: Decimal::ONE,
///     },
///     volume: Decimal::ZERO,
/// };
/// let route = find_path(&map, depot, city, [], state)?;
/// assert_eq!(route.cost, Decimal::from(20));
/// # Ok(())
/// # }
/// ```
pub fn find_path(
    roadmap: &RoadMap,
    from_point: PointId,
    to_point: PointId,
    across_points: impl IntoIterator<Item = PointId>,
    truck_state: TruckState,
) -> Result<Route> {
    truck_state.validate()?;

    let across: BTreeSet<PointId> = across_points.into_iter().collect();
    let mut manager = RouteManager::new(
        to_point,
        across,
        truck_state.truck.capacity,
        truck_state.truck.mpg,
    );
    manager.start(roadmap, from_point, truck_state.usable_volume());

    while let Ok(route) = manager.pop_available() {
        for &(neighbour, road) in roadmap.neighbours(route.end) {
            if manager.extend(roadmap, &route, neighbour, road).is_err() {
                debug!(
                    from = %roadmap.point(route.end).name,
                    to = %roadmap.point(neighbour).name,
                    "leg cannot be fueled, dropping branch"
                );
            }
        }
    }

    debug!(
        attempted = manager.moves_attempted(),
        discarded = manager.moves_discarded(),
        completed = manager.completed_routes(),
        "search finished"
    );

    manager.into_completed().map_err(|_| Error::NoSolution {
        start: roadmap.point(from_point).name.clone(),
        goal: roadmap.point(to_point).name.clone(),
    })
}
