//! Immutable route records.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::roadmap::PointId;

use super::fuel::FuelPool;

/// A visit to a map point at a 1-based position within a route.
///
/// The same point may appear at several positions when a route revisits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoutePoint {
    pub point: PointId,
    pub number: u32,
}

/// A partial or complete walk from the start point, with its fuel plan.
///
/// Routes never mutate; extending one builds a new record. `cost` mirrors
/// `fuel_pool.cost` so pool ordering does not have to reach through the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Visited points in order, starting at position 1.
    pub route_points: Vec<RoutePoint>,
    pub fuel_pool: FuelPool,
    /// Mandatory waypoints not visited yet.
    pub points_to_across: BTreeSet<PointId>,
    /// The point this route currently stands at.
    pub end: PointId,
    /// Total fuel cost committed so far.
    pub cost: Decimal,
    /// Number of visited points.
    pub length: u32,
}
