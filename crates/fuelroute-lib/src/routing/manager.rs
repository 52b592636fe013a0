//! Route lifecycle orchestration: creation, extension, completion, pruning.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::roadmap::{PointId, Road, RoadMap};

use super::fuel::{FuelPlanner, ImpossibleMove};
use super::pool::{NoAvailableRoutes, NoCompletedRoutes, RoutePool};
use super::route::{Route, RoutePoint};

/// Develops routes toward a destination over a set of mandatory waypoints.
///
/// The manager owns the route pool and the fuel algebra; the search driver
/// pops available routes and feeds every outgoing road back through
/// [`RouteManager::extend`].
pub(crate) struct RouteManager {
    to_point: PointId,
    across_points: BTreeSet<PointId>,
    planner: FuelPlanner,
    pool: RoutePool,
    mpg: Decimal,
    moves_attempted: u64,
    moves_discarded: u64,
}

impl RouteManager {
    pub fn new(
        to_point: PointId,
        across_points: BTreeSet<PointId>,
        capacity: Decimal,
        mpg: Decimal,
    ) -> Self {
        Self {
            to_point,
            across_points,
            planner: FuelPlanner::new(capacity),
            pool: RoutePool::default(),
            mpg,
            moves_attempted: 0,
            moves_discarded: 0,
        }
    }

    /// Seed the pool with the length-1 route standing at the start point.
    ///
    /// A start that already satisfies the completion predicate (no waypoints
    /// left, start equals destination) is recorded as a completed zero-cost
    /// solution right away.
    pub fn start(&mut self, roadmap: &RoadMap, start_point: PointId, start_fuel_vol: Decimal) {
        let start_rp = RoutePoint {
            point: start_point,
            number: 1,
        };
        let station = roadmap.point(start_point).gas_station;
        let fuel_pool = self.planner.start(start_rp, station, start_fuel_vol);
        let route = Route {
            route_points: vec![start_rp],
            cost: fuel_pool.cost,
            fuel_pool,
            points_to_across: self.across_points.clone(),
            end: start_point,
            length: 1,
        };
        if self.is_completed(&route) {
            self.pool.append_completed(Self::prepare_solution(&route));
        }
        self.pool.append_available(route);
    }

    /// Remove and return the cheapest route still open for development.
    pub fn pop_available(&mut self) -> Result<Route, NoAvailableRoutes> {
        self.pool.pop_available()
    }

    /// The cheapest completed route so far.
    pub fn get_completed(&self) -> Result<&Route, NoCompletedRoutes> {
        self.pool.peek_completed()
    }

    /// Consume the manager, yielding the cheapest completed route.
    pub fn into_completed(mut self) -> Result<Route, NoCompletedRoutes> {
        self.pool.pop_completed()
    }

    /// Extend `previous` over `road` to `to`.
    ///
    /// A completed extension is finalized into the completed pool. An open
    /// extension is dropped when the best completed route is already at
    /// least as cheap (leg costs never decrease, so the branch cannot win);
    /// otherwise it joins the available pool.
    pub fn extend(
        &mut self,
        roadmap: &RoadMap,
        previous: &Route,
        to: PointId,
        road: Road,
    ) -> Result<(), ImpossibleMove> {
        self.moves_attempted += 1;
        let next_rp = RoutePoint {
            point: to,
            number: previous.length + 1,
        };
        let used_volume = road.length / self.mpg;
        let station = roadmap.point(to).gas_station;
        let fuel_pool = self
            .planner
            .advance(&previous.fuel_pool, used_volume, next_rp, station)?;

        let mut points_to_across = previous.points_to_across.clone();
        points_to_across.remove(&to);
        let mut route_points = previous.route_points.clone();
        route_points.push(next_rp);

        let route = Route {
            route_points,
            cost: fuel_pool.cost,
            fuel_pool,
            points_to_across,
            end: to,
            length: previous.length + 1,
        };

        if self.is_completed(&route) {
            self.pool.append_completed(Self::prepare_solution(&route));
            return Ok(());
        }

        let best_cost = self.get_completed().ok().map(|best| best.cost);
        if best_cost.is_some_and(|best_cost| best_cost <= route.cost) {
            self.moves_discarded += 1;
            return Ok(());
        }
        self.pool.append_available(route);
        Ok(())
    }

    fn is_completed(&self, route: &Route) -> bool {
        route.points_to_across.is_empty() && route.end == self.to_point
    }

    fn prepare_solution(route: &Route) -> Route {
        Route {
            fuel_pool: FuelPlanner::finalize(&route.fuel_pool),
            ..route.clone()
        }
    }

    pub fn moves_attempted(&self) -> u64 {
        self.moves_attempted
    }

    pub fn moves_discarded(&self) -> u64 {
        self.moves_discarded
    }

    pub fn completed_routes(&self) -> usize {
        self.pool.completed_len()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::roadmap::GasStation;

    fn map_with_line() -> (RoadMap, PointId, PointId, PointId) {
        let mut map = RoadMap::new();
        let a = map
            .add_point("A", Some(GasStation { price: dec!(1) }))
            .unwrap();
        let b = map.add_point("B", None).unwrap();
        let c = map.add_point("C", None).unwrap();
        map.add_road(a, b, Road { length: dec!(10) }).unwrap();
        map.add_road(b, c, Road { length: dec!(10) }).unwrap();
        (map, a, b, c)
    }

    #[test]
    fn start_seeds_one_available_route() {
        let (map, a, _, c) = map_with_line();
        let mut manager = RouteManager::new(c, BTreeSet::new(), dec!(100), dec!(1));
        manager.start(&map, a, dec!(0));
        assert_eq!(manager.completed_routes(), 0);
        let route = manager.pop_available().unwrap();
        assert_eq!(route.length, 1);
        assert_eq!(route.end, a);
        assert!(manager.pop_available().is_err());
    }

    #[test]
    fn start_at_destination_is_a_zero_cost_solution() {
        let (map, a, _, _) = map_with_line();
        let mut manager = RouteManager::new(a, BTreeSet::new(), dec!(100), dec!(1));
        manager.start(&map, a, dec!(0));

        let completed = manager.get_completed().unwrap();
        assert_eq!(completed.length, 1);
        assert_eq!(completed.cost, dec!(0));
        assert!(completed.fuel_pool.rfp_queue.is_empty());
    }

    #[test]
    fn start_at_destination_with_waypoints_left_is_not_complete() {
        let (map, a, b, _) = map_with_line();
        let mut manager = RouteManager::new(a, BTreeSet::from([b]), dec!(100), dec!(1));
        manager.start(&map, a, dec!(0));
        assert!(manager.get_completed().is_err());
    }

    #[test]
    fn extension_to_destination_completes_and_finalizes() {
        let (map, a, b, c) = map_with_line();
        let mut manager = RouteManager::new(c, BTreeSet::new(), dec!(100), dec!(1));
        manager.start(&map, a, dec!(0));

        let route = manager.pop_available().unwrap();
        manager.extend(&map, &route, b, Road { length: dec!(10) }).unwrap();
        let route = manager.pop_available().unwrap();
        manager.extend(&map, &route, c, Road { length: dec!(10) }).unwrap();

        let completed = manager.get_completed().unwrap();
        assert_eq!(completed.length, 3);
        assert_eq!(completed.cost, dec!(20));
        assert!(completed.fuel_pool.rfp_queue.is_empty());
        assert_eq!(completed.fuel_pool.refuel_list.len(), 1);
    }

    #[test]
    fn waypoint_visits_shrink_the_remaining_set() {
        let (map, a, b, c) = map_with_line();
        let mut manager = RouteManager::new(c, BTreeSet::from([b]), dec!(100), dec!(1));
        manager.start(&map, a, dec!(0));

        let route = manager.pop_available().unwrap();
        assert_eq!(route.points_to_across.len(), 1);
        manager.extend(&map, &route, b, Road { length: dec!(10) }).unwrap();
        let route = manager.pop_available().unwrap();
        assert!(route.points_to_across.is_empty());
    }

    #[test]
    fn dominated_extensions_are_discarded() {
        // Once a completed route exists, any open extension at least as
        // expensive must vanish without joining the pool.
        let (map, a, b, c) = map_with_line();
        let mut manager = RouteManager::new(c, BTreeSet::new(), dec!(100), dec!(1));
        manager.start(&map, a, dec!(0));

        let start = manager.pop_available().unwrap();
        manager.extend(&map, &start, b, Road { length: dec!(10) }).unwrap();
        let at_b = manager.pop_available().unwrap();
        manager.extend(&map, &at_b, c, Road { length: dec!(10) }).unwrap();
        assert_eq!(manager.completed_routes(), 1);
        assert_eq!(manager.moves_discarded(), 0);

        // An open extension that now costs as much as the best completed
        // route is dropped.
        manager.extend(&map, &at_b, b, Road { length: dec!(20) }).unwrap();
        assert_eq!(manager.moves_discarded(), 1);
        assert_eq!(manager.moves_attempted(), 3);
        assert!(manager.pop_available().is_err());
    }

    #[test]
    fn impossible_extension_reports_back() {
        let (map, a, b, _) = map_with_line();
        let mut manager = RouteManager::new(b, BTreeSet::new(), dec!(5), dec!(1));
        manager.start(&map, a, dec!(0));
        let route = manager.pop_available().unwrap();
        assert!(manager
            .extend(&map, &route, b, Road { length: dec!(10) })
            .is_err());
    }
}
