//! Cost-sorted storage for routes in each lifecycle state.

use rust_decimal::Decimal;

use crate::sorted::insort_by_key;

use super::route::Route;

/// The open pool has no route left to develop. Normal end of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NoAvailableRoutes;

/// No route has reached the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NoCompletedRoutes;

/// Routes awaiting development, completed routes, and closed routes.
///
/// Each list is kept sorted by descending cost, so the cheapest route sits
/// at the tail where peek and pop are O(1). Ties insert to the right, so the
/// newest equal-cost route is developed first.
#[derive(Debug, Default)]
pub(crate) struct RoutePool {
    available: Vec<Route>,
    completed: Vec<Route>,
    closed: Vec<Route>,
}

fn order_key(route: &Route) -> Decimal {
    -route.cost
}

impl RoutePool {
    pub fn append_available(&mut self, route: Route) {
        insort_by_key(&mut self.available, route, order_key);
    }

    pub fn append_completed(&mut self, route: Route) {
        insort_by_key(&mut self.completed, route, order_key);
    }

    /// Reserved for duplicate-route pruning.
    #[allow(dead_code)]
    pub fn append_closed(&mut self, route: Route) {
        insort_by_key(&mut self.closed, route, order_key);
    }

    /// Remove and return the cheapest available route.
    pub fn pop_available(&mut self) -> Result<Route, NoAvailableRoutes> {
        self.available.pop().ok_or(NoAvailableRoutes)
    }

    /// The cheapest available route, if any.
    #[allow(dead_code)]
    pub fn peek_available(&self) -> Result<&Route, NoAvailableRoutes> {
        self.available.last().ok_or(NoAvailableRoutes)
    }

    /// The cheapest completed route, if any.
    pub fn peek_completed(&self) -> Result<&Route, NoCompletedRoutes> {
        self.completed.last().ok_or(NoCompletedRoutes)
    }

    /// Remove and return the cheapest completed route.
    pub fn pop_completed(&mut self) -> Result<Route, NoCompletedRoutes> {
        self.completed.pop().ok_or(NoCompletedRoutes)
    }

    #[allow(dead_code)]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::routing::fuel::FuelPool;
    use crate::routing::route::RoutePoint;

    fn route(cost: Decimal, end: u32) -> Route {
        Route {
            route_points: vec![RoutePoint { point: end, number: 1 }],
            fuel_pool: FuelPool {
                existing_fuel_vol: Decimal::ZERO,
                rfp_queue: Vec::new(),
                refuel_list: Vec::new(),
                cost,
            },
            points_to_across: BTreeSet::new(),
            end,
            cost,
            length: 1,
        }
    }

    #[test]
    fn pop_returns_the_cheapest_route() {
        let mut pool = RoutePool::default();
        pool.append_available(route(dec!(3), 0));
        pool.append_available(route(dec!(1), 1));
        pool.append_available(route(dec!(2), 2));

        assert_eq!(pool.pop_available().unwrap().cost, dec!(1));
        assert_eq!(pool.pop_available().unwrap().cost, dec!(2));
        assert_eq!(pool.pop_available().unwrap().cost, dec!(3));
        assert!(pool.pop_available().is_err());
    }

    #[test]
    fn equal_costs_pop_newest_first() {
        let mut pool = RoutePool::default();
        pool.append_available(route(dec!(1), 0));
        pool.append_available(route(dec!(1), 1));

        assert_eq!(pool.pop_available().unwrap().end, 1);
        assert_eq!(pool.pop_available().unwrap().end, 0);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut pool = RoutePool::default();
        pool.append_completed(route(dec!(5), 0));
        pool.append_completed(route(dec!(4), 1));

        assert_eq!(pool.peek_completed().unwrap().cost, dec!(4));
        assert_eq!(pool.completed_len(), 2);
        assert_eq!(pool.pop_completed().unwrap().cost, dec!(4));
        assert_eq!(pool.completed_len(), 1);
    }

    #[test]
    fn empty_pools_report_their_state() {
        let mut pool = RoutePool::default();
        assert!(pool.peek_available().is_err());
        assert!(pool.peek_completed().is_err());
        pool.append_available(route(dec!(1), 0));
        assert_eq!(pool.peek_available().unwrap().cost, dec!(1));
        assert_eq!(pool.available_len(), 1);
    }
}
