//! Presentation types for solved routes.

use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::roadmap::RoadMap;
use crate::routing::Route;

/// Step taken while traversing a solved route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    /// 1-based position within the route.
    pub position: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Decimal>,
}

/// Fuel purchased at a visited station.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RefuelStop {
    pub name: String,
    /// Route position of the purchase.
    pub position: u32,
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub cost: Decimal,
}

/// Structured representation of a solved route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteStep>,
    pub refuels: Vec<RefuelStop>,
    pub total_cost: Decimal,
}

impl RouteSummary {
    /// Convert a solved [`Route`] into a summary with resolved point names.
    pub fn from_route(roadmap: &RoadMap, route: &Route) -> Self {
        let steps = route
            .route_points
            .iter()
            .map(|rp| {
                let point = roadmap.point(rp.point);
                RouteStep {
                    position: rp.number,
                    name: point.name.clone(),
                    gas_price: point.gas_station.map(|station| station.price),
                }
            })
            .collect::<Vec<_>>();

        let refuels = route
            .fuel_pool
            .refuel_list
            .iter()
            .map(|refuel| {
                let point = roadmap.point(refuel.route_point.point);
                let unit_price = point
                    .gas_station
                    .map(|station| station.price)
                    .expect("refuels reference gas stations");
                RefuelStop {
                    name: point.name.clone(),
                    position: refuel.route_point.number,
                    volume: refuel.volume.normalize(),
                    unit_price,
                    cost: (unit_price * refuel.volume).normalize(),
                }
            })
            .collect::<Vec<_>>();

        let start = steps.first().map(|step| step.name.clone()).unwrap_or_default();
        let goal = steps.last().map(|step| step.name.clone()).unwrap_or_default();

        Self {
            start,
            goal,
            steps,
            refuels,
            total_cost: route.cost.normalize(),
        }
    }

    /// Render the summary as plain text.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} points, total cost {})",
            self.start,
            self.goal,
            self.steps.len(),
            self.total_cost
        );
        for step in &self.steps {
            match step.gas_price {
                Some(price) => {
                    let _ = writeln!(
                        buffer,
                        "  {}. {} [station @ {}]",
                        step.position, step.name, price
                    );
                }
                None => {
                    let _ = writeln!(buffer, "  {}. {}", step.position, step.name);
                }
            }
        }
        if self.refuels.is_empty() {
            let _ = writeln!(buffer, "No refuels needed.");
        } else {
            let _ = writeln!(buffer, "Refuels:");
            for refuel in &self.refuels {
                let _ = writeln!(
                    buffer,
                    "  {} (stop {}): {} units @ {} = {}",
                    refuel.name, refuel.position, refuel.volume, refuel.unit_price, refuel.cost
                );
            }
        }
        buffer
    }
}
