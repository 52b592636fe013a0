//! Roadmap container: map points, gas stations, and directed roads.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Identifier of a map point within a [`RoadMap`].
pub type PointId = u32;

/// Minimum similarity for a name to count as a fuzzy match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Gas station operating at a map point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasStation {
    /// Posted price per volume unit of fuel.
    pub price: Decimal,
}

/// Named location on the map, optionally hosting a gas station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPoint {
    pub name: String,
    pub gas_station: Option<GasStation>,
}

/// Directed road between two map points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    /// Physical length in distance units.
    pub length: Decimal,
}

/// Directed road network with per-point adjacency.
///
/// Point names are interned to [`PointId`]s on insertion. Neighbour iteration
/// order is the `add_road` insertion order, so identical construction yields
/// identical traversal order across runs.
#[derive(Debug, Default, Clone)]
pub struct RoadMap {
    points: Vec<MapPoint>,
    names: HashMap<String, PointId>,
    adjacency: HashMap<PointId, Vec<(PointId, Road)>>,
}

impl RoadMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point, or update the station of an existing point with the
    /// same name. Returns the point's id.
    pub fn add_point(
        &mut self,
        name: impl Into<String>,
        gas_station: Option<GasStation>,
    ) -> Result<PointId> {
        if let Some(station) = gas_station {
            if station.price <= Decimal::ZERO {
                return Err(Error::MapValidation {
                    message: format!("gas price must be positive, got {}", station.price),
                });
            }
        }
        let name = name.into();
        if let Some(&id) = self.names.get(&name) {
            self.points[id as usize].gas_station = gas_station;
            return Ok(id);
        }
        let id = self.points.len() as PointId;
        self.names.insert(name.clone(), id);
        self.points.push(MapPoint { name, gas_station });
        Ok(id)
    }

    /// Insert or replace the directed road between two points.
    pub fn add_road(&mut self, from: PointId, to: PointId, road: Road) -> Result<()> {
        if road.length < Decimal::ZERO {
            return Err(Error::MapValidation {
                message: format!("road length must be non-negative, got {}", road.length),
            });
        }
        let roads = self.adjacency.entry(from).or_default();
        match roads.iter_mut().find(|(target, _)| *target == to) {
            Some(entry) => entry.1 = road,
            None => roads.push((to, road)),
        }
        Ok(())
    }

    /// Neighbours of a point in insertion order; empty when the point is
    /// unknown or has no outgoing roads.
    pub fn neighbours(&self, point: PointId) -> &[(PointId, Road)] {
        self.adjacency
            .get(&point)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up a point by name.
    pub fn point_id(&self, name: &str) -> Option<PointId> {
        self.names.get(name).copied()
    }

    /// Resolve a name to its id, or fail with fuzzy suggestions.
    pub fn resolve(&self, name: &str) -> Result<PointId> {
        self.point_id(name).ok_or_else(|| Error::UnknownPoint {
            name: name.to_string(),
            suggestions: self.fuzzy_point_matches(name, 3),
        })
    }

    /// The point record behind an id issued by this map.
    pub fn point(&self, id: PointId) -> &MapPoint {
        &self.points[id as usize]
    }

    /// Names similar to `name`, best match first, at most `limit` entries.
    pub fn fuzzy_point_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .points
            .iter()
            .map(|point| (strsim::jaro_winkler(name, &point.name), point.name.as_str()))
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn road_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterate all points carrying a gas station.
    pub fn stations(&self) -> impl Iterator<Item = (&MapPoint, GasStation)> + '_ {
        self.points
            .iter()
            .filter_map(|point| point.gas_station.map(|station| (point, station)))
    }
}
