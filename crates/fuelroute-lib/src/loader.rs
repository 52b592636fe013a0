//! Roadmap documents.
//!
//! A roadmap document is a JSON object with a `points` array and a `roads`
//! array. Prices and lengths are decimal strings so values survive parsing
//! exactly:
//!
//! ```json
//! {
//!   "points": [
//!     { "name": "MP1", "gas_price": "3.17" },
//!     { "name": "MP2" }
//!   ],
//!   "roads": [
//!     { "from": "MP1", "to": "MP2", "length": "10" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::roadmap::{GasStation, PointId, Road, RoadMap};

#[derive(Debug, Deserialize)]
struct MapDocument {
    points: Vec<PointEntry>,
    #[serde(default)]
    roads: Vec<RoadEntry>,
}

#[derive(Debug, Deserialize)]
struct PointEntry {
    name: String,
    #[serde(default)]
    gas_price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct RoadEntry {
    from: String,
    to: String,
    length: Decimal,
}

/// Load a roadmap document from disk.
pub fn load_roadmap(path: &Path) -> Result<RoadMap> {
    let raw = fs::read_to_string(path)?;
    parse_roadmap(&raw)
}

/// Parse a roadmap document from its JSON text.
pub fn parse_roadmap(raw: &str) -> Result<RoadMap> {
    let document: MapDocument = serde_json::from_str(raw)?;
    let mut roadmap = RoadMap::new();
    for entry in document.points {
        let station = entry.gas_price.map(|price| GasStation { price });
        roadmap.add_point(entry.name, station)?;
    }
    for entry in document.roads {
        let from = resolve_endpoint(&roadmap, &entry.from)?;
        let to = resolve_endpoint(&roadmap, &entry.to)?;
        roadmap.add_road(
            from,
            to,
            Road {
                length: entry.length,
            },
        )?;
    }
    Ok(roadmap)
}

fn resolve_endpoint(roadmap: &RoadMap, name: &str) -> Result<PointId> {
    roadmap.point_id(name).ok_or_else(|| Error::MapValidation {
        message: format!("road references unknown point '{name}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_points_and_roads() {
        let raw = r#"{
            "points": [
                { "name": "MP1", "gas_price": "3.17" },
                { "name": "MP2" }
            ],
            "roads": [
                { "from": "MP1", "to": "MP2", "length": "10" }
            ]
        }"#;
        let map = parse_roadmap(raw).unwrap();
        assert_eq!(map.point_count(), 2);
        assert_eq!(map.road_count(), 1);

        let mp1 = map.point_id("MP1").unwrap();
        assert_eq!(
            map.point(mp1).gas_station,
            Some(GasStation { price: dec!(3.17) })
        );
        let targets = map.neighbours(mp1);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].1.length, dec!(10));
    }

    #[test]
    fn prices_parse_exactly_from_strings() {
        let raw = r#"{ "points": [{ "name": "A", "gas_price": "2.6" }] }"#;
        let map = parse_roadmap(raw).unwrap();
        let a = map.point_id("A").unwrap();
        assert_eq!(map.point(a).gas_station.unwrap().price, dec!(2.6));
    }

    #[test]
    fn unknown_road_endpoint_is_rejected() {
        let raw = r#"{
            "points": [{ "name": "A" }],
            "roads": [{ "from": "A", "to": "B", "length": "1" }]
        }"#;
        assert!(matches!(
            parse_roadmap(raw),
            Err(Error::MapValidation { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(parse_roadmap("{"), Err(Error::Json(_))));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        fs::write(&path, r#"{ "points": [{ "name": "A" }] }"#).unwrap();
        let map = load_roadmap(&path).unwrap();
        assert_eq!(map.point_count(), 1);
    }
}
