//! Text-format instance loading.
//!
//! Reads the TSPLIB-like `.vrp` layout: `KEY : VALUE` header lines
//! (`NAME`, `COMMENT`, `K`, `OPT`, `TYPE`, `DIMENSION`, `EDGE_WEIGHT_TYPE`,
//! `CAPACITY`), a `NODE_COORD_SECTION` of `id x y` rows and a
//! `DEMAND_SECTION` of `id demand` rows. File ids are 1-based and are
//! shifted so the depot becomes id 0.

use crate::error::{Error, Result};
use crate::instance::{Customer, Instance};
use std::path::Path;

/// Loads and parses an instance file.
pub fn load(path: &Path) -> Result<Instance> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parses instance text.
///
/// Guarantees of the returned [`Instance`]: the depot is id 0, ids are
/// contiguous, and every id referenced by a demand row has coordinates.
pub fn parse(text: &str) -> Result<Instance> {
    let mut name = String::new();
    let mut comment = String::new();
    let mut vehicles: Option<usize> = None;
    let mut best_known: Option<f64> = None;
    let mut dimension: Option<usize> = None;
    let mut capacity: Option<u32> = None;

    let mut coords: Vec<Option<(f64, f64)>> = Vec::new();
    let mut demands: Vec<Option<u32>> = Vec::new();

    #[derive(PartialEq)]
    enum Section {
        Header,
        Coords,
        Demands,
        Done,
    }
    let mut section = Section::Header;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "NODE_COORD_SECTION" => {
                let dim = dimension
                    .ok_or_else(|| parse_error(line_no, "DIMENSION must precede NODE_COORD_SECTION"))?;
                coords = vec![None; dim];
                demands = vec![None; dim];
                section = Section::Coords;
                continue;
            }
            "DEMAND_SECTION" => {
                if section != Section::Coords {
                    return Err(parse_error(line_no, "DEMAND_SECTION must follow NODE_COORD_SECTION"));
                }
                section = Section::Demands;
                continue;
            }
            "DEPOT_SECTION" | "EOF" => {
                section = Section::Done;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Header => {
                let (key, value) = line
                    .split_once(':')
                    .map(|(k, v)| (k.trim(), v.trim()))
                    .ok_or_else(|| parse_error(line_no, format!("expected `KEY : VALUE`, got `{line}`")))?;
                match key {
                    "NAME" => name = value.to_string(),
                    "COMMENT" => comment = value.to_string(),
                    "K" => vehicles = Some(parse_field(line_no, key, value)?),
                    "OPT" => best_known = Some(parse_field(line_no, key, value)?),
                    "DIMENSION" => dimension = Some(parse_field(line_no, key, value)?),
                    "CAPACITY" => capacity = Some(parse_field(line_no, key, value)?),
                    // TYPE and EDGE_WEIGHT_TYPE are accepted but unused:
                    // only single-depot Euclidean instances are supported.
                    _ => {}
                }
            }
            Section::Coords => {
                let mut fields = line.split_whitespace();
                let id = node_id(line_no, fields.next(), coords.len())?;
                let x: f64 = parse_field(line_no, "x", fields.next().unwrap_or(""))?;
                let y: f64 = parse_field(line_no, "y", fields.next().unwrap_or(""))?;
                coords[id] = Some((x, y));
            }
            Section::Demands => {
                let mut fields = line.split_whitespace();
                let id = node_id(line_no, fields.next(), demands.len())?;
                let demand: u32 = parse_field(line_no, "demand", fields.next().unwrap_or(""))?;
                demands[id] = Some(demand);
            }
            Section::Done => break,
        }
    }

    let vehicles = vehicles.ok_or_else(|| parse_error(0, "missing K header"))?;
    let capacity = capacity.ok_or_else(|| parse_error(0, "missing CAPACITY header"))?;
    if coords.is_empty() {
        return Err(parse_error(0, "missing NODE_COORD_SECTION"));
    }

    let mut registry = Vec::with_capacity(coords.len());
    for (id, (coord, demand)) in coords.into_iter().zip(demands).enumerate() {
        let (x, y) =
            coord.ok_or_else(|| parse_error(0, format!("node {} has no coordinates", id + 1)))?;
        let demand =
            demand.ok_or_else(|| parse_error(0, format!("node {} has no demand", id + 1)))?;
        registry.push(Customer { id, x, y, demand });
    }

    Instance::new(name, comment, vehicles, capacity, best_known, registry)
        .map_err(|message| parse_error(0, message))
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_field<T: std::str::FromStr>(line: usize, key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {key} value `{value}`")))
}

/// Parses a 1-based file node id and shifts it to the 0-based registry id.
fn node_id(line: usize, field: Option<&str>, dimension: usize) -> Result<usize> {
    let id: usize = parse_field(line, "node id", field.unwrap_or(""))?;
    if id == 0 || id > dimension {
        return Err(parse_error(
            line,
            format!("node id {id} out of range 1..={dimension}"),
        ));
    }
    Ok(id - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
NAME : tiny-k2
COMMENT : four customers around an origin depot
K : 2
OPT : 28
TYPE : CVRP
DIMENSION : 5
EDGE_WEIGHT_TYPE : EUC_2D
CAPACITY : 10
NODE_COORD_SECTION
1 0 0
2 0 5
3 5 0
4 0 -5
5 -5 0
DEMAND_SECTION
1 0
2 3
3 4
4 3
5 6
DEPOT_SECTION
1
-1
EOF
";

    #[test]
    fn test_parse_fixture() {
        let instance = parse(FIXTURE).unwrap();
        assert_eq!(instance.name(), "tiny-k2");
        assert_eq!(instance.vehicles(), 2);
        assert_eq!(instance.capacity(), 10);
        assert_eq!(instance.best_known(), Some(28.0));
        assert_eq!(instance.num_customers(), 4);
        assert_eq!(instance.depot().demand, 0);
        assert_eq!(instance.customer(2).demand, 4);
        assert!((instance.distance(0, 1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_without_opt() {
        let text = FIXTURE.replace("OPT : 28\n", "");
        let instance = parse(&text).unwrap();
        assert_eq!(instance.best_known(), None);
    }

    #[test]
    fn test_parse_rejects_missing_capacity() {
        let text = FIXTURE.replace("CAPACITY : 10\n", "");
        let err = parse(&text).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn test_parse_rejects_bad_coord_row() {
        let text = FIXTURE.replace("3 5 0\n", "3 five 0\n");
        let err = parse(&text).unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 12);
                assert!(message.contains("invalid x value"), "message: {message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_id() {
        let text = FIXTURE.replace("5 -5 0\n", "6 -5 0\n");
        let err = parse(&text).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "unexpected error: {err}");
    }
}
