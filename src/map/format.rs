//! Line-oriented map file format.
//!
//! ```text
//! 0 0 0 Albany
//! 1 0 4 Boston
//! ##ROUTES##
//! 0 1 UNCLAIMED
//! ```
//!
//! Station lines are `id row col name` (the name may contain spaces), then
//! a sentinel line, then route lines `originId destinationId OWNER`.
//! Ownership round-trips.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::{Baron, MapError};

use super::railroad_map::{MapBuilder, RailroadMap};
use super::station::StationId;

/// Separates the station section from the route section.
pub const ROUTES_SENTINEL: &str = "##ROUTES##";

/// Read a map in the text format.
pub fn read_map(reader: impl BufRead) -> Result<RailroadMap, MapError> {
    let mut builder = MapBuilder::new();
    let mut in_routes = false;
    let mut route_count = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == ROUTES_SENTINEL {
            in_routes = true;
            continue;
        }

        if in_routes {
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            let [origin, destination, owner] = fields.as_slice() else {
                return Err(MapError::parse(line_no, "expected `origin destination owner`"));
            };
            let origin = parse_number(origin, line_no)?;
            let destination = parse_number(destination, line_no)?;
            let owner = Baron::parse_owner(owner)
                .ok_or_else(|| MapError::parse(line_no, format!("unknown owner {owner:?}")))?;
            builder.route(StationId::new(origin), StationId::new(destination), owner)?;
            route_count += 1;
        } else {
            let Some((id, row, col, name)) = station_fields(trimmed) else {
                return Err(MapError::parse(line_no, "expected `id row col name`"));
            };
            builder.station(
                parse_number(id, line_no)?,
                parse_number(row, line_no)? as usize,
                parse_number(col, line_no)? as usize,
                name,
            )?;
        }
    }

    let map = builder.build()?;
    debug!(
        stations = map.stations().len(),
        routes = route_count,
        rows = map.rows(),
        cols = map.cols(),
        "map read"
    );
    Ok(map)
}

/// Splits a trimmed station line into id, row, col and the rest as the name.
/// Any run of whitespace separates the leading fields.
fn station_fields(line: &str) -> Option<(&str, &str, &str, &str)> {
    fn next(rest: &str) -> Option<(&str, &str)> {
        rest.split_once(char::is_whitespace)
            .map(|(field, rest)| (field, rest.trim_start()))
    }

    let (id, rest) = next(line)?;
    let (row, rest) = next(rest)?;
    let (col, name) = next(rest)?;
    Some((id, row, col, name))
}

fn parse_number(field: &str, line: usize) -> Result<u32, MapError> {
    field
        .parse()
        .map_err(|_| MapError::parse(line, format!("{field:?} is not a non-negative integer")))
}

/// Write a map in the text format, including current ownership.
pub fn write_map(map: &RailroadMap, mut writer: impl Write) -> Result<(), MapError> {
    for station in map.stations() {
        writeln!(writer, "{} {} {} {}", station.id.raw(), station.row, station.col, station.name)?;
    }
    writeln!(writer, "{ROUTES_SENTINEL}")?;
    for route in map.routes() {
        writeln!(
            writer,
            "{} {} {}",
            route.origin().raw(),
            route.destination().raw(),
            Baron::owner_token(route.owner())
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RouteId;

    const SMALL: &str = "\
0 0 0 New York City
1 0 4 Boston
2 3 0 Philadelphia
##ROUTES##
0 1 UNCLAIMED
0 2 RED
";

    #[test]
    fn test_read() {
        let map = read_map(SMALL.as_bytes()).unwrap();

        assert_eq!(map.stations().len(), 3);
        assert_eq!(map.station(StationId::new(0)).unwrap().name, "New York City");
        assert_eq!(map.routes().len(), 2);
        assert_eq!(map.route(RouteId::new(1)).unwrap().owner(), Some(Baron::Red));
        assert!(map.claimed_routes().contains(&RouteId::new(1)));
        assert_eq!(map.length_of_shortest_unclaimed_route(), 3);
    }

    #[test]
    fn test_round_trip_keeps_ownership() {
        let mut map = read_map(SMALL.as_bytes()).unwrap();
        map.route_mut(RouteId::new(0)).unwrap().claim(Baron::Yellow);
        map.route_claimed(RouteId::new(0));

        let mut out = Vec::new();
        write_map(&map, &mut out).unwrap();
        let reread = read_map(out.as_slice()).unwrap();

        assert_eq!(reread.routes(), map.routes());
        assert_eq!(reread.stations(), map.stations());
        assert!(reread.all_routes_claimed());
    }

    #[test]
    fn test_written_text() {
        let map = read_map(SMALL.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_map(&map, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SMALL);
    }

    #[test]
    fn test_bad_station_line() {
        let err = read_map("0 0 Boston\n##ROUTES##\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_runs_of_whitespace_separate_station_fields() {
        let text = "0  0\t0  Albany Union\n1 0 \t 4\tBoston\n##ROUTES##\n0   1\tUNCLAIMED\n";
        let map = read_map(text.as_bytes()).unwrap();

        assert_eq!(map.station(StationId::new(0)).unwrap().name, "Albany Union");
        assert_eq!(map.station(StationId::new(1)).unwrap().name, "Boston");
        assert_eq!(map.station(StationId::new(1)).unwrap().col, 4);
        assert_eq!(map.routes().len(), 1);
        assert_eq!(map.route(RouteId::new(0)).unwrap().length(), 3);
    }

    #[test]
    fn test_huge_coordinates_rejected() {
        let text = "0 0 0 A\n1 4000000000 4000000000 B\n##ROUTES##\n";
        let err = read_map(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::GridTooLarge { .. }));
    }

    #[test]
    fn test_bad_owner() {
        let text = "0 0 0 A\n1 0 3 B\n##ROUTES##\n0 1 PURPLE\n";
        let err = read_map(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_unknown_station_in_route() {
        let text = "0 0 0 A\n##ROUTES##\n0 7 UNCLAIMED\n";
        let err = read_map(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::UnknownStation(StationId(7))));
    }
}
