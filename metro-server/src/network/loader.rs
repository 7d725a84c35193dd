//! Reader for the tabular network format.
//!
//! The file is CSV without a header. Rows come in pairs:
//!
//! ```text
//! 01 Red Line,Rithala,Netaji Subhash Place,Kashmere Gate,,
//! ,"(0.00, 0.20)","(0.08, 0.12)","(0.22, 0.10)",,
//! ```
//!
//! The first cell of a line row is a numeric index followed by the line
//! label; station names follow up to the first empty cell. The next row
//! holds a coordinate literal at the same column for each station. A label
//! starting with `#` marks auxiliary data that is loaded but never routed
//! or drawn. Blank rows between pairs are ignored.

use std::io::Read;

use tracing::{debug, info};

use crate::domain::{Coord, Line, LineId, StationName};

use super::catalog::{Network, NetworkBuilder, colour_of};
use super::coords::parse_coord;
use super::error::NetworkError;

/// Marker at the start of a label for non-routable rows.
const AUXILIARY_MARKER: char = '#';

/// A CSV record with its 1-based row number in the source.
type Row = (usize, csv::StringRecord);

/// Load a complete network from a reader.
///
/// Fails on the first malformed row; nothing is returned for a partially
/// valid source.
pub(crate) fn load<R: Read>(reader: R) -> Result<Network, NetworkError> {
    let rows = read_rows(reader)?;

    let mut builder = NetworkBuilder::new();
    let mut auxiliary = 0;
    let mut rows = rows.into_iter();

    while let Some((line_row, line_record)) = rows.next() {
        let (coord_row, coord_record) = rows.next().ok_or_else(|| {
            NetworkError::data_format(line_row, "line row has no coordinate row")
        })?;

        let (line, positions) = parse_pair(line_row, &line_record, coord_row, &coord_record)?;

        if line.auxiliary {
            auxiliary += 1;
            debug!(line = %line.id, name = %line.name, "Loaded auxiliary line");
        }

        builder
            .add(line, positions)
            .map_err(|reason| NetworkError::data_format(line_row, reason))?;
    }

    let network = builder.build()?;

    info!(
        lines = network.routable_lines().count(),
        auxiliary,
        stations = network.station_count(),
        "Network loaded"
    );

    Ok(network)
}

/// Read all non-blank records.
fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>, NetworkError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // The reader drops blank lines without reporting them, so rows are
    // numbered from each record's position rather than by counting.
    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(e, i + 1))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = record.position().map_or(i + 1, source_line);
        rows.push((row, record));
    }

    Ok(rows)
}

fn source_line(position: &csv::Position) -> usize {
    usize::try_from(position.line()).unwrap_or(usize::MAX)
}

fn csv_error(err: csv::Error, fallback_row: usize) -> NetworkError {
    let reason = err.to_string();
    let row = err.position().map_or(fallback_row, source_line);
    match err.into_kind() {
        csv::ErrorKind::Io(e) => NetworkError::Io(e),
        _ => NetworkError::data_format(row, reason),
    }
}

/// Parse one line row and the coordinate row that follows it.
fn parse_pair(
    line_row: usize,
    line_record: &csv::StringRecord,
    coord_row: usize,
    coord_record: &csv::StringRecord,
) -> Result<(Line, Vec<Coord>), NetworkError> {
    let label = line_record.get(0).unwrap_or_default();
    let (id, name, auxiliary) = parse_label(label)
        .map_err(|reason| NetworkError::data_format(line_row, reason))?;

    let stations = line_record
        .iter()
        .skip(1)
        .take_while(|cell| !cell.is_empty())
        .map(|cell| {
            StationName::parse(cell).map_err(|e| NetworkError::data_format(line_row, e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if stations.is_empty() {
        return Err(NetworkError::data_format(line_row, "line has no stations"));
    }

    let mut positions = Vec::with_capacity(stations.len());
    for column in 1..=stations.len() {
        let cell = match coord_record.get(column) {
            Some(cell) if !cell.is_empty() => cell,
            _ => {
                return Err(NetworkError::data_format(
                    coord_row,
                    format!(
                        "missing coordinate for station {} in column {}",
                        stations[column - 1],
                        column + 1
                    ),
                ));
            }
        };
        let position =
            parse_coord(cell).map_err(|e| NetworkError::data_format(coord_row, e.to_string()))?;
        positions.push(position);
    }

    if let Some(extra) = coord_record
        .iter()
        .skip(stations.len() + 1)
        .position(|cell| !cell.is_empty())
    {
        return Err(NetworkError::data_format(
            coord_row,
            format!(
                "coordinate in column {} has no station",
                stations.len() + extra + 2
            ),
        ));
    }

    let line = Line {
        id,
        colour: colour_of(&name),
        name,
        stations,
        auxiliary,
    };

    Ok((line, positions))
}

/// Split a label like `01 Red Line` or `#07 Connector` into its parts.
fn parse_label(label: &str) -> Result<(LineId, String, bool), String> {
    let (auxiliary, rest) = match label.strip_prefix(AUXILIARY_MARKER) {
        Some(rest) => (true, rest.trim_start()),
        None => (false, label),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, name) = rest.split_at(digits_end);

    if digits.is_empty() {
        return Err(format!("line label {label:?} must start with a line number"));
    }
    let id: u16 = digits
        .parse()
        .map_err(|_| format!("line number {digits:?} is out of range"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("line label {label:?} has no name"));
    }

    Ok((LineId(id), name.to_string(), auxiliary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    const SAMPLE: &str = "\
01 Red Line,Rithala,Netaji Subhash Place,Kashmere Gate,,
,\"(0.00, 0.20)\",\"(0.08, 0.12)\",\"(0.22, 0.10)\",,

02 Yellow Line,Samaypur Badli,Kashmere Gate,Rajiv Chowk
,\"(0.12, 0.30)\",\"(0.22, 0.10)\",\"(0.20, 0.00)\"
#03 Connector,Rajiv Chowk,Somewhere
,\"(0.20, 0.00)\",\"(5, 5)\"
";

    #[test]
    fn load_sample() {
        let network = load(SAMPLE.as_bytes()).unwrap();

        assert_eq!(network.lines().len(), 3);
        assert_eq!(network.routable_lines().count(), 2);

        let red = network.line(LineId(1)).unwrap();
        assert_eq!(red.name, "Red Line");
        assert_eq!(red.colour, "Red");
        assert_eq!(red.stations.len(), 3);
        assert_eq!(red.stations[2], station("kashmere gate"));

        let connector = network.line(LineId(3)).unwrap();
        assert!(connector.auxiliary);
        assert_eq!(connector.name, "Connector");

        assert_eq!(network.station_count(), 5);
        assert!(!network.contains(&station("Somewhere")));
        assert_eq!(
            network.coord(&station("Rajiv Chowk")),
            Some(Coord::new(0.2, 0.0))
        );
        assert_eq!(network.lines_of(&station("Kashmere Gate")).unwrap().len(), 2);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = Network::load(file.path()).unwrap();
        assert_eq!(network.routable_lines().count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Network::load(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }

    #[test]
    fn missing_coordinate_row() {
        let source = "01 Red,A,B\n,\"(0,0)\",\"(1,0)\"\n02 Blue,B,C\n";
        let err = load(source.as_bytes()).unwrap_err();
        match err {
            NetworkError::DataFormat { row, reason } => {
                assert_eq!(row, 3);
                assert_eq!(reason, "line row has no coordinate row");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rows_after_blank_lines_keep_their_line_numbers() {
        let source = "01 Red,A,B\n,\"(0,0)\",\"(1,0)\"\n\n\n02 Blue,B,C\n,\"(1,0)\",\"(1;1)\"\n";
        let err = load(source.as_bytes()).unwrap_err();
        match err {
            NetworkError::DataFormat { row, reason } => {
                assert_eq!(row, 6);
                assert!(reason.contains("(1;1)"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }

        let source = "01 Red,A,B\n,\"(0,0)\",\"(1,0)\"\n\n\n02 Blue,B,C\n";
        let err = load(source.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::DataFormat { row: 5, .. }), "{err}");
    }

    #[test]
    fn unparsable_coordinate() {
        let source = "01 Red,A,B\n,\"(0,0)\",\"(1;0)\"\n";
        let err = load(source.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::DataFormat { row: 2, .. }));
    }

    #[test]
    fn short_coordinate_row() {
        let source = "01 Red,A,B,C\n,\"(0,0)\",\"(1,0)\"\n";
        let err = load(source.as_bytes()).unwrap_err();
        match err {
            NetworkError::DataFormat { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("missing coordinate for station C"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn coordinate_beyond_terminator() {
        let source = "01 Red,A,B,,D\n,\"(0,0)\",\"(1,0)\",,\"(3,0)\"\n";
        let err = load(source.as_bytes()).unwrap_err();
        match err {
            NetworkError::DataFormat { row, reason } => {
                assert_eq!(row, 2);
                assert_eq!(reason, "coordinate in column 5 has no station");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stations_after_terminator_ignored() {
        let source = "01 Red,A,B,,notes\n,\"(0,0)\",\"(1,0)\"\n";
        let network = load(source.as_bytes()).unwrap();
        assert_eq!(network.line(LineId(1)).unwrap().stations.len(), 2);
    }

    #[test]
    fn bad_labels() {
        for source in [
            "Red Line,A\n,\"(0,0)\"\n",
            "01,A\n,\"(0,0)\"\n",
            "99999 Red,A\n,\"(0,0)\"\n",
        ] {
            let err = load(source.as_bytes()).unwrap_err();
            assert!(
                matches!(err, NetworkError::DataFormat { row: 1, .. }),
                "{source:?} gave {err}"
            );
        }
    }

    #[test]
    fn line_without_stations() {
        let source = "01 Red,,\n,,\n";
        let err = load(source.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::DataFormat { row: 1, .. }));
    }

    #[test]
    fn duplicate_line_id() {
        let source = "01 Red,A\n,\"(0,0)\"\n01 Blue,B\n,\"(1,0)\"\n";
        let err = load(source.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::DataFormat { row: 3, .. }));
    }

    #[test]
    fn empty_source() {
        let err = load("".as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::Empty));
    }

    #[test]
    fn auxiliary_label_parses() {
        let (id, name, auxiliary) = parse_label("# 07 Airport Connector").unwrap();
        assert_eq!(id, LineId(7));
        assert_eq!(name, "Airport Connector");
        assert!(auxiliary);

        let (id, name, auxiliary) = parse_label("12 Grey Line").unwrap();
        assert_eq!(id, LineId(12));
        assert_eq!(name, "Grey Line");
        assert!(!auxiliary);
    }

    #[test]
    fn case_insensitive_station_identity_across_lines() {
        let source = "01 Red,Alpha,Beta\n,\"(0,0)\",\"(1,0)\"\n02 Blue,BETA,gamma\n,\"(1,0)\",\"(1,1)\"\n";
        let network = load(source.as_bytes()).unwrap();
        assert_eq!(network.lines_of(&station("beta")).unwrap().len(), 2);
        assert_eq!(network.station_count(), 3);
    }
}
