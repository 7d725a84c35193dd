//! The loaded network: lines, station positions and membership index.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::domain::{Coord, Line, LineId, StationName};

use super::error::{NetworkError, UnknownStation};
use super::index::LineIndex;
use super::loader;

/// Coordinates closer than this are treated as the same position.
const COORD_TOLERANCE: f64 = 1e-9;

/// The static transit network.
///
/// Built once at startup and read-only afterwards, so a single instance can
/// be shared behind an `Arc` by any number of concurrent queries.
///
/// Every station on a routable line has an entry in the coordinate table.
#[derive(Debug, Clone)]
pub struct Network {
    lines: Vec<Line>,
    coords: HashMap<StationName, Coord>,
    index: LineIndex,
}

impl Network {
    /// Load a network from a file in the tabular line/coordinate format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let file = std::fs::File::open(path.as_ref())?;
        loader::load(file)
    }

    /// Load a network from any reader in the tabular line/coordinate format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NetworkError> {
        loader::load(reader)
    }

    fn new(mut lines: Vec<Line>, coords: HashMap<StationName, Coord>) -> Self {
        lines.sort_by_key(|l| l.id);
        let index = LineIndex::build(&lines);
        Self {
            lines,
            coords,
            index,
        }
    }

    /// All lines, auxiliary ones included, ordered by id.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines that take part in routing and rendering, ordered by id.
    pub fn routable_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_routable())
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines
            .binary_search_by_key(&id, |l| l.id)
            .ok()
            .map(|i| &self.lines[i])
    }

    /// Position of a station, if it is on a routable line.
    pub fn coord(&self, station: &StationName) -> Option<Coord> {
        self.coords.get(station).copied()
    }

    /// Every station served by at least one routable line, sorted and
    /// deduplicated.
    pub fn all_station_names(&self) -> BTreeSet<StationName> {
        self.index.stations()
    }

    /// The station → lines index.
    pub fn index(&self) -> &LineIndex {
        &self.index
    }

    /// The lines serving a station.
    pub fn lines_of(&self, station: &StationName) -> Result<&BTreeSet<LineId>, UnknownStation> {
        self.index.lines_of(station)
    }

    /// Check if a station is part of the network.
    pub fn contains(&self, station: &StationName) -> bool {
        self.index.contains(station)
    }

    /// Number of distinct routable stations.
    pub fn station_count(&self) -> usize {
        self.index.len()
    }
}

/// Builder for assembling a network line by line.
///
/// Used by the file loader, and handy for constructing small synthetic
/// networks directly.
///
/// # Example
///
/// ```
/// use metro_server::network::NetworkBuilder;
/// use metro_server::domain::StationName;
///
/// let network = NetworkBuilder::new()
///     .line(1, "RED", &[("A", 0.0, 0.0), ("B", 1.0, 0.0)])
///     .line(2, "BLUE", &[("B", 1.0, 0.0), ("C", 1.0, 1.0)])
///     .build()
///     .unwrap();
///
/// let b = StationName::parse("b").unwrap();
/// assert_eq!(network.lines_of(&b).unwrap().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    lines: Vec<Line>,
    coords: HashMap<StationName, Coord>,
    error: Option<String>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a routable line from `(name, x, y)` stops.
    ///
    /// The first word of `name` is taken as the line colour.
    pub fn line(self, id: u16, name: &str, stops: &[(&str, f64, f64)]) -> Self {
        self.with_stops(id, name, stops, false)
    }

    /// Add an auxiliary (non-routable) line.
    pub fn auxiliary_line(self, id: u16, name: &str, stops: &[(&str, f64, f64)]) -> Self {
        self.with_stops(id, name, stops, true)
    }

    fn with_stops(mut self, id: u16, name: &str, stops: &[(&str, f64, f64)], auxiliary: bool) -> Self {
        let mut stations = Vec::with_capacity(stops.len());
        let mut positions = Vec::with_capacity(stops.len());
        for (station, x, y) in stops {
            match StationName::parse(station) {
                Ok(s) => {
                    stations.push(s);
                    positions.push(Coord::new(*x, *y));
                }
                Err(e) => {
                    self.error.get_or_insert_with(|| e.to_string());
                }
            }
        }

        let line = Line {
            id: LineId(id),
            name: name.to_string(),
            colour: colour_of(name),
            stations,
            auxiliary,
        };
        if let Err(reason) = self.add(line, positions) {
            self.error.get_or_insert(reason);
        }
        self
    }

    /// Add a line whose stations are aligned by position with `positions`.
    ///
    /// Consecutive repeats of a station are collapsed. Auxiliary lines do
    /// not contribute to the coordinate table. Returns a description of the
    /// problem if the line cannot be added.
    pub(crate) fn add(&mut self, mut line: Line, positions: Vec<Coord>) -> Result<(), String> {
        if line.stations.len() != positions.len() {
            return Err(format!(
                "line {} has {} stations but {} coordinates",
                line.id,
                line.stations.len(),
                positions.len()
            ));
        }
        if line.stations.is_empty() {
            return Err(format!("line {} has no stations", line.id));
        }
        if self.lines.iter().any(|l| l.id == line.id) {
            return Err(format!("duplicate line id {}", line.id));
        }

        let mut stations: Vec<StationName> = Vec::with_capacity(line.stations.len());
        let mut kept_positions: Vec<Coord> = Vec::with_capacity(positions.len());
        for (station, position) in line.stations.into_iter().zip(positions) {
            if stations.last() == Some(&station) {
                continue;
            }
            stations.push(station);
            kept_positions.push(position);
        }
        line.stations = stations;

        if line.is_routable() {
            for (station, position) in line.stations.iter().zip(kept_positions) {
                match self.coords.get(station) {
                    Some(existing) => {
                        if existing.distance_to(&position) > COORD_TOLERANCE {
                            warn!(
                                station = %station,
                                line = %line.id,
                                kept_x = existing.x,
                                kept_y = existing.y,
                                ignored_x = position.x,
                                ignored_y = position.y,
                                "Conflicting coordinates for station, keeping first"
                            );
                        }
                    }
                    None => {
                        self.coords.insert(station.clone(), position);
                    }
                }
            }
        }

        self.lines.push(line);
        Ok(())
    }

    /// Build the network.
    ///
    /// Fails if any line was rejected, or if no routable line was added.
    pub fn build(self) -> Result<Network, NetworkError> {
        if let Some(reason) = self.error {
            return Err(NetworkError::InvalidLine { reason });
        }
        if !self.lines.iter().any(|l| l.is_routable()) {
            return Err(NetworkError::Empty);
        }
        Ok(Network::new(self.lines, self.coords))
    }
}

/// The colour encoded in a line label: its first word.
pub(crate) fn colour_of(name: &str) -> String {
    name.split_whitespace().next().unwrap_or_default().to_string()
}
