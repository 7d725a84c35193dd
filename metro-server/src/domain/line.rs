//! Transit line types.

use std::fmt;

use serde::Serialize;

use super::StationName;

/// Numeric line identifier, taken from the line's label in the network file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineId(pub u16);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A transit line: an ordered run of stations served by one service.
///
/// Station order defines adjacency and is what routes walk along, in
/// either direction. Auxiliary lines are metadata rows from the network
/// file; they are kept so their identifiers stay reserved, but they never
/// take part in routing or rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,

    /// Display label, e.g. "Red Line".
    pub name: String,

    /// Colour encoded in the label (its first word), e.g. "Red".
    pub colour: String,

    pub stations: Vec<StationName>,

    pub auxiliary: bool,
}

impl Line {
    /// Returns true if this line can carry passengers.
    pub fn is_routable(&self) -> bool {
        !self.auxiliary
    }

    /// Returns true if the station is served by this line.
    pub fn serves(&self, station: &StationName) -> bool {
        self.stations.contains(station)
    }

    /// Contiguous run of stations from `from` to `to`, oriented so the
    /// result starts at `from`.
    ///
    /// Both ends are located by their first occurrence in `order`, so a line
    /// that passes a station twice always yields one well-defined slice.
    /// Returns `None` if either station is absent.
    pub fn slice_between(
        order: &[StationName],
        from: &StationName,
        to: &StationName,
    ) -> Option<Vec<StationName>> {
        let start = order.iter().position(|s| s == from)?;
        let end = order.iter().position(|s| s == to)?;

        let slice = if start <= end {
            order[start..=end].to_vec()
        } else {
            order[end..=start].iter().rev().cloned().collect()
        };

        Some(slice)
    }

    /// The candidate paths between two stations along this line: one read
    /// from the stored order and one from the reversed order.
    ///
    /// For a simple line both are the same path. For a line that loops back
    /// on itself they are genuinely different ways round.
    pub fn candidate_paths(&self, from: &StationName, to: &StationName) -> Vec<Vec<StationName>> {
        let reversed: Vec<StationName> = self.stations.iter().rev().cloned().collect();

        [
            Self::slice_between(&self.stations, from, to),
            Self::slice_between(&reversed, from, to),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<StationName> {
        list.iter().map(|s| StationName::parse(s).unwrap()).collect()
    }

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn line(stations: &[&str]) -> Line {
        Line {
            id: LineId(1),
            name: "Red Line".to_string(),
            colour: "Red".to_string(),
            stations: names(stations),
            auxiliary: false,
        }
    }

    #[test]
    fn line_id_display_is_zero_padded() {
        assert_eq!(LineId(1).to_string(), "01");
        assert_eq!(LineId(12).to_string(), "12");
    }

    #[test]
    fn slice_forward() {
        let order = names(&["A", "B", "C", "D"]);
        let slice = Line::slice_between(&order, &station("B"), &station("D")).unwrap();
        assert_eq!(slice, names(&["B", "C", "D"]));
    }

    #[test]
    fn slice_backward_is_oriented_from_origin() {
        let order = names(&["A", "B", "C", "D"]);
        let slice = Line::slice_between(&order, &station("D"), &station("A")).unwrap();
        assert_eq!(slice, names(&["D", "C", "B", "A"]));
    }

    #[test]
    fn slice_same_station() {
        let order = names(&["A", "B"]);
        let slice = Line::slice_between(&order, &station("B"), &station("B")).unwrap();
        assert_eq!(slice, names(&["B"]));
    }

    #[test]
    fn slice_missing_station() {
        let order = names(&["A", "B"]);
        assert!(Line::slice_between(&order, &station("A"), &station("Z")).is_none());
    }

    #[test]
    fn simple_line_paths_agree() {
        let l = line(&["A", "B", "C", "D"]);
        let paths = l.candidate_paths(&station("A"), &station("C"));
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], names(&["A", "B", "C"]));
        assert_eq!(paths[1], names(&["A", "B", "C"]));
    }

    #[test]
    fn loop_line_yields_both_ways_round() {
        // A ring listed starting and ending at A
        let l = line(&["A", "B", "C", "D", "A"]);
        let paths = l.candidate_paths(&station("A"), &station("D"));
        assert_eq!(paths[0], names(&["A", "B", "C", "D"]));
        assert_eq!(paths[1], names(&["A", "D"]));
    }

    #[test]
    fn serves_and_routable() {
        let mut l = line(&["A", "B"]);
        assert!(l.serves(&station("a")));
        assert!(!l.serves(&station("C")));
        assert!(l.is_routable());
        l.auxiliary = true;
        assert!(!l.is_routable());
    }
}
