//! Station → line membership lookup.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Line, LineId, StationName};

use super::error::UnknownStation;

/// Index from each station to the set of lines serving it.
///
/// Derived from the network's routable lines and never edited directly;
/// rebuild it if the lines change. Sets are ordered by `LineId`, so every
/// walk over them is deterministic.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    lines_by_station: HashMap<StationName, BTreeSet<LineId>>,
}

impl LineIndex {
    /// Build the index from a set of lines. Auxiliary lines are ignored.
    pub fn build<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        let mut lines_by_station: HashMap<StationName, BTreeSet<LineId>> = HashMap::new();

        for line in lines.into_iter().filter(|l| l.is_routable()) {
            for station in &line.stations {
                lines_by_station
                    .entry(station.clone())
                    .or_default()
                    .insert(line.id);
            }
        }

        Self { lines_by_station }
    }

    /// The lines serving a station.
    pub fn lines_of(&self, station: &StationName) -> Result<&BTreeSet<LineId>, UnknownStation> {
        self.lines_by_station
            .get(station)
            .ok_or_else(|| UnknownStation(station.to_string()))
    }

    /// Lines serving both stations, in ascending `LineId` order.
    pub fn common_lines(
        &self,
        a: &StationName,
        b: &StationName,
    ) -> Result<BTreeSet<LineId>, UnknownStation> {
        let la = self.lines_of(a)?;
        let lb = self.lines_of(b)?;
        Ok(la.intersection(lb).copied().collect())
    }

    /// Returns true if two stations share at least one line.
    pub fn share_line(&self, a: &StationName, b: &StationName) -> bool {
        match (self.lines_by_station.get(a), self.lines_by_station.get(b)) {
            (Some(la), Some(lb)) => !la.is_disjoint(lb),
            _ => false,
        }
    }

    /// Check if a station is served by any routable line.
    pub fn contains(&self, station: &StationName) -> bool {
        self.lines_by_station.contains_key(station)
    }

    /// All indexed stations, sorted.
    pub fn stations(&self) -> BTreeSet<StationName> {
        self.lines_by_station.keys().cloned().collect()
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.lines_by_station.len()
    }

    /// Returns true if no station is indexed.
    pub fn is_empty(&self) -> bool {
        self.lines_by_station.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn line(id: u16, stations: &[&str], auxiliary: bool) -> Line {
        Line {
            id: LineId(id),
            name: format!("Line {id}"),
            colour: "Grey".to_string(),
            stations: stations.iter().map(|s| station(s)).collect(),
            auxiliary,
        }
    }

    fn sample() -> LineIndex {
        let lines = vec![
            line(1, &["A", "B", "C", "D"], false),
            line(2, &["D", "E", "F"], false),
            line(3, &["B", "X"], true),
        ];
        LineIndex::build(&lines)
    }

    #[test]
    fn lines_of_single_line_station() {
        let index = sample();
        let lines = index.lines_of(&station("A")).unwrap();
        assert_eq!(lines.iter().copied().collect::<Vec<_>>(), vec![LineId(1)]);
    }

    #[test]
    fn lines_of_interchange() {
        let index = sample();
        let lines = index.lines_of(&station("D")).unwrap();
        assert_eq!(
            lines.iter().copied().collect::<Vec<_>>(),
            vec![LineId(1), LineId(2)]
        );
    }

    #[test]
    fn unknown_station() {
        let index = sample();
        let err = index.lines_of(&station("ZZZ")).unwrap_err();
        assert_eq!(err, UnknownStation("ZZZ".to_string()));
    }

    #[test]
    fn auxiliary_lines_are_not_indexed() {
        let index = sample();
        assert!(!index.contains(&station("X")));
        // B is only on line 1 once the auxiliary line is ignored
        assert_eq!(index.lines_of(&station("B")).unwrap().len(), 1);
    }

    #[test]
    fn common_lines_and_share_line() {
        let index = sample();
        let common = index.common_lines(&station("A"), &station("D")).unwrap();
        assert_eq!(common.into_iter().collect::<Vec<_>>(), vec![LineId(1)]);

        let common = index.common_lines(&station("A"), &station("F")).unwrap();
        assert!(common.is_empty());

        assert!(index.share_line(&station("E"), &station("D")));
        assert!(!index.share_line(&station("A"), &station("E")));
        assert!(!index.share_line(&station("A"), &station("ZZZ")));
    }

    #[test]
    fn stations_sorted_and_deduplicated() {
        let index = sample();
        let names: Vec<String> = index.stations().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E", "F"]);
        assert_eq!(index.len(), 6);
        assert!(!index.is_empty());
        assert!(LineIndex::default().is_empty());
    }
}
