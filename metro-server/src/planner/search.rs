//! Route search.
//!
//! Finds a station sequence between two stations using at most two line
//! changes:
//!
//! - **Direct**: origin and destination share a line. Each shared line
//!   offers a path read from its stored order and one from its reversed
//!   order; the shortest wins.
//! - **One change**: every station on every origin line that shares a line
//!   with the destination is tried as the interchange.
//! - **Two changes**: only if no one-change route exists. Every station on
//!   an origin line is paired with every station on a destination line;
//!   pairs that share a line give a three-leg route.
//!
//! Candidates are compared by their length on the schematic plane. Ties go
//! to the first candidate found, and all iteration is in `LineId` and
//! stored station order, so results are deterministic.
//!
//! The search is deliberately bounded: a destination needing three or more
//! changes is reported as unreachable.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::domain::{Line, LineId, StationName};
use crate::network::{Network, UnknownStation};

use super::distance::total_distance;
use super::route::{Route, describe_lines};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A station is not part of the network
    #[error(transparent)]
    UnknownStation(#[from] UnknownStation),

    /// No route exists within two line changes
    #[error("no route found from {from} to {to}")]
    NoRouteFound { from: StationName, to: StationName },
}

/// One ride along a single line.
#[derive(Debug, Clone)]
struct Leg {
    line: LineId,
    stations: Vec<StationName>,
}

/// A fully built candidate route and its length.
#[derive(Debug, Clone)]
struct Candidate {
    legs: Vec<Leg>,
    stations: Vec<StationName>,
    distance: f64,
}

/// Keeps the shortest candidate seen so far.
///
/// Comparison is strict, so among equal lengths the first offered stays.
#[derive(Debug, Default)]
struct Shortest {
    best: Option<Candidate>,
    considered: usize,
}

impl Shortest {
    fn offer(&mut self, candidate: Candidate) {
        self.considered += 1;
        match &self.best {
            Some(best) if candidate.distance >= best.distance => {}
            _ => self.best = Some(candidate),
        }
    }
}

/// Which search strategy produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Direct,
    OneChange,
    TwoChanges,
}

/// Route search over a loaded network.
pub(crate) struct Resolver<'a> {
    network: &'a Network,
    lines: HashMap<LineId, &'a Line>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(network: &'a Network) -> Self {
        let lines = network.routable_lines().map(|l| (l.id, l)).collect();
        Self { network, lines }
    }

    /// Find the shortest route from `src` to `dst` within two changes.
    pub(crate) fn resolve(&self, src: &StationName, dst: &StationName) -> Result<Route, RouteError> {
        let src_lines = self.network.lines_of(src)?;
        let dst_lines = self.network.lines_of(dst)?;

        if src == dst {
            return Ok(Route::single(src.clone()));
        }

        let (strategy, found) = if !src_lines.is_disjoint(dst_lines) {
            (Strategy::Direct, self.direct(src, dst)?)
        } else {
            let one = self.one_change(src, dst, src_lines, dst_lines)?;
            if one.best.is_some() {
                (Strategy::OneChange, one)
            } else {
                (
                    Strategy::TwoChanges,
                    self.two_changes(src, dst, src_lines, dst_lines)?,
                )
            }
        };

        debug!(
            from = %src,
            to = %dst,
            strategy = ?strategy,
            candidates = found.considered,
            "Route search complete"
        );

        let candidate = found.best.ok_or_else(|| RouteError::NoRouteFound {
            from: src.clone(),
            to: dst.clone(),
        })?;

        Ok(self.to_route(candidate))
    }

    /// All single-line candidates between two stations.
    fn direct(&self, from: &StationName, to: &StationName) -> Result<Shortest, RouteError> {
        let mut shortest = Shortest::default();

        for line_id in self.network.index().common_lines(from, to)? {
            let Some(line) = self.lines.get(&line_id) else {
                continue;
            };
            for path in line.candidate_paths(from, to) {
                let distance = total_distance(self.network, &path)?;
                shortest.offer(Candidate {
                    legs: vec![Leg {
                        line: line_id,
                        stations: path.clone(),
                    }],
                    stations: path,
                    distance,
                });
            }
        }

        Ok(shortest)
    }

    /// The best single-line leg between two stations, if they share a line.
    fn best_leg(&self, from: &StationName, to: &StationName) -> Result<Option<Leg>, RouteError> {
        let shortest = self.direct(from, to)?;
        Ok(shortest
            .best
            .and_then(|candidate| candidate.legs.into_iter().next()))
    }

    fn one_change(
        &self,
        src: &StationName,
        dst: &StationName,
        src_lines: &BTreeSet<LineId>,
        dst_lines: &BTreeSet<LineId>,
    ) -> Result<Shortest, RouteError> {
        let mut shortest = Shortest::default();

        for line in self.lines_in(src_lines) {
            for interchange in &line.stations {
                if self.network.lines_of(interchange)?.is_disjoint(dst_lines) {
                    continue;
                }
                trace!(line = %line.id, interchange = %interchange, "Trying interchange");

                let legs = [self.best_leg(src, interchange)?, self.best_leg(interchange, dst)?];
                if let Some(candidate) = self.join(legs)? {
                    shortest.offer(candidate);
                }
            }
        }

        Ok(shortest)
    }

    fn two_changes(
        &self,
        src: &StationName,
        dst: &StationName,
        src_lines: &BTreeSet<LineId>,
        dst_lines: &BTreeSet<LineId>,
    ) -> Result<Shortest, RouteError> {
        let mut shortest = Shortest::default();

        for first in self.lines_in(src_lines) {
            for last in self.lines_in(dst_lines) {
                for p in &first.stations {
                    for q in &last.stations {
                        if !self.network.index().share_line(p, q) {
                            continue;
                        }
                        trace!(first = %p, second = %q, "Trying interchange pair");

                        let legs = [
                            self.best_leg(src, p)?,
                            self.best_leg(p, q)?,
                            self.best_leg(q, dst)?,
                        ];
                        if let Some(candidate) = self.join(legs)? {
                            shortest.offer(candidate);
                        }
                    }
                }
            }
        }

        Ok(shortest)
    }

    /// Lines for a set of ids, in id order.
    fn lines_in<'s>(&'s self, ids: &'s BTreeSet<LineId>) -> impl Iterator<Item = &'a Line> + 's {
        ids.iter().filter_map(|id| self.lines.get(id).copied())
    }

    /// Concatenate legs into one candidate, sharing each boundary station.
    ///
    /// Returns `None` if any leg could not be built.
    fn join<const N: usize>(&self, legs: [Option<Leg>; N]) -> Result<Option<Candidate>, RouteError> {
        let Some(legs) = legs.into_iter().collect::<Option<Vec<Leg>>>() else {
            return Ok(None);
        };

        let mut stations: Vec<StationName> = Vec::new();
        for leg in &legs {
            let skip = usize::from(stations.last() == leg.stations.first());
            stations.extend(leg.stations.iter().skip(skip).cloned());
        }

        let distance = total_distance(self.network, &stations)?;
        Ok(Some(Candidate {
            legs,
            stations,
            distance,
        }))
    }

    fn to_route(&self, candidate: Candidate) -> Route {
        let lines: Vec<LineId> = candidate.legs.iter().map(|leg| leg.line).collect();
        let names: Vec<&str> = lines
            .iter()
            .filter_map(|id| self.lines.get(id).map(|l| l.name.as_str()))
            .collect();

        Route {
            label: describe_lines(&names),
            stations: candidate.stations,
            lines,
            distance: candidate.distance,
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
