//! Classifying drivers across seasons.
//!
//! Seasons are fed in chronological order. For every row we record where the
//! driver placed and whether the row counts as a complete season, i.e., the
//! driver ran at least as many events as every row above it that was itself
//! complete. After the last season, drivers seen only in the current season
//! are rookies, and drivers with complete current and previous seasons are
//! candidates for most improved.

use crate::aliases::Aliases;
use crate::errors::{self, Result};
use crate::output::{Improvement, Rookie};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of a season in the input, oldest first.
pub type SeasonId = usize;
/// Finishing position, 1-based.
pub type Place = usize;
pub type EventCount = i64;

type DriverId = usize;

/// Cell with the driver name.
pub const NAME_CELL: usize = 1;
/// Cell with the number of events completed.
pub const EVENTS_CELL: usize = 3;

/// One row of a standings table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandingsRow<'a> {
    pub place: Place,
    pub driver_name: Option<&'a str>,
    /// `None` if the cell is missing or does not start with a number.
    pub event_count: Option<EventCount>,
}

impl<'a> StandingsRow<'a> {
    /// `index` is the position of the row among the data rows.
    pub fn parse(index: usize, cells: &'a [String]) -> StandingsRow<'a> {
        StandingsRow {
            place: index + 1,
            driver_name: cells
                .get(NAME_CELL)
                .map(String::as_str)
                .filter(|name| !name.is_empty()),
            event_count: cells.get(EVENTS_CELL).and_then(|c| parse_count(c)),
        }
    }
}

/// Leading integer of `s`, ignoring surrounding whitespace and trailing text.
pub fn parse_count(s: &str) -> Option<EventCount> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<EventCount>().ok().map(|n| sign * n)
}

/// Running maximum of the event counts of complete rows within one season.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoredEvents(EventCount);

impl ScoredEvents {
    pub fn new() -> ScoredEvents {
        ScoredEvents(0)
    }

    pub fn get(&self) -> EventCount {
        self.0
    }

    /// Is a row with `event_count` complete? Raises the bar if it is.
    ///
    /// A row without a count is never complete.
    pub fn feed(&mut self, event_count: Option<EventCount>) -> bool {
        match event_count {
            Some(count) if count >= self.0 => {
                self.0 = count;
                true
            }
            _ => false,
        }
    }
}

/// How a driver did in one season.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverRecord {
    pub place: Place,
    pub event_count: Option<EventCount>,
    pub complete_season: bool,
}

/// In which seasons a driver appeared, and in which of those the season was complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverHistory {
    pub name: String,
    pub present: Vec<SeasonId>,
    pub complete: Vec<SeasonId>,
}

/// Seasons are fed in increasing order, so checking the last entry keeps the list a set.
fn add_season(seasons: &mut Vec<SeasonId>, season: SeasonId) {
    if seasons.last() != Some(&season) {
        seasons.push(season);
    }
}

impl DriverHistory {
    fn new(name: String) -> DriverHistory {
        DriverHistory {
            name,
            present: vec![],
            complete: vec![],
        }
    }

    pub fn is_rookie(&self, current: SeasonId) -> bool {
        self.present == [current]
    }

    pub fn is_complete_in(&self, season: SeasonId) -> bool {
        self.complete.contains(&season)
    }
}

/// What was seen in one season's table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeasonSummary {
    pub season: String,
    pub rows: usize,
    pub complete: usize,
    pub unparsed_counts: usize,
    pub missing_names: usize,
    pub drivers: usize,
    pub scored_event_count: EventCount,
}

/// Rookies and most-improved candidates, in the order drivers were first seen.
#[derive(Debug, PartialEq, Eq)]
pub struct Classification {
    pub seasons: Vec<String>,
    pub rookies: Vec<Rookie>,
    pub improved: Vec<Improvement>,
}

pub struct Classifier<'a> {
    aliases: &'a Aliases,
    seasons: Vec<String>,
    records: Vec<HashMap<DriverId, DriverRecord>>,
    drivers: Vec<DriverHistory>,
    driver_map: HashMap<String, DriverId>,
}

impl<'a> Classifier<'a> {
    pub fn new(aliases: &'a Aliases) -> Classifier<'a> {
        Classifier {
            aliases,
            seasons: vec![],
            records: vec![],
            drivers: vec![],
            driver_map: HashMap::new(),
        }
    }

    fn driver_id(&mut self, name: String) -> DriverId {
        match self.driver_map.get(&name) {
            Some(&id) => id,
            None => {
                let id = self.drivers.len();
                self.drivers.push(DriverHistory::new(name.clone()));
                self.driver_map.insert(name, id);
                id
            }
        }
    }

    /// Add the next season; `rows` are the data rows of its table, best place first.
    pub fn feed_season(&mut self, name: &str, rows: &[Vec<String>]) -> SeasonSummary {
        let season = self.seasons.len();
        self.seasons.push(name.to_owned());
        let mut records = HashMap::new();
        let mut scored = ScoredEvents::new();
        let mut summary = SeasonSummary {
            season: name.to_owned(),
            rows: rows.len(),
            complete: 0,
            unparsed_counts: 0,
            missing_names: 0,
            drivers: 0,
            scored_event_count: 0,
        };
        for (index, cells) in rows.iter().enumerate() {
            let row = StandingsRow::parse(index, cells);
            let Some(raw_name) = row.driver_name else {
                debug!(target: "doty", "{name}: place {}: no driver name", row.place);
                summary.missing_names += 1;
                continue;
            };
            if row.event_count.is_none() {
                debug!(
                    target: "doty",
                    "{name}: place {}: {raw_name}: no event count", row.place
                );
                summary.unparsed_counts += 1;
            }
            let complete_season = scored.feed(row.event_count);
            let id = self.driver_id(self.aliases.normalize(raw_name));
            records.insert(
                id,
                DriverRecord {
                    place: row.place,
                    event_count: row.event_count,
                    complete_season,
                },
            );
            let history = &mut self.drivers[id];
            add_season(&mut history.present, season);
            if complete_season {
                summary.complete += 1;
                add_season(&mut history.complete, season);
            }
        }
        summary.drivers = records.len();
        summary.scored_event_count = scored.get();
        self.records.push(records);
        debug!(
            target: "doty",
            "{}: {} rows, {} complete, {} drivers, {} events scored",
            summary.season,
            summary.rows,
            summary.complete,
            summary.drivers,
            summary.scored_event_count,
        );
        summary
    }

    pub fn seasons(&self) -> &[String] {
        &self.seasons
    }

    pub fn drivers(&self) -> &[DriverHistory] {
        &self.drivers
    }

    pub fn history(&self, name: &str) -> Option<&DriverHistory> {
        self.driver_map.get(name).map(|&id| &self.drivers[id])
    }

    pub fn record(&self, season: SeasonId, name: &str) -> Option<&DriverRecord> {
        let id = self.driver_map.get(name)?;
        self.records.get(season)?.get(id)
    }

    /// Derive rookies and most-improved candidates from everything fed so far.
    pub fn finish(self) -> Result<Classification> {
        let Some(current) = self.seasons.len().checked_sub(1) else {
            return Err(errors::invalid_input_ref("no seasons"));
        };
        let previous = current.checked_sub(1);
        let mut rookies = vec![];
        let mut improved = vec![];
        for (id, history) in self.drivers.iter().enumerate() {
            if history.is_rookie(current) {
                let record = &self.records[current][&id];
                rookies.push(Rookie {
                    name: history.name.clone(),
                    place: record.place,
                    complete_season: record.complete_season,
                });
            }
            if let Some(previous) = previous {
                if history.is_complete_in(current) && history.is_complete_in(previous) {
                    let current_place = self.records[current][&id].place;
                    let previous_place = self.records[previous][&id].place;
                    improved.push(Improvement {
                        name: history.name.clone(),
                        current_place,
                        previous_place,
                        difference: previous_place as i64 - current_place as i64,
                    });
                }
            }
        }
        Ok(Classification {
            seasons: self.seasons,
            rookies,
            improved,
        })
    }
}
