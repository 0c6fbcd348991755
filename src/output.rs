//! Data structures for representing the output.

use crate::classify::Place;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A driver seen only in the current season.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct Rookie {
    pub name: String,
    pub place: Place,
    pub complete_season: bool,
}

/// A driver with complete current and previous seasons.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct Improvement {
    pub name: String,
    pub current_place: Place,
    pub previous_place: Place,
    /// Places gained; negative if the driver dropped.
    pub difference: i64,
}

#[derive(PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct Report {
    pub seasons: Vec<String>,
    pub current_season: Option<String>,
    pub previous_season: Option<String>,
    pub rookies: Vec<Rookie>,
    pub improved: Vec<Improvement>,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

/// Best place first; stable, so ties keep their order.
pub fn sort_rookies(rookies: &mut [Rookie]) {
    rookies.sort_by_key(|r| r.place);
}

/// Largest gain first; stable, so ties keep their order.
pub fn sort_improved(improved: &mut [Improvement]) {
    improved.sort_by_key(|i| Reverse(i.difference));
}

pub fn rookie_string(rookie: &Rookie, with_complete: bool) -> String {
    if with_complete {
        format!(
            "{} - {} -- {}",
            rookie.name, rookie.place, rookie.complete_season
        )
    } else {
        format!("{} - {}", rookie.name, rookie.place)
    }
}

pub fn improvement_string(improvement: &Improvement) -> String {
    format!(
        "{} - {} (was {}, {:+})",
        improvement.name,
        improvement.current_place,
        improvement.previous_place,
        improvement.difference
    )
}

impl Report {
    /// Sorts both lists.
    pub fn new(
        seasons: Vec<String>,
        mut rookies: Vec<Rookie>,
        mut improved: Vec<Improvement>,
    ) -> Report {
        sort_rookies(&mut rookies);
        sort_improved(&mut improved);
        let current_season = seasons.last().cloned();
        let previous_season = seasons.iter().rev().nth(1).cloned();
        Report {
            seasons,
            current_season,
            previous_season,
            rookies,
            improved,
        }
    }

    pub fn rookie_lines(&self, with_complete: bool) -> Vec<String> {
        let mut lines = vec![format!("new drivers: ({})", self.rookies.len())];
        lines.extend(
            self.rookies
                .iter()
                .map(|r| format!("  {}", rookie_string(r, with_complete))),
        );
        lines
    }

    pub fn improved_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("doty place changes: ({})", self.improved.len())];
        lines.extend(
            self.improved
                .iter()
                .map(|i| format!("  {}", improvement_string(i))),
        );
        lines
    }

    pub fn pretty(&self, with_complete: bool) -> String {
        self.rookie_lines(with_complete)
            .into_iter()
            .chain(self.improved_lines())
            .join("\n")
    }
}
