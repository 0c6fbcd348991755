//! Main entry point for calculating everything.

use crate::aliases::Aliases;
use crate::classify::{Classifier, SeasonSummary};
use crate::errors::Result;
use crate::information;
use crate::input::{Config, Season};
use crate::loader;
use crate::output::Report;
use crate::table;
use itertools::Itertools;

/// Read the standings files, oldest first, and extract their tables.
pub fn load_seasons(files: &[String]) -> Result<Vec<Season>> {
    let contents = loader::load_all(files)?;
    Ok(files
        .iter()
        .zip(contents)
        .map(|(name, html)| Season {
            name: name.clone(),
            rows: table::extract_rows(&html),
        })
        .collect_vec())
}

fn feed_all<'a>(
    seasons: &[Season],
    aliases: &'a Aliases,
) -> (Classifier<'a>, Vec<SeasonSummary>) {
    let mut classifier = Classifier::new(aliases);
    let summaries = seasons
        .iter()
        .map(|s| classifier.feed_season(&s.name, &s.rows))
        .collect_vec();
    (classifier, summaries)
}

/// Classify drivers across `seasons`; the last one is the current season.
pub fn calc_seasons(seasons: &[Season], aliases: &Aliases) -> Result<Report> {
    information::statistics(seasons, aliases);
    let (classifier, summaries) = feed_all(seasons, aliases);
    information::post_statistics(&summaries, classifier.drivers().len());
    let classification = classifier.finish()?;
    Ok(Report::new(
        classification.seasons,
        classification.rookies,
        classification.improved,
    ))
}

/// Per-season table statistics.
pub fn summarize(seasons: &[Season], aliases: &Aliases) -> Vec<SeasonSummary> {
    feed_all(seasons, aliases).1
}

/// Calculate everything.
///
/// This is the main entry point for the library.
pub fn calc(config: &Config, aliases: &Aliases) -> Result<Report> {
    let seasons = load_seasons(&config.files)?;
    calc_seasons(&seasons, aliases)
}

#[cfg(test)]
mod test {
    use super::*;

    fn season(name: &str, rows: &[(&str, &str)]) -> Season {
        Season {
            name: name.to_owned(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, (driver, events))| {
                    vec![
                        (i + 1).to_string(),
                        driver.to_string(),
                        "0.000".to_owned(),
                        events.to_string(),
                    ]
                })
                .collect_vec(),
        }
    }

    #[test]
    fn calc_seasons_sorted() {
        let seasons = vec![
            season("2017", &[("A", "9"), ("B", "9"), ("C", "9"), ("D", "9")]),
            season(
                "2018",
                &[("E", "9"), ("D", "9"), ("F", "9"), ("B", "9"), ("A", "9"), ("G", "3")],
            ),
        ];
        let report = calc_seasons(&seasons, &Aliases::new()).unwrap();
        assert_eq!(report.current_season.as_deref(), Some("2018"));
        assert_eq!(report.previous_season.as_deref(), Some("2017"));
        let rookies = report.rookies.iter().map(|r| (r.name.as_str(), r.place)).collect_vec();
        assert_eq!(rookies, vec![("E", 1), ("F", 3), ("G", 6)]);
        let improved = report
            .improved
            .iter()
            .map(|i| (i.name.as_str(), i.difference))
            .collect_vec();
        assert_eq!(improved, vec![("D", 2), ("B", -2), ("A", -4)]);
    }

    #[test]
    fn calc_seasons_empty() {
        assert!(calc_seasons(&[], &Aliases::new()).is_err());
    }

    #[test]
    fn summarize_basic() {
        let seasons = vec![
            season("2017", &[("A", "9"), ("B", "-"), ("C", "4")]),
            season("2018", &[("A", "2")]),
        ];
        let summaries = summarize(&seasons, &Aliases::new());
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].season, "2017");
        assert_eq!(summaries[0].rows, 3);
        assert_eq!(summaries[0].complete, 1);
        assert_eq!(summaries[0].unparsed_counts, 1);
        assert_eq!(summaries[1].scored_event_count, 2);
    }
}
