use crate::aliases::Aliases;
use crate::classify::SeasonSummary;
use crate::input::Season;
use itertools::Itertools;
use log::info;

fn explain_seasons(seasons: &[Season]) -> String {
    seasons
        .iter()
        .map(|s| format!("{} ({} rows)", s.name, s.rows.len()))
        .join(", ")
}

pub fn statistics(seasons: &[Season], aliases: &Aliases) {
    let rows: usize = seasons.iter().map(|s| s.rows.len()).sum();
    info!(target: "doty", "seasons: {}", seasons.len());
    info!(target: "doty", "rows: {}", rows);
    info!(target: "doty", "aliases: {}", aliases.len());
    info!(target: "doty", "tables: {}", explain_seasons(seasons));
}

pub fn post_statistics(summaries: &[SeasonSummary], drivers: usize) {
    let complete: usize = summaries.iter().map(|s| s.complete).sum();
    let unparsed: usize = summaries.iter().map(|s| s.unparsed_counts).sum();
    let unnamed: usize = summaries.iter().map(|s| s.missing_names).sum();
    info!(target: "doty", "distinct drivers: {}", drivers);
    info!(target: "doty", "complete seasons: {}", complete);
    if unparsed > 0 || unnamed > 0 {
        info!(
            target: "doty",
            "rows without event count: {}, without name: {}", unparsed, unnamed
        );
    }
}
