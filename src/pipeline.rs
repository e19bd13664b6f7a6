use crate::analysis::aggregate::aggregate;
use crate::analysis::history::{
    fetch_all_game_ids, fetch_outcomes, DEFAULT_BATCH_SIZE, DEFAULT_MAX_PAGES,
};
use crate::analysis::report::{format_history, Report};
use crate::api::AramSource;
use crate::error::AppError;
use indicatif::ProgressBar;
use log::info;

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Match list page size.
    pub batch_size: usize,
    pub max_pages: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            batch_size: DEFAULT_BATCH_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Per-champion ARAM win rates for `username`.
///
/// `progress` gets its length set to the number of games once the match list
/// is known and is ticked once per fetched match.
pub fn winrate_report<S: AramSource>(
    source: &mut S,
    username: &str,
    options: PipelineOptions,
    progress: &ProgressBar,
) -> Result<Report, AppError> {
    let champions = source.fetch_champion_table()?;
    let account_id = source.resolve_account_id(username)?;

    let game_ids = fetch_all_game_ids(source, &account_id, options.batch_size, options.max_pages)?;
    info!("{} has {} ARAM games", username, game_ids.len());

    progress.set_length(game_ids.len() as u64);
    let outcomes = fetch_outcomes(source, &game_ids, &account_id, &champions, progress)?;

    let totals = aggregate(&outcomes, &champions);
    Ok(format_history(&totals, username))
}

/// Same as [`winrate_report`], serialized as
/// `{champion: {"wins", "games played", "winrate"}}`.
pub fn winrate_json<S: AramSource>(
    source: &mut S,
    username: &str,
    options: PipelineOptions,
) -> Result<String, AppError> {
    winrate_report(source, username, options, &ProgressBar::hidden())?.to_json()
}
