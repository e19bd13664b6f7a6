pub mod client;
pub mod endpoints;
pub mod models;

use crate::error::AppError;
use models::MatchDto;
use std::collections::BTreeMap;

/// Champion key (numeric string such as `"22"`) to display name.
pub type ChampionTable = BTreeMap<String, String>;

/// The remote calls the winrate pipeline depends on.
///
/// `RiotApiClient` is the real implementation; every call it makes goes
/// through its rate limiter.
pub trait AramSource {
    fn resolve_account_id(&mut self, username: &str) -> Result<String, AppError>;

    /// Game ids of ARAM games in the match history index range `[begin, end)`.
    /// An empty page means the history is exhausted.
    fn list_aram_games(
        &mut self,
        account_id: &str,
        begin: usize,
        end: usize,
    ) -> Result<Vec<i64>, AppError>;

    fn fetch_champion_table(&mut self) -> Result<ChampionTable, AppError>;

    fn fetch_match(&mut self, game_id: i64) -> Result<MatchDto, AppError>;
}
