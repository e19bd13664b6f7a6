use crate::api::endpoints::ARAM_QUEUE;
use crate::api::models::MatchDto;
use crate::api::{AramSource, ChampionTable};
use crate::error::AppError;
use indicatif::ProgressBar;
use log::{debug, warn};

pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Result of one game from the tracked player's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub won: bool,
    pub champion: String,
}

impl MatchOutcome {
    pub fn new(won: bool, champion: impl Into<String>) -> Self {
        MatchOutcome {
            won,
            champion: champion.into(),
        }
    }
}

/// Pages through the ARAM match list until the API hands back an empty page.
///
/// The match list endpoint signals the end of the history only by returning
/// no games, so `max_pages` bounds the loop in case it never does.
pub fn fetch_all_game_ids<S: AramSource>(
    source: &mut S,
    account_id: &str,
    batch_size: usize,
    max_pages: usize,
) -> Result<Vec<i64>, AppError> {
    let batch_size = batch_size.max(1);
    let mut game_ids = Vec::new();
    let mut begin = 0;

    for _ in 0..max_pages {
        let batch = source.list_aram_games(account_id, begin, begin + batch_size)?;
        debug!("page [{}, {}) returned {} games", begin, begin + batch_size, batch.len());

        if batch.is_empty() {
            return Ok(game_ids);
        }

        game_ids.extend(batch);
        begin += batch_size;
    }

    warn!(
        "match list still returning games after {} pages ({} ids collected)",
        max_pages,
        game_ids.len()
    );
    Err(AppError::PaginationLimit(max_pages))
}

/// Finds the tracked account in `game` and reports whether it won and on
/// which champion.
pub fn extract_outcome(
    game: &MatchDto,
    account_id: &str,
    champions: &ChampionTable,
) -> Result<MatchOutcome, AppError> {
    let not_found = || AppError::ParticipantNotFound {
        game_id: game.game_id,
        account_id: account_id.to_string(),
    };

    let participant_id = game
        .participant_identities
        .iter()
        .find(|identity| identity.player.account_id == account_id)
        .map(|identity| identity.participant_id)
        .ok_or_else(not_found)?;

    let participant = game
        .participants
        .iter()
        .find(|p| p.participant_id == participant_id)
        .ok_or_else(not_found)?;

    let champion = champions
        .get(&participant.champion_id.to_string())
        .ok_or(AppError::UnknownChampion(participant.champion_id))?;

    Ok(MatchOutcome::new(participant.stats.win, champion.clone()))
}

/// Fetches every game in order and extracts the tracked player's outcome.
pub fn fetch_outcomes<S: AramSource>(
    source: &mut S,
    game_ids: &[i64],
    account_id: &str,
    champions: &ChampionTable,
    progress: &ProgressBar,
) -> Result<Vec<MatchOutcome>, AppError> {
    let mut outcomes = Vec::with_capacity(game_ids.len());

    for &game_id in game_ids {
        let game = source.fetch_match(game_id)?;
        if let Some(queue) = game.queue_id.filter(|&q| q != ARAM_QUEUE) {
            warn!("game {} is from queue {}, not ARAM", game_id, queue);
        }
        outcomes.push(extract_outcome(&game, account_id, champions)?);
        progress.inc(1);
    }

    Ok(outcomes)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::models::{
        ParticipantDto, ParticipantIdentityDto, ParticipantStatsDto, PlayerDto,
    };
    use std::collections::HashMap;

    pub(crate) fn champion_table() -> ChampionTable {
        [("22", "Ashe"), ("86", "Garen"), ("99", "Lux")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Builds a match where `players[i]` is (account id, champion id, won).
    pub(crate) fn make_match(game_id: i64, players: &[(&str, i64, bool)]) -> MatchDto {
        MatchDto {
            game_id,
            queue_id: Some(ARAM_QUEUE),
            participant_identities: players
                .iter()
                .enumerate()
                .map(|(i, (account, _, _))| ParticipantIdentityDto {
                    participant_id: i as i32 + 1,
                    player: PlayerDto {
                        account_id: account.to_string(),
                    },
                })
                .collect(),
            // Reversed so lookup by participant id cannot rely on position.
            participants: players
                .iter()
                .enumerate()
                .rev()
                .map(|(i, (_, champion_id, won))| ParticipantDto {
                    participant_id: i as i32 + 1,
                    champion_id: *champion_id,
                    stats: ParticipantStatsDto { win: *won },
                })
                .collect(),
        }
    }

    /// In-memory source serving scripted match list pages and matches.
    pub(crate) struct FakeSource {
        pub pages: Vec<Vec<i64>>,
        pub page_calls: Vec<(usize, usize)>,
        pub matches: HashMap<i64, MatchDto>,
        pub endless: bool,
    }

    impl FakeSource {
        pub(crate) fn new(pages: Vec<Vec<i64>>) -> Self {
            FakeSource {
                pages,
                page_calls: Vec::new(),
                matches: HashMap::new(),
                endless: false,
            }
        }
    }

    impl AramSource for FakeSource {
        fn resolve_account_id(&mut self, username: &str) -> Result<String, AppError> {
            match username {
                "ghost" => Err(AppError::PlayerNotFound(username.to_string())),
                _ => Ok(format!("acct-{}", username)),
            }
        }

        fn list_aram_games(&mut self, _account_id: &str, begin: usize, end: usize) -> Result<Vec<i64>, AppError> {
            self.page_calls.push((begin, end));
            if self.endless {
                return Ok((begin as i64..end as i64).collect());
            }
            Ok(self.pages.get(self.page_calls.len() - 1).cloned().unwrap_or_default())
        }

        fn fetch_champion_table(&mut self) -> Result<ChampionTable, AppError> {
            Ok(champion_table())
        }

        fn fetch_match(&mut self, game_id: i64) -> Result<MatchDto, AppError> {
            self.matches
                .get(&game_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("match {}", game_id)))
        }
    }

    #[test]
    fn test_pagination_stops_on_empty_batch() {
        let mut source = FakeSource::new(vec![(1..=10).collect(), (11..=15).collect(), vec![]]);

        let ids = fetch_all_game_ids(&mut source, "acct", 10, DEFAULT_MAX_PAGES).unwrap();

        assert_eq!(ids, (1..=15).collect::<Vec<i64>>());
        assert_eq!(source.page_calls, vec![(0, 10), (10, 20), (20, 30)]);
    }

    #[test]
    fn test_pagination_empty_history() {
        let mut source = FakeSource::new(vec![vec![]]);
        let ids = fetch_all_game_ids(&mut source, "acct", 10, DEFAULT_MAX_PAGES).unwrap();
        assert!(ids.is_empty());
        assert_eq!(source.page_calls.len(), 1);
    }

    #[test]
    fn test_pagination_cap_on_endless_source() {
        let mut source = FakeSource::new(Vec::new());
        source.endless = true;

        let result = fetch_all_game_ids(&mut source, "acct", 5, 4);

        assert!(matches!(result, Err(AppError::PaginationLimit(4))));
        assert_eq!(source.page_calls.len(), 4);
    }

    #[test]
    fn test_extract_outcome_finds_player() {
        let game = make_match(1, &[("other", 86, false), ("me", 22, true), ("third", 99, true)]);

        let outcome = extract_outcome(&game, "me", &champion_table()).unwrap();

        assert_eq!(outcome, MatchOutcome::new(true, "Ashe"));
    }

    #[test]
    fn test_extract_outcome_missing_account() {
        let game = make_match(7, &[("other", 86, false)]);

        let err = extract_outcome(&game, "me", &champion_table()).unwrap_err();

        match err {
            AppError::ParticipantNotFound { game_id, account_id } => {
                assert_eq!(game_id, 7);
                assert_eq!(account_id, "me");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_extract_outcome_unknown_champion() {
        let game = make_match(1, &[("me", 9999, true)]);
        let err = extract_outcome(&game, "me", &champion_table()).unwrap_err();
        assert!(matches!(err, AppError::UnknownChampion(9999)));
    }

    #[test]
    fn test_fetch_outcomes_in_order() {
        let mut source = FakeSource::new(Vec::new());
        source.matches.insert(1, make_match(1, &[("me", 22, true)]));
        source.matches.insert(2, make_match(2, &[("me", 86, false)]));

        let progress = ProgressBar::hidden();
        let outcomes =
            fetch_outcomes(&mut source, &[2, 1], "me", &champion_table(), &progress).unwrap();

        assert_eq!(
            outcomes,
            vec![MatchOutcome::new(false, "Garen"), MatchOutcome::new(true, "Ashe")]
        );
        assert_eq!(progress.position(), 2);
    }
}
