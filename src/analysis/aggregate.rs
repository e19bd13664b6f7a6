use super::history::MatchOutcome;
use crate::api::ChampionTable;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateEntry {
    pub wins: u32,
    pub games_played: u32,
}

impl AggregateEntry {
    pub fn new(wins: u32, games_played: u32) -> Self {
        AggregateEntry { wins, games_played }
    }

    pub fn record(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Percentage of games won, rounded to one decimal. Zero games gives 0.0.
    pub fn win_rate(&self) -> f64 {
        win_rate(self.wins, self.games_played)
    }
}

pub fn win_rate(wins: u32, games_played: u32) -> f64 {
    let rate = 100.0 * f64::from(wins) / f64::from(games_played.max(1));
    (rate * 10.0).round() / 10.0
}

/// Champion name to wins/games, keyed by name.
pub type ChampionAggregate = BTreeMap<String, AggregateEntry>;

/// Tallies outcomes per champion. Every champion in `champions` appears in
/// the result, even with zero games.
pub fn aggregate(outcomes: &[MatchOutcome], champions: &ChampionTable) -> ChampionAggregate {
    let mut totals: ChampionAggregate = champions
        .values()
        .map(|name| (name.clone(), AggregateEntry::default()))
        .collect();

    for outcome in outcomes {
        totals
            .entry(outcome.champion.clone())
            .or_default()
            .record(outcome.won);
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::history::tests::champion_table;

    fn outcomes() -> Vec<MatchOutcome> {
        vec![
            MatchOutcome::new(true, "Ashe"),
            MatchOutcome::new(false, "Ashe"),
            MatchOutcome::new(true, "Garen"),
            MatchOutcome::new(true, "Ashe"),
            MatchOutcome::new(false, "Garen"),
        ]
    }

    #[test]
    fn test_counts_wins_and_games() {
        let totals = aggregate(&outcomes(), &champion_table());

        assert_eq!(totals["Ashe"], AggregateEntry::new(2, 3));
        assert_eq!(totals["Garen"], AggregateEntry::new(1, 2));
    }

    #[test]
    fn test_seeds_unplayed_champions() {
        let totals = aggregate(&[], &champion_table());

        assert_eq!(totals.len(), 3);
        assert_eq!(totals["Lux"], AggregateEntry::default());
    }

    #[test]
    fn test_order_independent() {
        let forward = outcomes();
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(2);

        let table = champion_table();
        let expected = aggregate(&forward, &table);
        assert_eq!(aggregate(&reversed, &table), expected);
        assert_eq!(aggregate(&rotated, &table), expected);
    }

    #[test]
    fn test_champion_missing_from_table_is_added() {
        let totals = aggregate(&[MatchOutcome::new(true, "Zoe")], &champion_table());
        assert_eq!(totals["Zoe"], AggregateEntry::new(1, 1));
    }

    #[test]
    fn test_win_rate_rounding() {
        assert_eq!(AggregateEntry::new(4, 6).win_rate(), 66.7);
        assert_eq!(AggregateEntry::new(1, 3).win_rate(), 33.3);
        assert_eq!(AggregateEntry::new(0, 0).win_rate(), 0.0);
        assert_eq!(AggregateEntry::new(5, 5).win_rate(), 100.0);
    }
}
