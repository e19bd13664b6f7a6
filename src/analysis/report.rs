use super::aggregate::{win_rate, ChampionAggregate};
use crate::error::AppError;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const OVERALL: &str = "overall";

/// One line of the report. Field names match the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub champion: String,
    pub wins: u32,
    #[serde(rename = "games played")]
    pub games_played: u32,
    #[serde(rename = "winrate")]
    pub win_rate: f64,
}

impl ReportRow {
    fn new(champion: impl Into<String>, wins: u32, games_played: u32) -> Self {
        ReportRow {
            champion: champion.into(),
            wins,
            games_played,
            win_rate: win_rate(wins, games_played),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub username: String,
    /// Sorted by games played, most first. Includes the `overall` row.
    pub rows: Vec<ReportRow>,
}

/// Builds the per-champion report plus an `overall` row, sorted by games
/// played (descending, stable).
pub fn format_history(aggregate: &ChampionAggregate, username: &str) -> Report {
    let mut rows = Vec::with_capacity(aggregate.len() + 1);
    let (mut total_wins, mut total_games) = (0, 0);

    for (champion, entry) in aggregate {
        rows.push(ReportRow::new(champion.as_str(), entry.wins, entry.games_played));
        total_wins += entry.wins;
        total_games += entry.games_played;
    }

    rows.push(ReportRow::new(OVERALL, total_wins, total_games));
    rows.sort_by(|a, b| b.games_played.cmp(&a.games_played));

    Report {
        username: username.to_string(),
        rows,
    }
}

/// `<username>.csv`, with path separators replaced so the file stays in its
/// directory.
pub fn csv_file_name(username: &str) -> String {
    let stem: String = username
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}.csv", stem)
}

impl Report {
    pub fn overall(&self) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.champion == OVERALL)
    }

    pub fn champions(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.champion != OVERALL)
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), AppError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)
                .map_err(|e| AppError::CsvError(e.to_string()))?;
        }
        wtr.flush().map_err(|e| AppError::IoError(e.to_string()))
    }

    /// Writes `<username>.csv` into `dir`, creating the directory if needed.
    pub fn write_csv_file(&self, dir: &Path) -> Result<PathBuf, AppError> {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let path = dir.join(csv_file_name(&self.username));
        let file = fs::File::create(&path).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
        })?;

        self.write_csv(file)?;
        Ok(path)
    }

    /// `{champion: {"wins", "games played", "winrate"}}` in report order.
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.rows
            .iter()
            .map(|row| {
                (
                    row.champion.clone(),
                    json!({
                        "wins": row.wins,
                        "games played": row.games_played,
                        "winrate": row.win_rate,
                    }),
                )
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(&self.to_json_map())
            .map_err(|e| AppError::JsonError(format!("Failed to serialize report: {}", e)))
    }
}
