use crate::analysis::report::Report;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct WinrateRow {
    champion: String,
    wins: String,
    #[tabled(rename = "games played")]
    games_played: String,
    #[tabled(rename = "winrate")]
    win_rate: String,
}

pub fn display_report(report: &Report) {
    println!(
        "\n{}",
        format!("🎲 ARAM Win Rates for {} ", report.username)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if let Some(overall) = report.overall() {
        println!(
            "{} {} W / {} games ({:.1}% WR)\n",
            "📈 Overall:".bold(),
            overall.wins.to_string().green(),
            overall.games_played,
            overall.win_rate
        );
    }

    // Unplayed champions only pad the terminal table; the CSV keeps them.
    let rows: Vec<WinrateRow> = report
        .champions()
        .filter(|row| row.games_played > 0)
        .map(|row| {
            let rate = format!("{:.1}%", row.win_rate);
            WinrateRow {
                champion: row.champion.clone(),
                wins: row.wins.to_string(),
                games_played: row.games_played.to_string(),
                win_rate: if row.win_rate >= 50.0 {
                    rate.green().to_string()
                } else {
                    rate.red().to_string()
                },
            }
        })
        .collect();

    if rows.is_empty() {
        println!("{}", "No ARAM games found for this player".yellow());
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
