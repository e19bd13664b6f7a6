use anyhow::Context;
use aram_winrate::analysis::history::DEFAULT_BATCH_SIZE;
use aram_winrate::api::client::RiotApiClient;
use aram_winrate::config::Config;
use aram_winrate::display::output::{display_error, display_info, display_report, display_success};
use aram_winrate::pipeline::{self, PipelineOptions};
use aram_winrate::rate_limit::{RateLimitRule, RateLimiter};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aram_winrate", version)]
#[command(about = "Per-champion ARAM win rates from a player's match history", long_about = None)]
struct Args {
    /// Summoner name
    username: String,

    /// Platform region (default: RIOT_REGION or na1)
    #[arg(short, long)]
    region: Option<String>,

    /// Directory for <username>.csv (default: ARAM_OUTPUT_DIR or ../data)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Match list page size
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", Args::command().render_usage());
            println!("Only NA is supported by default; use --region for other platforms");
            std::process::exit(0);
        }
    };

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    let output_dir = config.output_dir.clone();
    let quiet = args.json;

    if !quiet {
        display_info(&format!(
            "Fetching ARAM history for {} in region {}",
            args.username, config.region
        ));
    }

    let rate_limiter = RateLimiter::new(RateLimitRule::riot_defaults())?;
    let mut client = RiotApiClient::new(config, rate_limiter);

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} matches") {
            pb.set_style(style);
        }
        pb
    };

    let options = PipelineOptions {
        batch_size: args.batch_size,
        ..Default::default()
    };
    let report = pipeline::winrate_report(&mut client, &args.username, options, &progress)
        .with_context(|| format!("Failed to build ARAM report for {}", args.username))?;
    progress.finish_and_clear();

    let path = report
        .write_csv_file(&output_dir)
        .context("Failed to write CSV report")?;

    if quiet {
        println!("{}", report.to_json()?);
    } else {
        display_success(&format!("Wrote {}", path.display()));
        display_report(&report);
    }

    Ok(())
}
