use std::process;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use log::error;

use crate::display::{category_table, print_summary};
use crate::equity::{EnumerationConfig, Matchup};
use crate::error::HuResult;

/// Exact heads-up equity: every 5-card board over the 48 unseen cards.
#[derive(Debug, Parser)]
#[command(name = "hue", version, about)]
pub struct Cli {
    /// Your first card, e.g. AS
    pub p1_card1: String,
    /// Your second card
    pub p1_card2: String,
    /// Opponent's first card
    pub p2_card1: String,
    /// Opponent's second card
    pub p2_card2: String,

    /// Worker threads (defaults to one per core)
    #[arg(long, short, value_parser = clap::value_parser!(u16).range(1..=512))]
    pub threads: Option<u16>,

    /// Enumerate on the calling thread only
    #[arg(long, conflicts_with = "threads")]
    pub sequential: bool,

    /// Stop after this many milliseconds and report a partial result
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    /// Show how often each hand category was made
    #[arg(long, short)]
    pub breakdown: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> EnumerationConfig {
        EnumerationConfig {
            threads: self.threads.map(usize::from),
            deadline: self.deadline_ms.map(Duration::from_millis),
            parallel: !self.sequential,
            ..Default::default()
        }
    }
}

pub fn run() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = execute(&cli) {
        error!("{e}");
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

pub fn execute(cli: &Cli) -> HuResult<()> {
    let matchup = Matchup::parse(
        &[&cli.p1_card1, &cli.p1_card2],
        &[&cli.p2_card1, &cli.p2_card2],
    )?;
    let result = matchup.evaluate(&cli.config())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_summary(&result);
    if cli.breakdown {
        println!("{}", category_table(&result));
    }
    Ok(())
}
