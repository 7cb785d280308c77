use std::io;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use memmatch::Session;
use memmatch_core::{Level, ShuffledDeckGenerator};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of the current time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Level to start at, the board is level × level cards
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=5))]
    level: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args
        .seed
        .unwrap_or_else(|| Utc::now().timestamp_micros() as u64);
    log::debug!("seed: {}", seed);

    let level = Level::new(args.level)?;
    let mut session = Session::new(
        io::stdin().lock(),
        io::stdout().lock(),
        ShuffledDeckGenerator::from_seed(seed),
        level,
    );

    Ok(session.run()?.exit_code())
}
