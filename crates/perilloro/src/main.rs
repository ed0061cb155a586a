//! perilloro - slightly modified version of the pomodoro method
//!
//! Usage:
//!   perilloro [OPTIONS]
//!   perilloro -i 4 -s 2 --pi 5      Two sessions of four growing pomodoros
//!   perilloro --dry-run --json      Print the plan only

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use perilloro::cli::Cli;
use perilloro::{Report, Runner, SystemClock};
use perilloro_core::Console;
use perilloro_notify::Notifier;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never break the countdown line
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let plan = cli.plan().context("invalid timer configuration")?;
    let report = Report::new(&plan).with_start(Local::now());

    if cli.dry_run && cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut console = Console::stdout();
    report.render(&mut console)?;
    if cli.dry_run {
        return Ok(());
    }

    let mut runner = Runner::new(Notifier::new(&cli.notifier), SystemClock, console);
    runner.run(&plan).context("timer run failed")?;

    Ok(())
}
