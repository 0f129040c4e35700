use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use logtop::config::ReportOptions;
use logtop::input;
use logtop::report;
use logtop::report::bucket::Zone;
use logtop::report::render::OutputFormat;

/// Daily top-N request-path reports from flat access-log exports.
#[derive(Parser)]
#[command(name = "logtop", version, about)]
struct Cli {
    /// Access log file to read; use "-" for stdin.
    #[arg(short, long)]
    file: PathBuf,

    /// First UTC calendar day of the report window (YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// Last UTC calendar day of the report window (YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,

    /// Report timezone: jst (UTC+9) or ict (UTC+7).
    #[arg(long, default_value = "jst")]
    tz: Zone,

    /// How many paths to keep per day.
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Output encoding: json or table.
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Logging verbosity level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays machine-readable.
    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log level: {}", cli.log_level))?;
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let options = ReportOptions {
        from: cli.from,
        to: cli.to,
        tz: cli.tz,
        top: cli.top,
    };
    options.validate()?;

    if options.from > options.to {
        tracing::warn!(
            from = %options.from,
            to = %options.to,
            "from is after to; the report will be empty",
        );
    }

    let lines = input::read_lines(&cli.file)?;
    tracing::info!(
        lines = lines.len(),
        from = %options.from,
        to = %options.to,
        tz = options.tz.as_str(),
        top = options.top,
        "aggregating",
    );

    let summaries = report::summarize(&lines, &options);
    tracing::info!(groups = summaries.len(), "report ready");

    println!("{}", report::render::render(&summaries, cli.format)?);

    Ok(())
}
