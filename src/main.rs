/*!
# Emodiary - An Emotion Diary

Emodiary keeps one diary entry per day, classifies how each day felt, and
summarizes months as calendars and emotion statistics.

## Usage

```text
emodiary [OPTIONS] <COMMAND>

Commands:
  write     Writes (or rewrites) the entry for a day and classifies its emotion
  show      Prints the entry for a day
  calendar  Prints a month with the emotion of each day
  stats     Prints the emotion statistics of a month

Options:
  -u, --user <USER>              Diary owner (overrides EMODIARY_USER)
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
```

## Configuration

- `EMODIARY_DIR`: Data directory (defaults to "~/.local/share/emodiary")
- `EMODIARY_BACKEND`: `sqlite` (default) or `file`
- `EMODIARY_USER`: Diary owner (defaults to `USER`, then "default")
*/

use chrono::Local;
use clap::Parser;
use emodiary::cli::{CliArgs, Command};
use emodiary::config::Config;
use emodiary::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use emodiary::errors::AppResult;
use emodiary::ops;
use std::io;
use std::process;
use tracing::{debug, error, info_span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Installs the global subscriber. Logs go to stderr; stdout carries command output.
fn init_tracing(verbose: bool, log_format: &str) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if log_format == LOG_FORMAT_JSON {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

fn main() {
    let args = CliArgs::parse();
    init_tracing(args.verbose, &args.log_format);

    let correlation_id = Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    if let Err(e) = run(args) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    // Obtain the current date once so a command never straddles midnight
    let today = Local::now().date_naive();

    let config = Config::load_with_user(args.user.as_deref())?;
    config.validate()?;

    let store = ops::open_store(&config)?;
    let user = &config.user_id;
    debug!(user = %user, backend = %config.backend, "Running command");

    let output = match args.command {
        Command::Write(write) => {
            let date_key = write.date.date_key(today)?;
            let content = ops::read_content(write.text, io::stdin().lock())?;
            ops::write_entry(&store, user, date_key, &content)?
        }
        Command::Show(show) => {
            let date_key = show.date_key(today)?;
            ops::show_entry(&store, user, &date_key)
        }
        Command::Calendar(calendar) => {
            let period = calendar.period(today)?;
            ops::show_calendar(&store, user, period, today)
        }
        Command::Stats(stats) => {
            let period = stats.period.period(today)?;
            ops::show_stats(&store, user, period, stats.json)?
        }
    };

    println!("{}", output);
    Ok(())
}
