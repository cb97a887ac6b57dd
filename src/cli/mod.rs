use crate::calendar::Period;
use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::diary::DateKey;
use crate::errors::DiaryError;
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};

/// A one-entry-a-day diary that tracks how your days felt
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Diary owner (overrides EMODIARY_USER)
    #[clap(short = 'u', long, global = true)]
    pub user: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(
        long,
        global = true,
        default_value = LOG_FORMAT_TEXT,
        value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON]
    )]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Writes (or rewrites) the entry for a day and classifies its emotion
    Write(WriteArgs),
    /// Prints the entry for a day
    Show(DateArgs),
    /// Prints a month with the emotion of each day
    Calendar(PeriodArgs),
    /// Prints the emotion statistics of a month
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct DateArgs {
    /// Day of the entry (format: YYYY-MM-DD or YYYYMMDD); defaults to today
    #[clap(short = 'd', long)]
    pub date: Option<String>,
}

impl DateArgs {
    /// Resolves the requested day, falling back to `today`.
    pub fn date_key(&self, today: NaiveDate) -> Result<DateKey, DiaryError> {
        match self.date.as_deref() {
            Some(date) => DateKey::parse(date),
            None => Ok(DateKey::new(today)),
        }
    }
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    #[clap(flatten)]
    pub date: DateArgs,

    /// Entry text; read from stdin when omitted
    #[clap(short = 't', long)]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct PeriodArgs {
    /// Year; defaults to the current year
    #[clap(short = 'y', long)]
    pub year: Option<i32>,

    /// Month from 1 to 12; defaults to the current month
    #[clap(short = 'm', long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

impl PeriodArgs {
    /// Resolves the requested month, taking missing parts from `today`.
    ///
    /// The month given on the command line is one-based; the returned period is
    /// zero-based like the rest of the crate.
    pub fn period(&self, today: NaiveDate) -> Result<Period, DiaryError> {
        let year = self.year.unwrap_or_else(|| today.year());
        let month = match self.month {
            Some(month) => month.checked_sub(1).ok_or(DiaryError::InvalidMonth(month))?,
            None => today.month0(),
        };
        Period::new(year, month)
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[clap(flatten)]
    pub period: PeriodArgs,

    /// Print machine-readable JSON instead of a summary
    #[clap(long)]
    pub json: bool,
}
