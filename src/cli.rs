use crate::model::Granularity;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitsum")]
#[command(about = "Summarize git history activity by day, week, and month")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, default_value = "1 year ago", help = "Passed through to git log --since")]
    pub since: String,

    #[arg(long, value_enum, default_value = "all", help = "Period to group by")]
    pub period: Period,

    #[arg(long, default_value_t = 20, help = "Number of top periods to show per table")]
    pub top: usize,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl Period {
    pub fn granularities(self) -> Vec<Granularity> {
        match self {
            Period::Day => vec![Granularity::Day],
            Period::Week => vec![Granularity::Week],
            Period::Month => vec![Granularity::Month],
            Period::Year => vec![Granularity::Year],
            Period::All => vec![Granularity::Day, Granularity::Week, Granularity::Month],
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::stats::exec(self)
    }
}
