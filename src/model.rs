use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SCHEMA_VERSION: u32 = 1;

/// One commit parsed out of the log, stats already summed over its files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    /// Wall-clock commit time; the UTC offset is kept separately and never
    /// applied to this value.
    pub timestamp: NaiveDateTime,
    pub utc_offset: Option<String>,
    pub files_changed: u32,
    pub additions: u64,
    pub deletions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Day => "Daily",
            Granularity::Week => "Weekly",
            Granularity::Month => "Monthly",
            Granularity::Year => "Yearly",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodBucket {
    pub commit_count: u32,
    pub file_count: u64,
    pub additions: u64,
    pub deletions: u64,
    pub authors: HashSet<String>,
}

impl PeriodBucket {
    pub fn new() -> Self {
        Self {
            commit_count: 0,
            file_count: 0,
            additions: 0,
            deletions: 0,
            authors: HashSet::new(),
        }
    }

    pub fn add_commit(&mut self, record: &CommitRecord) {
        self.commit_count += 1;
        self.file_count += record.files_changed as u64;
        self.additions += record.additions;
        self.deletions += record.deletions;
        self.authors.insert(record.author.clone());
    }
}

impl Default for PeriodBucket {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals across every parsed record, independent of granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_commits: usize,
    pub total_files: u64,
    pub total_additions: u64,
    pub total_deletions: u64,
    pub net_change: i64,
    pub total_authors: usize,
    pub first_commit: Option<NaiveDateTime>,
    pub last_commit: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRow {
    pub period: String,
    pub commit_count: u32,
    pub file_count: u64,
    pub additions: u64,
    pub deletions: u64,
    pub author_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodTable {
    pub granularity: Granularity,
    pub rows: Vec<PeriodRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub since: String,
    pub summary: Summary,
    pub tables: Vec<PeriodTable>,
}
