use crate::model::{CommitRecord, Granularity, PeriodBucket, Summary};
use crate::util::period_key;
use std::collections::{HashMap, HashSet};

/// Bucket records by calendar period. A single pass; sums and author-set
/// union are commutative, so input order does not matter.
pub fn aggregate(
    records: &[CommitRecord],
    granularity: Granularity,
) -> HashMap<String, PeriodBucket> {
    let mut buckets: HashMap<String, PeriodBucket> = HashMap::new();

    for record in records {
        let key = period_key(&record.timestamp, granularity);
        buckets.entry(key).or_default().add_commit(record);
    }

    buckets
}

/// Overall totals across all records. Records arrive newest first, so the
/// last record carries the earliest date.
pub fn summarize(records: &[CommitRecord]) -> Summary {
    let total_files: u64 = records.iter().map(|r| r.files_changed as u64).sum();
    let total_additions: u64 = records.iter().map(|r| r.additions).sum();
    let total_deletions: u64 = records.iter().map(|r| r.deletions).sum();
    let authors: HashSet<&str> = records.iter().map(|r| r.author.as_str()).collect();

    Summary {
        total_commits: records.len(),
        total_files,
        total_additions,
        total_deletions,
        net_change: total_additions as i64 - total_deletions as i64,
        total_authors: authors.len(),
        first_commit: records.last().map(|r| r.timestamp),
        last_commit: records.first().map(|r| r.timestamp),
    }
}
