use super::aggregate::aggregate;
use crate::cli::Cli;
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{
    CommitRecord, Granularity, PeriodRow, PeriodTable, StatsOutput, Summary, SCHEMA_VERSION,
};
use chrono::Utc;
use console::style;
use serde::Serialize;

/// Turn the aggregator's bucket map into display rows: sorted descending by
/// period key (most recent first) and cut to the top `n` periods.
pub fn build_table(records: &[CommitRecord], granularity: Granularity, top: usize) -> PeriodTable {
    let buckets = aggregate(records, granularity);
    let mut rows: Vec<PeriodRow> = buckets
        .into_iter()
        .map(|(period, bucket)| PeriodRow {
            period,
            commit_count: bucket.commit_count,
            file_count: bucket.file_count,
            additions: bucket.additions,
            deletions: bucket.deletions,
            author_count: bucket.authors.len(),
        })
        .collect();
    rows.sort_by(|a, b| b.period.cmp(&a.period));
    rows.truncate(top);
    PeriodTable { granularity, rows }
}

pub fn output_json(
    summary: &Summary,
    tables: &[PeriodTable],
    repo: &GitRepo,
    args: &Cli,
) -> Result<()> {
    let output = StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        since: args.since.clone(),
        summary: summary.clone(),
        tables: tables.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[derive(Serialize)]
struct NdjsonRow<'a> {
    granularity: Granularity,
    #[serde(flatten)]
    row: &'a PeriodRow,
}

pub fn output_ndjson(tables: &[PeriodTable]) -> Result<()> {
    for table in tables {
        for row in &table.rows {
            let line = NdjsonRow {
                granularity: table.granularity,
                row,
            };
            println!("{}", serde_json::to_string(&line)?);
        }
    }
    Ok(())
}

pub fn output_tables(summary: &Summary, tables: &[PeriodTable], args: &Cli) -> Result<()> {
    if summary.total_commits == 0 {
        println!("No commits found (since: {}).", args.since);
        return Ok(());
    }

    print_summary(summary);
    for table in tables {
        print_table(table);
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("{}", style("Overall Summary").bold());
    println!("{}", "─".repeat(66));

    if let (Some(first), Some(last)) = (summary.first_commit, summary.last_commit) {
        println!(
            "Date range:      {} to {}",
            style(first.format("%Y-%m-%d")).dim(),
            style(last.format("%Y-%m-%d")).dim()
        );
    }
    println!("Total commits:   {}", style(summary.total_commits).cyan());
    println!("Total files:     {}", style(summary.total_files).cyan());
    println!("Total additions: {}", style(summary.total_additions).green());
    println!("Total deletions: {}", style(summary.total_deletions).red());
    println!("Net change:      {:+}", summary.net_change);
    println!("Total authors:   {}", style(summary.total_authors).yellow());
}

fn print_table(table: &PeriodTable) {
    println!(
        "\n{} {}",
        style(table.granularity.label()).bold(),
        style(format!("(top {}, most recent first)", table.rows.len())).dim()
    );
    println!(
        "{:<12} {:>8} {:>8} {:>10} {:>10} {:>8}",
        style("Period").bold(),
        style("Commits").bold(),
        style("Files").bold(),
        style("+Lines").bold(),
        style("-Lines").bold(),
        style("Authors").bold()
    );
    println!("{}", "─".repeat(66));
    for row in &table.rows {
        println!(
            "{:<12} {:>8} {:>8} {:>10} {:>10} {:>8}",
            row.period,
            row.commit_count,
            row.file_count,
            row.additions,
            row.deletions,
            row.author_count
        );
    }
}
