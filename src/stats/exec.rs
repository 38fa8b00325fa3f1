use super::{output_json, output_ndjson, output_tables, summarize};
use crate::cli::Cli;
use crate::git::GitRepo;
use crate::model::PeriodTable;
use crate::parse::parse_log;
use anyhow::Context;

pub fn exec(args: Cli) -> anyhow::Result<()> {
    let repo = GitRepo::open(args.repo.as_ref()).context("Failed to open git repository")?;

    // keep machine-readable output free of spinner noise
    let machine_output = args.json || args.ndjson;
    let raw = repo
        .log_numstat(&args.since, !machine_output)
        .context("Failed to read git history")?;

    let records = parse_log(&raw).context("Failed to parse git log output")?;

    let summary = summarize(&records);
    let tables: Vec<PeriodTable> = args
        .period
        .granularities()
        .into_iter()
        .map(|granularity| super::output::build_table(&records, granularity, args.top))
        .collect();

    if args.json {
        output_json(&summary, &tables, &repo, &args)?;
    } else if args.ndjson {
        output_ndjson(&tables)?;
    } else {
        output_tables(&summary, &tables, &args)?;
    }

    Ok(())
}
