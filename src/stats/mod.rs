pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{aggregate, summarize};
pub use exec::exec;
pub use output::{build_table, output_json, output_ndjson, output_tables};
