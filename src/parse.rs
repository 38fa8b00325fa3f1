use crate::error::{GitsumError, Result};
use crate::model::CommitRecord;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse `git log --pretty=format:%H|%ai|%an --numstat` output into commit
/// records, newest first, in the order the lines appear.
///
/// A line containing at least two `|` characters is a commit header; it is
/// split into exactly three fields (hash, date, author), so an author name
/// containing a single `|` survives intact. An author with two or more `|`
/// characters is indistinguishable from a header under this format; that
/// ambiguity comes from the producer and is not repaired here.
///
/// Malformed numstat lines are skipped silently. A header whose date does not
/// parse fails the whole run with [`GitsumError::InvalidDate`].
pub fn parse_log(raw: &str) -> Result<Vec<CommitRecord>> {
    let mut records = Vec::new();
    let mut current: Option<CommitRecord> = None;

    for (idx, raw_line) in raw.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if line.matches('|').count() >= 2 {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(parse_header(line, idx + 1)?);
        } else if let Some(record) = current.as_mut() {
            apply_stat_line(record, line);
        }
        // numstat lines before the first header are ignored
    }

    if let Some(record) = current.take() {
        records.push(record);
    }
    Ok(records)
}

fn parse_header(line: &str, line_no: usize) -> Result<CommitRecord> {
    let mut fields = line.splitn(3, '|');
    // the `|`-count check guarantees all three fields exist
    let hash = fields.next().unwrap_or_default();
    let date_field = fields.next().unwrap_or_default().trim();
    let author = fields.next().unwrap_or_default();

    let (timestamp, utc_offset) = parse_timestamp(date_field, line_no, line)?;

    Ok(CommitRecord {
        hash: hash.to_string(),
        author: author.to_string(),
        timestamp,
        utc_offset,
        files_changed: 0,
        additions: 0,
        deletions: 0,
    })
}

/// Split a `YYYY-MM-DD HH:MM:SS +HHMM` field at its last space and parse the
/// leading part as a wall-clock datetime. The trailing token is kept verbatim
/// and never applied to the timestamp.
fn parse_timestamp(
    field: &str,
    line_no: usize,
    content: &str,
) -> Result<(NaiveDateTime, Option<String>)> {
    let (datetime, offset) = match field.rsplit_once(' ') {
        Some((head, tail)) => (head, Some(tail.to_string())),
        None => (field, None),
    };

    let timestamp = parse_datetime(datetime).ok_or_else(|| GitsumError::InvalidDate {
        line: line_no,
        content: content.to_string(),
    })?;

    Ok((timestamp, offset))
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok().or_else(|| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    })
}

/// Fold one numstat line into the running record. Lines with fewer than two
/// tab-separated fields, or with a field that is neither an integer nor `-`,
/// are skipped without touching the record.
fn apply_stat_line(record: &mut CommitRecord, line: &str) {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 2 {
        return;
    }
    let (Some(added), Some(deleted)) = (stat_field(fields[0]), stat_field(fields[1])) else {
        return;
    };
    record.files_changed += 1;
    record.additions += added;
    record.deletions += deleted;
}

fn stat_field(field: &str) -> Option<u64> {
    if field == "-" {
        Some(0)
    } else {
        field.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_commit_with_stats() {
        let records =
            parse_log("abc123|2024-03-07 10:00:00 +0000|Alice\n3\t1\tfoo.py\n").unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.hash, "abc123");
        assert_eq!(r.author, "Alice");
        assert_eq!(r.files_changed, 1);
        assert_eq!(r.additions, 3);
        assert_eq!(r.deletions, 1);
        assert_eq!(r.utc_offset.as_deref(), Some("+0000"));
        assert_eq!(r.timestamp.to_string(), "2024-03-07 10:00:00");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_log("").unwrap().is_empty());
        assert!(parse_log("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn consecutive_headers_are_empty_commits() {
        let raw = "aaa|2024-03-07 10:00:00 +0000|Alice\n\
                   bbb|2024-03-06 09:00:00 +0000|Bob\n";
        let records = parse_log(raw).unwrap();
        assert_eq!(records.len(), 2);
        for r in &records {
            assert_eq!(r.files_changed, 0);
            assert_eq!(r.additions, 0);
            assert_eq!(r.deletions, 0);
        }
    }

    #[test]
    fn records_preserve_input_order() {
        let raw = "ccc|2024-03-09 08:00:00 +0000|Carol\n\
                   aaa|2024-03-07 10:00:00 +0000|Alice\n\
                   bbb|2024-03-08 09:00:00 +0000|Bob\n";
        let records = parse_log(raw).unwrap();
        let hashes: Vec<_> = records.iter().map(|r| r.hash.as_str()).collect();
        assert_eq!(hashes, vec!["ccc", "aaa", "bbb"]);
    }

    #[test]
    fn binary_placeholder_counts_file_but_no_lines() {
        let raw = "aaa|2024-03-07 10:00:00 +0000|Alice\n-\t-\tBINARYFILE\n";
        let records = parse_log(raw).unwrap();
        assert_eq!(records[0].files_changed, 1);
        assert_eq!(records[0].additions, 0);
        assert_eq!(records[0].deletions, 0);
    }

    #[test]
    fn single_placeholder_field_contributes_zero_not_a_skip() {
        let raw = "aaa|2024-03-07 10:00:00 +0000|Alice\n-\t3\tweird.dat\n";
        let records = parse_log(raw).unwrap();
        assert_eq!(records[0].files_changed, 1);
        assert_eq!(records[0].additions, 0);
        assert_eq!(records[0].deletions, 3);
    }

    #[test]
    fn malformed_stat_lines_are_skipped() {
        let with_noise = "aaa|2024-03-07 10:00:00 +0000|Alice\n\
                          3\t1\tfoo.py\n\
                          garbage\t1\tbar.py\n\
                          lonelyfield\n\
                          2\toops\tbaz.py\n";
        let without = "aaa|2024-03-07 10:00:00 +0000|Alice\n3\t1\tfoo.py\n";
        let a = parse_log(with_noise).unwrap();
        let b = parse_log(without).unwrap();
        assert_eq!(a[0].files_changed, b[0].files_changed);
        assert_eq!(a[0].additions, b[0].additions);
        assert_eq!(a[0].deletions, b[0].deletions);
    }

    #[test]
    fn blank_lines_do_not_end_a_stat_run() {
        let raw = "aaa|2024-03-07 10:00:00 +0000|Alice\n\
                   3\t1\tfoo.py\n\
                   \n\
                   2\t2\tbar.py\n";
        let records = parse_log(raw).unwrap();
        assert_eq!(records[0].files_changed, 2);
        assert_eq!(records[0].additions, 5);
        assert_eq!(records[0].deletions, 3);
    }

    #[test]
    fn stat_lines_before_any_header_are_ignored() {
        let raw = "3\t1\tfoo.py\naaa|2024-03-07 10:00:00 +0000|Alice\n";
        let records = parse_log(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].files_changed, 0);
    }

    #[test]
    fn author_keeps_trailing_separator() {
        let raw = "aaa|2024-03-07 10:00:00 +0000|Alice|the|great\n";
        let records = parse_log(raw).unwrap();
        assert_eq!(records[0].author, "Alice|the|great");
    }

    #[test]
    fn date_without_offset_parses() {
        let raw = "aaa|2024-03-07|Alice\n";
        let records = parse_log(raw).unwrap();
        assert_eq!(records[0].utc_offset, None);
        assert_eq!(records[0].timestamp.to_string(), "2024-03-07 00:00:00");
    }

    #[test]
    fn broken_date_is_a_structured_error() {
        let raw = "aaa|2024-13-99 10:00:00 +0000|Alice\n";
        match parse_log(raw) {
            Err(GitsumError::InvalidDate { line, content }) => {
                assert_eq!(line, 1);
                assert!(content.contains("2024-13-99"));
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }
}
