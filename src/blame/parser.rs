use tracing::debug;

use super::date::local_dates;
use super::types::{BlameMap, BlameRecord};

/// Fields collected for the line whose metadata block is being read.
#[derive(Default)]
struct PendingLine {
    commit: String,
    author: Option<String>,
    timestamp: Option<i64>,
    subject: Option<String>,
}

impl PendingLine {
    fn finish(self) -> Option<BlameRecord> {
        let author = self.author.filter(|a| !a.is_empty())?;
        let timestamp = self.timestamp?;
        let (date, short_date) = local_dates(timestamp);
        Some(BlameRecord {
            author,
            commit: self.commit,
            timestamp,
            date,
            short_date,
            subject: self.subject.unwrap_or_default(),
        })
    }
}

/// Parse `git blame --line-porcelain` output into a line-number keyed map.
///
/// Every line of porcelain output carries a full metadata block:
/// ```text
/// <40-char sha> <orig_line> <final_line> [<num_lines>]
/// author <name>
/// author-mail <<email>>
/// author-time <epoch>
/// author-tz <tz>
/// committer <name>
/// committer-mail <<email>>
/// committer-time <epoch>
/// committer-tz <tz>
/// summary <text>
/// filename <path>
/// \t<line content>
/// ```
///
/// The tab-prefixed content line closes the block. Blocks without both an
/// author and a committer time are skipped, but still consume a line number.
pub fn parse_line_porcelain(raw: &[u8]) -> BlameMap {
    let input = String::from_utf8_lossy(raw);

    let mut records = BlameMap::new();
    let mut line_number: u32 = 1;
    let mut pending = PendingLine::default();

    for line in input.lines() {
        if line.starts_with('\t') {
            let finished = std::mem::take(&mut pending);
            match finished.finish() {
                Some(record) => {
                    records.entry(line_number).or_insert(record);
                }
                None => debug!(line = line_number, "Skipping line with incomplete blame metadata"),
            }
            line_number += 1;
            continue;
        }

        if let Some(val) = line.strip_prefix("author ") {
            pending.author = Some(val.to_string());
        } else if let Some(val) = line.strip_prefix("committer-time ") {
            pending.timestamp = val.trim().parse().ok();
        } else if let Some(val) = line.strip_prefix("summary ") {
            pending.subject = Some(val.to_string());
        } else if is_sha_header(line) {
            if let Some(sha) = line.split_whitespace().next() {
                pending.commit = sha.to_string();
            }
        }
    }

    records
}

/// Check if a line looks like a blame SHA header.
///
/// A SHA header line starts with 40 hex characters followed by at least two
/// space-separated numbers (orig_line and final_line).
fn is_sha_header(line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return false;
    }

    let sha_candidate = parts[0];
    if sha_candidate.len() != 40 || !sha_candidate.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    parts[1].parse::<u32>().is_ok() && parts[2].parse::<u32>().is_ok()
}
