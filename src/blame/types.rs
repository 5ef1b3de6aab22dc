use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribution for a single source line from `git blame --line-porcelain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlameRecord {
    pub author: String,
    pub commit: String,
    pub timestamp: i64,
    pub date: String,
    pub short_date: String,
    pub subject: String,
}

/// Blame records keyed by 1-based line number. Lines without complete
/// attribution are absent.
pub type BlameMap = BTreeMap<u32, BlameRecord>;
