//! Parsing and scanning of range responses (`SUFFIX:COUNT` per line).

use super::BreachStatus;

/// Length of a hash suffix in a range record.
pub const SUFFIX_LEN: usize = 35;

/// One `SUFFIX:COUNT` line of a range response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRecord<'a> {
    pub suffix: &'a str,
    pub count: u64,
}

/// Parses a single record. Returns `None` for anything malformed.
pub fn parse_record(line: &str) -> Option<RangeRecord<'_>> {
    let (suffix, count) = line.trim().split_once(':')?;
    let suffix = suffix.trim();
    if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let count = count.trim().parse::<u64>().ok()?;
    Some(RangeRecord { suffix, count })
}

/// Scans a range body for `suffix`, ignoring ASCII case.
///
/// Malformed lines are skipped and the scan continues. The first matching
/// record wins.
pub fn find_suffix_count(body: &str, suffix: &str) -> Option<u64> {
    for line in body.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(record) if record.suffix.eq_ignore_ascii_case(suffix) => {
                return Some(record.count);
            }
            Some(_) => {}
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("skipping malformed range record");
            }
        }
    }
    None
}

/// Turns a range body into a lookup result for `suffix`.
pub fn status_for_suffix(body: &str, suffix: &str) -> BreachStatus {
    find_suffix_count(body, suffix)
        .map(BreachStatus::from_count)
        .unwrap_or(BreachStatus::NotFound)
}
