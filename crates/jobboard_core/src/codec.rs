use std::collections::HashSet;

use board_logging::board_warn;

use crate::JobApplicationEntry;

pub(crate) fn encode(entries: &[JobApplicationEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Parses a persisted cart list. Blank input is an empty list.
pub(crate) fn decode(raw: &str) -> Result<Vec<JobApplicationEntry>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<JobApplicationEntry> = serde_json::from_str(raw)?;
    Ok(sanitize(entries))
}

/// Drops rows that would break the cart invariants: blank title or company,
/// and repeats of an earlier id or (title, company) pair.
fn sanitize(entries: Vec<JobApplicationEntry>) -> Vec<JobApplicationEntry> {
    let mut ids = HashSet::new();
    let mut pairs = HashSet::new();
    let mut kept = Vec::with_capacity(entries.len());

    for mut entry in entries {
        entry.title = entry.title.trim().to_string();
        entry.company = entry.company.trim().to_string();
        if entry.title.is_empty() || entry.company.is_empty() {
            board_warn!("Dropping persisted cart entry {} with blank fields", entry.id);
            continue;
        }
        if !ids.insert(entry.id) {
            board_warn!("Dropping persisted cart entry with repeated id {}", entry.id);
            continue;
        }
        if !pairs.insert((entry.title.clone(), entry.company.clone())) {
            board_warn!(
                "Dropping duplicate persisted cart entry {:?} at {:?}",
                entry.title,
                entry.company
            );
            continue;
        }
        kept.push(entry);
    }
    kept
}
