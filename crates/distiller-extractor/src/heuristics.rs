//! Post-processing heuristics over extracted records
//!
//! Stages run in a fixed order:
//! 1. [`remove_toc`] drops records from the front matter pages
//! 2. [`handle_keyword_duplicates`] keeps the first key of repeated values
//! 3. [`strip_if_first_match`] removes a leading copy of the key from values
//!
//! Stages 2 and 3 repeat until the finding data stops changing, because
//! stripping can turn two distinct values into equal ones. Only finding data
//! is touched; CAP data needs no heuristics.

use crate::config::HeuristicConfig;
use crate::text::strip_prefix_ignore_case;
use distiller_domain::{AuditRecord, FieldMap, FieldValue};
use std::collections::HashSet;
use tracing::debug;

/// Apply all heuristics to a document's records
pub fn apply_all_heuristics(records: Vec<AuditRecord>, config: &HeuristicConfig) -> Vec<AuditRecord> {
    if !config.enabled {
        return records;
    }

    let mut records = remove_toc(records, config.toc_page_cutoff);
    for record in &mut records {
        let mut passes = 0;
        loop {
            passes += 1;
            let deduplicated = handle_keyword_duplicates(&mut record.finding_data);
            let stripped = strip_if_first_match(&mut record.finding_data);
            if !(deduplicated || stripped) {
                break;
            }
        }
        if passes > 2 {
            debug!("Finding data for {} settled after {} passes", record.audit, passes);
        }
    }
    records
}

/// Drop records on page `cutoff` or earlier (table of contents)
pub fn remove_toc(records: Vec<AuditRecord>, cutoff: u32) -> Vec<AuditRecord> {
    let before = records.len();
    let kept: Vec<AuditRecord> = records
        .into_iter()
        .filter(|r| r.page_number > cutoff)
        .collect();
    if kept.len() < before {
        debug!("Removed {} table of contents record(s)", before - kept.len());
    }
    kept
}

/// Keep only the first key for each distinct value
///
/// Keywords are sometimes combined ("Condition, Context, Effect: ...") and
/// every one of them is tagged with the same sentence. Returns whether
/// anything was removed.
pub fn handle_keyword_duplicates(data: &mut FieldMap) -> bool {
    let before = data.len();
    let mut seen: HashSet<FieldValue> = HashSet::new();
    data.retain(|_, value| seen.insert(value.clone()));
    data.len() != before
}

/// Strip the key from the start of its value, with an optional colon and
/// leading spaces
///
/// Returns whether any value changed.
pub fn strip_if_first_match(data: &mut FieldMap) -> bool {
    let mut changed = false;
    for (key, value) in data.values_mut() {
        if key.is_empty() {
            continue;
        }
        let FieldValue::Text(text) = value else {
            continue;
        };
        if let Some(stripped) = strip_key(text, key) {
            *text = stripped;
            changed = true;
        }
    }
    changed
}

fn strip_key(text: &str, key: &str) -> Option<String> {
    let mut rest = strip_prefix_ignore_case(text, key)?;
    loop {
        rest = rest.strip_prefix(':').unwrap_or(rest);
        rest = rest.trim_start_matches(' ');
        match strip_prefix_ignore_case(rest, key) {
            Some(again) => rest = again,
            None => return Some(rest.to_string()),
        }
    }
}
