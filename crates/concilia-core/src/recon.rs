//! Two-way key reconciliation between the derived RMA records and the
//! receivables export.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::records::MatchStatus;

/// Composite join key: normalized CNPJ + `_` + note number.
pub fn join_key(cnpj: &str, note_number: &str) -> String {
    format!("{cnpj}_{note_number}")
}

/// Row counts and found tallies for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconMetrics {
    pub rma_total: usize,
    pub rma_found: usize,
    pub query_total: usize,
    pub query_found: usize,
}

impl ReconMetrics {
    /// Percentage of derived RMA records found in the receivables export.
    pub fn rma_found_pct(&self) -> f64 {
        percentage(self.rma_found, self.rma_total)
    }

    /// Percentage of receivables found among the derived RMA records.
    pub fn query_found_pct(&self) -> f64 {
        percentage(self.query_found, self.query_total)
    }
}

fn percentage(found: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        found as f64 * 100.0 / total as f64
    }
}

/// Per-side annotations produced by [`reconcile_keys`].
#[derive(Debug, Clone)]
pub struct KeyReconciliation {
    pub rma_statuses: Vec<MatchStatus>,
    pub query_statuses: Vec<MatchStatus>,
    pub metrics: ReconMetrics,
}

/// Label every record of each side by membership of its key in the other
/// side's key set. Membership is per key, not per occurrence: duplicate
/// keys count every row they appear in. Keyless records (no note number)
/// never match but stay in the denominator.
pub fn reconcile_keys(
    rma_keys: &[Option<String>],
    query_keys: &[Option<String>],
) -> KeyReconciliation {
    let rma_set: HashSet<&str> = rma_keys.iter().flatten().map(String::as_str).collect();
    let query_set: HashSet<&str> = query_keys.iter().flatten().map(String::as_str).collect();

    let rma_statuses: Vec<MatchStatus> = rma_keys
        .iter()
        .map(|key| membership(key.as_deref(), &query_set))
        .collect();
    let query_statuses: Vec<MatchStatus> = query_keys
        .iter()
        .map(|key| membership(key.as_deref(), &rma_set))
        .collect();

    let metrics = ReconMetrics {
        rma_total: rma_statuses.len(),
        rma_found: count_found(&rma_statuses),
        query_total: query_statuses.len(),
        query_found: count_found(&query_statuses),
    };

    KeyReconciliation {
        rma_statuses,
        query_statuses,
        metrics,
    }
}

fn membership(key: Option<&str>, other: &HashSet<&str>) -> MatchStatus {
    match key {
        Some(key) if other.contains(key) => MatchStatus::Found,
        _ => MatchStatus::NotFound,
    }
}

fn count_found(statuses: &[MatchStatus]) -> usize {
    statuses
        .iter()
        .filter(|s| **s == MatchStatus::Found)
        .count()
}
