//! End-to-end reconciliation: ingest, extract, normalize, match, summarize.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::{Result, SheetError};
use crate::extract::ObservationExtractor;
use crate::extract::rules::cnpj::{normalize_cnpj, validate_cnpj};
use crate::models::config::{ConciliaConfig, SheetConfig};
use crate::models::records::{
    AnnotatedReceivables, DisbursementRow, MatchStatus, ReceivableTable, ValidatedRecord,
};
use crate::recon::{ReconMetrics, join_key, reconcile_keys};
use crate::sheet::read::{read_disbursements_bytes, read_receivables_bytes};

/// Everything one reconciliation run produces.
#[derive(Debug)]
pub struct ReconOutcome {
    pub validated: Vec<ValidatedRecord>,
    pub receivables: AnnotatedReceivables,
    pub metrics: ReconMetrics,

    /// Advisory findings (CNPJ check-digit failures); never fatal.
    pub warnings: Vec<String>,
}

/// Reconcile the two exports from file paths.
pub fn reconcile_paths(
    rma: &Path,
    query: &Path,
    config: &ConciliaConfig,
) -> Result<ReconOutcome> {
    let rma_bytes = std::fs::read(rma)?;
    let query_bytes = std::fs::read(query)?;
    reconcile_bytes(&rma_bytes, &query_bytes, config)
}

/// Reconcile the two exports from workbook bytes.
pub fn reconcile_bytes(rma: &[u8], query: &[u8], config: &ConciliaConfig) -> Result<ReconOutcome> {
    let rows = read_disbursements_bytes(rma, &config.sheet)?;
    let table = read_receivables_bytes(query, &config.sheet)?;
    reconcile_tables(rows, table, config)
}

/// Pure pipeline core: ingested collections in, annotated collections and
/// metrics out. No I/O.
pub fn reconcile_tables(
    rows: Vec<DisbursementRow>,
    table: ReceivableTable,
    config: &ConciliaConfig,
) -> Result<ReconOutcome> {
    let mut warnings = Vec::new();
    if config.extraction.validate_cnpj {
        collect_cnpj_warnings(&rows, &mut warnings);
    }

    let mut validated = derive_records(&rows);
    let mut receivables = normalize_receivables(table, &config.sheet)?;

    let rma_keys: Vec<Option<String>> = validated.iter().map(|r| r.key.clone()).collect();
    let recon = reconcile_keys(&rma_keys, &receivables.keys);

    for (record, status) in validated.iter_mut().zip(&recon.rma_statuses) {
        record.status = Some(*status);
    }
    receivables.statuses = recon.query_statuses;

    info!(
        rma_rows = rows.len(),
        derived = validated.len(),
        receivables = receivables.table.rows.len(),
        "reconciliation complete"
    );

    Ok(ReconOutcome {
        validated,
        receivables,
        metrics: recon.metrics,
        warnings,
    })
}

/// Expand every disbursement row into one record per extracted tuple,
/// with the normalized CNPJ and composite key attached. `status` stays
/// unset for extraction-only runs.
pub fn derive_records(rows: &[DisbursementRow]) -> Vec<ValidatedRecord> {
    let extractor = ObservationExtractor::new();

    rows.iter()
        .flat_map(|row| {
            let cnpj = normalize_cnpj(&row.supplier_cnpj);
            extractor
                .extract(row.observation.as_deref())
                .into_iter()
                .map(move |tuple| {
                    let key = tuple
                        .note_number
                        .as_deref()
                        .map(|note| join_key(&cnpj, note));
                    ValidatedRecord {
                        emission_date: row.emission_date.clone(),
                        source_document: row.source_document.clone(),
                        supplier_cnpj: row.supplier_cnpj.clone(),
                        note_type: tuple.note_type,
                        note_number: tuple.note_number,
                        process: tuple.process,
                        related_process: tuple.related_process,
                        cnpj: cnpj.clone(),
                        key,
                        status: None,
                    }
                })
        })
        .collect()
}

fn normalize_receivables(
    mut table: ReceivableTable,
    config: &SheetConfig,
) -> Result<AnnotatedReceivables> {
    let cnpj_idx = table
        .column_index(&config.query_cnpj_column)
        .ok_or_else(|| SheetError::MissingColumn(config.query_cnpj_column.clone()))?;
    let note_idx = table
        .column_index(&config.query_note_column)
        .ok_or_else(|| SheetError::MissingColumn(config.query_note_column.clone()))?;

    let width = table.headers.len();
    let mut keys = Vec::with_capacity(table.rows.len());

    for row in &mut table.rows {
        if row.len() < width {
            row.resize(width, String::new());
        }

        let normalized = normalize_cnpj(&row[cnpj_idx]);
        let note = row[note_idx].trim().to_string();
        keys.push(if note.is_empty() {
            None
        } else {
            Some(join_key(&normalized, &note))
        });
        row[cnpj_idx] = normalized;
    }

    let statuses = vec![MatchStatus::NotFound; table.rows.len()];
    Ok(AnnotatedReceivables {
        table,
        keys,
        statuses,
    })
}

fn collect_cnpj_warnings(rows: &[DisbursementRow], warnings: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for row in rows {
        let raw = row.supplier_cnpj.trim();
        if raw.is_empty() || !seen.insert(raw.to_string()) {
            continue;
        }
        if !validate_cnpj(&normalize_cnpj(raw)) {
            warnings.push(format!("CNPJ failed check-digit validation: {raw}"));
        }
    }
}
