//! Core library for RMA treasury reconciliation.
//!
//! This crate provides:
//! - Spreadsheet ingest for the RMA (Tesouro Nacional) and receivables exports
//! - Note/process extraction from free-text observations (DANFE, NFS-e, processo)
//! - CNPJ normalization and composite-key reconciliation between both sources

pub mod error;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod recon;
pub mod sheet;

pub use error::{ConciliaError, Result, SheetError};
pub use extract::{ObservationExtractor, pair_notes_with_processes};
pub use extract::rules::cnpj::{format_cnpj, normalize_cnpj, validate_cnpj};
pub use models::config::ConciliaConfig;
pub use models::records::{
    AnnotatedReceivables, DisbursementRow, ExtractedNote, MatchStatus, ReceivableTable,
    ValidatedRecord,
};
pub use pipeline::{ReconOutcome, reconcile_bytes, reconcile_paths, reconcile_tables};
pub use recon::{ReconMetrics, join_key};
