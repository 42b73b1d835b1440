//! Workbook ingest and export.

pub mod read;
pub mod write;

pub use read::{
    read_disbursements, read_disbursements_bytes, read_receivables, read_receivables_bytes,
};
pub use write::{
    receivables_to_bytes, validated_to_bytes, write_receivables, write_validated,
    VALIDATED_HEADERS,
};
