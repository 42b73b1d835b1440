//! Record models flowing through the reconciliation pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the RMA disbursement export, as ingested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisbursementRow {
    /// `DH - Dia Emissão`.
    pub emission_date: String,

    /// `Documento Origem`.
    pub source_document: String,

    /// `Favorecido Doc.` — raw supplier CNPJ, digits and punctuation.
    pub supplier_cnpj: String,

    /// `Doc - Observação` free text; absent when the cell is blank.
    pub observation: Option<String>,
}

/// One (note type, note number, process, related process) tuple extracted
/// from a single observation text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedNote {
    /// Spelling of the note label as matched (DANFE, NFSE, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,

    /// Individual note number after run splitting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<String>,

    /// Legal-process number paired with this note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,

    /// First related-process reference in the text, shared by all tuples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_process: Option<String>,
}

/// Whether a record's key was found in the opposite collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Found,
    NotFound,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found => write!(f, "Foi encontrado"),
            Self::NotFound => write!(f, "Não foi encontrado"),
        }
    }
}

/// A disbursement row joined with one extracted tuple, carrying the
/// normalized CNPJ, the composite key, and (after reconciliation) the
/// match annotation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedRecord {
    pub emission_date: String,
    pub source_document: String,

    /// Raw supplier CNPJ, as exported.
    pub supplier_cnpj: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,

    /// `nota_fiscal` in the result workbook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_process: Option<String>,

    /// Normalized 14-digit CNPJ.
    pub cnpj: String,

    /// Composite join key; absent when no note number was extracted, in
    /// which case the record can never match but stays in the denominator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Set by the reconciler; absent in extraction-only runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
}

/// The receivables query export, kept as a loose table so columns beyond
/// `cnpj` and `nota_fiscal` survive to the result workbook untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceivableTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReceivableTable {
    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Receivables rows after normalization and reconciliation. `keys` and
/// `statuses` run parallel to `table.rows`; the table's CNPJ column holds
/// the normalized value.
#[derive(Debug, Clone)]
pub struct AnnotatedReceivables {
    pub table: ReceivableTable,
    pub keys: Vec<Option<String>>,
    pub statuses: Vec<MatchStatus>,
}
