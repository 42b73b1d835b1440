//! Configuration structures for the reconciliation pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the concilia pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciliaConfig {
    /// Spreadsheet layout configuration.
    pub sheet: SheetConfig,

    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Result workbook configuration.
    pub output: OutputConfig,
}

impl Default for ConciliaConfig {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Column names and header placement of the two exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Banner rows above the RMA header (the Tesouro export carries a
    /// two-row title block).
    pub rma_header_skip: usize,

    /// Supplier document column in the RMA export.
    pub rma_cnpj_column: String,

    /// Free-text observation column in the RMA export.
    pub rma_observation_column: String,

    /// Emission date column in the RMA export.
    pub rma_emission_date_column: String,

    /// Source document column in the RMA export.
    pub rma_source_document_column: String,

    /// CNPJ column in the receivables export.
    pub query_cnpj_column: String,

    /// Note number column in the receivables export.
    pub query_note_column: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            rma_header_skip: 2,
            rma_cnpj_column: "Favorecido Doc.".to_string(),
            rma_observation_column: "Doc - Observação".to_string(),
            rma_emission_date_column: "DH - Dia Emissão".to_string(),
            rma_source_document_column: "Documento Origem".to_string(),
            query_cnpj_column: "cnpj".to_string(),
            query_note_column: "nota_fiscal".to_string(),
        }
    }
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Report supplier CNPJs failing the check-digit test as warnings.
    /// Never changes key normalization or matching.
    pub validate_cnpj: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_cnpj: false,
        }
    }
}

/// Result workbook file names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Annotated disbursement-side result.
    pub rma_result: String,

    /// Annotated receivables-side result.
    pub query_result: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            rma_result: "resultado_rma.xlsx".to_string(),
            query_result: "resultado_query.xlsx".to_string(),
        }
    }
}

impl ConciliaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
