//! Regex patterns for RMA observation extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Accepted note-label spellings, as regex fragments. Matching is
/// case-insensitive; new spellings go here, not into the composed
/// patterns below.
pub const NOTE_TYPE_PREFIXES: &[&str] = &[
    "DANFES{0,2}", // DANFE, DANFES, DANFESS
    "DANDES?",     // DANDE, DANDES
    "DAFES?",      // DAFE, DAFES
    "NFS[ES]?",    // NFS, NFSE, NFSS
];

/// Brazilian legal-process number: at least 5 digits, optional period, at
/// least 6 digits, `/`, 4 digits, `-`, 2 digits.
const PROCESS_TOKEN: &str = r"\d{5,}\.?\d{6,}/\d{4}-\d{2}";

lazy_static! {
    /// Note label, optional punctuation, then a run of digit groups
    /// separated by `/`, `,` or `E`.
    pub static ref NOTE_PATTERN: Regex = Regex::new(&format!(
        r"(?i)({})\.?.*?\s*-?\s*((?:\d+\s*(?:/|,|E)?\s*)+)",
        NOTE_TYPE_PREFIXES.join("|"),
    ))
    .unwrap();

    /// Separator between individual note numbers inside one run.
    pub static ref NOTE_SEPARATOR: Regex = Regex::new(r"(?i)\s*(?:/|,|E)\s*").unwrap();

    /// "PROCESSO 12345.123456/2024-01", also the PROC abbreviation.
    pub static ref PROCESS_PATTERN: Regex = Regex::new(&format!(
        r"(?i)(?:PROCESSO|PROC)\.?\s*({})",
        PROCESS_TOKEN,
    ))
    .unwrap();

    /// "PROCESSO RELACIONADO 12345.123456/2024-01".
    pub static ref RELATED_PROCESS_PATTERN: Regex = Regex::new(&format!(
        r"(?i)(?:PROCESSO|PROC)\.?\s*RELACIONADO\s*({})",
        PROCESS_TOKEN,
    ))
    .unwrap();
}
