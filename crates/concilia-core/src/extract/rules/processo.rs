//! Legal-process number extraction (PROCESSO / PROCESSO RELACIONADO).

use super::FieldExtractor;
use super::patterns::{PROCESS_PATTERN, RELATED_PROCESS_PATTERN};

/// Process number extractor.
pub struct ProcessExtractor;

impl ProcessExtractor {
    /// Create a new process extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ProcessExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        PROCESS_PATTERN
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Related-process extractor. Only the first reference in the text is
/// meaningful; `extract_all` exists to satisfy the trait.
pub struct RelatedProcessExtractor;

impl RelatedProcessExtractor {
    /// Create a new related-process extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RelatedProcessExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RelatedProcessExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        RELATED_PROCESS_PATTERN
            .captures(text)
            .map(|caps| caps[1].to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        RELATED_PROCESS_PATTERN
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Extract every process number from text.
pub fn extract_processes(text: &str) -> Vec<String> {
    ProcessExtractor::new().extract_all(text)
}

/// Extract the first related-process number from text.
pub fn extract_related_process(text: &str) -> Option<String> {
    RelatedProcessExtractor::new().extract(text)
}
