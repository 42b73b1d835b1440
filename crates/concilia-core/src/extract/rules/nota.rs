//! DANFE / NFS-e note number extraction.

use super::FieldExtractor;
use super::patterns::{NOTE_PATTERN, NOTE_SEPARATOR};

/// A single note reference: the label spelling as matched and one number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMatch {
    /// Label as it appears in the text (casing preserved).
    pub note_type: String,

    /// One note number out of the digit run.
    pub number: String,
}

/// Note field extractor.
pub struct NoteExtractor;

impl NoteExtractor {
    /// Create a new note extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NoteExtractor {
    type Output = NoteMatch;

    fn extract(&self, text: &str) -> Option<NoteMatch> {
        self.extract_all(text).into_iter().next()
    }

    /// Every (label, number) pair in the text. A run like "DANFE 123/456"
    /// expands into one match per number, all carrying the same label.
    fn extract_all(&self, text: &str) -> Vec<NoteMatch> {
        let mut results = Vec::new();

        for caps in NOTE_PATTERN.captures_iter(text) {
            let note_type = caps[1].to_string();

            for number in NOTE_SEPARATOR.split(&caps[2]) {
                let number = number.trim();
                if number.is_empty() {
                    continue;
                }
                results.push(NoteMatch {
                    note_type: note_type.clone(),
                    number: number.to_string(),
                });
            }
        }

        results
    }
}
