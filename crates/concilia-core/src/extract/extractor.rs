//! Observation text extractor combining the rule set.

use tracing::debug;

use crate::models::records::ExtractedNote;

use super::combine::pair_notes_with_processes;
use super::rules::FieldExtractor;
use super::rules::nota::NoteExtractor;
use super::rules::processo::{extract_processes, extract_related_process};

/// Extractor for one observation string.
pub struct ObservationExtractor {
    notes: NoteExtractor,
}

impl ObservationExtractor {
    /// Create a new observation extractor.
    pub fn new() -> Self {
        Self {
            notes: NoteExtractor::new(),
        }
    }

    /// All tuples encoded by one observation. Absent or blank text yields
    /// a single all-absent tuple so the source row is never dropped.
    pub fn extract(&self, text: Option<&str>) -> Vec<ExtractedNote> {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return vec![ExtractedNote::default()];
        };

        let notes = self.notes.extract_all(text);
        let processes = extract_processes(text);
        let related = extract_related_process(text);

        debug!(
            notes = notes.len(),
            processes = processes.len(),
            related = related.is_some(),
            "extracted observation"
        );

        pair_notes_with_processes(&notes, &processes, related.as_deref())
    }
}

impl Default for ObservationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<ExtractedNote> {
        ObservationExtractor::new().extract(Some(text))
    }

    #[test]
    fn test_absent_text_yields_one_empty_tuple() {
        let tuples = ObservationExtractor::new().extract(None);
        assert_eq!(tuples, vec![ExtractedNote::default()]);

        let tuples = ObservationExtractor::new().extract(Some("   "));
        assert_eq!(tuples, vec![ExtractedNote::default()]);
    }

    #[test]
    fn test_unrecognizable_text_yields_one_empty_tuple() {
        let tuples = extract("pagamento de bolsa, folha de julho");
        assert_eq!(tuples, vec![ExtractedNote::default()]);
    }

    #[test]
    fn test_compound_note_with_process() {
        let tuples = extract("DANFE 123/456 - PROCESSO 12345.123456/2024-01");

        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples[0].note_type.as_deref(), Some("DANFE"));
        assert_eq!(tuples[0].note_number.as_deref(), Some("123"));
        assert_eq!(tuples[0].process.as_deref(), Some("12345.123456/2024-01"));
        assert_eq!(tuples[0].related_process, None);
        assert_eq!(tuples[1].note_number.as_deref(), Some("456"));
        assert_eq!(tuples[1].process.as_deref(), Some("12345.123456/2024-01"));
    }

    #[test]
    fn test_cross_product_of_notes_and_processes() {
        let tuples = extract(
            "NFSE 10, 11 - PROCESSO 11111.222222/2024-01 e \
             PROCESSO 33333.444444/2024-02",
        );

        assert_eq!(tuples.len(), 4);
        let pairs: Vec<(&str, &str)> = tuples
            .iter()
            .map(|t| {
                (
                    t.note_number.as_deref().unwrap(),
                    t.process.as_deref().unwrap(),
                )
            })
            .collect();
        assert!(pairs.contains(&("10", "11111.222222/2024-01")));
        assert!(pairs.contains(&("10", "33333.444444/2024-02")));
        assert!(pairs.contains(&("11", "11111.222222/2024-01")));
        assert!(pairs.contains(&("11", "33333.444444/2024-02")));
    }

    #[test]
    fn test_related_only_text() {
        let tuples = extract("PROCESSO RELACIONADO 33333.444444/2023-05");

        assert_eq!(tuples.len(), 1);
        assert!(tuples[0].note_number.is_none());
        assert!(tuples[0].process.is_none());
        assert_eq!(
            tuples[0].related_process.as_deref(),
            Some("33333.444444/2023-05")
        );
    }

    #[test]
    fn test_note_without_process_is_kept() {
        let tuples = extract("DAFE 908");

        assert_eq!(tuples.len(), 1);
        assert_eq!(tuples[0].note_type.as_deref(), Some("DAFE"));
        assert_eq!(tuples[0].note_number.as_deref(), Some("908"));
        assert!(tuples[0].process.is_none());
    }
}
