//! Observation text extraction: rule set, pairing policy, and the
//! composed extractor.

pub mod combine;
pub mod extractor;
pub mod rules;

pub use combine::pair_notes_with_processes;
pub use extractor::ObservationExtractor;
pub use rules::FieldExtractor;
