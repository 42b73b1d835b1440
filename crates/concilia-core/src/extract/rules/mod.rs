//! Rule-based field extractors for RMA observation text.

pub mod cnpj;
pub mod nota;
pub mod patterns;
pub mod processo;

pub use cnpj::{format_cnpj, normalize_cnpj, validate_cnpj};
pub use nota::{NoteExtractor, NoteMatch};
pub use processo::{
    ProcessExtractor, RelatedProcessExtractor, extract_processes, extract_related_process,
};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
