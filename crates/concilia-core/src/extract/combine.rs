//! Pairing policy between extracted notes and process numbers.

use crate::models::records::ExtractedNote;

use super::rules::nota::NoteMatch;

/// Cross product of notes × processes, every tuple carrying the same
/// related-process value.
///
/// Degenerate shapes still keep the source row alive:
/// - notes but no processes: one tuple per note, process absent;
/// - no notes at all: a single tuple holding only the related process.
pub fn pair_notes_with_processes(
    notes: &[NoteMatch],
    processes: &[String],
    related: Option<&str>,
) -> Vec<ExtractedNote> {
    let related = related.map(str::to_string);

    if notes.is_empty() {
        return vec![ExtractedNote {
            related_process: related,
            ..ExtractedNote::default()
        }];
    }

    if processes.is_empty() {
        return notes
            .iter()
            .map(|note| ExtractedNote {
                note_type: Some(note.note_type.clone()),
                note_number: Some(note.number.clone()),
                process: None,
                related_process: related.clone(),
            })
            .collect();
    }

    notes
        .iter()
        .flat_map(|note| {
            let related = related.clone();
            processes.iter().map(move |process| ExtractedNote {
                note_type: Some(note.note_type.clone()),
                note_number: Some(note.number.clone()),
                process: Some(process.clone()),
                related_process: related.clone(),
            })
        })
        .collect()
}
