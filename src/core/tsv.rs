//! Tab-separated glossary entry codec
//!
//! DeepL transports glossary entries as one `source<TAB>target` pair per line.
//! The format defines no escaping, so entries must not contain tabs or
//! newlines themselves.

use crate::core::errors::MalformedEntry;
use crate::core::models::GlossaryEntry;

/// Encode entries as newline-joined `source\ttarget` lines, in order
pub fn encode_entries(entries: &[GlossaryEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\t{}", entry.source, entry.target))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode TSV text into entries.
///
/// Blank lines are skipped. Any other line must split into exactly two
/// fields; the first one that doesn't aborts the whole decode.
pub fn decode_entries(tsv: &str) -> Result<Vec<GlossaryEntry>, MalformedEntry> {
    let mut entries = Vec::new();

    for (index, line) in tsv.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(source), Some(target), None) => {
                entries.push(GlossaryEntry::new(source, target));
            }
            _ => {
                return Err(MalformedEntry {
                    line_number: index + 1,
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(entries)
}
