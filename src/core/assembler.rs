use crate::core::decode::decode_text;
use crate::core::metadata::parse_file_name;
use crate::core::sanitize::sanitize;
use crate::core::sections::{split_sections, SectionSplit};
use crate::domain::model::{
    Assembly, BookEntry, Corpus, Section, SectionSet, SkippedFile, SourceLanguage,
};
use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};

/// Builds the corpus from the given input files. Bad files are logged and
/// skipped; the pass itself never fails.
pub fn assemble<S: Storage>(storage: &S, file_names: &[String]) -> Assembly {
    let mut names: Vec<&String> = file_names.iter().collect();
    names.sort();

    let mut swedish = Vec::new();
    let mut english = Vec::new();
    let mut skipped = Vec::new();
    let mut unordered_markers = Vec::new();

    for name in names {
        match build_entry(storage, name) {
            Ok((entry, split_in_order)) => {
                if !split_in_order {
                    tracing::warn!(
                        "Markers in \"{}\" are not in *main*, *sum*, *post* order; sections are labelled by position",
                        name
                    );
                    unordered_markers.push(name.clone());
                }
                match entry.metadata.source_language() {
                    SourceLanguage::Swedish => swedish.push(entry),
                    SourceLanguage::Other => english.push(entry),
                }
            }
            Err(e) => {
                tracing::warn!("{}, so the file was skipped", e);
                tracing::debug!("💡 {}", e.recovery_suggestion());
                skipped.push(SkippedFile {
                    file: name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Assembly {
        corpus: Corpus { swedish, english },
        skipped,
        unordered_markers,
    }
}

fn build_entry<S: Storage>(storage: &S, name: &str) -> Result<(BookEntry, bool)> {
    let metadata = parse_file_name(name)?;

    let bytes = storage
        .read_file(name)
        .map_err(|e| ConvertError::UnreadableFile {
            file: name.to_string(),
            source: match e {
                ConvertError::IoError(io) => io,
                other => std::io::Error::other(other.to_string()),
            },
        })?;

    let text = decode_text(&bytes);
    let text = sanitize(&text);
    let split = split_sections(name, &text)?;
    let in_order = split.markers_in_order;

    let sections = tag_sections(split, metadata.source_language());
    tracing::debug!(
        "Parsed \"{}\" ({} {} {})",
        name,
        metadata.year,
        metadata.institution,
        metadata.language
    );

    Ok((
        BookEntry {
            id: name.to_string(),
            metadata,
            sections,
        },
        in_order,
    ))
}

fn tag_sections(split: SectionSplit, language: SourceLanguage) -> SectionSet {
    let [pre, main, summary, post] = language.section_tags();
    SectionSet {
        pre: Section { text: split.pre, lang: pre },
        main: Section { text: split.main, lang: main },
        summary: Section { text: split.summary, lang: summary },
        post: Section { text: split.post, lang: post },
    }
}
