use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const MAIN_MARKER: &str = "*main*";
pub const SUMMARY_MARKER: &str = "*sum*";
pub const POST_MARKER: &str = "*post*";

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}|{}|{}",
        regex::escape(MAIN_MARKER),
        regex::escape(SUMMARY_MARKER),
        regex::escape(POST_MARKER)
    ))
    .expect("marker pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSplit {
    pub pre: String,
    pub main: String,
    pub summary: String,
    pub post: String,
    /// False when the three markers were found in another order than
    /// main, sum, post. The sections are then labelled by position only.
    pub markers_in_order: bool,
}

pub fn split_sections(file_name: &str, text: &str) -> Result<SectionSplit> {
    let parts: Vec<&str> = MARKER_RE.split(text).collect();

    let [pre, main, summary, post] = parts.as_slice() else {
        return Err(ConvertError::SectionCount {
            file: file_name.to_string(),
            found: parts.len(),
        });
    };

    let markers: Vec<&str> = MARKER_RE.find_iter(text).map(|m| m.as_str()).collect();
    let markers_in_order = markers == [MAIN_MARKER, SUMMARY_MARKER, POST_MARKER];

    Ok(SectionSplit {
        pre: pre.to_string(),
        main: main.to_string(),
        summary: summary.to_string(),
        post: post.to_string(),
        markers_in_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_text() {
        let split = split_sections("a.txt", "intro*main*body*sum*abstract*post*appendix").unwrap();
        assert_eq!(split.pre, "intro");
        assert_eq!(split.main, "body");
        assert_eq!(split.summary, "abstract");
        assert_eq!(split.post, "appendix");
        assert!(split.markers_in_order);
    }

    #[test]
    fn test_empty_sections_are_kept() {
        let split = split_sections("a.txt", "*main**sum**post*").unwrap();
        assert_eq!(split.pre, "");
        assert_eq!(split.post, "");
    }

    #[test]
    fn test_missing_marker_is_rejected() {
        match split_sections("b.txt", "intro*main*body*post*appendix") {
            Err(ConvertError::SectionCount { file, found }) => {
                assert_eq!(file, "b.txt");
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_marker_is_rejected() {
        assert!(split_sections("c.txt", "a*main*b*main*c*sum*d*post*e").is_err());
        assert!(split_sections("c.txt", "no markers at all").is_err());
    }

    #[test]
    fn test_out_of_order_markers_are_flagged() {
        let split = split_sections("d.txt", "a*sum*b*main*c*post*d").unwrap();
        assert!(!split.markers_in_order);
        assert_eq!(split.main, "b");
    }

    #[test]
    fn test_ordered_split_rejoins_to_original() {
        let texts = [
            "intro*main*body*sum*abstract*post*appendix",
            "\n*main*\nkapitel 1 * stjärna\n*sum*\nsummary*post*",
            "*main**sum**post*",
        ];
        for text in texts {
            let s = split_sections("e.txt", text).unwrap();
            let rejoined = format!(
                "{}{}{}{}{}{}{}",
                s.pre, MAIN_MARKER, s.main, SUMMARY_MARKER, s.summary, POST_MARKER, s.post
            );
            assert_eq!(rejoined, text);
        }
    }
}
