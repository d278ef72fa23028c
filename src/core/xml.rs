use crate::domain::model::{BookEntry, Corpus, Section};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

pub const DEFAULT_OUTPUT_FILE: &str = "converted.xml";

type XmlWriter = Writer<Vec<u8>>;

/// Renders the corpus as an indented UTF-8 document.
pub fn render_corpus(corpus: &Corpus) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("corpora")))?;
    write_bucket(&mut writer, "swedishcorpus", &corpus.swedish)?;
    write_bucket(&mut writer, "englishcorpus", &corpus.english)?;
    writer.write_event(Event::End(BytesEnd::new("corpora")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Renders and writes the corpus, overwriting whatever is at `path`.
pub fn write_corpus<S: Storage>(storage: &S, path: &Path, corpus: &Corpus) -> Result<String> {
    let bytes = render_corpus(corpus)?;
    tracing::debug!("Writing {} bytes of XML", bytes.len());
    storage.write_file(path, &bytes)
}

fn write_bucket(writer: &mut XmlWriter, name: &str, books: &[BookEntry]) -> Result<()> {
    if books.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(name)))?;
    for book in books {
        write_book(writer, book)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_book(writer: &mut XmlWriter, book: &BookEntry) -> Result<()> {
    let meta = &book.metadata;

    writer.write_event(Event::Start(BytesStart::new("book")))?;
    write_text(writer, BytesStart::new("id"), &book.id)?;
    write_text(writer, BytesStart::new("year"), &meta.year)?;
    write_text(writer, BytesStart::new("uni"), &meta.institution)?;
    write_text(writer, BytesStart::new("author"), &meta.author)?;
    write_text(writer, BytesStart::new("language"), &meta.language)?;
    write_text(writer, BytesStart::new("disstype"), &meta.dissertation_type)?;
    write_text(writer, BytesStart::new("gender"), &meta.gender)?;
    if let Some(extra) = &meta.extra_info {
        write_text(writer, BytesStart::new("addinfo"), extra)?;
    }

    let sections = &book.sections;
    write_section(writer, "pre_text", &sections.pre)?;
    write_section(writer, "main_text", &sections.main)?;
    write_section(writer, "sum_text", &sections.summary)?;
    write_section(writer, "post_text", &sections.post)?;
    writer.write_event(Event::End(BytesEnd::new("book")))?;
    Ok(())
}

fn write_section(writer: &mut XmlWriter, name: &str, section: &Section) -> Result<()> {
    let mut start = BytesStart::new(name);
    start.push_attribute(("lang", section.lang.as_str()));
    write_text(writer, start, &section.text)
}

fn write_text(writer: &mut XmlWriter, start: BytesStart<'_>, text: &str) -> Result<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    // Quotes stay literal in text nodes; only <, > and & are escaped.
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BookMetadata, LangTag, SectionSet};

    fn section(text: &str, lang: LangTag) -> Section {
        Section {
            text: text.to_string(),
            lang,
        }
    }

    fn book(extra_info: Option<&str>) -> BookEntry {
        BookEntry {
            id: "2019 UU Svensson swe phd f.txt".to_string(),
            metadata: BookMetadata {
                year: "2019".to_string(),
                institution: "UU".to_string(),
                author: "Svensson".to_string(),
                language: "swe".to_string(),
                dissertation_type: "phd".to_string(),
                gender: "f".to_string(),
                extra_info: extra_info.map(str::to_string),
            },
            sections: SectionSet {
                pre: section("intro", LangTag::Sv),
                main: section("body", LangTag::Sv),
                summary: section("abstract", LangTag::En),
                post: section("appendix", LangTag::En),
            },
        }
    }

    fn render(corpus: &Corpus) -> String {
        String::from_utf8(render_corpus(corpus).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_corpus() {
        let xml = render(&Corpus::default());
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<corpora>\n <swedishcorpus/>\n <englishcorpus/>\n</corpora>\n"
        );
    }

    #[test]
    fn test_book_layout() {
        let corpus = Corpus {
            swedish: vec![book(None)],
            english: vec![],
        };
        let xml = render(&corpus);

        assert!(xml.contains(
            "  <book>\n   <id>2019 UU Svensson swe phd f.txt</id>\n   <year>2019</year>\n   <uni>UU</uni>\n"
        ));
        assert!(xml.contains("<disstype>phd</disstype>\n   <gender>f</gender>\n   <pre_text lang=\"sv\">intro</pre_text>"));
        assert!(xml.contains("<sum_text lang=\"en\">abstract</sum_text>"));
        assert!(xml.contains("<post_text lang=\"en\">appendix</post_text>\n  </book>"));
        assert!(!xml.contains("addinfo"));
        assert!(xml.contains("<englishcorpus/>"));
    }

    #[test]
    fn test_addinfo_follows_gender() {
        let corpus = Corpus {
            swedish: vec![],
            english: vec![book(Some("reprint"))],
        };
        let xml = render(&corpus);
        assert!(xml.contains("<gender>f</gender>\n   <addinfo>reprint</addinfo>\n   <pre_text"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut entry = book(None);
        entry.sections.main.text = "a < b & c&#1;".to_string();
        let corpus = Corpus {
            swedish: vec![entry],
            english: vec![],
        };
        let xml = render(&corpus);
        assert!(xml.contains("<main_text lang=\"sv\">a &lt; b &amp; c&amp;#1;</main_text>"));
    }

    #[test]
    fn test_quotes_stay_literal_in_text() {
        let mut entry = book(None);
        entry.metadata.author = "O'Neil".to_string();
        entry.sections.post.text = "say \"hi\" it's".to_string();
        let corpus = Corpus {
            swedish: vec![entry],
            english: vec![],
        };
        let xml = render(&corpus);
        assert!(xml.contains("<author>O'Neil</author>"));
        assert!(xml.contains("<post_text lang=\"en\">say \"hi\" it's</post_text>"));
        assert!(!xml.contains("&apos;"));
        assert!(!xml.contains("&quot;"));
    }
}
