use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangTag {
    Sv,
    En,
}

impl LangTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LangTag::Sv => "sv",
            LangTag::En => "en",
        }
    }
}

/// Language tag taken from the file name; decides the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    Swedish,
    Other,
}

impl SourceLanguage {
    pub fn from_token(token: &str) -> Self {
        if token == "swe" {
            SourceLanguage::Swedish
        } else {
            SourceLanguage::Other
        }
    }

    /// Tags for pre, main, summary and post, in that order.
    pub fn section_tags(&self) -> [LangTag; 4] {
        match self {
            SourceLanguage::Swedish => [LangTag::Sv, LangTag::Sv, LangTag::En, LangTag::En],
            SourceLanguage::Other => [LangTag::En, LangTag::En, LangTag::Sv, LangTag::En],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMetadata {
    pub year: String,
    pub institution: String,
    pub author: String,
    pub language: String,
    pub dissertation_type: String,
    pub gender: String,
    pub extra_info: Option<String>,
}

impl BookMetadata {
    pub fn source_language(&self) -> SourceLanguage {
        SourceLanguage::from_token(&self.language)
    }

    /// Fields in file name order.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = vec![
            self.year.as_str(),
            self.institution.as_str(),
            self.author.as_str(),
            self.language.as_str(),
            self.dissertation_type.as_str(),
            self.gender.as_str(),
        ];
        if let Some(extra) = &self.extra_info {
            tokens.push(extra.as_str());
        }
        tokens
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub text: String,
    pub lang: LangTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSet {
    pub pre: Section,
    pub main: Section,
    pub summary: Section,
    pub post: Section,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    /// Original file name, extension included.
    pub id: String,
    pub metadata: BookMetadata,
    pub sections: SectionSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub swedish: Vec<BookEntry>,
    pub english: Vec<BookEntry>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.swedish.len() + self.english.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Result of one assembly pass.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub corpus: Corpus,
    pub skipped: Vec<SkippedFile>,
    /// Files accepted although their markers were not in main, sum, post order.
    pub unordered_markers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub files_found: usize,
    pub swedish_books: usize,
    pub english_books: usize,
    pub skipped: Vec<SkippedFile>,
    pub unordered_markers: Vec<String>,
    pub output_path: String,
}
