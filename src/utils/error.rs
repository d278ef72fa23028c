use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Wrong number of elements in file name, expected 6 or 7 but got {found}: \"{file}\"")]
    FilenameTokens { file: String, found: usize },

    #[error("Could not open file \"{file}\": {source}")]
    UnreadableFile {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Incorrect number of sections (expected 4, got {found}) in \"{file}\"")]
    SectionCount { file: String, found: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML writing failed: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Could not write the report \"{path}\": {message}")]
    ReportError { path: String, message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    File,
    Content,
    Output,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The file is skipped, the batch continues.
    Low,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::FilenameTokens { .. } | ConvertError::UnreadableFile { .. } => {
                ErrorCategory::File
            }
            ConvertError::SectionCount { .. } => ErrorCategory::Content,
            ConvertError::IoError(_)
            | ConvertError::XmlError(_)
            | ConvertError::ReportError { .. } => ErrorCategory::Output,
            ConvertError::TomlError(_) | ConvertError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::File | ErrorCategory::Content => ErrorSeverity::Low,
            // The XML is already on disk when the report fails.
            ErrorCategory::Output if matches!(self, ConvertError::ReportError { .. }) => {
                ErrorSeverity::High
            }
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("Could not save the xml file: {}", e),
            ConvertError::XmlError(e) => format!("Could not build the xml document: {}", e),
            ConvertError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::FilenameTokens { .. } => {
                "Rename the file to 'YEAR UNIVERSITY AUTHOR LANGUAGE DISSTYPE GENDER[ ADDINFO].txt'"
            }
            ConvertError::UnreadableFile { .. } => "Check that the file exists and is readable",
            ConvertError::SectionCount { .. } => {
                "Make sure the text contains *main*, *sum* and *post* exactly once each"
            }
            ConvertError::IoError(_) => {
                "Check write permissions and free space for the output location"
            }
            ConvertError::XmlError(_) => {
                "Re-run with --verbose and inspect the last processed file"
            }
            ConvertError::ReportError { .. } => {
                "The xml file was saved; check the --report path and its permissions"
            }
            ConvertError::TomlError(_) | ConvertError::InvalidConfigValueError { .. } => {
                "Fix the command line arguments or the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
