use crate::core::assembler::assemble;
use crate::core::xml::write_corpus;
use crate::core::{Assembly, ConfigProvider, ConversionReport, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};

pub struct CorpusPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CorpusPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CorpusPipeline<S, C> {
    fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Listing text files in {}", self.config.input_dir().display());
        self.storage.list_text_files()
    }

    fn transform(&self, file_names: Vec<String>) -> Result<Assembly> {
        Ok(assemble(&self.storage, &file_names))
    }

    fn load(&self, assembly: &Assembly) -> Result<String> {
        write_corpus(&self.storage, self.config.output_file(), &assembly.corpus)
    }

    fn report(&self, report: &ConversionReport) -> Result<Option<String>> {
        let Some(path) = self.config.report_file() else {
            return Ok(None);
        };
        let report_error = |message: String| ConvertError::ReportError {
            path: path.display().to_string(),
            message,
        };
        let json = serde_json::to_string_pretty(report).map_err(|e| report_error(e.to_string()))?;
        let written = self
            .storage
            .write_file(path, json.as_bytes())
            .map_err(|e| report_error(e.to_string()))?;
        Ok(Some(written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MockStorage;
    use std::path::{Path, PathBuf};

    struct MockConfig {
        input_dir: PathBuf,
        output_file: PathBuf,
        report_file: Option<PathBuf>,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                input_dir: PathBuf::from("."),
                output_file: PathBuf::from("converted.xml"),
                report_file: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_dir(&self) -> &Path {
            &self.input_dir
        }

        fn output_file(&self) -> &Path {
            &self.output_file
        }

        fn report_file(&self) -> Option<&Path> {
            self.report_file.as_deref()
        }
    }

    #[test]
    fn test_extract_lists_text_files_only() {
        let storage = MockStorage::new()
            .with_file("b 1 2 3 4 5.txt", "")
            .with_file("notes.md", "")
            .with_file("a 1 2 3 4 5.txt", "");
        let pipeline = CorpusPipeline::new(storage, MockConfig::new());

        let files = pipeline.extract().unwrap();
        assert_eq!(files, ["a 1 2 3 4 5.txt", "b 1 2 3 4 5.txt"]);
    }

    #[test]
    fn test_load_writes_xml_to_output_file() {
        let storage = MockStorage::new()
            .with_file("2019 UU Svensson swe phd f.txt", "i*main*b*sum*a*post*p");
        let pipeline = CorpusPipeline::new(storage.clone(), MockConfig::new());

        let files = pipeline.extract().unwrap();
        let assembly = pipeline.transform(files).unwrap();
        let written = pipeline.load(&assembly).unwrap();

        assert_eq!(written, "converted.xml");
        let xml = String::from_utf8(storage.get_file("converted.xml").unwrap()).unwrap();
        assert!(xml.contains("<author>Svensson</author>"));
    }

    #[test]
    fn test_report_is_optional() {
        let storage = MockStorage::new();
        let report = ConversionReport {
            files_found: 1,
            swedish_books: 0,
            english_books: 0,
            skipped: vec![],
            unordered_markers: vec![],
            output_path: "converted.xml".to_string(),
        };

        let pipeline = CorpusPipeline::new(storage.clone(), MockConfig::new());
        assert_eq!(pipeline.report(&report).unwrap(), None);

        let mut config = MockConfig::new();
        config.report_file = Some(PathBuf::from("report.json"));
        let pipeline = CorpusPipeline::new(storage.clone(), config);
        assert_eq!(pipeline.report(&report).unwrap().as_deref(), Some("report.json"));

        let json: serde_json::Value =
            serde_json::from_slice(&storage.get_file("report.json").unwrap()).unwrap();
        assert_eq!(json["files_found"], 1);
    }
}
