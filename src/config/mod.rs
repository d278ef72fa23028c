pub mod cli;
pub mod toml_config;

use crate::core::xml::DEFAULT_OUTPUT_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_existing_dir, validate_file_extension, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "thesis-corpus")]
#[command(about = "Converts dissertation text files into a single XML corpus")]
pub struct CliConfig {
    #[arg(long, help = "Directory holding the *.txt files [default: .]")]
    pub input_dir: Option<PathBuf>,

    #[arg(long, help = "Output XML file [default: converted.xml]")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Also write a JSON conversion report to this path")]
    pub report: Option<PathBuf>,

    #[arg(long, help = "Read settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command line flags win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Settings::merge(
            file,
            self.input_dir.clone(),
            self.output.clone(),
            self.report.clone(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub report_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            report_file: None,
        }
    }
}

impl Settings {
    pub fn merge(
        file: TomlConfig,
        input_dir: Option<PathBuf>,
        output_file: Option<PathBuf>,
        report_file: Option<PathBuf>,
    ) -> Self {
        let defaults = Settings::default();
        Self {
            input_dir: input_dir.or(file.input.dir).unwrap_or(defaults.input_dir),
            output_file: output_file.or(file.output.file).unwrap_or(defaults.output_file),
            report_file: report_file.or(file.output.report),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_existing_dir("input_dir", &self.input_dir)?;
        validate_path("output", &self.output_file)?;
        validate_file_extension("output", &self.output_file, "xml")?;
        if let Some(report) = &self.report_file {
            validate_path("report", report)?;
            validate_file_extension("report", report, "json")?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
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
