use crate::domain::model::{Assembly, ConversionReport};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Names of the `*.txt` files available as input, sorted.
    fn list_text_files(&self) -> Result<Vec<String>>;
    fn read_file(&self, name: &str) -> Result<Vec<u8>>;
    /// Returns the location the data ended up at.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_dir(&self) -> &Path;
    fn output_file(&self) -> &Path;
    fn report_file(&self) -> Option<&Path>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, file_names: Vec<String>) -> Result<Assembly>;
    fn load(&self, assembly: &Assembly) -> Result<String>;
    fn report(&self, report: &ConversionReport) -> Result<Option<String>>;
}
