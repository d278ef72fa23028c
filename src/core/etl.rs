use crate::core::{ConversionReport, Pipeline};
use crate::utils::error::Result;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConversionReport> {
        tracing::info!("Starting conversion...");

        // Extract
        let file_names = self.pipeline.extract()?;
        let files_found = file_names.len();
        tracing::info!("Found {} text files in this folder.", files_found);

        // Transform
        let assembly = self.pipeline.transform(file_names)?;
        tracing::info!(
            "Converted {} swedish and {} english books, skipped {} files",
            assembly.corpus.swedish.len(),
            assembly.corpus.english.len(),
            assembly.skipped.len()
        );

        // Load
        let output_path = self.pipeline.load(&assembly).inspect_err(|e| {
            tracing::error!("Could not save the xml file: {}", e);
        })?;
        tracing::info!("Output saved to: {}", output_path);

        let report = ConversionReport {
            files_found,
            swedish_books: assembly.corpus.swedish.len(),
            english_books: assembly.corpus.english.len(),
            skipped: assembly.skipped,
            unordered_markers: assembly.unordered_markers,
            output_path,
        };

        if let Some(report_path) = self.pipeline.report(&report)? {
            tracing::info!("Report saved to: {}", report_path);
        }

        Ok(report)
    }
}
