use anyhow::Context;
use clap::Parser;
use thesis_corpus::utils::{logger, validation::Validate};
use thesis_corpus::{CliConfig, ConversionEngine, CorpusPipeline, LocalStorage};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting thesis-corpus");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(settings.input_dir.clone());
    let pipeline = CorpusPipeline::new(storage, settings);
    let engine = ConversionEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            if !report.skipped.is_empty() {
                println!("⚠️  {} files were skipped", report.skipped.len());
            }
            println!("📁 Output saved to: {}", report.output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            Err(e).context("conversion did not complete")
        }
    }
}
