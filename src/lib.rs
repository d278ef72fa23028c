pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, Settings};

pub use core::{etl::ConversionEngine, pipeline::CorpusPipeline};
pub use utils::error::{ConvertError, Result};
