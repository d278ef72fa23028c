pub mod assembler;
pub mod decode;
pub mod etl;
pub mod metadata;
pub mod pipeline;
pub mod sanitize;
pub mod sections;
pub mod xml;

pub use crate::domain::model::{Assembly, ConversionReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
