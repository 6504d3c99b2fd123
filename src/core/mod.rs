pub mod engine;
pub mod extract;
pub mod render;
pub mod tokenize;

pub use crate::domain::model::{Extraction, ExtractionReport, FlagKind, PkgConfigFlags};
pub use crate::domain::ports::FlagSource;
pub use crate::utils::error::Result;
