pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::source::{FileSource, InlineSource, StdinSource};
pub use config::{InputSpec, Overrides, Settings};
pub use core::{
    engine::ExtractionEngine, extract::extract_pkg_config_items, render::OutputFormat,
    tokenize::split_flags,
};
pub use domain::model::{Extraction, ExtractionReport, FlagKind, PkgConfigFlags};
pub use utils::error::{PkgFlagsError, Result};
