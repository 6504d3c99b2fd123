pub mod source;
pub mod toml_config;

use self::toml_config::TomlConfig;
use crate::core::render::OutputFormat;
use crate::utils::error::{PkgFlagsError, Result};
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

/// 沒有指定前綴時使用：include 路徑、library 路徑、library 名稱
pub const DEFAULT_PREFIXES: [&str; 3] = ["I", "L", "l"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pkgconf-flags")]
#[command(about = "Extract include paths, library paths and library names from pkg-config output")]
pub struct CliConfig {
    /// Flag prefix to extract, without the leading '-' (repeatable, e.g. -p I -p l)
    #[arg(short, long = "prefix", value_delimiter = ',')]
    pub prefixes: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read pkg-config output from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Flags to process; stdin is read when neither flags nor --input are given
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, conflicts_with = "input")]
    pub flags: Vec<String>,

    /// Treat each positional argument as a whole line of pkg-config output
    #[arg(long, requires = "flags")]
    pub split: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    Inline { flags: Vec<String>, split: bool },
    File(PathBuf),
    Stdin,
}

/// 命令列與設定檔合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prefixes: Vec<String>,
    pub format: OutputFormat,
    pub input: InputSpec,
}

/// 命令列給的值優先於設定檔
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub prefixes: Vec<String>,
    pub format: Option<OutputFormat>,
    pub input: Option<PathBuf>,
    pub flags: Vec<String>,
    pub split: bool,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: Option<&TomlConfig>) -> Result<Self> {
        let prefixes = if !overrides.prefixes.is_empty() {
            overrides.prefixes
        } else if let Some(from_file) = file.and_then(TomlConfig::prefixes) {
            from_file.to_vec()
        } else {
            DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect()
        };

        let format = match overrides.format {
            Some(format) => format,
            None => match file {
                Some(config) => config.output_format()?.unwrap_or_default(),
                None => OutputFormat::default(),
            },
        };

        if !overrides.flags.is_empty() && overrides.input.is_some() {
            return Err(PkgFlagsError::ValidationError {
                message: "positional flags and --input cannot be used together".to_string(),
            });
        }

        let input = if !overrides.flags.is_empty() {
            InputSpec::Inline {
                flags: overrides.flags,
                split: overrides.split,
            }
        } else if let Some(path) = overrides.input {
            InputSpec::File(path)
        } else if let Some(path) = file.and_then(TomlConfig::input_path) {
            InputSpec::File(PathBuf::from(path))
        } else {
            InputSpec::Stdin
        };

        let settings = Self {
            prefixes,
            format,
            input,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_prefixes("prefixes", &self.prefixes)?;
        if let InputSpec::File(path) = &self.input {
            validation::validate_path("input", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            prefixes: self.prefixes.clone(),
            format: self.format,
            input: self.input.clone(),
            flags: self.flags.clone(),
            split: self.split,
        }
    }
}
