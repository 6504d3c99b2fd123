use crate::domain::model::ExtractionReport;
use crate::utils::error::{PkgFlagsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Lines,
    Shell,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["lines", "shell", "json"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Shell => "shell",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PkgFlagsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lines" => Ok(OutputFormat::Lines),
            "shell" => Ok(OutputFormat::Shell),
            "json" => Ok(OutputFormat::Json),
            other => Err(PkgFlagsError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::NAMES.join(", ")
                ),
            }),
        }
    }
}

pub fn render(report: &ExtractionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Lines => Ok(render_lines(report)),
        OutputFormat::Shell => Ok(render_shell(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_lines(report: &ExtractionReport) -> String {
    let grouped = report.extractions.len() > 1;
    let mut out = String::new();

    for extraction in &report.extractions {
        if grouped {
            out.push_str("# -");
            out.push_str(&extraction.prefix);
            out.push('\n');
        }
        for value in &extraction.values {
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}

fn render_shell(report: &ExtractionReport) -> String {
    let mut out = String::new();

    for extraction in &report.extractions {
        let line: Vec<String> = extraction.values.iter().map(|v| shell_escape(v)).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// 與 `split_flags` 相反：空白與反斜線前加上反斜線
fn shell_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c.is_ascii_whitespace() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
