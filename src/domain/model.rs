use crate::core::extract::extract_pkg_config_items;
use serde::{Deserialize, Serialize};

/// pkg-config 輸出中常見的旗標類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagKind {
    IncludePath,
    LibraryPath,
    Library,
    Define,
}

impl FlagKind {
    pub const ALL: [FlagKind; 4] = [
        FlagKind::IncludePath,
        FlagKind::LibraryPath,
        FlagKind::Library,
        FlagKind::Define,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            FlagKind::IncludePath => "I",
            FlagKind::LibraryPath => "L",
            FlagKind::Library => "l",
            FlagKind::Define => "D",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.prefix() == prefix)
    }
}

/// 依類別分好的旗標內容 (已去除 `-I`、`-L` 等前綴)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkgConfigFlags {
    pub include_paths: Vec<String>,
    pub library_paths: Vec<String>,
    pub libraries: Vec<String>,
    pub defines: Vec<String>,
}

impl PkgConfigFlags {
    pub fn from_flags<S: AsRef<str>>(items: &[S]) -> Self {
        Self {
            include_paths: extract_pkg_config_items(items, FlagKind::IncludePath.prefix()),
            library_paths: extract_pkg_config_items(items, FlagKind::LibraryPath.prefix()),
            libraries: extract_pkg_config_items(items, FlagKind::Library.prefix()),
            defines: extract_pkg_config_items(items, FlagKind::Define.prefix()),
        }
    }

    pub fn values(&self, kind: FlagKind) -> &[String] {
        match kind {
            FlagKind::IncludePath => &self.include_paths,
            FlagKind::LibraryPath => &self.library_paths,
            FlagKind::Library => &self.libraries,
            FlagKind::Define => &self.defines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub prefix: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub flag_count: usize,
    pub extractions: Vec<Extraction>,
}

impl ExtractionReport {
    pub fn values_for(&self, prefix: &str) -> Option<&[String]> {
        self.extractions
            .iter()
            .find(|e| e.prefix == prefix)
            .map(|e| e.values.as_slice())
    }
}
