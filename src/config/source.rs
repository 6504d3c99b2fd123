use crate::core::tokenize::split_flags;
use crate::core::FlagSource;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::Mutex;

/// 直接給定的旗標；預設原樣使用 (shell 已經切好)
#[derive(Debug, Clone)]
pub struct InlineSource {
    flags: Vec<String>,
    split: bool,
}

impl InlineSource {
    pub fn new(flags: Vec<String>) -> Self {
        Self {
            flags,
            split: false,
        }
    }

    /// 每個參數都當成一整行 pkg-config 輸出再切一次
    pub fn splitting(flags: Vec<String>) -> Self {
        Self { flags, split: true }
    }
}

impl FlagSource for InlineSource {
    async fn read_flags(&self) -> Result<Vec<String>> {
        if self.split {
            Ok(self.flags.iter().flat_map(|arg| split_flags(arg)).collect())
        } else {
            Ok(self.flags.clone())
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FlagSource for FileSource {
    async fn read_flags(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading flags from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(split_flags(&content))
    }
}

/// 讀到 EOF 再切分；預設讀 stdin，測試可換成記憶體中的 reader
#[derive(Debug)]
pub struct StdinSource<R = tokio::io::Stdin> {
    reader: Mutex<R>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self::from_reader(tokio::io::stdin())
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncRead + Unpin + Send> StdinSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

impl<R: AsyncRead + Unpin + Send> FlagSource for StdinSource<R> {
    async fn read_flags(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading flags from stdin");
        let mut content = String::new();
        self.reader.lock().await.read_to_string(&mut content).await?;
        Ok(split_flags(&content))
    }
}
