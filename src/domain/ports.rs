use crate::utils::error::Result;

/// 提供 pkg-config 旗標的來源 (命令列參數、檔案或 stdin)
pub trait FlagSource: Send + Sync {
    fn read_flags(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}
