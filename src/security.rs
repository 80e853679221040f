//! Security Module
//!
//! 入力ファイルを解析する前に適用する制限を提供するモジュール。
//! calamineはワークブック全体をメモリに展開するため、巨大なファイルは解析前に拒否します。

use crate::error::{Result, WordGenError};
use std::path::Path;

/// 入力ファイルの最大サイズのデフォルト値（バイト）
/// 2GB (2_147_483_648 bytes)
pub(crate) const DEFAULT_MAX_INPUT_FILE_SIZE: u64 = 2_147_483_648;

/// セキュリティ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: DEFAULT_MAX_INPUT_FILE_SIZE,
        }
    }
}

impl SecurityConfig {
    /// 入力ファイルが制限内かを検証する
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - ファイルが制限内の場合
    /// * `Err(WordGenError::Io)` - ファイルのメタデータを取得できない場合
    /// * `Err(WordGenError::SecurityViolation)` - サイズ上限を超えている場合
    pub fn check_input_file(&self, path: &Path) -> Result<()> {
        let size = std::fs::metadata(path)?.len();
        self.check_input_size(size)
    }

    /// バイト数が制限内かを検証する
    pub fn check_input_size(&self, size: u64) -> Result<()> {
        if size > self.max_input_file_size {
            return Err(WordGenError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                size, self.max_input_file_size
            )));
        }
        Ok(())
    }
}
