//! Public API Types
//!
//! 変換処理の結果として呼び出し元に返す型を定義するモジュール。

use std::path::PathBuf;

/// 解析に失敗してスキップされた入力ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// 入力ファイルのパス
    pub path: PathBuf,

    /// エラー内容（ログ出力と同じ文言）
    pub message: String,
}

/// 1回の実行の集計結果
///
/// `Converter::run()`が出力ファイルの書き込みに成功した場合に返されます。
/// ファイル単位のエラーは`failures`に記録され、実行自体は成功扱いです。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 探索で見つかった入力ファイル数
    pub files_found: usize,

    /// 正常に変換できたファイル数
    pub files_converted: usize,

    /// スキップされたファイル
    pub failures: Vec<FileFailure>,

    /// 出力した単語エントリ数
    pub entries_written: usize,

    /// 書き込んだ出力ファイルのパス
    pub output_path: PathBuf,
}

impl RunSummary {
    /// すべての入力ファイルを変換できたかどうか
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
