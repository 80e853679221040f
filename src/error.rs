//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// palabras-genクレート全体で使用するエラー型
///
/// スプレッドシートの探索、解析、JSON出力の各段階で発生するエラーを
/// 統一的に扱います。
///
/// # エラーの種類
///
/// - ファイル単位で回復可能なもの: `Io`, `Parse`, `EmptyWorkbook`, `SecurityViolation`
///   （該当ファイルをスキップして処理を継続）
/// - 実行全体を失敗させるもの: `Output`, `Json`, `Config`, `Glob`
#[derive(Error, Debug)]
pub enum WordGenError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー（calamine由来）
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// JSONシリアライズ中に発生したエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// ワークブックにシートが1枚も含まれていない
    #[error("Workbook has no sheets: {0}")]
    EmptyWorkbook(String),

    /// 入力ファイルがセキュリティ制限（サイズ上限など）に違反した
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に無効な設定が検出された場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// ファイル探索用のglobパターンが不正
    #[error("Invalid file pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// 出力ディレクトリの作成、または出力ファイルの書き込みに失敗した
    ///
    /// このエラーは致命的であり、実行全体の失敗として呼び出し元に返されます。
    #[error("Failed to write output '{}': {source}", path.display())]
    Output {
        /// 書き込み先のパス
        path: PathBuf,
        /// 原因となったI/Oエラー
        #[source]
        source: std::io::Error,
    },
}

/// クレート内で使用する`Result`のエイリアス
pub type Result<T> = std::result::Result<T, WordGenError>;
