//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use crate::api::{FileFailure, RunSummary};
use crate::discovery::discover_spreadsheets;
use crate::error::{Result, WordGenError};
use crate::output::write_json;
use crate::parser::WorkbookParser;
use crate::records::entries_from_table;
use crate::security::SecurityConfig;
use crate::types::{WordEntry, WORD_COLUMN};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 入力ディレクトリのデフォルト（クレートのルートからの相対パス）
const DEFAULT_INPUT_DIR: &str = "data/raw";

/// 出力ファイルのデフォルト（クレートのルートからの相対パス）
const DEFAULT_OUTPUT_PATH: &str = "public/assets/palabras.json";

/// デフォルトの入力ディレクトリ（`<crate>/data/raw`）
pub fn default_input_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_INPUT_DIR)
}

/// デフォルトの出力ファイル（`<crate>/public/assets/palabras.json`）
pub fn default_output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT_PATH)
}

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// 入力ディレクトリ
    pub input_dir: PathBuf,

    /// 出力ファイル
    pub output_path: PathBuf,

    /// 対象とする拡張子（ドットなし）
    pub extensions: Vec<String>,

    /// 解析前の制限
    pub security: SecurityConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
            extensions: vec!["xlsx".to_string()],
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use palabras_gen::ConverterBuilder;
///
/// # fn main() -> Result<(), palabras_gen::WordGenError> {
/// let summary = ConverterBuilder::new()
///     .with_input_dir("data/raw")
///     .with_output_path("public/assets/palabras.json")
///     .build()?
///     .run()?;
/// println!("{} words", summary.entries_written);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 入力ディレクトリ: `<crate>/data/raw`
    /// - 出力ファイル: `<crate>/public/assets/palabras.json`
    /// - 拡張子: `xlsx`
    /// - 入力ファイルの最大サイズ: 2GB
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 入力ディレクトリを指定する
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    /// 出力ファイルを指定する
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// 対象とする拡張子を指定する
    ///
    /// 先頭のドットは省略できます（`".ods"`と`"ods"`は同じ扱い）。
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use palabras_gen::ConverterBuilder;
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_extensions(["xlsx", "ods"]);
    /// ```
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_file_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `WordGenError::Config(String)`: 設定の検証に失敗した場合
    ///   * 拡張子のリストが空、または空の拡張子を含む
    ///   * 拡張子にパス区切り文字やglobの特殊文字を含む
    ///   * 最大サイズが0
    pub fn build(self) -> Result<Converter> {
        // 1. 拡張子の検証
        if self.config.extensions.is_empty() {
            return Err(WordGenError::Config(
                "At least one file extension is required".to_string(),
            ));
        }
        for ext in &self.config.extensions {
            if ext.is_empty() {
                return Err(WordGenError::Config("Empty file extension".to_string()));
            }
            if ext.contains(['/', '\\', '*', '?', '[', ']']) {
                return Err(WordGenError::Config(format!(
                    "Invalid file extension: '{}'",
                    ext
                )));
            }
        }

        // 2. サイズ制限の検証
        if self.config.security.max_input_file_size == 0 {
            return Err(WordGenError::Config(
                "Maximum input file size must be greater than zero".to_string(),
            ));
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// 入力ディレクトリのスプレッドシートをすべて読み込み、1つのJSONファイルに書き出します。
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// 入力ディレクトリ
    pub fn input_dir(&self) -> &Path {
        &self.config.input_dir
    }

    /// 出力ファイル
    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// 入力ディレクトリ内の対象ファイルを探索する（パス順）
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        discover_spreadsheets(&self.config.input_dir, &self.config.extensions)
    }

    /// 1つのファイルを単語エントリのリストに変換する
    ///
    /// 先頭シートのみを読み込みます。`Palabra`列がない場合は警告を出力し、
    /// 空のリストを返します。
    pub fn convert_file(&self, path: &Path) -> Result<Vec<WordEntry>> {
        let mut parser = WorkbookParser::open(path, &self.config.security)?;
        let table = parser.first_sheet_table()?;

        if !table.headers.is_empty() && !table.headers.iter().any(|h| h == WORD_COLUMN) {
            warn!(
                "{}: no '{}' column in header row",
                display_name(path),
                WORD_COLUMN
            );
        }

        Ok(entries_from_table(&table))
    }

    /// すべての入力ファイルを変換し、エントリを蓄積する
    ///
    /// 解析に失敗したファイルはログに記録してスキップします。
    ///
    /// # 戻り値
    ///
    /// `(エントリ, 失敗したファイル, 見つかったファイル数)`
    pub(crate) fn collect_entries(&self) -> Result<(Vec<WordEntry>, Vec<FileFailure>, usize)> {
        let files = self.discover_files()?;
        info!(
            "Found {} spreadsheet files in {}",
            files.len(),
            self.config.input_dir.display()
        );

        let mut entries = Vec::new();
        let mut failures = Vec::new();

        for path in &files {
            info!("Processing {}...", display_name(path));
            match self.convert_file(path) {
                Ok(mut file_entries) => {
                    info!("{}: {} words", display_name(path), file_entries.len());
                    entries.append(&mut file_entries);
                }
                Err(e) => {
                    error!("Error processing {}: {}", path.display(), e);
                    failures.push(FileFailure {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok((entries, failures, files.len()))
    }

    /// 変換処理を実行し、出力ファイルを書き込む
    ///
    /// # 戻り値
    ///
    /// * `Ok(RunSummary)` - 出力ファイルの書き込みに成功した場合（一部の入力が失敗していても成功）
    /// * `Err(WordGenError::Output)` - 出力ディレクトリの作成または書き込みに失敗した場合
    pub fn run(&self) -> Result<RunSummary> {
        let (entries, failures, files_found) = self.collect_entries()?;
        info!("Total words generated: {}", entries.len());

        if let Err(e) = write_json(&self.config.output_path, &entries) {
            error!("Error writing output file: {}", e);
            return Err(e);
        }
        info!(
            "Successfully wrote JSON to {}",
            self.config.output_path.display()
        );

        Ok(RunSummary {
            files_found,
            files_converted: files_found - failures.len(),
            failures,
            entries_written: entries.len(),
            output_path: self.config.output_path.clone(),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
