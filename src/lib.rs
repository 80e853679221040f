//! palabras-gen - Word-game spreadsheet to JSON converter
//!
//! カテゴリ、秘密の単語、最大5つのヒントを含むスプレッドシート群を読み込み、
//! フロントエンドが読み込む1つのJSON配列に変換します。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use palabras_gen::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト: <crate>/data/raw/*.xlsx -> <crate>/public/assets/palabras.json
//!     let converter = ConverterBuilder::new().build()?;
//!     let summary = converter.run()?;
//!
//!     println!(
//!         "{} words from {} files",
//!         summary.entries_written, summary.files_converted
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # 単一ファイルの変換
//!
//! ```rust,no_run
//! use std::path::Path;
//! use palabras_gen::{output, ConverterBuilder};
//!
//! # fn main() -> Result<(), palabras_gen::WordGenError> {
//! let converter = ConverterBuilder::new().build()?;
//! let entries = converter.convert_file(Path::new("animales.xlsx"))?;
//! println!("{}", output::to_json_string(&entries)?);
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod discovery;
mod error;
pub mod output;
mod parser;
pub mod records;
mod security;
mod types;

// 公開API
pub use api::{FileFailure, RunSummary};
pub use builder::{default_input_dir, default_output_path, Converter, ConverterBuilder};
pub use error::{Result, WordGenError};
pub use types::{WordEntry, CATEGORY_COLUMN, CLUE_COLUMNS, DEFAULT_CATEGORY, WORD_COLUMN};
