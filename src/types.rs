//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use serde::{Deserialize, Serialize};

/// カテゴリ列の見出し
pub const CATEGORY_COLUMN: &str = "Categoría";

/// 秘密の単語列の見出し
pub const WORD_COLUMN: &str = "Palabra";

/// ヒント列の見出し（出力順）
pub const CLUE_COLUMNS: [&str; 5] = ["Pista1", "Pista2", "Pista3", "Pista4", "Pista5"];

/// カテゴリが欠落または空白の場合に使用する値
pub const DEFAULT_CATEGORY: &str = "General";

/// フロントエンドが読み込む単語エントリ
///
/// JSONのキー名は固定です（`categoria`, `palabraSecreta`, `pistasImpostor`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// カテゴリ（空白の場合は`"General"`）
    #[serde(rename = "categoria")]
    pub category: String,

    /// 秘密の単語（トリム後に空でないことが保証される）
    #[serde(rename = "palabraSecreta")]
    pub secret_word: String,

    /// ヒント（列順、空白を除外、0〜5件）
    #[serde(rename = "pistasImpostor")]
    pub impostor_clues: Vec<String>,
}

/// 1枚のシートを見出し行とデータ行に分けたもの
///
/// データ行の各セルは、空セル・エラーセルの場合に`None`となります。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SheetTable {
    /// 見出し行（先頭行）のテキスト
    pub headers: Vec<String>,

    /// 見出し行を除いたデータ行
    pub rows: Vec<Vec<Option<String>>>,
}
