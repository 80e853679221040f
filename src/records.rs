//! Records Module
//!
//! シートの行を`WordEntry`に変換するモジュール。
//! 見出しは完全一致で照合し、大文字小文字や前後の空白が異なる見出しは存在しないものとして扱います。

use crate::types::{
    SheetTable, WordEntry, CATEGORY_COLUMN, CLUE_COLUMNS, DEFAULT_CATEGORY, WORD_COLUMN,
};

/// 認識対象の列の位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    /// `Categoría`列
    pub category: Option<usize>,
    /// `Palabra`列
    pub word: Option<usize>,
    /// `Pista1`〜`Pista5`列（列名の順）
    pub clues: [Option<usize>; 5],
}

impl ColumnIndex {
    /// 見出し行から列の位置を求める
    ///
    /// 同じ見出しが複数ある場合は最も左の列を使用します。
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| AsRef::<str>::as_ref(h) == name)
        };

        let mut clues = [None; 5];
        for (slot, name) in clues.iter_mut().zip(CLUE_COLUMNS) {
            *slot = find(name);
        }

        Self {
            category: find(CATEGORY_COLUMN),
            word: find(WORD_COLUMN),
            clues,
        }
    }

    /// `Palabra`列が存在するか
    pub fn has_word_column(&self) -> bool {
        self.word.is_some()
    }
}

/// 行から値を取り出し、トリムして空白でなければ返す
fn trimmed(row: &[Option<String>], column: Option<usize>) -> Option<String> {
    let value = row.get(column?)?.as_deref()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// 1行を`WordEntry`に変換する
///
/// `Palabra`が欠落または空白の場合は`None`を返します（行をスキップ）。
pub fn entry_from_row(columns: &ColumnIndex, row: &[Option<String>]) -> Option<WordEntry> {
    let secret_word = trimmed(row, columns.word)?;

    let category =
        trimmed(row, columns.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let impostor_clues = columns
        .clues
        .iter()
        .filter_map(|&column| trimmed(row, column))
        .collect();

    Some(WordEntry {
        category,
        secret_word,
        impostor_clues,
    })
}

/// シート全体を`WordEntry`のリストに変換する（行順）
pub(crate) fn entries_from_table(table: &SheetTable) -> Vec<WordEntry> {
    let columns = ColumnIndex::from_headers(&table.headers);
    table
        .rows
        .iter()
        .filter_map(|row| entry_from_row(&columns, row))
        .collect()
}
