//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックを開き先頭シートを`SheetTable`に変換します。

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, WordGenError};
use crate::security::SecurityConfig;
use crate::types::SheetTable;

/// ワークブックパーサー
///
/// 拡張子からフォーマット（xlsx / xlsm / xls / ods）を判定して開きます。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック
    workbook: Sheets<BufReader<File>>,
    /// 入力ファイルのパス（エラーメッセージ用）
    path: PathBuf,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `path` - 入力ファイルのパス
    /// * `security` - 解析前に適用する制限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(WordGenError::SecurityViolation)` - ファイルサイズが上限を超えている場合
    /// * `Err(WordGenError::Parse)` - ファイルがスプレッドシートとして不正な場合
    pub fn open(path: &Path, security: &SecurityConfig) -> Result<Self> {
        security.check_input_file(path)?;

        let workbook = open_workbook_auto(path).map_err(WordGenError::Parse)?;
        Ok(Self {
            workbook,
            path: path.to_path_buf(),
        })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// 先頭シートを読み込み、見出し行とデータ行に分割する
    ///
    /// シートが空の場合は、見出しもデータ行も持たない`SheetTable`を返します。
    pub fn first_sheet_table(&mut self) -> Result<SheetTable> {
        let range = self
            .workbook
            .worksheet_range_at(0)
            .ok_or_else(|| WordGenError::EmptyWorkbook(self.path.display().to_string()))?
            .map_err(WordGenError::Parse)?;

        if let Some(name) = self.sheet_names().first() {
            debug!(
                "sheet '{}' of {}: {} rows x {} cols",
                name,
                self.path.display(),
                range.height(),
                range.width()
            );
        }

        Ok(table_from_range(&range))
    }
}

/// calamineの`Range`を`SheetTable`に変換する
///
/// 先頭行を見出しとして扱います。見出しセルが空の場合は空文字列になります。
fn table_from_range(range: &Range<Data>) -> SheetTable {
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_text(cell).unwrap_or_default())
            .collect(),
        None => return SheetTable::default(),
    };

    let rows = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    SheetTable { headers, rows }
}

/// セルの値をテキストに変換する
///
/// 空セルとエラーセルは`None`を返します。整数値の浮動小数点数は
/// 小数部なしで出力します（例: `3.0` → `"3"`）。
pub(crate) fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_float(*f)),
        Data::Bool(true) => Some("True".to_string()),
        Data::Bool(false) => Some("False".to_string()),
        Data::DateTime(dt) => Some(match dt.as_datetime() {
            Some(datetime) => format_datetime(&datetime),
            None => format_float(dt.as_f64()),
        }),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) | Data::Empty => None,
    }
}

fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_float(f: f64) -> String {
    // i64に収まる範囲のみ整数表記にする
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_cell_text_scalars() {
        assert_eq!(cell_text(&Data::String(" Gato ".into())), Some(" Gato ".into()));
        assert_eq!(cell_text(&Data::Int(42)), Some("42".into()));
        assert_eq!(cell_text(&Data::Float(3.0)), Some("3".into()));
        assert_eq!(cell_text(&Data::Float(2.5)), Some("2.5".into()));
        assert_eq!(cell_text(&Data::Float(-7.0)), Some("-7".into()));
        assert_eq!(cell_text(&Data::Bool(true)), Some("True".into()));
        assert_eq!(cell_text(&Data::Bool(false)), Some("False".into()));
    }

    #[test]
    fn test_cell_text_absent_values() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::Error(CellErrorType::NA)), None);
    }

    #[test]
    fn test_format_float_large_values() {
        assert_eq!(format_float(1e20), 1e20f64.to_string());
        assert_eq!(format_float(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_datetime() {
        let datetime = chrono::NaiveDate::from_ymd_opt(2025, 11, 20)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(format_datetime(&datetime), "2025-11-20 09:30:00");
    }

    #[test]
    fn test_table_from_range() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("Palabra".into()));
        range.set_value((0, 1), Data::String("Pista1".into()));
        range.set_value((1, 0), Data::String("Sol".into()));
        range.set_value((2, 1), Data::Float(1.0));

        let table = table_from_range(&range);
        assert_eq!(table.headers, vec!["Palabra", "Pista1"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Some("Sol".to_string()), None],
                vec![None, Some("1".to_string())],
            ]
        );
    }

    #[test]
    fn test_table_from_empty_range() {
        let range: Range<Data> = Range::empty();
        assert_eq!(table_from_range(&range), SheetTable::default());
    }
}
