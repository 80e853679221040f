//! Parser Module
//!
//! calamineを使用したスプレッドシート解析。
//! 先頭シートを見出し行とデータ行に分けて取り出します。

mod workbook;

pub(crate) use workbook::WorkbookParser;
