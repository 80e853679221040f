//! Output Module
//!
//! 単語エントリのリストをJSON配列として書き出すモジュール。
//! 非ASCII文字はエスケープせずにそのまま出力し、インデントは2スペースです。

use crate::error::{Result, WordGenError};
use crate::types::WordEntry;
use std::fs;
use std::path::Path;

/// エントリのリストを整形済みJSON文字列に変換する
///
/// エントリが空の場合は`[]`になります。末尾に改行は付けません。
pub fn to_json_string(entries: &[WordEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// エントリのリストを出力ファイルに書き込む
///
/// 出力先の親ディレクトリが存在しない場合は作成します。
///
/// # 戻り値
///
/// * `Ok(())` - 書き込みに成功した場合
/// * `Err(WordGenError::Output)` - ディレクトリ作成または書き込みに失敗した場合
pub fn write_json(path: &Path, entries: &[WordEntry]) -> Result<()> {
    let json = to_json_string(entries)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WordGenError::Output {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| WordGenError::Output {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, word: &str, clues: &[&str]) -> WordEntry {
        WordEntry {
            category: category.to_string(),
            secret_word: word.to_string(),
            impostor_clues: clues.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_list_is_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_pretty_format_and_unescaped_unicode() {
        let json = to_json_string(&[entry("Países", "España", &["Toro"])]).unwrap();
        let expected = concat!(
            "[\n",
            "  {\n",
            "    \"categoria\": \"Países\",\n",
            "    \"palabraSecreta\": \"España\",\n",
            "    \"pistasImpostor\": [\n",
            "      \"Toro\"\n",
            "    ]\n",
            "  }\n",
            "]"
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_clue_list() {
        let json = to_json_string(&[entry("General", "Sol", &[])]).unwrap();
        assert!(json.contains("\"pistasImpostor\": []"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("assets").join("palabras.json");

        write_json(&path, &[entry("General", "Sol", &["Luz"])]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: Vec<WordEntry> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec![entry("General", "Sol", &["Luz"])]);
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        // 親がファイルなのでディレクトリを作成できない
        let result = write_json(&blocker.join("out.json"), &[]);
        assert!(matches!(result, Err(WordGenError::Output { .. })));
    }
}
