//! Discovery Module
//!
//! 入力ディレクトリ直下のスプレッドシートファイルを探索するモジュール。

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 入力ディレクトリ直下で、指定された拡張子のファイルを探索する
///
/// サブディレクトリは探索しません。結果はパス順にソートされ、
/// 同じ入力に対して常に同じ順序になります。入力ディレクトリが存在しない場合は
/// 空のリストを返します。
///
/// # 引数
///
/// * `dir` - 入力ディレクトリ
/// * `extensions` - 対象とする拡張子（ドットなし、例: `"xlsx"`）
pub(crate) fn discover_spreadsheets(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!("Input directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();

    for ext in extensions {
        let pattern = format!("{}/*.{}", escaped_dir, glob::Pattern::escape(ext));
        debug!("glob {}", pattern);
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) if path.is_file() && !is_lock_file(&path) => files.push(path),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry: {}", e),
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Excelが編集中に作成するロックファイル（`~$name.xlsx`）かどうか
fn is_lock_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with("~$"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let files = discover_spreadsheets(Path::new("does/not/exist"), &exts(&["xlsx"])).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.xlsx", "a.xlsx", "notes.txt", "c.ods", "~$a.xlsx"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.xlsx")).unwrap();

        let files = discover_spreadsheets(dir.path(), &exts(&["xlsx"])).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx"]);

        let files = discover_spreadsheets(dir.path(), &exts(&["ods", "xlsx"])).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_directory_with_glob_metacharacters() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("raw [v1]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("words.xlsx"), b"x").unwrap();

        let files = discover_spreadsheets(&dir, &exts(&["xlsx"])).unwrap();
        assert_eq!(files, vec![dir.join("words.xlsx")]);
    }
}
