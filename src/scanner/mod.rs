use crate::error::{LabelScanError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// OCRテキストファイル
#[derive(Debug, Clone)]
pub struct TextFileInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const TEXT_EXTENSIONS: &[&str] = &["txt", "TXT"];

/// フォルダ内のOCRテキストファイルを列挙する
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<TextFileInfo>> {
    if !folder.exists() {
        return Err(LabelScanError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !is_text_file(path) {
            continue;
        }

        let file_name = path
            .strip_prefix(folder)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        files.push(TextFileInfo {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!(folder = %folder.display(), files = files.len(), recursive, "テキストファイル走査");

    Ok(files)
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| TEXT_EXTENSIONS.iter().any(|&e| e == ext.to_string_lossy()))
        .unwrap_or(false)
}

/// テキストを読み込む（`-` は標準入力）
pub fn read_text_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        return Err(LabelScanError::FileNotFound(input.display().to_string()));
    }

    Ok(std::fs::read_to_string(input)?)
}
