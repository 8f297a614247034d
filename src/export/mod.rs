pub mod excel;

use crate::analyzer::LabelScanRecord;
use crate::cli::ExportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};

const DEFAULT_STEM: &str = "label-scan";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", DEFAULT_STEM));
        let excel_path = output.join(format!("{}.xlsx", DEFAULT_STEM));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_STEM);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// JSONで保存
pub fn write_json<T: serde::Serialize + ?Sized>(value: &T, output_path: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, json)?;
    Ok(())
}

/// バッチ結果を出力する
///
/// # Returns
/// 書き出したファイルのパス
pub fn export_records(
    records: &[LabelScanRecord],
    format: &ExportFormat,
    output: &Path,
    pretty: bool,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Json => {
            let json_path = output_path_for_format(output, "json");
            write_json(records, &json_path, pretty)?;
            vec![json_path]
        }
        ExportFormat::Excel => {
            let excel_path = output_path_for_format(output, "xlsx");
            excel::generate_excel(records, &excel_path)?;
            vec![excel_path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output);
            write_json(records, &json_path, pretty)?;
            excel::generate_excel(records, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_file() {
        let path = output_path_for_format(Path::new("out/result.json"), "json");
        assert_eq!(path, PathBuf::from("out/result.json"));
    }

    #[test]
    fn test_output_path_for_directory_like() {
        let path = output_path_for_format(Path::new("out"), "xlsx");
        assert_eq!(path, PathBuf::from("out").join("label-scan.xlsx"));
    }

    #[test]
    fn test_output_paths_for_both_share_stem() {
        let (json, excel) = output_paths_for_both(Path::new("out/cellar.json"));
        assert_eq!(json, PathBuf::from("out/cellar.json"));
        assert_eq!(excel, PathBuf::from("out/cellar.xlsx"));
    }
}
