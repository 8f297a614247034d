//! バッチ照合モジュール
//!
//! OCRテキストファイルをまとめて読み込み、ファイルごとに独立して
//! パイプラインを実行する。各呼び出しは状態を共有しないので並列に処理する。

mod types;

pub use types::{LabelScanRecord, ScanSummary};

use crate::error::Result;
use crate::scanner::{self, TextFileInfo};
use chrono::Datelike;
use indicatif::{ProgressBar, ProgressStyle};
use label_scan_common::{scan_label_with_year, CatalogSearch, Confidence};
use rayon::prelude::*;

/// テキストファイル群をカタログと照合する
///
/// # Arguments
/// * `files` - OCRテキストファイル
/// * `catalog` - カタログ検索
/// * `current_year` - ヴィンテージ判定の基準年（`None` ならシステム時刻）
/// * `verbose` - ファイルごとの結果を表示
///
/// # Returns
/// 入力と同じ順序の結果。1件でも読み込み・検索に失敗したらエラー
pub fn analyze_files<C>(
    files: &[TextFileInfo],
    catalog: &C,
    current_year: Option<i32>,
    verbose: bool,
) -> Result<Vec<LabelScanRecord>>
where
    C: CatalogSearch + Sync + ?Sized,
{
    let year = current_year.unwrap_or_else(|| chrono::Local::now().year());

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let records = files
        .par_iter()
        .map(|file| -> Result<LabelScanRecord> {
            let text = scanner::read_text_input(&file.path)?;
            let result = scan_label_with_year(&text, catalog, year)?;

            if verbose {
                progress.println(format!(
                    "  {}: {} ({}件)",
                    file.file_name,
                    result.confidence,
                    result.matches.len()
                ));
            }
            progress.inc(1);

            Ok(LabelScanRecord {
                file_name: file.file_name.clone(),
                file_path: file.path.display().to_string(),
                result,
            })
        })
        .collect::<Result<Vec<_>>>();

    progress.finish_and_clear();
    records
}

/// 信頼度ごとの件数を集計する
pub fn summarize(records: &[LabelScanRecord]) -> ScanSummary {
    records.iter().fold(
        ScanSummary {
            total: records.len(),
            ..Default::default()
        },
        |mut summary, record| {
            match record.result.confidence {
                Confidence::High => summary.high += 1,
                Confidence::Medium => summary.medium += 1,
                Confidence::Low => summary.low += 1,
            }
            if record.result.matches.is_empty() {
                summary.unmatched += 1;
            }
            summary
        },
    )
}
