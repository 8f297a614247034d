use label_scan_common::LabelScanResult;
use serde::{Deserialize, Serialize};

/// 1ファイル分の照合結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelScanRecord {
    pub file_name: String,

    #[serde(default)]
    pub file_path: String,

    #[serde(flatten)]
    pub result: LabelScanResult,
}

/// バッチ全体の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// 候補が1件もなかったファイル数
    pub unmatched: usize,
}
