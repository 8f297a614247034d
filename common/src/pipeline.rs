//! ラベル解析パイプライン
//!
//! テキスト解析 → カタログ照合 → 信頼度判定 を1回の呼び出しで実行する。
//! 状態は持たないので、複数スレッドから同時に呼んでよい。

use crate::confidence::classify_confidence;
use crate::error::Result;
use crate::matcher::{match_products, CatalogSearch};
use crate::parser::{parse_label_text, parse_label_text_with_year};
use crate::types::{LabelScanResult, ParsedData};

/// ラベルテキストを解析してカタログと照合する
pub fn scan_label<C>(text: &str, catalog: &C) -> Result<LabelScanResult>
where
    C: CatalogSearch + ?Sized,
{
    resolve(parse_label_text(text), catalog)
}

/// 基準年を指定して `scan_label` を実行する
pub fn scan_label_with_year<C>(text: &str, catalog: &C, current_year: i32) -> Result<LabelScanResult>
where
    C: CatalogSearch + ?Sized,
{
    resolve(parse_label_text_with_year(text, current_year), catalog)
}

fn resolve<C>(parsed_data: ParsedData, catalog: &C) -> Result<LabelScanResult>
where
    C: CatalogSearch + ?Sized,
{
    let matches = match_products(&parsed_data, catalog)?;
    let confidence = classify_confidence(&matches);

    tracing::debug!(
        matches = matches.len(),
        top_score = matches.first().map(|m| m.match_score),
        %confidence,
        "ラベル照合完了"
    );

    Ok(LabelScanResult {
        parsed_data,
        matches,
        confidence,
    })
}
