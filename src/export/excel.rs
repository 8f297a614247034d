//! Excel出力
//!
//! 1ファイル1行で、解析結果と最上位候補を一覧にする。

use crate::analyzer::LabelScanRecord;
use crate::error::{LabelScanError, Result};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

const SHEET_NAME: &str = "labels";

const HEADERS: &[&str] = &[
    "ファイル",
    "ブランド",
    "製品",
    "種別",
    "ヴィンテージ",
    "品種/スタイル",
    "産地",
    "度数(%)",
    "熟成",
    "候補ID",
    "候補",
    "スコア",
    "信頼度",
];

pub fn generate_excel(records: &[LabelScanRecord], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_workbook(records, output_path)
        .map_err(|e| LabelScanError::ExcelGeneration(e.to_string()))
}

fn write_workbook(records: &[LabelScanRecord], output_path: &Path) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let parsed = &record.result.parsed_data;
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        worksheet.write_string(row, 0, &record.file_name)?;
        worksheet.write_string(row, 1, text(&parsed.brand_name))?;
        worksheet.write_string(row, 2, text(&parsed.product_name))?;
        worksheet.write_string(
            row,
            3,
            parsed.beverage_type.map(|t| t.to_string()).unwrap_or_default(),
        )?;
        worksheet.write_string(row, 4, text(&parsed.vintage))?;
        // ワインなら品種、スピリッツならスタイル
        worksheet.write_string(row, 5, text(&parsed.varietal.clone().or(parsed.style.clone())))?;
        worksheet.write_string(row, 6, text(&parsed.region))?;
        if let Some(abv) = parsed.abv {
            worksheet.write_number(row, 7, abv)?;
        }
        worksheet.write_string(row, 8, text(&parsed.age_statement))?;

        if let Some(top) = record.result.matches.first() {
            worksheet.write_string(row, 9, &top.product.id)?;
            worksheet.write_string(
                row,
                10,
                format!("{} {}", top.product.brand.name, top.product.name),
            )?;
            worksheet.write_number(row, 11, top.match_score)?;
        }

        worksheet.write_string(row, 12, record.result.confidence.to_string())?;
    }

    worksheet.autofit();
    workbook.save(output_path)?;
    Ok(())
}
