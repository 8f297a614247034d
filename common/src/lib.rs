//! Label Scan Common Library
//!
//! ボトルラベルのOCRテキストから属性を抽出し、製品カタログと照合する。
//!
//! ## 処理フロー
//! 1. `parser`: テキスト → ParsedData
//! 2. `matcher`: ParsedData + カタログ検索 → スコア付き候補（`similarity` を使用）
//! 3. `confidence`: 候補 → 信頼度

pub mod types;
pub mod lexicon;
pub mod error;
pub mod parser;
pub mod similarity;
pub mod matcher;
pub mod confidence;
pub mod catalog;
pub mod pipeline;

pub use types::{
    BeverageType, Brand, CatalogProduct, Confidence, LabelScanResult, ParsedData, ScoredMatch,
    SpiritData, WineData,
};
pub use error::{Error, Result};
pub use parser::{parse_label_text, parse_label_text_with_year};
pub use similarity::similarity;
pub use matcher::{match_products, CatalogPredicate, CatalogQuery, CatalogSearch};
pub use confidence::classify_confidence;
pub use catalog::InMemoryCatalog;
pub use pipeline::{scan_label, scan_label_with_year};
