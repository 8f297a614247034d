//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// カタログ検索の失敗（そのまま呼び出し元へ伝播する）
    #[error("Catalog error: {0}")]
    Catalog(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
