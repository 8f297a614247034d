use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログが指定されていません。`--catalog PATH` か `label-scan config --set-catalog PATH` で指定してください")]
    MissingCatalog,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("テキストファイルが見つかりません: {0}")]
    NoTextFound(String),

    #[error("カタログファイルが不正: {0}")]
    InvalidCatalog(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] label_scan_common::Error),
}

pub type Result<T> = std::result::Result<T, LabelScanError>;
