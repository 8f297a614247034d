use crate::error::{LabelScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// カタログパスの環境変数（設定ファイルより優先）
pub const CATALOG_ENV: &str = "LABEL_SCAN_CATALOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定のカタログJSON
    pub catalog_path: Option<PathBuf>,
    /// JSON出力を整形する
    pub pretty_json: bool,
    /// batchでサブフォルダも走査する
    pub recursive: bool,
    /// ヴィンテージ判定の基準年（未設定ならシステム時刻）
    pub current_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            pretty_json: true,
            recursive: false,
            current_year: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LabelScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("label-scan").join("config.json"))
    }

    /// 使用するカタログパスを決める（引数 → 環境変数 → 設定ファイル）
    pub fn resolve_catalog(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "カタログ: 引数指定");
            return Ok(path);
        }

        // 環境変数を優先
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.is_empty() {
                tracing::debug!(%path, "カタログ: 環境変数 {}", CATALOG_ENV);
                return Ok(PathBuf::from(path));
            }
        }

        self.catalog_path.clone().ok_or(LabelScanError::MissingCatalog)
    }

    pub fn set_catalog(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }
}
