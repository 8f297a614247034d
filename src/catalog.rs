use crate::error::{LabelScanError, Result};
use label_scan_common::InMemoryCatalog;
use std::path::Path;

/// カタログJSONを読み込む
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    if !path.exists() {
        return Err(LabelScanError::FileNotFound(path.display().to_string()));
    }

    InMemoryCatalog::from_file(path).map_err(|e| match e {
        label_scan_common::Error::Json(e) => {
            LabelScanError::InvalidCatalog(format!("{}: {}", path.display(), e))
        }
        other => LabelScanError::Common(other),
    })
}
