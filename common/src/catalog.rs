//! メモリ上のカタログ
//!
//! JSON配列で書かれた製品一覧を読み込み、`CatalogSearch` として検索できるようにする。

use crate::error::Result;
use crate::matcher::{CatalogQuery, CatalogSearch};
use crate::types::{BeverageType, CatalogProduct};
use std::collections::HashMap;

/// メモリ上のカタログ（検索結果はファイル内の順）
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<CatalogProduct>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<CatalogProduct> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "カタログ読み込み");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 種別ごとの製品数
    pub fn count_by_type(&self) -> HashMap<BeverageType, usize> {
        let mut counts = HashMap::new();
        for product in &self.products {
            *counts.entry(product.brand.beverage_type).or_insert(0) += 1;
        }
        counts
    }
}

impl CatalogSearch for InMemoryCatalog {
    fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>> {
        Ok(self
            .products
            .iter()
            .filter(|p| query.matches(p))
            .take(query.limit)
            .cloned()
            .collect())
    }
}
