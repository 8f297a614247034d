//! カタログ照合モジュール
//!
//! 解析結果のブランド名・製品名でカタログを1回だけ検索し、
//! 候補ごとにスコアを付けて上位5件を返す。
//!
//! ## スコア
//! | 条件 | 点数 |
//! |------|------|
//! | ブランド名の類似度 | × 50 |
//! | 製品名の類似度 | × 30 |
//! | 種別一致 | + 10 |
//! | ヴィンテージ完全一致 | + 10 |
//!
//! 20点以下の候補は除外する。

use crate::error::Result;
use crate::similarity::similarity;
use crate::types::{CatalogProduct, ParsedData, ScoredMatch};

/// 1回の検索で取得する候補数の上限
pub const CANDIDATE_LIMIT: usize = 20;
/// 返却する候補数の上限
pub const MAX_MATCHES: usize = 5;
/// この点数を超えた候補のみ残す
pub const SCORE_THRESHOLD: f64 = 20.0;

const BRAND_WEIGHT: f64 = 50.0;
const PRODUCT_WEIGHT: f64 = 30.0;
const TYPE_BONUS: f64 = 10.0;
const VINTAGE_BONUS: f64 = 10.0;

/// カタログ検索条件
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPredicate {
    /// ブランド名に部分一致（大文字小文字無視）
    BrandNameContains(String),
    /// 製品名に部分一致（大文字小文字無視）
    ProductNameContains(String),
    /// すべての条件を満たす
    All(Vec<CatalogPredicate>),
}

impl CatalogPredicate {
    pub fn matches(&self, product: &CatalogProduct) -> bool {
        match self {
            CatalogPredicate::BrandNameContains(s) => contains_ignore_case(&product.brand.name, s),
            CatalogPredicate::ProductNameContains(s) => contains_ignore_case(&product.name, s),
            CatalogPredicate::All(predicates) => predicates.iter().all(|p| p.matches(product)),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// カタログ検索クエリ（いずれかの条件に一致する製品を最大 `limit` 件）
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub any_of: Vec<CatalogPredicate>,
    pub limit: usize,
}

impl CatalogQuery {
    /// 解析結果からクエリを組み立てる。名前が1つもなければ `None`
    pub fn for_parsed(parsed: &ParsedData) -> Option<Self> {
        let brand = parsed
            .brand_name
            .as_ref()
            .map(|b| CatalogPredicate::BrandNameContains(b.clone()));
        let product = parsed
            .product_name
            .as_ref()
            .map(|p| CatalogPredicate::ProductNameContains(p.clone()));

        let combined = match (&brand, &product) {
            (Some(b), Some(p)) => Some(CatalogPredicate::All(vec![b.clone(), p.clone()])),
            _ => None,
        };

        let any_of: Vec<CatalogPredicate> = [brand, product, combined].into_iter().flatten().collect();
        if any_of.is_empty() {
            return None;
        }

        Some(Self {
            any_of,
            limit: CANDIDATE_LIMIT,
        })
    }

    pub fn matches(&self, product: &CatalogProduct) -> bool {
        self.any_of.iter().any(|p| p.matches(product))
    }
}

/// カタログ検索の呼び出し先
///
/// 結果の並び順は保証しなくてよい。I/Oエラーは `Error::Catalog` 等で返す。
pub trait CatalogSearch {
    fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>>;
}

impl<F> CatalogSearch for F
where
    F: Fn(&CatalogQuery) -> Result<Vec<CatalogProduct>>,
{
    fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>> {
        self(query)
    }
}

/// 解析結果とカタログを照合する
///
/// # Returns
/// * `Ok(Vec<ScoredMatch>)` - スコア降順（同点は検索結果の順）、最大5件
/// * `Err` - カタログ検索の失敗をそのまま返す
pub fn match_products<C>(parsed: &ParsedData, catalog: &C) -> Result<Vec<ScoredMatch>>
where
    C: CatalogSearch + ?Sized,
{
    let Some(query) = CatalogQuery::for_parsed(parsed) else {
        tracing::debug!("ブランド名・製品名なし、カタログ検索をスキップ");
        return Ok(Vec::new());
    };

    let candidates = catalog.search(&query)?;
    tracing::debug!(candidates = candidates.len(), "カタログ候補取得");

    let mut scored: Vec<(CatalogProduct, f64)> = candidates
        .into_iter()
        .take(query.limit)
        .map(|product| {
            let score = score_candidate(parsed, &product);
            tracing::trace!(id = %product.id, score, "候補スコア");
            (product, score)
        })
        .filter(|(_, score)| *score > SCORE_THRESHOLD)
        .collect();

    // sort_by は安定ソート
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let matches: Vec<ScoredMatch> = scored
        .into_iter()
        .take(MAX_MATCHES)
        .map(|(product, score)| ScoredMatch {
            product,
            match_score: score.round() as u32,
        })
        .collect();

    tracing::debug!(matches = matches.len(), "カタログ照合完了");
    Ok(matches)
}

/// 候補1件のスコア（丸め前）
pub fn score_candidate(parsed: &ParsedData, product: &CatalogProduct) -> f64 {
    let points = [
        parsed
            .brand_name
            .as_deref()
            .map(|brand| similarity(brand, &product.brand.name) * BRAND_WEIGHT),
        parsed
            .product_name
            .as_deref()
            .map(|name| similarity(name, &product.name) * PRODUCT_WEIGHT),
        parsed
            .beverage_type
            .filter(|t| *t == product.brand.beverage_type)
            .map(|_| TYPE_BONUS),
        parsed
            .vintage
            .as_deref()
            .filter(|v| product.vintage() == Some(*v))
            .map(|_| VINTAGE_BONUS),
    ];

    points.iter().flatten().fold(0.0, |score, p| score + p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{BeverageType, Brand, WineData};
    use std::cell::Cell;

    fn product(id: &str, brand: &str, name: &str, beverage_type: BeverageType) -> CatalogProduct {
        CatalogProduct {
            id: id.to_string(),
            brand: Brand {
                name: brand.to_string(),
                beverage_type,
            },
            name: name.to_string(),
            wine_data: None,
            spirit_data: None,
        }
    }

    fn names(brand: Option<&str>, name: Option<&str>) -> ParsedData {
        ParsedData {
            brand_name: brand.map(String::from),
            product_name: name.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_names_skips_catalog() {
        let calls = Cell::new(0);
        let catalog = |_: &CatalogQuery| -> Result<Vec<CatalogProduct>> {
            calls.set(calls.get() + 1);
            Ok(vec![])
        };

        let parsed = ParsedData {
            vintage: Some("2015".to_string()),
            beverage_type: Some(BeverageType::Wine),
            ..Default::default()
        };
        let matches = match_products(&parsed, &catalog).unwrap();

        assert!(matches.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_query_with_both_names() {
        let query = CatalogQuery::for_parsed(&names(Some("Justin"), Some("Isosceles"))).unwrap();

        assert_eq!(query.limit, CANDIDATE_LIMIT);
        assert_eq!(query.any_of.len(), 3);
        assert_eq!(query.any_of[0], CatalogPredicate::BrandNameContains("Justin".into()));
        assert_eq!(query.any_of[1], CatalogPredicate::ProductNameContains("Isosceles".into()));
        assert!(matches!(query.any_of[2], CatalogPredicate::All(ref p) if p.len() == 2));
    }

    #[test]
    fn test_query_with_product_only() {
        let query = CatalogQuery::for_parsed(&names(None, Some("Isosceles"))).unwrap();
        assert_eq!(
            query.any_of,
            vec![CatalogPredicate::ProductNameContains("Isosceles".into())]
        );
        assert!(CatalogQuery::for_parsed(&ParsedData::default()).is_none());
    }

    #[test]
    fn test_predicate_ignores_case() {
        let p = product("1", "Justin Vineyards", "Isosceles", BeverageType::Wine);
        assert!(CatalogPredicate::BrandNameContains("JUSTIN".into()).matches(&p));
        assert!(CatalogPredicate::ProductNameContains("isos".into()).matches(&p));
        assert!(!CatalogPredicate::All(vec![
            CatalogPredicate::BrandNameContains("justin".into()),
            CatalogPredicate::ProductNameContains("Savant".into()),
        ])
        .matches(&p));
    }

    #[test]
    fn test_brand_containment_and_exact_product() {
        let calls = Cell::new(0);
        let catalog = |_: &CatalogQuery| -> Result<Vec<CatalogProduct>> {
            calls.set(calls.get() + 1);
            Ok(vec![product("1", "Justin Vineyards", "Isosceles", BeverageType::Wine)])
        };

        let matches = match_products(&names(Some("Justin"), Some("Isosceles")), &catalog).unwrap();

        // 検索は1回だけ
        assert_eq!(calls.get(), 1);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_score, 70);
    }

    #[test]
    fn test_type_and_vintage_bonus() {
        let mut candidate = product("1", "Justin Vineyards", "Isosceles", BeverageType::Wine);
        candidate.wine_data = Some(WineData {
            vintage: Some("2019".to_string()),
            ..Default::default()
        });

        let parsed = ParsedData {
            vintage: Some("2019".to_string()),
            beverage_type: Some(BeverageType::Wine),
            ..names(Some("Justin"), Some("Isosceles"))
        };

        assert!((score_candidate(&parsed, &candidate) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut exactly_twenty = product("a", "Unrelated", "Nothing", BeverageType::Wine);
        exactly_twenty.wine_data = Some(WineData {
            vintage: Some("2015".to_string()),
            ..Default::default()
        });
        let catalog = move |_: &CatalogQuery| -> Result<Vec<CatalogProduct>> {
            Ok(vec![
                exactly_twenty.clone(),
                product("b", "Unrelated", "Monte Bello Ridge", BeverageType::Spirit),
            ])
        };

        let parsed = ParsedData {
            vintage: Some("2015".to_string()),
            beverage_type: Some(BeverageType::Wine),
            ..names(Some("Ridge"), Some("Monte Bello"))
        };
        let matches = match_products(&parsed, &catalog).unwrap();

        // a: 0 + 0 + 10 + 10 = 20（除外）、b: 0 + 0.8 * 30 = 24
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].product.id, "b");
        assert_eq!(matches[0].match_score, 24);
    }

    #[test]
    fn test_sorted_and_truncated() {
        let catalog = |_: &CatalogQuery| -> Result<Vec<CatalogProduct>> {
            Ok(vec![
                product("weak", "Buffalo", "Other", BeverageType::Spirit),
                product("exact", "Buffalo Trace", "Eagle Rare", BeverageType::Spirit),
                product("p1", "Buffalo Trace", "Something", BeverageType::Spirit),
                product("p2", "Buffalo Trace", "Something", BeverageType::Spirit),
                product("p3", "Buffalo Trace", "Something", BeverageType::Spirit),
                product("p4", "Buffalo Trace", "Something", BeverageType::Spirit),
                product("p5", "Buffalo Trace", "Something", BeverageType::Spirit),
            ])
        };

        let matches = match_products(&names(Some("Buffalo Trace"), Some("Eagle Rare")), &catalog).unwrap();

        assert_eq!(matches.len(), MAX_MATCHES);
        assert_eq!(matches[0].product.id, "exact");
        assert_eq!(matches[0].match_score, 80);
        assert!(matches.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        // 同点は検索結果の順を維持
        let ids: Vec<&str> = matches[1..].iter().map(|m| m.product.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
        assert!(matches.iter().all(|m| m.match_score > 20));
    }

    #[test]
    fn test_catalog_error_propagates() {
        let catalog = |_: &CatalogQuery| -> Result<Vec<CatalogProduct>> {
            Err(Error::Catalog("timeout".to_string()))
        };

        let result = match_products(&names(Some("Justin"), None), &catalog);
        assert!(matches!(result, Err(Error::Catalog(ref msg)) if msg == "timeout"));
    }

    #[test]
    fn test_candidates_beyond_limit_ignored() {
        let catalog = |_: &CatalogQuery| -> Result<Vec<CatalogProduct>> {
            let mut all: Vec<CatalogProduct> = (0..CANDIDATE_LIMIT)
                .map(|i| product(&format!("x{}", i), "Nope", "Nope", BeverageType::Beer))
                .collect();
            all.push(product("late", "Opus One", "Opus One", BeverageType::Wine));
            Ok(all)
        };

        let matches = match_products(&names(Some("Opus One"), None), &catalog).unwrap();
        assert!(matches.is_empty());
    }
}
