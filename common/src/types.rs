//! ラベル解析の型定義
//!
//! - ParsedData: ラベルテキストから抽出した属性
//! - CatalogProduct: カタログ側の製品レコード（読み取り専用）
//! - ScoredMatch: スコア付き候補
//! - LabelScanResult: 最終出力（解析結果 + 候補 + 信頼度）

use serde::{Deserialize, Serialize};

/// 酒類の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeverageType {
    Wine,
    Spirit,
    Beer,
}

impl std::fmt::Display for BeverageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeverageType::Wine => write!(f, "WINE"),
            BeverageType::Spirit => write!(f, "SPIRIT"),
            BeverageType::Beer => write!(f, "BEER"),
        }
    }
}

/// ラベルテキストの解析結果
///
/// 各フィールドは「見つからなかった」を `None` で表す。空文字列で代用しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// 4桁の西暦
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vintage: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub beverage_type: Option<BeverageType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub varietal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// アルコール度数（%）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abv: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_statement: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// ブランド
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    #[serde(rename = "type")]
    pub beverage_type: BeverageType,
}

/// ワイン固有データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WineData {
    pub vintage: Option<String>,
    pub varietal: Option<String>,
    pub region: Option<String>,
}

/// スピリッツ固有データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpiritData {
    pub style: Option<String>,
    pub age_statement: Option<String>,
    pub region: Option<String>,
}

/// カタログの製品レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: String,
    pub brand: Brand,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wine_data: Option<WineData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spirit_data: Option<SpiritData>,
}

impl CatalogProduct {
    /// ワインデータのヴィンテージ
    pub fn vintage(&self) -> Option<&str> {
        self.wine_data.as_ref().and_then(|w| w.vintage.as_deref())
    }
}

/// スコア付き候補
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub product: CatalogProduct,
    pub match_score: u32,
}

/// 照合の信頼度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// パイプラインの最終出力
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelScanResult {
    pub parsed_data: ParsedData,
    pub matches: Vec<ScoredMatch>,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_data_empty_serializes_to_empty_object() {
        let json = serde_json::to_string(&ParsedData::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_parsed_data_type_field_name() {
        let parsed = ParsedData {
            beverage_type: Some(BeverageType::Spirit),
            age_statement: Some("18 Year".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains(r#""type":"SPIRIT""#));
        assert!(json.contains(r#""ageStatement":"18 Year""#));
    }

    #[test]
    fn test_catalog_product_deserialize() {
        let json = r#"{
            "id": "p1",
            "brand": {"name": "Justin Vineyards", "type": "WINE"},
            "name": "Isosceles",
            "wineData": {"vintage": "2019", "region": "Paso Robles"}
        }"#;
        let product: CatalogProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.brand.beverage_type, BeverageType::Wine);
        assert_eq!(product.vintage(), Some("2019"));
        assert!(product.spirit_data.is_none());
    }

    #[test]
    fn test_scored_match_flattens_product() {
        let scored = ScoredMatch {
            product: CatalogProduct {
                id: "p1".to_string(),
                brand: Brand {
                    name: "Macallan".to_string(),
                    beverage_type: BeverageType::Spirit,
                },
                name: "18 Sherry Oak".to_string(),
                wine_data: None,
                spirit_data: None,
            },
            match_score: 72,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "p1");
        assert_eq!(value["matchScore"], 72);
    }

    #[test]
    fn test_confidence_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), r#""medium""#);
    }
}
