//! 照合結果の信頼度判定

use crate::types::{Confidence, ScoredMatch};

/// この点数以上で high
pub const HIGH_THRESHOLD: u32 = 85;
/// この点数以上で medium
pub const MEDIUM_THRESHOLD: u32 = 60;

/// 先頭候補のスコアから信頼度を判定する
///
/// `matches` はスコア降順であること（`match_products` の出力をそのまま渡す）。
/// 並べ替えはしない。
pub fn classify_confidence(matches: &[ScoredMatch]) -> Confidence {
    debug_assert!(
        matches.windows(2).all(|w| w[0].match_score >= w[1].match_score),
        "matches must be sorted by descending match_score"
    );

    match matches.first().map(|m| m.match_score) {
        Some(score) if score >= HIGH_THRESHOLD => Confidence::High,
        Some(score) if score >= MEDIUM_THRESHOLD => Confidence::Medium,
        _ => Confidence::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BeverageType, Brand, CatalogProduct};

    fn scored(score: u32) -> ScoredMatch {
        ScoredMatch {
            product: CatalogProduct {
                id: format!("p{}", score),
                brand: Brand {
                    name: "Brand".to_string(),
                    beverage_type: BeverageType::Wine,
                },
                name: "Name".to_string(),
                wine_data: None,
                spirit_data: None,
            },
            match_score: score,
        }
    }

    #[test]
    fn test_empty_is_low() {
        assert_eq!(classify_confidence(&[]), Confidence::Low);
    }

    #[test]
    fn test_levels() {
        assert_eq!(classify_confidence(&[scored(90), scored(40)]), Confidence::High);
        assert_eq!(classify_confidence(&[scored(70), scored(70)]), Confidence::Medium);
        assert_eq!(classify_confidence(&[scored(50), scored(21)]), Confidence::Low);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_confidence(&[scored(85)]), Confidence::High);
        assert_eq!(classify_confidence(&[scored(84)]), Confidence::Medium);
        assert_eq!(classify_confidence(&[scored(60)]), Confidence::Medium);
        assert_eq!(classify_confidence(&[scored(59)]), Confidence::Low);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sorted")]
    fn test_unsorted_input_panics_in_debug() {
        classify_confidence(&[scored(40), scored(90)]);
    }
}
