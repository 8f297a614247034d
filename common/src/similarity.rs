//! 文字列類似度
//!
//! 完全一致 1.0、包含 0.8、それ以外はトークン単位の一致率。

/// 包含関係にある場合の類似度
const CONTAINMENT_SCORE: f64 = 0.8;
/// トークンとして扱う最小文字数
const MIN_TOKEN_CHARS: usize = 3;

/// 2つの文字列の類似度（0.0〜1.0）を計算する
///
/// 大文字小文字と前後の空白は無視する。引数の順序を入れ替えても結果は同じ。
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return CONTAINMENT_SCORE;
    }

    let tokens_a = tokenize(&a);
    let tokens_b = tokenize(&b);

    let denominator = tokens_a.len().max(tokens_b.len());
    if denominator == 0 {
        return 0.0;
    }

    let matches = tokens_a
        .iter()
        .filter(|&&ta| {
            tokens_b
                .iter()
                .any(|&tb| ta == tb || ta.contains(tb) || tb.contains(ta))
        })
        .count();

    matches as f64 / denominator as f64
}

fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}
