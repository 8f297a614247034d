//! ラベルテキストパーサー
//!
//! OCRで読み取ったボトルラベルのテキストから属性を抽出する。
//!
//! 抽出順序:
//! 1. 種別判定（キーワード出現数）
//! 2. ヴィンテージ・度数・熟成年数（正規表現）
//! 3. 品種 / スタイル / 産地（辞書順で最初に一致した語）
//! 4. ブランド名・製品名（大文字比率のヒューリスティック）
//!
//! 失敗しない。見つからなかった属性は `None` のまま返す。

use crate::lexicon::{self, SPIRIT_KEYWORDS, WINE_KEYWORDS};
use crate::types::{BeverageType, ParsedData};
use chrono::Datelike;
use regex::Regex;

/// 名前候補として調べる先頭行数
const NAME_SCAN_LINES: usize = 5;
/// 製品名フォールバックで調べる行の終端（この行は含まない）
const PRODUCT_FALLBACK_END: usize = 4;
/// ヴィンテージとして許容する未来方向の年数
const VINTAGE_FUTURE_SLACK: i32 = 5;

lazy_static::lazy_static! {
    static ref VINTAGE_RE: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
    static ref ABV_RE: Regex = Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%\s*(?:alc|vol|abv)?").unwrap();
    static ref AGE_RE: Regex = Regex::new(r"(?i)(\d+)\s*-?\s*years?(?:\s*-?\s*old)?").unwrap();
    static ref FOUR_DIGITS_RE: Regex = Regex::new(r"^\d{4}$").unwrap();
    static ref BARE_YEAR_RE: Regex = Regex::new(r"^(?:19|20)\d{2}$").unwrap();

    static ref WINE_KEYWORD_RES: Vec<Regex> = whole_word_patterns(WINE_KEYWORDS.iter().copied());
    static ref SPIRIT_KEYWORD_RES: Vec<Regex> = whole_word_patterns(SPIRIT_KEYWORDS.iter().copied());
    static ref REGION_RES: Vec<Regex> = whole_word_patterns(lexicon::all_regions());
}

fn whole_word_patterns<'a>(keywords: impl Iterator<Item = &'a str>) -> Vec<Regex> {
    keywords
        .map(|k| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(k))).unwrap())
        .collect()
}

/// ラベルテキストを解析する（ヴィンテージ判定は現在の年を基準にする）
pub fn parse_label_text(text: &str) -> ParsedData {
    parse_label_text_with_year(text, chrono::Local::now().year())
}

/// 基準年を指定してラベルテキストを解析する
///
/// # Arguments
/// * `text` - OCRテキスト（改行区切り、空でもよい）
/// * `current_year` - ヴィンテージの上限判定に使う年
///
/// # Examples
/// ```
/// use label_scan_common::{parse_label_text_with_year, BeverageType};
///
/// let parsed = parse_label_text_with_year("MACALLAN\n18 Year\nSingle Malt\n43% abv", 2026);
/// assert_eq!(parsed.beverage_type, Some(BeverageType::Spirit));
/// assert_eq!(parsed.age_statement.as_deref(), Some("18 Year"));
/// ```
pub fn parse_label_text_with_year(text: &str, current_year: i32) -> ParsedData {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let lower = text.to_lowercase();

    let beverage_type = detect_beverage_type(&lower);
    let is_wine = beverage_type == Some(BeverageType::Wine);
    let is_spirit = beverage_type == Some(BeverageType::Spirit);
    let (brand_name, product_name) = extract_names(&lines);

    let parsed = ParsedData {
        brand_name,
        product_name,
        vintage: extract_vintage(text, current_year),
        beverage_type,
        varietal: if is_wine { find_first_keyword(text, &WINE_KEYWORD_RES) } else { None },
        region: find_first_keyword(text, &REGION_RES),
        abv: extract_abv(text),
        age_statement: if is_spirit { extract_age_statement(text) } else { None },
        style: if is_spirit { find_first_keyword(text, &SPIRIT_KEYWORD_RES) } else { None },
    };

    tracing::debug!(
        lines = lines.len(),
        brand = ?parsed.brand_name,
        product = ?parsed.product_name,
        beverage_type = ?parsed.beverage_type,
        "ラベルテキスト解析完了"
    );

    parsed
}

/// 種別を判定する（キーワードの部分一致数で比較、同数ならスピリッツ）
fn detect_beverage_type(lower: &str) -> Option<BeverageType> {
    let wine_score = count_keywords(lower, WINE_KEYWORDS);
    let spirit_score = count_keywords(lower, SPIRIT_KEYWORDS);

    if wine_score > spirit_score && wine_score > 0 {
        Some(BeverageType::Wine)
    } else if spirit_score > 0 {
        Some(BeverageType::Spirit)
    } else {
        None
    }
}

fn count_keywords(lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lower.contains(*k)).count()
}

/// 最初に見つかった年のみ判定する（範囲外でも次の候補は探さない）
fn extract_vintage(text: &str, current_year: i32) -> Option<String> {
    let found = VINTAGE_RE.find(text)?;
    let year: i32 = found.as_str().parse().ok()?;

    if (1900..=current_year.saturating_add(VINTAGE_FUTURE_SLACK)).contains(&year) {
        Some(found.as_str().to_string())
    } else {
        None
    }
}

fn extract_abv(text: &str) -> Option<f64> {
    ABV_RE
        .captures(text)
        .and_then(|cap| cap[1].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn extract_age_statement(text: &str) -> Option<String> {
    AGE_RE
        .captures(text)
        .map(|cap| format!("{} Year", &cap[1]))
}

/// 辞書順で最初に単語一致したキーワードを返す（一致した表記を先頭大文字化）
fn find_first_keyword(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| capitalize(m.as_str()))
}

/// 先頭文字を大文字、残りを小文字にする
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().collect::<String>() + &rest
        }
        None => String::new(),
    }
}

/// 大文字の多い行をブランド名・製品名とみなす
fn extract_names(lines: &[&str]) -> (Option<String>, Option<String>) {
    let mut brand_name: Option<String> = None;
    let mut product_name: Option<String> = None;

    for line in lines.iter().take(NAME_SCAN_LINES) {
        let length = line.chars().count();
        if length < 3 || FOUR_DIGITS_RE.is_match(line) {
            continue;
        }
        if !looks_like_name(line, length) {
            continue;
        }

        if brand_name.is_none() {
            brand_name = Some(line.to_string());
        } else if product_name.is_none() && brand_name.as_deref() != Some(*line) {
            product_name = Some(line.to_string());
        }
    }

    // ブランド名が決まらなければ先頭行をそのまま使う
    if brand_name.is_none() {
        brand_name = lines.first().map(|line| line.to_string());
    }

    if product_name.is_none() {
        product_name = lines
            .iter()
            .take(PRODUCT_FALLBACK_END)
            .skip(1)
            .find(|line| {
                line.chars().count() > 3
                    && brand_name.as_deref() != Some(**line)
                    && !BARE_YEAR_RE.is_match(line)
            })
            .map(|line| line.to_string());
    }

    (brand_name, product_name)
}

fn looks_like_name(line: &str, length: usize) -> bool {
    let capitals = line.chars().filter(|c| c.is_ascii_uppercase()).count();
    let letters = line.chars().filter(|c| c.is_ascii_alphabetic()).count();

    capitals >= 2 && capitals as f64 / letters as f64 >= 0.3 && length < 50
}
