//! キーワード辞書
//!
//! 並び順に意味がある。品種・スタイル・産地は「先頭から見て最初に一致したもの」を採用するため、
//! ソートや重複除去をすると別のキーワードが選ばれるようになる。

/// ワイン判定・品種抽出用キーワード
pub const WINE_KEYWORDS: &[&str] = &[
    "cabernet sauvignon",
    "merlot",
    "pinot noir",
    "chardonnay",
    "sauvignon blanc",
    "riesling",
    "syrah",
    "shiraz",
    "zinfandel",
    "malbec",
    "tempranillo",
    "sangiovese",
    "nebbiolo",
    "grenache",
    "pinot grigio",
    "pinot gris",
    "cabernet franc",
    "petit verdot",
    "viognier",
    "chenin blanc",
    "gewurztraminer",
    "moscato",
    "prosecco",
    "champagne",
    "cava",
    "rosé",
    "rose",
    "red wine",
    "white wine",
    "sparkling",
    "wine",
    "winery",
    "vineyard",
    "vineyards",
    "estate",
    "reserve",
    "chateau",
    "château",
    "domaine",
    "appellation",
    "cuvée",
    "cuvee",
];

/// スピリッツ判定・スタイル抽出用キーワード
pub const SPIRIT_KEYWORDS: &[&str] = &[
    "single malt",
    "single grain",
    "blended malt",
    "blended scotch",
    "scotch",
    "whisky",
    "whiskey",
    "bourbon",
    "rye",
    "vodka",
    "gin",
    "rum",
    "tequila",
    "mezcal",
    "brandy",
    "cognac",
    "armagnac",
    "calvados",
    "liqueur",
    "absinthe",
    "cask strength",
    "small batch",
    "single barrel",
    "distillery",
    "distilled",
    "proof",
];

/// ワイン産地
pub const WINE_REGIONS: &[&str] = &[
    "bordeaux",
    "burgundy",
    "bourgogne",
    "champagne",
    "rhone",
    "loire",
    "alsace",
    "napa valley",
    "napa",
    "sonoma",
    "paso robles",
    "willamette valley",
    "tuscany",
    "toscana",
    "piedmont",
    "piemonte",
    "rioja",
    "ribera del duero",
    "priorat",
    "mosel",
    "barossa",
    "mclaren vale",
    "marlborough",
    "mendoza",
    "douro",
];

/// スピリッツ産地
pub const SPIRIT_REGIONS: &[&str] = &[
    "speyside",
    "islay",
    "highlands",
    "highland",
    "lowlands",
    "lowland",
    "campbeltown",
    "kentucky",
    "tennessee",
    "jalisco",
    "oaxaca",
    "cognac",
    "armagnac",
    "scotland",
    "ireland",
    "japan",
];

/// 産地の走査順（ワイン産地 → スピリッツ産地）
pub fn all_regions() -> impl Iterator<Item = &'static str> {
    WINE_REGIONS.iter().chain(SPIRIT_REGIONS.iter()).copied()
}
