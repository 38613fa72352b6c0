use std::collections::{BTreeMap, HashMap};

use aho_corasick::{AhoCorasick, MatchKind};

use atena_core::width::nfkc;

/// Whole-name readings that bypass the pipeline
const DEFAULT_EXCEPTIONS: &[(&str, &str)] = &[
    ("ＮＨＫエデュケーショナル", "エヌエイチケーエデュケーショナル"),
    ("ＮＨＫ出版", "エヌエイチケーシュッパン"),
    ("ＰＨＰ研究所", "ピーエイチピーケンキュウジョ"),
    ("ＫＡＤＯＫＡＷＡ", "カドカワ"),
    ("紀伊國屋書店", "キノクニヤショテン"),
    ("文藝春秋", "ブンゲイシュンジュウ"),
];

/// Word readings, kanji business terms first, then English words
const DEFAULT_WORDS: &[(&str, &str)] = &[
    // publishers and media
    ("講談社", "コウダンシャ"), ("小学館", "ショウガクカン"), ("集英社", "シュウエイシャ"),
    ("新潮社", "シンチョウシャ"), ("光文社", "コウブンシャ"), ("幻冬舎", "ゲントウシャ"),
    ("岩波", "イワナミ"), ("角川", "カドカワ"), ("丸善", "マルゼン"), ("朝日", "アサヒ"),
    ("毎日", "マイニチ"), ("読売", "ヨミウリ"), ("日経", "ニッケイ"), ("出版", "シュッパン"),
    ("書店", "ショテン"), ("書房", "ショボウ"), ("新聞", "シンブン"), ("放送", "ホウソウ"),
    ("編集", "ヘンシュウ"), ("印刷", "インサツ"), ("広告", "コウコク"), ("映画", "エイガ"),
    ("音楽", "オンガク"), ("写真", "シャシン"), ("美術", "ビジュツ"), ("芸術", "ゲイジュツ"),
    // places
    ("日本", "ニホン"), ("東京", "トウキョウ"), ("大阪", "オオサカ"), ("京都", "キョウト"),
    ("名古屋", "ナゴヤ"), ("横浜", "ヨコハマ"), ("中央", "チュウオウ"), ("国際", "コクサイ"),
    // business terms
    ("商事", "ショウジ"), ("商会", "ショウカイ"), ("商店", "ショウテン"), ("物産", "ブッサン"),
    ("工業", "コウギョウ"), ("産業", "サンギョウ"), ("建設", "ケンセツ"), ("不動産", "フドウサン"),
    ("銀行", "ギンコウ"), ("証券", "ショウケン"), ("保険", "ホケン"), ("電気", "デンキ"),
    ("電機", "デンキ"), ("電力", "デンリョク"), ("鉄道", "テツドウ"), ("航空", "コウクウ"),
    ("運輸", "ウンユ"), ("交通", "コウツウ"), ("通信", "ツウシン"), ("情報", "ジョウホウ"),
    ("技術", "ギジュツ"), ("開発", "カイハツ"), ("設計", "セッケイ"), ("製作所", "セイサクショ"),
    ("製作", "セイサク"), ("製薬", "セイヤク"), ("化学", "カガク"), ("食品", "ショクヒン"),
    ("企画", "キカク"), ("事業", "ジギョウ"), ("総合", "ソウゴウ"), ("研究所", "ケンキュウジョ"),
    ("研究", "ケンキュウ"), ("事務所", "ジムショ"), ("協会", "キョウカイ"), ("文化", "ブンカ"),
    ("教育", "キョウイク"), ("大学", "ダイガク"), ("学校", "ガッコウ"), ("病院", "ビョウイン"),
    ("会館", "カイカン"), ("本社", "ホンシャ"), ("第一", "ダイイチ"), ("三井", "ミツイ"),
    ("三菱", "ミツビシ"), ("住友", "スミトモ"),
    // English words
    ("MAIN", "メイン"), ("BASE", "ベース"), ("CORE", "コア"), ("SYSTEM", "システム"),
    ("DIGITAL", "デジタル"), ("CREATIVE", "クリエイティブ"), ("GLOBAL", "グローバル"),
    ("FUTURE", "フューチャー"), ("NEXT", "ネクスト"), ("PRESS", "プレス"), ("BOOK", "ブック"),
    ("BOOKS", "ブックス"), ("STUDIO", "スタジオ"), ("DESIGN", "デザイン"), ("WORKS", "ワークス"),
    ("LAB", "ラボ"), ("LABO", "ラボ"), ("PROJECT", "プロジェクト"), ("PRODUCTION", "プロダクション"),
    ("COMMUNICATIONS", "コミュニケーションズ"), ("MEDIA", "メディア"), ("TECH", "テック"),
    ("ENGINEERING", "エンジニアリング"), ("CONSULTING", "コンサルティング"),
    ("SERVICE", "サービス"), ("GROUP", "グループ"), ("HOLDINGS", "ホールディングス"),
    ("FOUNDATION", "ファウンデーション"), ("ASSOCIATION", "アソシエーション"),
    ("COMPANY", "カンパニー"), ("ENTERPRISE", "エンタープライズ"), ("PARTNERS", "パートナーズ"),
    ("WORKSHOP", "ワークショップ"), ("PHP", "ピーエイチピー"), ("AI", "エーアイ"), ("ART", "アート"),
    ("CENTER", "センター"), ("INSTITUTE", "インスティテュート"), ("UNION", "ユニオン"),
    ("BANK", "バンク"), ("SOCIETY", "ソサエティ"), ("JAPAN", "ジャパン"), ("OFFICE", "オフィス"),
    ("NHK", "エヌエイチケー"), ("KADOKAWA", "カドカワ"), ("STAND", "スタンド"), ("NEO", "ネオ"),
    ("REAL", "リアル"), ("MARUZEN", "マルゼン"), ("YADOKARI", "ヤドカリ"), ("TOI", "トイ"),
    ("PLAN", "プラン"), ("ALL", "オール"), ("REVIEWS", "レビューズ"), ("COUNTER", "カウンター"),
    ("ODD", "オッド"),
];

/// Legal-entity forms removed before reading the name
const DEFAULT_CORP_TERMS: &[&str] = &[
    "株式会社", "有限会社", "合同会社", "合名会社", "合資会社", "一般社団法人", "一般財団法人",
    "公益社団法人", "公益財団法人", "社団法人", "財団法人", "学校法人", "医療法人",
    "社会福祉法人", "特定非営利活動法人", "ＮＰＯ法人", "宗教法人", "独立行政法人",
    "国立大学法人", "（株）", "（有）", "（合）", "（同）", "（社）", "（財）", "（学）", "（医）",
    "㈱", "㈲", "㈳", "㈶", "Co., Ltd.", "Co.,Ltd.", "Co. Ltd.", "Ltd.", "Ltd", "Inc.", "Inc",
    "LLC", "Corp.", "Corporation", "K.K.",
];

/// Exact-name exceptions, keyed by NFKC form
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: HashMap<String, String>,
}

impl ExceptionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.extend(DEFAULT_EXCEPTIONS.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        table
    }

    /// Later entries override earlier ones with the same key
    pub fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, entries: I) {
        for (key, reading) in entries {
            let key = nfkc(key.trim());
            if key.is_empty() {
                continue;
            }
            self.entries.insert(key, reading.trim().to_string());
        }
    }

    /// Probe is NFKC-normalized before lookup
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&nfkc(name.trim())).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Substring readings applied leftmost-longest in one pass.
///
/// Keys are NFKC-normalized and Latin keys upper-cased, so the automaton
/// only has to see normalized text.
#[derive(Debug, Clone, Default)]
pub struct WordMap {
    words: BTreeMap<String, String>,
    matcher: Option<AhoCorasick>,
    readings: Vec<String>,
}

impl WordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut map = Self::new();
        map.extend(DEFAULT_WORDS.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        map
    }

    pub fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, entries: I) {
        for (key, reading) in entries {
            let key = nfkc(key.trim()).to_ascii_uppercase();
            if key.is_empty() {
                continue;
            }
            self.words.insert(key, reading.trim().to_string());
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let built = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(self.words.keys());
        match built {
            Ok(matcher) => {
                self.matcher = Some(matcher);
                self.readings = self.words.values().cloned().collect();
            }
            Err(e) => {
                tracing::error!("Failed to build word map automaton: {}", e);
                self.matcher = None;
                self.readings.clear();
            }
        }
    }

    /// Replace every known word; text is returned unchanged without a matcher
    pub fn apply(&self, text: &str) -> String {
        match &self.matcher {
            Some(matcher) if !self.readings.is_empty() => matcher.replace_all(text, &self.readings),
            _ => text.to_string(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Legal-entity forms, longest first
#[derive(Debug, Clone, Default)]
pub struct CorpTerms {
    terms: Vec<String>,
}

impl CorpTerms {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn with_defaults() -> Self {
        let mut terms = Self::new();
        terms.extend(DEFAULT_CORP_TERMS.iter().map(|t| t.to_string()));
        terms
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, terms: I) {
        for term in terms {
            let term = nfkc(term.trim());
            if !term.is_empty() && !self.terms.contains(&term) {
                self.terms.push(term);
            }
        }
        // Stable sort keeps insertion order among equal lengths
        self.terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Every table the company-kana pipeline reads
#[derive(Debug, Clone, Default)]
pub struct KanaDictionary {
    pub exceptions: ExceptionTable,
    pub words: WordMap,
    pub corp_terms: CorpTerms,
}

impl KanaDictionary {
    pub fn with_defaults() -> Self {
        Self {
            exceptions: ExceptionTable::with_defaults(),
            words: WordMap::with_defaults(),
            corp_terms: CorpTerms::with_defaults(),
        }
    }
}
