use aho_corasick::{AhoCorasick, MatchKind};

use atena_core::width::{compact_spaces, is_space, to_fullwidth};

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Building/room words, already full-width
const BUILDING_KEYWORDS: &[&str] = &[
    "ビル", "ビルディング", "タワー", "マンション", "ハイツ", "コーポ", "レジデンス",
    "メゾン", "パレス", "ヒルズ", "ハウス", "コート", "プラザ", "センター", "テラス",
    "ガーデン", "アパート", "荘", "寮", "棟", "号棟", "号館", "館", "階", "号室", "号",
    "室", "フロア", "Ｆ", "ＢＬＤＧ", "Ｂｌｄｇ", "建物",
];

/// Address sub-fields of one slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts<'a> {
    pub region: &'a str,
    pub city: &'a str,
    pub street: &'a str,
    pub extended: &'a str,
    pub formatted: &'a str,
}

impl AddressParts<'_> {
    pub fn is_empty(&self) -> bool {
        [self.region, self.city, self.street, self.extended, self.formatted]
            .iter()
            .all(|part| part.trim().is_empty())
    }
}

/// Address lines ready for the label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressLines {
    pub line1: String,
    pub line2: String,
    pub line3: String,
}

/// Proposes a byte offset where the building part starts
pub trait SplitDetector: Send + Sync {
    fn name(&self) -> &'static str;
    fn split_point(&self, body: &str) -> Option<usize>;
}

/// `#` or `＃` anywhere but the first character
pub struct RoomMarker;

impl SplitDetector for RoomMarker {
    fn name(&self) -> &'static str {
        "room_marker"
    }

    fn split_point(&self, body: &str) -> Option<usize> {
        body.char_indices()
            .find(|&(i, c)| i > 0 && (c == '#' || c == '＃'))
            .map(|(i, _)| i)
    }
}

/// Building keyword.
///
/// In a later word the split lands at the start of that word. Inside the
/// first word it lands where the name begins after the street number, so
/// `本町１－２－３ハイツ本町２０１` splits before `ハイツ`. A keyword ending a
/// street number (`３号`) or with no street number before it (`函館市`)
/// gives no split point.
pub struct KeywordSet {
    matcher: Option<AhoCorasick>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(keywords.iter().map(|k| k.as_ref()));
        match matcher {
            Ok(matcher) => Self {
                matcher: Some(matcher),
            },
            Err(e) => {
                tracing::error!("Failed to build building keyword matcher: {}", e);
                Self { matcher: None }
            }
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(BUILDING_KEYWORDS)
    }
}

impl SplitDetector for KeywordSet {
    fn name(&self) -> &'static str {
        "building_keyword"
    }

    fn split_point(&self, body: &str) -> Option<usize> {
        let matcher = self.matcher.as_ref()?;
        let first_word_end = body.find(is_space).unwrap_or(body.len());

        matcher.find_iter(body).find_map(|m| {
            if m.start() >= first_word_end {
                return Some(word_start(body, m.start()));
            }
            if body[m.end()..first_word_end].chars().all(is_street_number) {
                return None;
            }
            name_start(body, m.start())
        })
    }
}

fn is_street_number(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c) || c == '－'
}

/// Offset just past the last street-number character before `offset`
fn name_start(body: &str, offset: usize) -> Option<usize> {
    body[..offset]
        .char_indices()
        .rev()
        .find(|&(_, c)| is_street_number(c))
        .map(|(i, c)| i + c.len_utf8())
}

/// First whitespace run
pub struct FirstWhitespace;

impl SplitDetector for FirstWhitespace {
    fn name(&self) -> &'static str {
        "first_whitespace"
    }

    fn split_point(&self, body: &str) -> Option<usize> {
        body.char_indices()
            .find(|&(i, c)| i > 0 && is_space(c))
            .map(|(i, _)| i)
    }
}

fn word_start(body: &str, offset: usize) -> usize {
    body[..offset]
        .char_indices()
        .rev()
        .find(|&(_, c)| is_space(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Splits an address body into street and building lines.
///
/// Detectors run in order and the first one with a split point wins.
pub struct AddressSegmenter {
    detectors: Vec<Box<dyn SplitDetector>>,
}

impl Default for AddressSegmenter {
    fn default() -> Self {
        Self::new(vec![
            Box::new(RoomMarker),
            Box::new(KeywordSet::with_defaults()),
            Box::new(FirstWhitespace),
        ])
    }
}

impl AddressSegmenter {
    pub fn new(detectors: Vec<Box<dyn SplitDetector>>) -> Self {
        Self { detectors }
    }

    pub fn segment(&self, parts: &AddressParts<'_>) -> AddressLines {
        let mut body = format!(
            "{}{}{}",
            parts.region.trim(),
            parts.city.trim(),
            parts.street.trim()
        );
        if body.is_empty() {
            body = compact_spaces(parts.formatted);
        }
        let body = to_fullwidth(body.trim());

        let (line1, mut line2) = self.split(&body);

        let extended = to_fullwidth(parts.extended.trim());
        if !extended.is_empty() {
            if !line2.is_empty() {
                line2.push(IDEOGRAPHIC_SPACE);
            }
            line2.push_str(&extended);
        }

        AddressLines {
            line1,
            line2,
            line3: String::new(),
        }
    }

    fn split(&self, body: &str) -> (String, String) {
        for detector in &self.detectors {
            if let Some(at) = detector.split_point(body) {
                tracing::trace!("Address split by {} at {}", detector.name(), at);
                let (head, tail) = body.split_at(at);
                return (
                    head.trim_end_matches(is_space).to_string(),
                    tail.trim_start_matches(is_space).to_string(),
                );
            }
        }
        (body.to_string(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn street(street: &str) -> AddressParts<'_> {
        AddressParts {
            street,
            ..Default::default()
        }
    }

    #[test]
    fn test_building_keyword_split() {
        let lines = AddressSegmenter::default().segment(&street("宇田川７－１３　第二共同ビル　５Ｆ"));
        assert_eq!(lines.line1, "宇田川７－１３");
        assert_eq!(lines.line2, "第二共同ビル　５Ｆ");
        assert_eq!(lines.line3, "");
    }

    #[test]
    fn test_street_number_stays_on_line1() {
        let lines = AddressSegmenter::default().segment(&street("本町１丁目２番３号"));
        assert_eq!(lines.line1, "本町１丁目２番３号");
        assert_eq!(lines.line2, "");
    }

    #[test]
    fn test_building_keyword_split_without_spaces() {
        let parts = AddressParts {
            region: "東京都",
            city: "渋谷区",
            street: "本町1-2-3ハイツ本町201",
            ..Default::default()
        };
        let lines = AddressSegmenter::default().segment(&parts);
        assert_eq!(lines.line1, "東京都渋谷区本町１－２－３");
        assert_eq!(lines.line2, "ハイツ本町２０１");
    }

    #[test]
    fn test_building_name_before_keyword_moves_to_line2() {
        let lines = AddressSegmenter::default().segment(&street("宇田川町7-13第二共同ビル5F"));
        assert_eq!(lines.line1, "宇田川町７－１３");
        assert_eq!(lines.line2, "第二共同ビル５Ｆ");
    }

    #[test]
    fn test_keyword_inside_place_name_is_ignored() {
        let parts = AddressParts {
            region: "北海道",
            city: "函館市",
            street: "本町1-2",
            ..Default::default()
        };
        let lines = AddressSegmenter::default().segment(&parts);
        assert_eq!(lines.line1, "北海道函館市本町１－２");
        assert_eq!(lines.line2, "");
    }

    #[test]
    fn test_room_marker_wins() {
        let lines = AddressSegmenter::default().segment(&street("本町1-2-3 ハイツ本町#201"));
        assert_eq!(lines.line1, "本町１－２－３　ハイツ本町");
        assert_eq!(lines.line2, "＃２０１");
    }

    #[test]
    fn test_first_whitespace_fallback() {
        let lines = AddressSegmenter::default().segment(&street("本町1-2-3 山田方"));
        assert_eq!(lines.line1, "本町１－２－３");
        assert_eq!(lines.line2, "山田方");
    }

    #[test]
    fn test_region_city_joined_without_separator() {
        let parts = AddressParts {
            region: "東京都",
            city: "渋谷区",
            street: "宇田川町7-13",
            extended: "3F",
            formatted: "",
        };
        let lines = AddressSegmenter::default().segment(&parts);
        assert_eq!(lines.line1, "東京都渋谷区宇田川町７－１３");
        assert_eq!(lines.line2, "３Ｆ");
    }

    #[test]
    fn test_extended_appended_to_line2() {
        let parts = AddressParts {
            street: "宇田川町7-13 共同ビル",
            extended: "5F",
            ..Default::default()
        };
        let lines = AddressSegmenter::default().segment(&parts);
        assert_eq!(lines.line2, "共同ビル　５Ｆ");
    }

    #[test]
    fn test_formatted_fallback() {
        let parts = AddressParts {
            formatted: "東京都渋谷区\n宇田川町7-13",
            ..Default::default()
        };
        let lines = AddressSegmenter::default().segment(&parts);
        assert_eq!(lines.line1, "東京都渋谷区");
        assert_eq!(lines.line2, "宇田川町７－１３");
    }

    #[test]
    fn test_empty_parts() {
        assert!(AddressParts::default().is_empty());
        assert_eq!(
            AddressSegmenter::default().segment(&AddressParts::default()),
            AddressLines::default()
        );
    }
}
