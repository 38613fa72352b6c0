use atena_config::policy::{ExceptionLookup, KanaStageOrder};
use atena_core::width::{compact_spaces, hiragana_to_katakana, nfkc, to_fullwidth};

use crate::kana_dictionary::{CorpTerms, KanaDictionary};

const DROPPED_PUNCTUATION: &[char] = &['・', '．', '。', ',', '，', '.', '･'];

/// Katakana letter names, A..Z
const LETTER_NAMES: [&str; 26] = [
    "エー", "ビー", "シー", "ディー", "イー", "エフ", "ジー", "エイチ", "アイ", "ジェイ", "ケー",
    "エル", "エム", "エヌ", "オー", "ピー", "キュー", "アール", "エス", "ティー", "ユー", "ブイ",
    "ダブリュー", "エックス", "ワイ", "ゼット",
];

/// Company name → full-width katakana reading (会社名かな)
#[derive(Debug, Clone)]
pub struct CompanyKanaTransliterator {
    dictionary: KanaDictionary,
    exception_lookup: ExceptionLookup,
    stage_order: KanaStageOrder,
}

impl Default for CompanyKanaTransliterator {
    fn default() -> Self {
        Self::new(
            KanaDictionary::with_defaults(),
            ExceptionLookup::default(),
            KanaStageOrder::default(),
        )
    }
}

impl CompanyKanaTransliterator {
    pub fn new(
        dictionary: KanaDictionary,
        exception_lookup: ExceptionLookup,
        stage_order: KanaStageOrder,
    ) -> Self {
        Self {
            dictionary,
            exception_lookup,
            stage_order,
        }
    }

    pub fn transliterate(&self, name: &str) -> String {
        let name = nfkc(name.trim());
        if name.is_empty() {
            return String::new();
        }

        if matches!(self.exception_lookup, ExceptionLookup::BeforeStrip | ExceptionLookup::Both) {
            if let Some(reading) = self.dictionary.exceptions.get(&name) {
                return finish(reading);
            }
        }

        let stripped = strip_corp_terms(&name, &self.dictionary.corp_terms);

        if matches!(self.exception_lookup, ExceptionLookup::AfterStrip | ExceptionLookup::Both) {
            if let Some(reading) = self.dictionary.exceptions.get(&stripped) {
                return finish(reading);
            }
        }

        let text: String = stripped
            .chars()
            .filter(|c| !DROPPED_PUNCTUATION.contains(c))
            .collect();

        let text = match self.stage_order {
            KanaStageOrder::LettersFirst => self.dictionary.words.apply(&spell_letters(&text)),
            KanaStageOrder::DictionaryFirst => {
                spell_letters(&self.dictionary.words.apply(&text.to_ascii_uppercase()))
            }
        };

        finish(&text)
    }
}

fn finish(text: &str) -> String {
    let text = hiragana_to_katakana(&compact_spaces(text));
    to_fullwidth(&text).trim().to_string()
}

/// Remove legal-entity forms at either end until none is left
pub fn strip_corp_terms(name: &str, terms: &CorpTerms) -> String {
    let mut current = name.trim().to_string();
    loop {
        let before = current.len();
        for term in terms.iter() {
            if let Some(rest) = strip_term_prefix(&current, term) {
                current = rest.trim().to_string();
            }
            if let Some(rest) = strip_term_suffix(&current, term) {
                current = rest.trim().to_string();
            }
        }
        if current.len() == before || current.is_empty() {
            return current;
        }
    }
}

fn starts_latin(term: &str) -> bool {
    term.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn strip_term_prefix<'a>(text: &'a str, term: &str) -> Option<&'a str> {
    let head = text.get(..term.len())?;
    if !head.eq_ignore_ascii_case(term) {
        return None;
    }
    let rest = &text[term.len()..];
    // "Incubate" must not lose "Inc"
    let ends_latin = term.chars().last().is_some_and(|c| c.is_ascii_alphabetic());
    if ends_latin && rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(rest)
}

fn strip_term_suffix<'a>(text: &'a str, term: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(term.len())?;
    let tail = text.get(split..)?;
    if !tail.eq_ignore_ascii_case(term) {
        return None;
    }
    let rest = &text[..split];
    if starts_latin(term) && rest.chars().last().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(rest)
}

/// Each run of Latin letters spelled out letter by letter
pub fn spell_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            out.push_str(LETTER_NAMES[(upper as u8 - b'A') as usize]);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kana(name: &str) -> String {
        CompanyKanaTransliterator::default().transliterate(name)
    }

    #[test]
    fn test_exception_after_strip() {
        assert_eq!(
            kana("株式会社ＮＨＫエデュケーショナル"),
            "エヌエイチケーエデュケーショナル"
        );
    }

    #[test]
    fn test_exception_policy_before_strip_only() {
        let t = CompanyKanaTransliterator::new(
            KanaDictionary::with_defaults(),
            ExceptionLookup::BeforeStrip,
            KanaStageOrder::LettersFirst,
        );
        // falls through to the letter/dictionary stages
        assert_eq!(
            t.transliterate("株式会社ＮＨＫエデュケーショナル"),
            "エヌエイチケーエデュケーショナル"
        );
        assert_eq!(t.transliterate("ＮＨＫ出版"), "エヌエイチケーシュッパン");
    }

    #[test]
    fn test_corp_terms_both_ends() {
        assert_eq!(kana("株式会社講談社"), "コウダンシャ");
        assert_eq!(kana("小学館 株式会社"), "ショウガクカン");
        assert_eq!(kana("㈱集英社"), "シュウエイシャ");
        assert_eq!(kana("学校法人 東京大学"), "トウキョウダイガク");
    }

    #[test]
    fn test_latin_corp_terms_need_boundary() {
        let terms = CorpTerms::with_defaults();
        assert_eq!(strip_corp_terms("Acme Co., Ltd.", &terms), "Acme");
        assert_eq!(strip_corp_terms("Zinc", &terms), "Zinc");
        assert_eq!(strip_corp_terms("Incubator", &terms), "Incubator");
        assert_eq!(strip_corp_terms("Foo Inc.", &terms), "Foo");
    }

    #[test]
    fn test_letters_spelled() {
        assert_eq!(kana("ABC商事"), "エービーシーショウジ");
        assert_eq!(kana("ｘｙｚ"), "エックスワイゼット");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(kana("日本・電気"), "ニホンデンキ");
    }

    #[test]
    fn test_dictionary_first_reads_words() {
        let t = CompanyKanaTransliterator::new(
            KanaDictionary::with_defaults(),
            ExceptionLookup::Both,
            KanaStageOrder::DictionaryFirst,
        );
        assert_eq!(t.transliterate("Design Works"), "デザイン　ワークス");
        assert_eq!(t.transliterate("XYZ Design"), "エックスワイゼット　デザイン");
    }

    #[test]
    fn test_hiragana_folded_and_width() {
        assert_eq!(kana("さくら 出版"), "サクラ　シュッパン");
    }

    #[test]
    fn test_unknown_text_mostly_unchanged() {
        assert_eq!(kana("山田屋"), "山田屋");
        assert_eq!(kana("   "), "");
    }

    #[test]
    fn test_spell_letters() {
        assert_eq!(spell_letters("aZ1"), "エーゼット1");
    }
}
