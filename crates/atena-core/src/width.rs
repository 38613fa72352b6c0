//! Character width helpers.
//!
//! Addresses and company readings render full-width; phones, postal codes
//! and e-mail addresses render half-width.

use unicode_normalization::UnicodeNormalization;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Full-width minus used for every hyphen-like glyph
pub const FULLWIDTH_MINUS: char = '\u{FF0D}';

/// NFKC normalization
pub fn nfkc(text: &str) -> String {
    text.nfkc().collect()
}

fn is_hyphen_like(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}'
    )
}

fn is_halfwidth_katakana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

/// ASCII (0x21-0x7E) and space to full-width, half-width katakana widened.
///
/// Hyphen variants all become `－` (U+FF0D).
pub fn to_fullwidth(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    let mut kana_run = String::new();

    for c in text.chars() {
        if is_halfwidth_katakana(c) {
            kana_run.push(c);
            continue;
        }
        if !kana_run.is_empty() {
            // NFKC composes ｶﾞ into ガ
            out.extend(kana_run.nfkc());
            kana_run.clear();
        }

        match c {
            ' ' => out.push(IDEOGRAPHIC_SPACE),
            c if is_hyphen_like(c) => out.push(FULLWIDTH_MINUS),
            '\u{21}'..='\u{7E}' => out.push(char::from_u32(c as u32 + 0xFEE0).unwrap_or(c)),
            _ => out.push(c),
        }
    }
    if !kana_run.is_empty() {
        out.extend(kana_run.nfkc());
    }

    out
}

/// Half-width ASCII digits of `text`, full-width digits included
pub fn extract_digits(text: &str) -> String {
    text.nfkc().filter(|c| c.is_ascii_digit()).collect()
}

/// ぁ..ゖ shifted into the katakana block
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// ASCII space, tab, newline or ideographic space
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == IDEOGRAPHIC_SPACE
}

/// Collapse whitespace runs (ideographic space included) to one ASCII space and trim
pub fn compact_spaces(text: &str) -> String {
    text.split(is_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
