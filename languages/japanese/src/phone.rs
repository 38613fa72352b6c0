use atena_core::width::{extract_digits, is_space};

use crate::area_codes::{AreaCodeTable, MOBILE_PREFIXES};

/// Japanese telephone hyphenation.
///
/// Output is half-width digits and hyphens. Unrecognized numbers come back
/// as bare digits; nothing here fails.
#[derive(Debug, Clone)]
pub struct PhoneNormalizer {
    area_codes: AreaCodeTable,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new(AreaCodeTable::with_defaults())
    }
}

impl PhoneNormalizer {
    pub fn new(area_codes: AreaCodeTable) -> Self {
        Self { area_codes }
    }

    /// Every number in a raw field, formatted, in field order
    pub fn normalize_field(&self, raw: &str) -> Vec<String> {
        split_phone_tokens(raw)
            .into_iter()
            .map(extract_digits)
            .filter(|digits| !digits.is_empty())
            .map(|digits| self.format_digits(&digits))
            .collect()
    }

    /// Hyphenate one digit string
    pub fn format_digits(&self, digits: &str) -> String {
        let digits = repair_leading_zero(digits);
        let len = digits.len();

        if len == 11 && MOBILE_PREFIXES.iter().any(|p| digits.starts_with(p)) {
            return group(&digits, &[3, 4, 4]);
        }
        if len == 11 && digits.starts_with("050") {
            return group(&digits, &[3, 4, 4]);
        }
        if len == 10 && (digits.starts_with("0120") || digits.starts_with("0800")) {
            return group(&digits, &[4, 3, 3]);
        }
        if len == 10 && digits.starts_with("0570") {
            return group(&digits, &[4, 2, 4]);
        }

        if let Some(code) = self.area_codes.longest_match(&digits) {
            let rest = &digits[code.len()..];
            return match rest.len() {
                8 => group(&digits, &[code.len(), 4, 4]),
                7 => group(&digits, &[code.len(), 3, 4]),
                6 => group(&digits, &[code.len(), 2, 4]),
                5 => group(&digits, &[code.len(), 1, 4]),
                0 => code.to_string(),
                _ => format!("{code}-{rest}"),
            };
        }

        match len {
            9 => group(&digits, &[2, 3, 4]),
            10 => group(&digits, &[2, 4, 4]),
            11 => group(&digits, &[3, 4, 4]),
            _ => digits,
        }
    }
}

/// Split on ":::", ";", ",", "、" and whitespace
pub fn split_phone_tokens(raw: &str) -> Vec<&str> {
    raw.split(":::")
        .flat_map(|part| part.split(|c: char| matches!(c, ';' | ',' | '、') || is_space(c)))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Nine or ten digits without the trunk prefix get it back
fn repair_leading_zero(digits: &str) -> String {
    if matches!(digits.len(), 9 | 10) && !digits.starts_with('0') {
        format!("0{digits}")
    } else {
        digits.to_string()
    }
}

/// Join consecutive chunks of the given sizes with '-'
fn group(digits: &str, sizes: &[usize]) -> String {
    let mut parts = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for size in sizes {
        let end = (start + size).min(digits.len());
        parts.push(&digits[start..end]);
        start = end;
    }
    if start < digits.len() {
        parts.push(&digits[start..]);
    }
    parts.retain(|p| !p.is_empty());
    parts.join("-")
}
