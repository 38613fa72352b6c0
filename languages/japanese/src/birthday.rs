use std::sync::OnceLock;

use atena_core::width::nfkc;
use regex::Regex;

static YEAR_FIRST: OnceLock<Regex> = OnceLock::new();
static YEAR_LAST: OnceLock<Regex> = OnceLock::new();
static YEARLESS: OnceLock<Regex> = OnceLock::new();

/// `1985-04-03`, `1985/4/3`, `1985.4.3`, `1985年4月3日`
fn year_first() -> &'static Regex {
    YEAR_FIRST.get_or_init(|| {
        Regex::new(r"^([1-9][0-9]{3})\s*[-/.年]\s*([0-9]{1,2})\s*[-/.月]\s*([0-9]{1,2})\s*日?$")
            .expect("Invalid year-first birthday pattern")
    })
}

/// `4/3/1985`
fn year_last() -> &'static Regex {
    YEAR_LAST.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})[-/.]([0-9]{1,2})[-/.]([1-9][0-9]{3})$")
            .expect("Invalid year-last birthday pattern")
    })
}

/// Google's year-less `--04-03`
fn yearless() -> &'static Regex {
    YEARLESS.get_or_init(|| {
        Regex::new(r"^--([0-9]{1,2})-([0-9]{1,2})$").expect("Invalid year-less birthday pattern")
    })
}

/// Birthday to `YYYY/MM/DD`, or `MM/DD` for year-less `--MM-DD`.
///
/// Unrecognized input is returned trimmed.
pub fn normalize_birthday(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let text = nfkc(trimmed);

    if let Some(caps) = yearless().captures(&text) {
        if let (Some(mm), Some(dd)) = (number(&caps[1]), number(&caps[2])) {
            if valid_month_day(mm, dd) {
                return format!("{mm:02}/{dd:02}");
            }
        }
        return trimmed.to_string();
    }

    let ymd = year_first()
        .captures(&text)
        .map(|caps| (number(&caps[1]), number(&caps[2]), number(&caps[3])))
        .or_else(|| {
            year_last()
                .captures(&text)
                .map(|caps| (number(&caps[3]), number(&caps[1]), number(&caps[2])))
        });

    match ymd {
        Some((Some(y), Some(mm), Some(dd))) if valid_month_day(mm, dd) => {
            format!("{y:04}/{mm:02}/{dd:02}")
        }
        _ => trimmed.to_string(),
    }
}

fn number(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

fn valid_month_day(month: u32, day: u32) -> bool {
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_and_variants() {
        assert_eq!(normalize_birthday("1985-04-03"), "1985/04/03");
        assert_eq!(normalize_birthday("1985/4/3"), "1985/04/03");
        assert_eq!(normalize_birthday("1985.4.3"), "1985/04/03");
        assert_eq!(normalize_birthday("1985年4月3日"), "1985/04/03");
        assert_eq!(normalize_birthday("１９８５年 ４月 ３日"), "1985/04/03");
    }

    #[test]
    fn test_us_order() {
        assert_eq!(normalize_birthday("4/3/1985"), "1985/04/03");
    }

    #[test]
    fn test_yearless() {
        assert_eq!(normalize_birthday("--04-03"), "04/03");
        assert_eq!(normalize_birthday("--13-03"), "--13-03");
    }

    #[test]
    fn test_unrecognized_kept() {
        assert_eq!(normalize_birthday(" 昭和60年4月3日 "), "昭和60年4月3日");
        assert_eq!(normalize_birthday("85/4/3"), "85/4/3");
        assert_eq!(normalize_birthday("1985/13/40"), "1985/13/40");
        assert_eq!(normalize_birthday(""), "");
    }
}
