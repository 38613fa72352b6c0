use atena_core::width::extract_digits;

/// `1500042` → `150-0042`; anything that isn't seven digits stays bare
pub fn normalize_postal(raw: &str) -> String {
    let digits = extract_digits(raw);
    if digits.len() == 7 {
        format!("{}-{}", &digits[..3], &digits[3..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_digits() {
        assert_eq!(normalize_postal("1234567"), "123-4567");
        assert_eq!(normalize_postal("〒１５０－００４２"), "150-0042");
        assert_eq!(normalize_postal("150-0042"), "150-0042");
    }

    #[test]
    fn test_other_lengths_stay_bare() {
        assert_eq!(normalize_postal("12"), "12");
        assert_eq!(normalize_postal("12345678"), "12345678");
        assert_eq!(normalize_postal(""), "");
        assert_eq!(normalize_postal("n/a"), "");
    }
}
