use std::collections::HashSet;

/// Toll-free, navi-dial and IP-phone prefixes
pub const SPECIAL_PREFIXES: [&str; 4] = ["0120", "0800", "0570", "050"];

/// Mobile/PHS prefixes
pub const MOBILE_PREFIXES: [&str; 3] = ["070", "080", "090"];

const MIN_CODE_LEN: usize = 2;
const MAX_CODE_LEN: usize = 5;

/// Fixed-line area codes (市外局番), leading zero included
const DEFAULT_AREA_CODES: &[&str] = &[
    // 2 digits
    "03", "06",
    // 3 digits
    "011", "017", "018", "019", "022", "023", "024", "025", "026", "027", "028", "029",
    "042", "043", "044", "045", "046", "047", "048", "049", "052", "053", "054", "055",
    "058", "059", "072", "073", "075", "076", "077", "078", "079", "082", "083", "084",
    "086", "087", "088", "089", "092", "093", "095", "096", "097", "098", "099",
    // 4 digits: Hokkaido
    "0123", "0124", "0125", "0126", "0133", "0134", "0135", "0136", "0137", "0138", "0139",
    "0142", "0143", "0144", "0145", "0146", "0152", "0153", "0154", "0155", "0156", "0157",
    "0158", "0162", "0163", "0164", "0165", "0166", "0167",
    // 4 digits: Tohoku, Kanto north, Koshinetsu
    "0172", "0173", "0174", "0175", "0176", "0178", "0179", "0182", "0183", "0184", "0185",
    "0186", "0187", "0191", "0192", "0193", "0194", "0195", "0197", "0198", "0220", "0223",
    "0224", "0225", "0226", "0228", "0229", "0233", "0234", "0235", "0237", "0238", "0240",
    "0241", "0242", "0243", "0244", "0246", "0247", "0248", "0250", "0254", "0255", "0256",
    "0257", "0258", "0259", "0260", "0261", "0263", "0264", "0265", "0266", "0267", "0268",
    "0269", "0270", "0274", "0276", "0277", "0278", "0279", "0280", "0282", "0283", "0284",
    "0285", "0287", "0288", "0289", "0291", "0293", "0294", "0295", "0296", "0297", "0299",
    // 4 digits: Kanto
    "0422", "0428", "0436", "0438", "0439", "0460", "0463", "0465", "0466", "0467", "0470",
    "0475", "0476", "0478", "0479", "0480", "0493", "0494", "0495",
    // 4 digits: Chubu
    "0531", "0532", "0533", "0536", "0537", "0538", "0539", "0544", "0545", "0547", "0548",
    "0550", "0551", "0553", "0554", "0555", "0556", "0557", "0558", "0561", "0562", "0563",
    "0564", "0565", "0566", "0567", "0568", "0569", "0572", "0573", "0574", "0575", "0576",
    "0577", "0578", "0581", "0584", "0585", "0586", "0587", "0594", "0595", "0596", "0597",
    "0598", "0599",
    // 4 digits: Kinki, Hokuriku
    "0721", "0725", "0735", "0736", "0737", "0738", "0739", "0740", "0742", "0743", "0744",
    "0745", "0746", "0747", "0748", "0749", "0761", "0763", "0765", "0766", "0767", "0768",
    "0770", "0771", "0772", "0773", "0774", "0776", "0778", "0779", "0790", "0791", "0794",
    "0795", "0796", "0797", "0798", "0799",
    // 4 digits: Chugoku, Shikoku
    "0820", "0823", "0824", "0826", "0827", "0829", "0833", "0834", "0835", "0836", "0837",
    "0838", "0845", "0846", "0847", "0848", "0852", "0853", "0854", "0855", "0856", "0857",
    "0858", "0859", "0863", "0865", "0866", "0867", "0868", "0869", "0875", "0877", "0879",
    "0880", "0883", "0884", "0885", "0887", "0889", "0892", "0893", "0894", "0895", "0896",
    "0897", "0898",
    // 4 digits: Kyushu, Okinawa
    "0920", "0930", "0940", "0942", "0943", "0944", "0946", "0947", "0948", "0949", "0950",
    "0952", "0954", "0955", "0956", "0957", "0959", "0964", "0965", "0966", "0967", "0968",
    "0969", "0972", "0973", "0974", "0977", "0978", "0979", "0980", "0982", "0983", "0984",
    "0985", "0986", "0987", "0993", "0994", "0995", "0996", "0997",
    // 5 digits
    "01267", "01372", "01374", "01377", "01392", "01397", "01398", "01456", "01457", "01466",
    "01547", "01558", "01564", "01586", "01587", "01632", "01634", "01635", "01648", "01654",
    "01655", "01656", "01658", "04992", "04994", "04996", "04998", "05769", "05979", "07468",
    "08387", "08388", "08396", "08477", "08512", "08514", "09496", "09802", "09912", "09913",
    "09969",
];

/// Area-code prefixes for longest-prefix matching.
///
/// Entries overlapping a special or mobile prefix are refused, so a digit
/// string resolves to at most one category.
#[derive(Debug, Clone, Default)]
pub struct AreaCodeTable {
    codes: HashSet<String>,
}

impl AreaCodeTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            codes: HashSet::new(),
        }
    }

    /// Create with the built-in national table
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.extend(DEFAULT_AREA_CODES.iter().map(|c| c.to_string()));
        table
    }

    /// Add codes, skipping malformed or overlapping entries
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, codes: I) {
        for code in codes {
            let code = code.trim().to_string();
            if let Err(reason) = validate(&code) {
                tracing::warn!("Skipping area code {:?}: {}", code, reason);
                continue;
            }
            self.codes.insert(code);
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Longest registered prefix of `digits`
    pub fn longest_match<'d>(&self, digits: &'d str) -> Option<&'d str> {
        (MIN_CODE_LEN..=MAX_CODE_LEN.min(digits.len()))
            .rev()
            .map(|len| &digits[..len])
            .find(|prefix| self.codes.contains(*prefix))
    }
}

fn validate(code: &str) -> Result<(), &'static str> {
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len()) {
        return Err("length must be 2-5 digits");
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err("non-digit character");
    }
    if !code.starts_with('0') {
        return Err("missing leading zero");
    }
    let overlaps = SPECIAL_PREFIXES
        .iter()
        .chain(MOBILE_PREFIXES.iter())
        .any(|p| code.starts_with(p) || p.starts_with(code));
    if overlaps {
        return Err("overlaps a special or mobile prefix");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_all_valid() {
        let table = AreaCodeTable::with_defaults();
        assert_eq!(table.len(), DEFAULT_AREA_CODES.len());
    }

    #[test]
    fn test_longest_match_prefers_longer_code() {
        let table = AreaCodeTable::with_defaults();
        assert_eq!(table.longest_match("0422123456"), Some("0422"));
        assert_eq!(table.longest_match("0421234567"), Some("042"));
        assert_eq!(table.longest_match("0312345678"), Some("03"));
        assert_eq!(table.longest_match("0126712345"), Some("01267"));
        assert_eq!(table.longest_match("0120123456"), None);
        assert_eq!(table.longest_match("0"), None);
    }

    #[test]
    fn test_extend_rejects_overlaps_and_garbage() {
        let mut table = AreaCodeTable::new();
        table.extend(
            ["0120", "05", "090", "12", "0x1", "012345", " 0422 "]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(table.len(), 1);
        assert!(table.contains("0422"));
    }
}
