use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One of the three parallel address groups of the output schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Home,
    Work,
    Other,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Home, Bucket::Work, Bucket::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Home => "home",
            Bucket::Work => "work",
            Bucket::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" => Some(Bucket::Home),
            "work" => Some(Bucket::Work),
            "other" => Some(Bucket::Other),
            _ => None,
        }
    }
}

/// Output header, in serialization order
pub const COLUMNS: [&str; 61] = [
    "姓",
    "名",
    "姓かな",
    "名かな",
    "姓名",
    "姓名かな",
    "ミドルネーム",
    "ミドルネームかな",
    "敬称",
    "ニックネーム",
    "旧姓",
    "宛先",
    "自宅〒",
    "自宅住所1",
    "自宅住所2",
    "自宅住所3",
    "自宅電話",
    "自宅IM ID",
    "自宅E-mail",
    "自宅URL",
    "自宅Social",
    "会社〒",
    "会社住所1",
    "会社住所2",
    "会社住所3",
    "会社電話",
    "会社IM ID",
    "会社E-mail",
    "会社URL",
    "会社Social",
    "その他〒",
    "その他住所1",
    "その他住所2",
    "その他住所3",
    "その他電話",
    "その他IM ID",
    "その他E-mail",
    "その他URL",
    "その他Social",
    "会社名かな",
    "会社名",
    "部署名1",
    "部署名2",
    "役職名",
    "連名",
    "連名ふりがな",
    "連名敬称",
    "連名誕生日",
    "メモ1",
    "メモ2",
    "メモ3",
    "メモ4",
    "メモ5",
    "備考1",
    "備考2",
    "備考3",
    "誕生日",
    "性別",
    "血液型",
    "趣味",
    "性格",
];

/// Per-bucket contact block (自宅 / 会社 / その他)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBlock {
    pub postal: String,
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub phone: String,
    pub im: String,
    pub email: String,
    pub url: String,
    pub social: String,
}

impl AddressBlock {
    /// True once any address part has been filled
    pub fn has_address(&self) -> bool {
        !(self.postal.is_empty()
            && self.line1.is_empty()
            && self.line2.is_empty()
            && self.line3.is_empty())
    }
}

/// Canonical record consumed by the label software.
///
/// Every column is always present; empty string is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtenaRecord {
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub full_name: String,
    pub full_name_kana: String,
    pub middle_name: String,
    pub middle_name_kana: String,
    pub honorific: String,
    pub nickname: String,
    pub maiden_name: String,
    pub destination: String,

    pub home: AddressBlock,
    pub work: AddressBlock,
    pub other: AddressBlock,

    pub company_kana: String,
    pub company_name: String,
    pub department1: String,
    pub department2: String,
    pub title: String,

    pub joint_name: String,
    pub joint_name_kana: String,
    pub joint_honorific: String,
    pub joint_birthday: String,

    pub memos: [String; 5],
    pub notes: [String; 3],

    pub birthday: String,
    pub gender: String,
    pub blood_type: String,
    pub hobby: String,
    pub personality: String,
}

impl Default for AtenaRecord {
    fn default() -> Self {
        Self {
            last_name: String::new(),
            first_name: String::new(),
            last_name_kana: String::new(),
            first_name_kana: String::new(),
            full_name: String::new(),
            full_name_kana: String::new(),
            middle_name: String::new(),
            middle_name_kana: String::new(),
            honorific: "様".to_string(),
            nickname: String::new(),
            maiden_name: String::new(),
            destination: "会社".to_string(),
            home: AddressBlock::default(),
            work: AddressBlock::default(),
            other: AddressBlock::default(),
            company_kana: String::new(),
            company_name: String::new(),
            department1: String::new(),
            department2: String::new(),
            title: String::new(),
            joint_name: String::new(),
            joint_name_kana: String::new(),
            joint_honorific: String::new(),
            joint_birthday: String::new(),
            memos: Default::default(),
            notes: Default::default(),
            birthday: String::new(),
            gender: String::new(),
            blood_type: String::new(),
            hobby: String::new(),
            personality: String::new(),
        }
    }
}

impl AtenaRecord {
    pub fn block_mut(&mut self, bucket: Bucket) -> &mut AddressBlock {
        match bucket {
            Bucket::Home => &mut self.home,
            Bucket::Work => &mut self.work,
            Bucket::Other => &mut self.other,
        }
    }

    /// Field values in `COLUMNS` order
    pub fn values(&self) -> [&str; 61] {
        let (h, w, o) = (&self.home, &self.work, &self.other);
        [
            &self.last_name,
            &self.first_name,
            &self.last_name_kana,
            &self.first_name_kana,
            &self.full_name,
            &self.full_name_kana,
            &self.middle_name,
            &self.middle_name_kana,
            &self.honorific,
            &self.nickname,
            &self.maiden_name,
            &self.destination,
            &h.postal,
            &h.line1,
            &h.line2,
            &h.line3,
            &h.phone,
            &h.im,
            &h.email,
            &h.url,
            &h.social,
            &w.postal,
            &w.line1,
            &w.line2,
            &w.line3,
            &w.phone,
            &w.im,
            &w.email,
            &w.url,
            &w.social,
            &o.postal,
            &o.line1,
            &o.line2,
            &o.line3,
            &o.phone,
            &o.im,
            &o.email,
            &o.url,
            &o.social,
            &self.company_kana,
            &self.company_name,
            &self.department1,
            &self.department2,
            &self.title,
            &self.joint_name,
            &self.joint_name_kana,
            &self.joint_honorific,
            &self.joint_birthday,
            &self.memos[0],
            &self.memos[1],
            &self.memos[2],
            &self.memos[3],
            &self.memos[4],
            &self.notes[0],
            &self.notes[1],
            &self.notes[2],
            &self.birthday,
            &self.gender,
            &self.blood_type,
            &self.hobby,
            &self.personality,
        ]
    }

    /// Ordered column → value pairs
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        let values: Vec<String> = self.values().iter().map(|v| v.to_string()).collect();
        COLUMNS.iter().copied().zip(values).collect()
    }

    /// Value of a single column by its header name
    pub fn get(&self, column: &str) -> Option<&str> {
        COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|idx| self.values()[idx])
    }
}

impl Serialize for AtenaRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMNS.len()))?;
        for (column, value) in COLUMNS.iter().zip(self.values()) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
