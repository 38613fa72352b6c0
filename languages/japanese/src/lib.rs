pub mod address;
pub mod area_codes;
pub mod birthday;
pub mod company_kana;
pub mod contact_list;
pub mod converter;
pub mod kana_dictionary;
pub mod loader;
pub mod memo;
pub mod phone;
pub mod postal;

pub use address::{AddressLines, AddressParts, AddressSegmenter, SplitDetector};
pub use area_codes::AreaCodeTable;
pub use birthday::normalize_birthday;
pub use company_kana::CompanyKanaTransliterator;
pub use contact_list::{BucketLists, UniqueList};
pub use converter::Converter;
pub use kana_dictionary::{CorpTerms, ExceptionTable, KanaDictionary, WordMap};
pub use loader::TableLoader;
pub use memo::{MemoExtractor, MemoFields};
pub use phone::PhoneNormalizer;
pub use postal::normalize_postal;
