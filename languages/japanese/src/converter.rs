use std::collections::HashMap;
use std::path::Path;

use atena_config::Config;
use atena_core::width::{compact_spaces, to_fullwidth};
use atena_core::{CategoryRouter, ContactRecord};
use atena_types::{AtenaRecord, Bucket};

use crate::address::{AddressParts, AddressSegmenter};
use crate::area_codes::AreaCodeTable;
use crate::birthday::normalize_birthday;
use crate::company_kana::CompanyKanaTransliterator;
use crate::contact_list::{email_tokens, plain_tokens, BucketLists};
use crate::kana_dictionary::KanaDictionary;
use crate::loader::TableLoader;
use crate::memo::MemoExtractor;
use crate::phone::PhoneNormalizer;
use crate::postal::normalize_postal;

const NAME_SEPARATOR: &str = "\u{3000}";

/// Google Contacts row → 宛名職人 record.
///
/// Tables are loaded once at construction and never mutated, so one
/// converter can be shared across threads.
pub struct Converter {
    router: CategoryRouter,
    phones: PhoneNormalizer,
    addresses: AddressSegmenter,
    company: CompanyKanaTransliterator,
    memos: MemoExtractor,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Converter with built-in tables and default policies
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Built-in tables extended by the files named in `config.dictionary`.
    ///
    /// A table that fails to load is skipped with a warning.
    pub fn from_config(config: &Config) -> Self {
        let mut dictionary = KanaDictionary::with_defaults();
        let mut area_codes = AreaCodeTable::with_defaults();
        let paths = &config.dictionary;

        for path in &paths.exception_paths {
            if let Some(pairs) = load_or_warn(path, TableLoader::load_pairs) {
                dictionary.exceptions.extend(pairs);
            }
        }
        for path in &paths.word_map_paths {
            if let Some(pairs) = load_or_warn(path, TableLoader::load_pairs) {
                dictionary.words.extend(pairs);
            }
        }
        for path in &paths.corp_term_paths {
            if let Some(lines) = load_or_warn(path, TableLoader::load_lines) {
                dictionary.corp_terms.extend(lines);
            }
        }
        for path in &paths.area_code_paths {
            if let Some(lines) = load_or_warn(path, TableLoader::load_lines) {
                area_codes.extend(lines);
            }
        }

        tracing::info!(
            "Converter ready: {} exceptions, {} words, {} corp terms, {} area codes",
            dictionary.exceptions.len(),
            dictionary.words.len(),
            dictionary.corp_terms.len(),
            area_codes.len()
        );

        let policy = &config.policy;
        Self {
            router: CategoryRouter::new(policy.mobile_bucket),
            phones: PhoneNormalizer::new(area_codes),
            addresses: AddressSegmenter::default(),
            company: CompanyKanaTransliterator::new(
                dictionary,
                policy.exception_lookup,
                policy.kana_stage_order,
            ),
            memos: MemoExtractor::new(policy.memo_collision, config.notes_slot_budget),
        }
    }

    pub fn convert(&self, record: &ContactRecord) -> AtenaRecord {
        let mut out = AtenaRecord::default();

        self.fill_names(record, &mut out);
        self.fill_organization(record, &mut out);
        self.fill_addresses(record, &mut out);
        self.fill_contact_lists(record, &mut out);

        let memo = self.memos.extract(record);
        out.memos = memo.memos;
        out.notes = memo.notes;

        out.birthday = normalize_birthday(record.get("Birthday"));

        tracing::debug!(
            "Converted {:?}: home={} work={} other={}",
            out.full_name,
            out.home.has_address(),
            out.work.has_address(),
            out.other.has_address()
        );
        out
    }

    /// One output per input, in input order
    pub fn convert_all(&self, records: &[ContactRecord]) -> Vec<AtenaRecord> {
        let converted: Vec<AtenaRecord> = records.iter().map(|r| self.convert(r)).collect();
        tracing::info!("Converted {} contacts", converted.len());
        converted
    }

    /// Map-in/map-out form, each row in column order
    pub fn convert_maps(&self, rows: &[HashMap<String, String>]) -> Vec<Vec<(&'static str, String)>> {
        let records: Vec<ContactRecord> = rows.iter().cloned().map(ContactRecord::from).collect();
        self.convert_all(&records)
            .into_iter()
            .map(AtenaRecord::into_pairs)
            .collect()
    }

    fn fill_names(&self, record: &ContactRecord, out: &mut AtenaRecord) {
        out.last_name = record.get("Last Name").to_string();
        out.first_name = record.get("First Name").to_string();
        out.last_name_kana = record.get("Phonetic Last Name").to_string();
        out.first_name_kana = record.get("Phonetic First Name").to_string();
        out.full_name = join_pair(&out.last_name, &out.first_name);
        out.full_name_kana = join_pair(&out.last_name_kana, &out.first_name_kana);
        out.middle_name = record.get("Middle Name").to_string();
        out.middle_name_kana = record.get("Phonetic Middle Name").to_string();
        out.nickname = record.get("Nickname").to_string();
        out.maiden_name = record.get("Maiden Name").to_string();
    }

    fn fill_organization(&self, record: &ContactRecord, out: &mut AtenaRecord) {
        let name = record.first_of(&["Organization Name", "Organization 1 - Name"]);
        out.company_name = name.to_string();
        out.company_kana = self.company.transliterate(name);

        let department = compact_spaces(
            record.first_of(&["Organization Department", "Organization 1 - Department"]),
        );
        let (first, second) = department
            .split_once(" ")
            .unwrap_or((department.as_str(), ""));
        out.department1 = to_fullwidth(first);
        out.department2 = to_fullwidth(second);

        out.title = to_fullwidth(record.first_of(&["Organization Title", "Organization 1 - Title"]));
    }

    /// First slot with an address claims the whole bucket
    fn fill_addresses(&self, record: &ContactRecord, out: &mut AtenaRecord) {
        for index in record.slot_indices("Address") {
            let field = |name: &'static str| record.slot_field("Address", index, name);
            let parts = AddressParts {
                region: field("Region"),
                city: field("City"),
                street: field("Street"),
                extended: field("Extended Address"),
                formatted: field("Formatted"),
            };
            let postal = normalize_postal(field("Postal Code"));
            if parts.is_empty() && postal.is_empty() {
                continue;
            }

            let bucket = self.router.route(field("Label"));
            let block = out.block_mut(bucket);
            if block.has_address() {
                continue;
            }

            let lines = self.addresses.segment(&parts);
            block.postal = postal;
            block.line1 = lines.line1;
            block.line2 = lines.line2;
            block.line3 = lines.line3;
        }
    }

    fn fill_contact_lists(&self, record: &ContactRecord, out: &mut AtenaRecord) {
        let mut phones = BucketLists::new();
        for slot in record.slots("Phone") {
            let bucket = self.router.route(slot.label);
            phones.get_mut(bucket).extend(self.phones.normalize_field(slot.value));
        }

        let emails = self.aggregate(record, "E-mail", email_tokens);
        let urls = self.aggregate(record, "Website", plain_tokens);
        let ims = self.aggregate(record, "IM", plain_tokens);

        for bucket in Bucket::ALL {
            let block = out.block_mut(bucket);
            block.phone = phones.joined(bucket);
            block.email = emails.joined(bucket);
            block.url = urls.joined(bucket);
            block.im = ims.joined(bucket);
        }
    }

    fn aggregate(
        &self,
        record: &ContactRecord,
        family: &str,
        tokens: fn(&str) -> Vec<String>,
    ) -> BucketLists {
        let mut lists = BucketLists::new();
        for slot in record.slots(family) {
            lists
                .get_mut(self.router.route(slot.label))
                .extend(tokens(slot.value));
        }
        lists
    }
}

fn load_or_warn<T, E: std::fmt::Display>(
    path: &str,
    load: impl Fn(&Path) -> Result<T, E>,
) -> Option<T> {
    match load(Path::new(path)) {
        Ok(table) => Some(table),
        Err(e) => {
            tracing::warn!("Failed to load table from {}: {}", path, e);
            None
        }
    }
}

fn join_pair(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (false, false) => format!("{first}{NAME_SEPARATOR}{second}"),
        (false, true) => first.to_string(),
        _ => second.to_string(),
    }
}
