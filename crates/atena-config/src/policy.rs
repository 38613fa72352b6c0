//! Product decisions the source exports never settled.
//!
//! Each knob has one default; the alternatives exist so a deployment can
//! switch behavior without touching the normalizers.

use std::env;

use atena_types::Bucket;
use serde::{Deserialize, Serialize};

/// When the company exception dictionary is consulted
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionLookup {
    /// Probe the trimmed name as written
    BeforeStrip,
    /// Probe the name after legal-entity forms are removed
    AfterStrip,
    /// Probe the raw name, then the stripped one
    #[default]
    Both,
}

impl ExceptionLookup {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "before_strip" => Some(Self::BeforeStrip),
            "after_strip" => Some(Self::AfterStrip),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Relative order of letter spelling and word-map substitution
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KanaStageOrder {
    /// Spell Latin runs first; word-map keys only see kanji/kana
    #[default]
    LettersFirst,
    /// Word map first, so Latin keys such as "DESIGN" can match
    DictionaryFirst,
}

impl KanaStageOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "letters_first" => Some(Self::LettersFirst),
            "dictionary_first" => Some(Self::DictionaryFirst),
            _ => None,
        }
    }
}

/// What a second "メモN" with an occupied slot does
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemoCollision {
    /// Move to the first empty memo slot
    #[default]
    Spill,
    /// Replace the occupied slot
    Overwrite,
}

impl MemoCollision {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spill" => Some(Self::Spill),
            "overwrite" => Some(Self::Overwrite),
            _ => None,
        }
    }
}

fn default_mobile_bucket() -> Bucket {
    Bucket::Work
}

fn default_exception_lookup() -> ExceptionLookup {
    ExceptionLookup::Both
}

fn default_kana_stage_order() -> KanaStageOrder {
    KanaStageOrder::LettersFirst
}

fn default_memo_collision() -> MemoCollision {
    MemoCollision::Spill
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Bucket for "Mobile" labeled slots
    #[serde(default = "default_mobile_bucket")]
    pub mobile_bucket: Bucket,
    #[serde(default = "default_exception_lookup")]
    pub exception_lookup: ExceptionLookup,
    #[serde(default = "default_kana_stage_order")]
    pub kana_stage_order: KanaStageOrder,
    #[serde(default = "default_memo_collision")]
    pub memo_collision: MemoCollision,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            mobile_bucket: default_mobile_bucket(),
            exception_lookup: default_exception_lookup(),
            kana_stage_order: default_kana_stage_order(),
            memo_collision: default_memo_collision(),
        }
    }
}

impl PolicyConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            mobile_bucket: parse_env("ATENA_MOBILE_BUCKET", Bucket::parse)
                .unwrap_or(defaults.mobile_bucket),
            exception_lookup: parse_env("ATENA_EXCEPTION_LOOKUP", ExceptionLookup::parse)
                .unwrap_or(defaults.exception_lookup),
            kana_stage_order: parse_env("ATENA_KANA_STAGE_ORDER", KanaStageOrder::parse)
                .unwrap_or(defaults.kana_stage_order),
            memo_collision: parse_env("ATENA_MEMO_COLLISION", MemoCollision::parse)
                .unwrap_or(defaults.memo_collision),
        }
    }
}

fn parse_env<T>(key: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let raw = env::var(key).ok()?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        tracing::warn!("Ignoring {key}={raw:?}: unrecognized value");
    }
    parsed
}
