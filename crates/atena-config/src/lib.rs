use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::output::OutputConfig;
use self::policy::PolicyConfig;

pub mod dictionary;
pub mod output;
pub mod policy;

fn default_notes_slot_budget() -> usize {
    120
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub policy: PolicyConfig,
    pub output: OutputConfig,

    /// Soft character budget of 備考2 and 備考3
    #[serde(default = "default_notes_slot_budget")]
    pub notes_slot_budget: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            policy: PolicyConfig::default(),
            output: OutputConfig::default(),
            notes_slot_budget: default_notes_slot_budget(),
        }
    }
}

impl Config {
    /// Defaults overridden by `ATENA_*` environment variables
    pub fn new() -> Self {
        let notes_slot_budget = env::var("ATENA_NOTES_SLOT_BUDGET")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_notes_slot_budget);

        Config {
            dictionary: DictionaryConfig::new(),
            policy: PolicyConfig::new(),
            output: OutputConfig::new(),

            notes_slot_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use atena_types::Bucket;

    use super::output::Delimiter;
    use super::policy::{ExceptionLookup, KanaStageOrder, MemoCollision};
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.policy.mobile_bucket, Bucket::Work);
        assert_eq!(config.policy.exception_lookup, ExceptionLookup::Both);
        assert_eq!(config.policy.kana_stage_order, KanaStageOrder::LettersFirst);
        assert_eq!(config.policy.memo_collision, MemoCollision::Spill);
        assert_eq!(config.output.delimiter, Delimiter::Tab);
        assert!(config.output.bom);
        assert_eq!(config.notes_slot_budget, 120);
        assert!(config.dictionary.is_empty());
    }

    #[test]
    fn test_partial_json_profile_fills_defaults() {
        let json = r#"{
            "policy": { "mobile_bucket": "other", "memo_collision": "overwrite" },
            "output": { "delimiter": "comma" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.policy.mobile_bucket, Bucket::Other);
        assert_eq!(config.policy.memo_collision, MemoCollision::Overwrite);
        assert_eq!(config.policy.kana_stage_order, KanaStageOrder::LettersFirst);
        assert_eq!(config.output.delimiter, Delimiter::Comma);
        assert!(config.output.bom);
        assert_eq!(config.notes_slot_budget, 120);
    }

    #[test]
    fn test_policy_parsers() {
        assert_eq!(
            KanaStageOrder::parse("Dictionary_First"),
            Some(KanaStageOrder::DictionaryFirst)
        );
        assert_eq!(ExceptionLookup::parse("after_strip"), Some(ExceptionLookup::AfterStrip));
        assert_eq!(MemoCollision::parse("drop"), None);
        assert_eq!(Delimiter::parse("tsv"), Some(Delimiter::Tab));
    }
}
