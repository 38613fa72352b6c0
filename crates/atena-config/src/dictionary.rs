use std::env;

use serde::{Deserialize, Serialize};

/// Extra table files merged over the built-in defaults
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Company name → full reading (JSON object or TSV)
    #[serde(default)]
    pub exception_paths: Vec<String>,
    /// Kanji/word → kana substring map (JSON object or TSV)
    #[serde(default)]
    pub word_map_paths: Vec<String>,
    /// Legal-entity forms, one per line
    #[serde(default)]
    pub corp_term_paths: Vec<String>,
    /// Area-code prefixes, one per line
    #[serde(default)]
    pub area_code_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            exception_paths: paths_from_env("ATENA_EXCEPTION_PATHS"),
            word_map_paths: paths_from_env("ATENA_WORD_MAP_PATHS"),
            corp_term_paths: paths_from_env("ATENA_CORP_TERM_PATHS"),
            area_code_paths: paths_from_env("ATENA_AREA_CODE_PATHS"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exception_paths.is_empty()
            && self.word_map_paths.is_empty()
            && self.corp_term_paths.is_empty()
            && self.area_code_paths.is_empty()
    }
}

/// Comma separated list, blanks dropped
fn paths_from_env(key: &str) -> Vec<String> {
    env::var(key)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
