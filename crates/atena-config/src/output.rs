use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tab" | "tsv" | "\\t" => Some(Delimiter::Tab),
            "comma" | "csv" | "," => Some(Delimiter::Comma),
            _ => None,
        }
    }
}

fn default_delimiter() -> Delimiter {
    Delimiter::Tab
}

fn default_bom() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: Delimiter,
    /// Prefix the output with a UTF-8 BOM
    #[serde(default = "default_bom")]
    pub bom: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            bom: default_bom(),
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        let delimiter = env::var("ATENA_DELIMITER")
            .ok()
            .and_then(|v| Delimiter::parse(&v))
            .unwrap_or_else(default_delimiter);

        let bom = env::var("ATENA_BOM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_bom);

        Self { delimiter, bom }
    }
}
