use std::collections::{BTreeSet, HashMap};

/// One row of a contacts export.
///
/// The key set is open-ended: scalar columns plus numbered slot groups such
/// as `Phone 3 - Label` / `Phone 3 - Value`. Absent keys read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    fields: HashMap<String, String>,
}

/// One `{family} {index} - Label/Value` pair with a non-empty value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub index: u32,
    pub label: &'a str,
    pub value: &'a str,
}

impl ContactRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Trimmed value, `""` when absent
    pub fn get(&self, key: &str) -> &str {
        self.get_or(key, "")
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.fields.get(key).map(|v| v.trim()).unwrap_or(default)
    }

    /// First non-empty value among alternative column names
    pub fn first_of(&self, keys: &[&str]) -> &str {
        keys.iter()
            .map(|k| self.get(k))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ascending indices present for a slot family, e.g. `"Phone"`
    pub fn slot_indices(&self, family: &str) -> Vec<u32> {
        let indices: BTreeSet<u32> = self
            .fields
            .keys()
            .filter_map(|key| parse_slot_key(key, family))
            .map(|(index, _)| index)
            .collect();
        indices.into_iter().collect()
    }

    /// `{family} {index} - {field}`
    pub fn slot_field(&self, family: &str, index: u32, field: &str) -> &str {
        self.get(&slot_key(family, index, field))
    }

    /// Label/Value slots of a family in index order; empty values are skipped
    pub fn slots(&self, family: &str) -> Vec<Slot<'_>> {
        self.slot_indices(family)
            .into_iter()
            .filter_map(|index| {
                let value = self.slot_field(family, index, "Value");
                if value.is_empty() {
                    return None;
                }
                Some(Slot {
                    index,
                    label: self.slot_field(family, index, "Label"),
                    value,
                })
            })
            .collect()
    }
}

impl From<HashMap<String, String>> for ContactRecord {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::new(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContactRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

pub fn slot_key(family: &str, index: u32, field: &str) -> String {
    format!("{family} {index} - {field}")
}

/// Split `Phone 12 - Value` into `(12, "Value")` when it belongs to `family`
fn parse_slot_key<'k>(key: &'k str, family: &str) -> Option<(u32, &'k str)> {
    let rest = key.strip_prefix(family)?.strip_prefix(' ')?;
    let (index, field) = rest.split_once(" - ")?;
    let index = index.trim().parse().ok()?;
    Some((index, field.trim()))
}
