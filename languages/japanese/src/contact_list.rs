use std::collections::HashSet;

use atena_core::width::{is_space, nfkc};
use atena_types::Bucket;

/// Insertion-ordered set of strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueList {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl UniqueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for empty or already-seen values
    pub fn push(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if item.is_empty() || self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }

    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One `UniqueList` per output bucket
#[derive(Debug, Clone, Default)]
pub struct BucketLists {
    home: UniqueList,
    work: UniqueList,
    other: UniqueList,
}

impl BucketLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bucket: Bucket) -> &UniqueList {
        match bucket {
            Bucket::Home => &self.home,
            Bucket::Work => &self.work,
            Bucket::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, bucket: Bucket) -> &mut UniqueList {
        match bucket {
            Bucket::Home => &mut self.home,
            Bucket::Work => &mut self.work,
            Bucket::Other => &mut self.other,
        }
    }

    /// `;`-joined list for the bucket
    pub fn joined(&self, bucket: Bucket) -> String {
        self.get(bucket).join(";")
    }
}

/// Split on ":::", ";", ",", "，", "、" and whitespace
pub fn split_list_tokens(raw: &str) -> Vec<&str> {
    raw.split(":::")
        .flat_map(|part| part.split(|c: char| matches!(c, ';' | ',' | '，' | '、') || is_space(c)))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lower-cased NFKC address, or None without a local part and a dotted domain
pub fn normalize_email(token: &str) -> Option<String> {
    let email = nfkc(token.trim()).to_lowercase();
    let (local, domain) = email.rsplit_once('@')?;
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return None;
    }
    Some(email)
}

/// Valid e-mail addresses of a raw field
pub fn email_tokens(raw: &str) -> Vec<String> {
    split_list_tokens(raw)
        .into_iter()
        .filter_map(normalize_email)
        .collect()
}

/// URL/IM tokens of a raw field, kept as written
pub fn plain_tokens(raw: &str) -> Vec<String> {
    split_list_tokens(raw)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_dedup_case_insensitive() {
        let mut list = UniqueList::new();
        for raw in ["A@x.com", "a@x.com", ";b@y.com"] {
            list.extend(email_tokens(raw));
        }
        assert_eq!(list.join(";"), "a@x.com;b@y.com");
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(normalize_email("ＴＡＲＯ＠ＥＸＡＭＰＬＥ．ＪＰ"), Some("taro@example.jp".into()));
        assert_eq!(normalize_email("taro"), None);
        assert_eq!(normalize_email("@example.jp"), None);
        assert_eq!(normalize_email("taro@localhost"), None);
        assert_eq!(normalize_email("taro@example."), None);
    }

    #[test]
    fn test_split_list_tokens() {
        assert_eq!(
            split_list_tokens("a@x.com ::: b@y.com，c@z.com、 d@w.com"),
            vec!["a@x.com", "b@y.com", "c@z.com", "d@w.com"]
        );
        assert!(split_list_tokens(" ;; ").is_empty());
    }

    #[test]
    fn test_plain_tokens_keep_case() {
        assert_eq!(
            plain_tokens("https://Example.com ::: https://example.com"),
            vec!["https://Example.com", "https://example.com"]
        );
    }

    #[test]
    fn test_bucket_lists() {
        let mut lists = BucketLists::new();
        lists.get_mut(Bucket::Home).push("03-1234-5678");
        lists.get_mut(Bucket::Home).push("03-1234-5678");
        lists.get_mut(Bucket::Home).push("090-1234-5678");
        assert_eq!(lists.joined(Bucket::Home), "03-1234-5678;090-1234-5678");
        assert_eq!(lists.joined(Bucket::Work), "");
        assert!(!lists.get_mut(Bucket::Other).push(""));
    }
}
