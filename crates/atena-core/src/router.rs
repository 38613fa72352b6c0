use atena_types::Bucket;

use crate::width::nfkc;

/// Maps a free-form slot label to an output bucket.
///
/// The rule is a product policy rather than anything derivable from the
/// export: "home"/"自宅" goes home, "other"/"その他" goes to other, and
/// everything else (work, company, main, blank, custom labels) lands in
/// work. Mobile labels follow `mobile_bucket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRouter {
    mobile_bucket: Bucket,
}

impl Default for CategoryRouter {
    fn default() -> Self {
        Self::new(Bucket::Work)
    }
}

impl CategoryRouter {
    pub fn new(mobile_bucket: Bucket) -> Self {
        Self { mobile_bucket }
    }

    pub fn route(&self, label: &str) -> Bucket {
        let label = nfkc(label).to_lowercase();

        if label.contains("home") || label.contains("自宅") {
            Bucket::Home
        } else if label.contains("other") || label.contains("その他") {
            Bucket::Other
        } else if label.contains("mobile") || label.contains("携帯") {
            self.mobile_bucket
        } else {
            Bucket::Work
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_policy() {
        let router = CategoryRouter::default();
        assert_eq!(router.route("Home"), Bucket::Home);
        assert_eq!(router.route("* HOME"), Bucket::Home);
        assert_eq!(router.route("自宅"), Bucket::Home);
        assert_eq!(router.route("Other"), Bucket::Other);
        assert_eq!(router.route("その他"), Bucket::Other);
        assert_eq!(router.route("Work"), Bucket::Work);
        assert_eq!(router.route("Mobile"), Bucket::Work);
        assert_eq!(router.route("Main"), Bucket::Work);
        assert_eq!(router.route(""), Bucket::Work);
        assert_eq!(router.route("Assistant"), Bucket::Work);
    }

    #[test]
    fn test_route_fullwidth_label() {
        let router = CategoryRouter::default();
        assert_eq!(router.route("Ｈｏｍｅ"), Bucket::Home);
    }

    #[test]
    fn test_route_mobile_policy() {
        let router = CategoryRouter::new(Bucket::Other);
        assert_eq!(router.route("Mobile"), Bucket::Other);
        assert_eq!(router.route("携帯"), Bucket::Other);
        // explicit home wins over the mobile policy
        assert_eq!(router.route("Home Mobile"), Bucket::Home);
    }
}
