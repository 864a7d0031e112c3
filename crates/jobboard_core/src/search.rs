use crate::JobCard;

/// Active search filters. Both are stored lower-cased and trimmed; an empty
/// filter matches every card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    title: String,
    location: String,
}

impl SearchQuery {
    pub fn new(title: &str, location: &str) -> Self {
        Self {
            title: title.trim().to_lowercase(),
            location: location.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.location.is_empty()
    }

    pub fn matches(&self, card: &JobCard) -> bool {
        contains_folded(&card.posting.title, &self.title)
            && contains_folded(&card.posting.location, &self.location)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}
