/// Title used when a card has no heading.
pub const UNKNOWN_TITLE: &str = "Unknown Job";
/// Company used when a card has no `<strong>` company name.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// One `.job-card` read out of page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCard {
    pub title: String,
    pub company: String,
    pub location: String,
    pub details: String,
}
