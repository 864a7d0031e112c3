use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a cart entry. Written as a JSON number; strings holding an
/// integer are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntryId")]
pub struct EntryId(u64);

impl EntryId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntryId {
    Number(u64),
    Text(String),
}

impl TryFrom<RawEntryId> for EntryId {
    type Error = String;

    fn try_from(raw: RawEntryId) -> Result<Self, Self::Error> {
        match raw {
            RawEntryId::Number(value) => Ok(Self(value)),
            RawEntryId::Text(text) => text
                .trim()
                .parse::<u64>()
                .map(Self)
                .map_err(|_| format!("entry id {text:?} is not an integer")),
        }
    }
}

/// One job the user has applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplicationEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub details: String,
}

impl JobApplicationEntry {
    pub(crate) fn matches(&self, title: &str, company: &str) -> bool {
        self.title == title && self.company == company
    }
}

/// Structured input for `CartStore::add`, extracted by whichever view
/// handled the "apply" action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobCandidate {
    pub title: String,
    pub company: String,
    pub details: String,
}

impl JobCandidate {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            details: details.into(),
        }
    }

    pub(crate) fn trimmed(&self) -> (&str, &str, &str) {
        (self.title.trim(), self.company.trim(), &self.details)
    }
}
