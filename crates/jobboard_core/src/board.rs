use crate::{FormError, JobCandidate};

pub type CardId = u64;

/// Structured job data, as read from page markup or the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub id: CardId,
    pub posting: JobPosting,
}

impl JobCard {
    /// The tuple handed to the cart when the user applies to this card.
    pub fn candidate(&self) -> JobCandidate {
        JobCandidate::new(
            self.posting.title.clone(),
            self.posting.company.clone(),
            self.posting.details.clone(),
        )
    }
}

/// Fields of the "add new job" form. All of them are required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

impl JobForm {
    fn validate(&self) -> Result<JobPosting, FormError> {
        let fields = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("description", &self.description),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(FormError::MissingField(*name));
        }
        Ok(JobPosting {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            details: self.description.trim().to_string(),
        })
    }
}

/// Ordered job cards shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobBoard {
    cards: Vec<JobCard>,
    next_id: CardId,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_postings(postings: impl IntoIterator<Item = JobPosting>) -> Self {
        let mut board = Self::new();
        for posting in postings {
            board.push(posting);
        }
        board
    }

    /// Validates the form and appends a new card at the end of the board.
    pub fn post(&mut self, form: &JobForm) -> Result<CardId, FormError> {
        let posting = form.validate()?;
        Ok(self.push(posting))
    }

    fn push(&mut self, posting: JobPosting) -> CardId {
        self.next_id += 1;
        let id = self.next_id;
        self.cards.push(JobCard { id, posting });
        id
    }

    pub fn cards(&self) -> &[JobCard] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&JobCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn candidate_for(&self, id: CardId) -> Option<JobCandidate> {
        self.card(id).map(JobCard::candidate)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
