#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient, non-blocking message to the user.
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AddedToCart { title: String },
    AlreadyInCart { title: String, company: String },
    Removed { title: String },
    CartEmpty,
    JobPosted { title: String },
    FormIncomplete { field: &'static str },
}
