use thiserror::Error;

use crate::EntryId;

/// Outcome of a rejected cart operation. Every variant leaves the cart
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("\"{title}\" at {company} is already in the cart")]
    Duplicate { title: String, company: String },
    #[error("no cart entry with id {0}")]
    NotFound(EntryId),
    #[error("the cart is empty")]
    Empty,
    #[error("cart entry is missing a {field}")]
    InvalidEntry { field: &'static str },
}

/// Failure reported by a persistence collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected job creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the {0} field is required")]
    MissingField(&'static str),
}
