use crate::{CardId, Durability, EntryId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Header badge value; always the cart's current count.
    pub cart_count: usize,
    pub cards: Vec<JobCardView>,
    pub visible_count: usize,
    pub search: SearchInputView,
    /// Rows of the cart overlay, present only while it is open.
    pub cart: Option<Vec<CartRowView>>,
    pub form_open: bool,
    pub durability: Durability,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub card_id: CardId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub details: String,
    pub visible: bool,
    pub in_cart: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    pub entry_id: EntryId,
    pub title: String,
    pub company: String,
    pub details: String,
}

/// Raw text of the two search boxes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchInputView {
    pub title: String,
    pub location: String,
}
