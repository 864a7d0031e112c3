#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search boxes.
    SearchInputChanged { title: String, location: String },
    /// User pressed the search button or Enter in a search box.
    SearchSubmitted,
    /// User clicked Apply on a job card.
    ApplyClicked { card_id: crate::CardId },
    /// User clicked the cart link in the header.
    CartOpened,
    /// User closed the cart overlay.
    CartClosed,
    /// User clicked Remove on a cart row.
    RemoveClicked { entry_id: crate::EntryId },
    /// User pressed the "remove most recent" key.
    RemoveLastPressed,
    /// User opened the "add new job" form.
    JobFormOpened,
    /// User cancelled the "add new job" form.
    JobFormCancelled,
    /// User submitted the "add new job" form.
    JobFormSubmitted(crate::JobForm),
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
