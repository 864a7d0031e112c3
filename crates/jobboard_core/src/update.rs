use board_logging::{board_debug, board_info};

use crate::{AppState, CartError, CartStorage, Effect, Msg, Notice};

/// Applies a message to state and returns any effects. Cart mutations are
/// persisted by the cart itself before this returns.
pub fn update<S: CartStorage>(mut state: AppState<S>, msg: Msg) -> (AppState<S>, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchInputChanged { title, location } => {
            state.set_search_input(title, location);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            state.submit_search();
            Vec::new()
        }
        Msg::ApplyClicked { card_id } => {
            let Some(candidate) = state.board().candidate_for(card_id) else {
                board_debug!("Apply clicked on unknown card {}", card_id);
                return (state, Vec::new());
            };
            match state.cart_mut().add(candidate) {
                Ok(entry_id) => {
                    state.mark_dirty();
                    let title = state
                        .cart()
                        .get(entry_id)
                        .map(|entry| entry.title.clone())
                        .unwrap_or_default();
                    vec![Effect::Notify(Notice::AddedToCart { title })]
                }
                Err(CartError::Duplicate { title, company }) => {
                    vec![Effect::Notify(Notice::AlreadyInCart { title, company })]
                }
                Err(err) => {
                    board_debug!("Card {} not added to cart: {}", card_id, err);
                    Vec::new()
                }
            }
        }
        Msg::CartOpened => {
            state.set_cart_open(true);
            Vec::new()
        }
        Msg::CartClosed => {
            state.set_cart_open(false);
            Vec::new()
        }
        Msg::RemoveClicked { entry_id } => {
            let title = state.cart().get(entry_id).map(|entry| entry.title.clone());
            match state.cart_mut().remove(entry_id) {
                Ok(()) => {
                    state.mark_dirty();
                    vec![Effect::Notify(Notice::Removed {
                        title: title.unwrap_or_default(),
                    })]
                }
                Err(err) => {
                    board_debug!("Remove ignored: {}", err);
                    Vec::new()
                }
            }
        }
        Msg::RemoveLastPressed => match state.cart_mut().remove_last() {
            Ok(entry) => {
                state.mark_dirty();
                vec![Effect::Notify(Notice::Removed { title: entry.title })]
            }
            Err(_) => vec![Effect::Notify(Notice::CartEmpty)],
        },
        Msg::JobFormOpened => {
            state.set_form_open(true);
            Vec::new()
        }
        Msg::JobFormCancelled => {
            state.set_form_open(false);
            Vec::new()
        }
        Msg::JobFormSubmitted(form) => match state.board_mut().post(&form) {
            Ok(card_id) => {
                board_info!("Posted job card {} ({:?})", card_id, form.title.trim());
                state.set_form_open(false);
                state.mark_dirty();
                vec![Effect::Notify(Notice::JobPosted {
                    title: form.title.trim().to_string(),
                })]
            }
            Err(crate::FormError::MissingField(field)) => {
                vec![Effect::Notify(Notice::FormIncomplete { field })]
            }
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
