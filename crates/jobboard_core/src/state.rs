use crate::view_model::{AppViewModel, CartRowView, JobCardView, SearchInputView};
use crate::{CartStore, JobBoard, SearchQuery};

/// Page state: the job board, the cart it feeds, and what is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState<S> {
    board: JobBoard,
    cart: CartStore<S>,
    search_input: SearchInputView,
    query: SearchQuery,
    cart_open: bool,
    form_open: bool,
    dirty: bool,
}

impl<S> AppState<S> {
    pub fn new(board: JobBoard, cart: CartStore<S>) -> Self {
        Self {
            board,
            cart,
            search_input: SearchInputView::default(),
            query: SearchQuery::default(),
            cart_open: false,
            form_open: false,
            // First frame always renders.
            dirty: true,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let cards = self
            .board
            .cards()
            .iter()
            .map(|card| JobCardView {
                card_id: card.id,
                title: card.posting.title.clone(),
                company: card.posting.company.clone(),
                location: card.posting.location.clone(),
                details: card.posting.details.clone(),
                visible: self.query.matches(card),
                in_cart: self
                    .cart
                    .contains(&card.posting.title, &card.posting.company),
            })
            .collect::<Vec<_>>();
        let visible_count = cards.iter().filter(|card| card.visible).count();

        let cart = self.cart_open.then(|| {
            self.cart
                .list()
                .into_iter()
                .map(|entry| CartRowView {
                    entry_id: entry.id,
                    title: entry.title,
                    company: entry.company,
                    details: entry.details,
                })
                .collect()
        });

        AppViewModel {
            cart_count: self.cart.count(),
            cards,
            visible_count,
            search: self.search_input.clone(),
            cart,
            form_open: self.form_open,
            durability: self.cart.durability(),
            dirty: self.dirty,
        }
    }

    pub fn board(&self) -> &JobBoard {
        &self.board
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn board_mut(&mut self) -> &mut JobBoard {
        &mut self.board
    }

    pub(crate) fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    pub(crate) fn set_search_input(&mut self, title: String, location: String) {
        self.search_input = SearchInputView { title, location };
        self.mark_dirty();
    }

    pub(crate) fn submit_search(&mut self) {
        let query = SearchQuery::new(&self.search_input.title, &self.search_input.location);
        if query != self.query {
            self.query = query;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_cart_open(&mut self, open: bool) {
        if self.cart_open != open {
            self.cart_open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_form_open(&mut self, open: bool) {
        if self.form_open != open {
            self.form_open = open;
            self.mark_dirty();
        }
    }
}
