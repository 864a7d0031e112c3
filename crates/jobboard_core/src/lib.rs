//! Job board core: the applied-jobs cart, the job board, and the pure page
//! state machine that ties them together.
mod board;
mod cart;
mod codec;
mod effect;
mod entry;
mod error;
mod msg;
mod search;
mod state;
mod storage;
mod update;
mod view_model;

pub use board::{CardId, JobBoard, JobCard, JobForm, JobPosting};
pub use cart::{CartStore, Durability};
pub use effect::{Effect, Notice};
pub use entry::{EntryId, JobApplicationEntry, JobCandidate};
pub use error::{CartError, FormError, StorageError};
pub use msg::Msg;
pub use search::SearchQuery;
pub use state::AppState;
pub use storage::{CartStorage, MemoryStorage, CART_STORAGE_KEY};
pub use update::update;
pub use view_model::{AppViewModel, CartRowView, JobCardView, SearchInputView};
