use board_logging::{board_debug, board_error, board_info, board_warn};

use crate::codec;
use crate::storage::{CartStorage, CART_STORAGE_KEY};
use crate::{CartError, EntryId, JobApplicationEntry, JobCandidate};

/// Whether the cart is currently mirrored to its storage collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Durability {
    #[default]
    Persisted,
    /// The last load or save failed; the cart keeps working in memory.
    MemoryOnly,
}

/// Single source of truth for the applied-jobs cart.
///
/// The only way to obtain a store is [`CartStore::initialize`], so every
/// operation runs against a loaded, ready store. Each successful mutation is
/// written through to storage before it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    entries: Vec<JobApplicationEntry>,
    next_id: u64,
    durability: Durability,
    /// Set when the initial load failed; storage may still hold a cart we
    /// never read, so it is never overwritten.
    load_failed: bool,
}

impl<S: CartStorage> CartStore<S> {
    /// Loads the cart from `storage` under [`CART_STORAGE_KEY`].
    pub fn initialize(storage: S) -> Self {
        Self::initialize_with_key(storage, CART_STORAGE_KEY)
    }

    /// Loads the cart from `storage` under `key`. Absent or malformed data
    /// yields an empty cart; an unreachable storage yields an empty cart in
    /// [`Durability::MemoryOnly`] that stays in memory for the rest of the
    /// process.
    pub fn initialize_with_key(storage: S, key: &str) -> Self {
        let mut durability = Durability::Persisted;
        let mut load_failed = false;
        let entries = match storage.load(key) {
            Ok(Some(raw)) => codec::decode(&raw).unwrap_or_else(|err| {
                board_warn!("Ignoring malformed cart data under {:?}: {}", key, err);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                board_warn!("Cart storage unavailable, continuing in memory: {}", err);
                durability = Durability::MemoryOnly;
                load_failed = true;
                Vec::new()
            }
        };

        let next_id = entries
            .iter()
            .map(|entry| entry.id.get())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        board_info!("Cart initialized with {} entries", entries.len());
        let mut cart = Self {
            storage,
            key: key.to_string(),
            entries,
            next_id: next_id.unwrap_or(u64::MAX),
            durability,
            load_failed,
        };
        if next_id.is_none() {
            cart.renumber();
        }
        cart
    }

    /// Appends a new entry unless one with the same (title, company) already
    /// exists. Title and company are compared exactly after trimming; details
    /// are stored as given.
    pub fn add(&mut self, candidate: JobCandidate) -> Result<EntryId, CartError> {
        let (title, company, details) = candidate.trimmed();
        if title.is_empty() {
            return Err(CartError::InvalidEntry { field: "title" });
        }
        if company.is_empty() {
            return Err(CartError::InvalidEntry { field: "company" });
        }
        if self.contains(title, company) {
            return Err(CartError::Duplicate {
                title: title.to_string(),
                company: company.to_string(),
            });
        }

        if self.next_id == u64::MAX {
            self.renumber();
        }
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(JobApplicationEntry {
            id,
            title: title.to_string(),
            company: company.to_string(),
            details: details.to_string(),
        });
        board_debug!("Added cart entry {} ({:?} at {:?})", id, title, company);
        self.persist();
        Ok(id)
    }

    pub fn remove(&mut self, id: EntryId) -> Result<(), CartError> {
        self.take(id).map(|_| ())
    }

    /// Removes the most recently added entry and returns it.
    pub fn remove_last(&mut self) -> Result<JobApplicationEntry, CartError> {
        let id = self.entries.last().map(|entry| entry.id).ok_or(CartError::Empty)?;
        self.take(id)
    }

    fn take(&mut self, id: EntryId) -> Result<JobApplicationEntry, CartError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CartError::NotFound(id))?;
        let removed = self.entries.remove(index);
        board_debug!("Removed cart entry {}", id);
        self.persist();
        Ok(removed)
    }

    /// Reassigns ids 1..n in order once the counter has run out.
    fn renumber(&mut self) {
        board_warn!("Entry ids exhausted, renumbering {} cart entries", self.entries.len());
        for (entry, id) in self.entries.iter_mut().zip(1..) {
            entry.id = EntryId::new(id);
        }
        self.next_id = self.entries.len() as u64 + 1;
    }

    fn persist(&mut self) {
        if self.load_failed {
            board_debug!("Not saving cart under {:?}: stored data was never read", self.key);
            return;
        }
        let encoded = match codec::encode(&self.entries) {
            Ok(text) => text,
            Err(err) => {
                board_error!("Failed to serialize cart: {}", err);
                self.durability = Durability::MemoryOnly;
                return;
            }
        };
        match self.storage.save(&self.key, &encoded) {
            Ok(()) => self.durability = Durability::Persisted,
            Err(err) => {
                board_warn!("Failed to persist cart under {:?}: {}", self.key, err);
                self.durability = Durability::MemoryOnly;
            }
        }
    }
}

impl<S> CartStore<S> {
    /// Owned snapshot of the entries in insertion order.
    pub fn list(&self) -> Vec<JobApplicationEntry> {
        self.entries.clone()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&JobApplicationEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, title: &str, company: &str) -> bool {
        let (title, company) = (title.trim(), company.trim());
        self.entries.iter().any(|entry| entry.matches(title, company))
    }

    pub fn durability(&self) -> Durability {
        self.durability
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
