use std::cell::Cell;
use std::sync::Once;

use jobboard_core::{
    CartStorage, CartStore, Durability, EntryId, JobCandidate, MemoryStorage, StorageError,
    CART_STORAGE_KEY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

/// Storage whose loads and/or saves always fail.
#[derive(Debug, Default)]
struct BrokenStorage {
    fail_load: bool,
    fail_save: Cell<bool>,
    saves: usize,
}

impl CartStorage for BrokenStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_load {
            Err(StorageError::Unavailable("quota exceeded".into()))
        } else {
            Ok(None)
        }
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.saves += 1;
        if self.fail_save.get() {
            Err(StorageError::Unavailable("quota exceeded".into()))
        } else {
            Ok(())
        }
    }
}

#[test]
fn reload_restores_entries_in_order() {
    init_logging();
    let mut cart = CartStore::initialize(MemoryStorage::new());
    cart.add(JobCandidate::new("Backend Engineer", "Acme", "Remote"))
        .unwrap();
    cart.add(JobCandidate::new("Data Analyst", "Globex", ""))
        .unwrap();
    cart.add(JobCandidate::new("SRE", "Initech", "On call, Berlin"))
        .unwrap();

    let reloaded = CartStore::initialize(cart.storage().clone());

    assert_eq!(reloaded.list(), cart.list());
    assert_eq!(reloaded.durability(), Durability::Persisted);
}

#[test]
fn every_mutation_is_written_through() {
    init_logging();
    let mut cart = CartStore::initialize(MemoryStorage::new());
    assert_eq!(cart.storage().get(CART_STORAGE_KEY), None);

    let id = cart
        .add(JobCandidate::new("Backend Engineer", "Acme", "Remote"))
        .unwrap();
    let stored: serde_json::Value =
        serde_json::from_str(cart.storage().get(CART_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([{
            "id": id.get(),
            "title": "Backend Engineer",
            "company": "Acme",
            "details": "Remote",
        }])
    );

    cart.remove(id).unwrap();
    assert_eq!(cart.storage().get(CART_STORAGE_KEY), Some("[]"));
}

#[test]
fn absent_blank_or_malformed_data_starts_empty() {
    init_logging();
    let inputs = [
        None,
        Some(""),
        Some("   "),
        Some("not json"),
        Some("{\"id\": 1}"),
        Some("[{\"id\": 1, \"title\": 5}]"),
        Some("[{\"id\": -3, \"title\": \"A\", \"company\": \"B\"}]"),
    ];

    for input in inputs {
        let storage = match input {
            Some(raw) => MemoryStorage::with_value(CART_STORAGE_KEY, raw),
            None => MemoryStorage::new(),
        };
        let mut cart = CartStore::initialize(storage);
        assert_eq!(cart.count(), 0, "input {input:?}");
        assert_eq!(cart.durability(), Durability::Persisted);
        // Still ready for use.
        assert!(cart.add(JobCandidate::new("A", "B", "")).is_ok());
    }
}

#[test]
fn accepts_millisecond_and_string_ids() {
    init_logging();
    let raw = r#"[
        {"id": 1717171717171, "title": "Backend Engineer", "company": "Acme", "details": "Remote"},
        {"id": "1717171717999", "title": "Designer", "company": "Unknown Company", "details": ""},
        {"id": 12, "title": "Writer", "company": "Globex"}
    ]"#;
    let mut cart = CartStore::initialize(MemoryStorage::with_value(CART_STORAGE_KEY, raw));

    let entries = cart.list();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, EntryId::new(1_717_171_717_171));
    assert_eq!(entries[1].id, EntryId::new(1_717_171_717_999));
    assert_eq!(entries[2].details, "");

    // New ids continue after the largest loaded one.
    let id = cart.add(JobCandidate::new("Tester", "Acme", "")).unwrap();
    assert_eq!(id, EntryId::new(1_717_171_718_000));
}

#[test]
fn repeated_rows_are_dropped_on_load() {
    init_logging();
    let raw = r#"[
        {"id": 1, "title": "A", "company": "Acme", "details": "first"},
        {"id": 2, "title": "A", "company": "Acme", "details": "second"},
        {"id": 1, "title": "B", "company": "Acme", "details": ""},
        {"id": 3, "title": " ", "company": "Acme", "details": ""},
        {"id": 4, "title": "C", "company": "Acme", "details": ""}
    ]"#;
    let cart = CartStore::initialize(MemoryStorage::with_value(CART_STORAGE_KEY, raw));

    let entries = cart.list();
    let kept: Vec<_> = entries
        .iter()
        .map(|entry| (entry.id.get(), entry.title.as_str(), entry.details.as_str()))
        .collect();
    assert_eq!(kept, vec![(1, "A", "first"), (4, "C", "")]);
}

#[test]
fn unavailable_storage_degrades_to_memory() {
    init_logging();
    let mut cart = CartStore::initialize(BrokenStorage {
        fail_load: true,
        fail_save: Cell::new(true),
        saves: 0,
    });
    assert_eq!(cart.durability(), Durability::MemoryOnly);

    let id = cart.add(JobCandidate::new("A", "Acme", "")).unwrap();
    cart.add(JobCandidate::new("B", "Acme", "")).unwrap();
    assert_eq!(cart.count(), 2);
    cart.remove(id).unwrap();
    assert_eq!(cart.count(), 1);
    assert_eq!(cart.durability(), Durability::MemoryOnly);
}

#[test]
fn failed_load_never_overwrites_stored_cart() {
    init_logging();
    let mut cart = CartStore::initialize(BrokenStorage {
        fail_load: true,
        fail_save: Cell::new(false),
        saves: 0,
    });

    let id = cart.add(JobCandidate::new("A", "Acme", "")).unwrap();
    cart.add(JobCandidate::new("B", "Acme", "")).unwrap();
    cart.remove(id).unwrap();

    assert_eq!(cart.count(), 1);
    assert_eq!(cart.storage().saves, 0);
    assert_eq!(cart.durability(), Durability::MemoryOnly);
}

#[test]
fn durability_recovers_after_a_successful_save() {
    init_logging();
    let mut cart = CartStore::initialize(BrokenStorage {
        fail_load: false,
        fail_save: Cell::new(true),
        saves: 0,
    });
    assert_eq!(cart.durability(), Durability::Persisted);

    cart.add(JobCandidate::new("A", "Acme", "")).unwrap();
    assert_eq!(cart.durability(), Durability::MemoryOnly);

    cart.storage().fail_save.set(false);
    cart.add(JobCandidate::new("B", "Acme", "")).unwrap();
    assert_eq!(cart.durability(), Durability::Persisted);
    assert_eq!(cart.storage().saves, 2);
}

#[test]
fn exhausted_ids_are_renumbered_instead_of_reused() {
    init_logging();
    let raw = r#"[
        {"id": 7, "title": "A", "company": "Acme"},
        {"id": 18446744073709551615, "title": "B", "company": "Acme"}
    ]"#;
    let mut cart = CartStore::initialize(MemoryStorage::with_value(CART_STORAGE_KEY, raw));

    let id = cart.add(JobCandidate::new("C", "Acme", "")).unwrap();

    let ids: Vec<_> = cart.list().iter().map(|entry| entry.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(id, EntryId::new(3));
    let titles: Vec<_> = cart.list().into_iter().map(|entry| entry.title).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn last_free_id_is_renumbered_on_next_add() {
    init_logging();
    let raw = r#"[{"id": "18446744073709551614", "title": "A", "company": "Acme"}]"#;
    let mut cart = CartStore::initialize(MemoryStorage::with_value(CART_STORAGE_KEY, raw));

    let b = cart.add(JobCandidate::new("B", "Acme", "")).unwrap();
    let c = cart.add(JobCandidate::new("C", "Acme", "")).unwrap();

    assert_ne!(b, c);
    let ids: Vec<_> = cart.list().iter().map(|entry| entry.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn rejected_operations_do_not_write() {
    init_logging();
    let mut cart = CartStore::initialize(BrokenStorage::default());
    cart.add(JobCandidate::new("A", "Acme", "")).unwrap();

    let _ = cart.add(JobCandidate::new("A", "Acme", ""));
    let _ = cart.remove(EntryId::new(42));
    cart.remove_last().unwrap();
    let _ = cart.remove_last();

    assert_eq!(cart.storage().saves, 2);
}

#[test]
fn custom_key_is_isolated() {
    init_logging();
    let storage = MemoryStorage::with_value(
        CART_STORAGE_KEY,
        r#"[{"id": 1, "title": "A", "company": "Acme", "details": ""}]"#,
    );
    let mut cart = CartStore::initialize_with_key(storage, "otherCart");
    assert_eq!(cart.count(), 0);

    cart.add(JobCandidate::new("B", "Acme", "")).unwrap();
    assert!(cart.storage().get("otherCart").is_some());
    assert!(cart.storage().get(CART_STORAGE_KEY).unwrap().contains("\"A\""));
}
