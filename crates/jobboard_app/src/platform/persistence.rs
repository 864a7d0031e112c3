use std::path::PathBuf;

use board_logging::board_debug;
use jobboard_core::{CartStorage, StorageError};
use jobboard_engine::{read_if_exists, AtomicFileWriter, PersistError};

/// Cart storage backed by one `<key>.json` file per key in the data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    writer: AtomicFileWriter,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(data_dir),
        }
    }
}

fn filename_for(key: &str) -> String {
    format!("{key}.json")
}

fn unavailable(err: PersistError) -> StorageError {
    StorageError::Unavailable(err.to_string())
}

impl CartStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let content = read_if_exists(self.writer.dir(), &filename_for(key)).map_err(unavailable)?;
        board_debug!(
            "Loaded {:?} from {:?}: {}",
            key,
            self.writer.dir(),
            if content.is_some() { "present" } else { "absent" }
        );
        Ok(content)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writer
            .write(&filename_for(key), value)
            .map(|_| ())
            .map_err(unavailable)
    }
}

#[cfg(test)]
mod tests {
    use jobboard_core::{CartStore, Durability, JobCandidate};

    use super::*;

    #[test]
    fn cart_survives_restart_on_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("data");

        let mut cart = CartStore::initialize(FileStorage::new(dir.clone()));
        cart.add(JobCandidate::new("Backend Engineer", "Acme", "Remote"))
            .unwrap();
        cart.add(JobCandidate::new("Data Analyst", "Globex", ""))
            .unwrap();
        assert!(dir.join("jobCart.json").is_file());

        let reloaded = CartStore::initialize(FileStorage::new(dir));
        assert_eq!(reloaded.list(), cart.list());
        assert_eq!(reloaded.durability(), Durability::Persisted);
    }

    #[test]
    fn unwritable_dir_keeps_cart_in_memory() {
        let temp = tempfile::TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut cart = CartStore::initialize(FileStorage::new(blocker.join("data")));
        cart.add(JobCandidate::new("Backend Engineer", "Acme", "Remote"))
            .unwrap();

        assert_eq!(cart.count(), 1);
        assert_eq!(cart.durability(), Durability::MemoryOnly);
    }
}
