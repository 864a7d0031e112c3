//! Job board engine: page markup extraction and file persistence.
mod extract;
mod persist;
mod source;
mod types;

pub use extract::{CardExtractor, JobCardExtractor};
pub use persist::{ensure_data_dir, read_if_exists, AtomicFileWriter, PersistError};
pub use source::{load_markup, SourceError};
pub use types::{ExtractedCard, UNKNOWN_COMPANY, UNKNOWN_TITLE};
