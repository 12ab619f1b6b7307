pub mod error;
pub mod kv;
pub mod preferences;

pub use error::{Error, Result};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use preferences::{FAVORITES_KEY, PreferenceStore, RATINGS_KEY};
