//! Persistence module split across logical submodules: the SQLite
//! connection, the key layout, and the key-value store abstraction the
//! reading session is written against.

mod connection;
pub mod keys;
mod store;

pub use connection::{data_dir, ensure_schema, open_database};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
