//! Database layer: metadata records and the blob store.

mod documents;
mod models;
mod pool;
mod storage;

pub use documents::DocumentsRepository;
pub use models::*;
pub use pool::{create_pool, run_migrations};
pub use storage::ObjectStore;
