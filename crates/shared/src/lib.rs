mod category;
mod error;
pub mod inventory;
pub mod recipe;
pub mod shopping;
pub mod store;

pub use category::*;
pub use error::*;
pub use store::{FileStore, KeyValueStore, MemoryStore};
