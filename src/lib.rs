pub mod config;
pub mod observability;

use freshbite_shared::FileStore;

/// Open the file-backed store under the configured data directory
pub fn open_store(config: &config::Config) -> FileStore {
    FileStore::new(&config.storage.data_dir)
}
