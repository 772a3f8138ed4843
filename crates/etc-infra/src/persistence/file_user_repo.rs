//! File-based user repository

use std::path::PathBuf;

use etc_domain::repository::UserRepository;
use etc_store::UserStore;
use etc_types::{Result, UserAccount};

/// [`UserRepository`] backed by the JSON user store
pub struct FileUserRepository {
    store: UserStore,
}

impl FileUserRepository {
    /// Create or load the repository under `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: UserStore::open(store_dir)?,
        })
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }
}

impl UserRepository for FileUserRepository {
    fn insert(&mut self, user: UserAccount) -> Result<String> {
        self.store.add_user(user)
    }
}
