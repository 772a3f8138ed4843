//! User store for signed-up accounts

use etc_types::{Error, Result, UserAccount};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Persistent store for user accounts, keyed by account id
pub struct UserStore {
    store_path: PathBuf,
    users: HashMap<String, UserAccount>,
}

impl UserStore {
    /// Create or load a user store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("users.json");

        let users = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_else(|e| {
                warn!(path = %store_path.display(), error = %e, "user store unreadable, starting empty");
                HashMap::new()
            })
        } else {
            HashMap::new()
        };

        debug!(path = %store_path.display(), count = users.len(), "opened user store");
        Ok(Self { store_path, users })
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.users)?;
        Ok(())
    }

    /// Insert a new account and return its id.
    ///
    /// Emails are unique, compared case-insensitively.
    pub fn add_user(&mut self, user: UserAccount) -> Result<String> {
        if self.get_by_email(&user.email).is_some() {
            return Err(Error::Persistence(format!(
                "an account already exists for {}",
                user.email
            )));
        }

        let id = user.id.clone();
        self.users.insert(id.clone(), user);
        if let Err(e) = self.save() {
            self.users.remove(&id);
            return Err(e);
        }
        Ok(id)
    }

    /// Get an account by id
    pub fn get_user(&self, id: &str) -> Option<&UserAccount> {
        self.users.get(id)
    }

    /// Find an account by email
    pub fn get_by_email(&self, email: &str) -> Option<&UserAccount> {
        self.users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Get total account count
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn account(email: &str) -> UserAccount {
        UserAccount::new("Jane".to_string(), email.to_string(), "$argon2id$stub".to_string())
    }

    #[test]
    fn test_add_and_reload() {
        let dir = tempdir().unwrap();
        let id = {
            let mut store = UserStore::open(dir.path().to_path_buf()).unwrap();
            store.add_user(account("jane@example.com")).unwrap()
        };

        let store = UserStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.get_user(&id).unwrap().email, "jane@example.com");
        assert!(store.path().ends_with("users.json"));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let dir = tempdir().unwrap();
        let mut store = UserStore::open(dir.path().to_path_buf()).unwrap();
        store.add_user(account("jane@example.com")).unwrap();

        let err = store.add_user(account("JANE@example.com")).unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("users.json"), "{ not json").unwrap();
        let store = UserStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 0);
    }
}
