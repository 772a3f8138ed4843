//! Trait definitions for the data sources and sinks behind the dashboard

use std::future::Future;

use etc_types::{Result, UserAccount, VehicleRecord};

/// Source of the full vehicle collection
pub trait VehicleSource {
    /// Fetch every vehicle record in one request
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<VehicleRecord>>> + Send;
}

/// Repository for signed-up user accounts
pub trait UserRepository {
    /// Insert a new account, returning its id
    fn insert(&mut self, user: UserAccount) -> Result<String>;
}

/// One-way password hashing
pub trait PasswordHasher {
    /// Hash a plaintext password into a self-describing string
    fn hash(&self, password: &str) -> Result<String>;
}
