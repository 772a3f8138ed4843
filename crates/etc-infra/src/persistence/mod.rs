//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_user_repo;

pub use file_user_repo::FileUserRepository;
