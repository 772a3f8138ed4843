//! Persistent JSON-file stores

pub mod users;

pub use users::UserStore;
