//! Infrastructure implementations of the domain repository traits

pub mod http;
pub mod password;
pub mod persistence;

pub use http::HttpVehicleSource;
pub use password::Argon2Hasher;
pub use persistence::FileUserRepository;
