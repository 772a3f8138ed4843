//! Domain layer for the ETC vehicle dashboard
//!
//! Models hold table and search state, services derive the visible rows
//! from an in-memory vehicle collection, and repository traits describe
//! the seams implemented by the infrastructure crate.

pub mod model;
pub mod repository;
pub mod service;
