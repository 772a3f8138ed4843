//! Application services shared by the CLI and GUI front ends

pub mod auth;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod logging;
pub mod repository;
