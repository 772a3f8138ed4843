//! Adapters that open the persistence and network layers from config

use std::path::PathBuf;

use etc_infra::{FileUserRepository, HttpVehicleSource};
use etc_types::Result;

use crate::config::Config;

/// Open the file-based user repository
pub fn open_user_repo(config: &Config) -> Result<FileUserRepository> {
    let store_dir = config.store_dir()?;
    FileUserRepository::open(store_dir)
}

/// Open the user repository at a custom directory
pub fn open_user_repo_at(store_dir: PathBuf) -> Result<FileUserRepository> {
    FileUserRepository::open(store_dir)
}

/// HTTP source for the configured vehicle endpoint
pub fn open_vehicle_source(config: &Config) -> Result<HttpVehicleSource> {
    HttpVehicleSource::new(config.api_url.clone())
}
