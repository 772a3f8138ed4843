//! Loading the vehicle collection for the dashboard

use etc_domain::repository::VehicleSource;
use etc_types::VehicleRecord;
use tracing::{info, warn};

/// Fetch the vehicle collection once.
///
/// Failures are logged and yield an empty collection; there is no retry.
pub async fn load_vehicles<S: VehicleSource>(source: &S) -> Vec<VehicleRecord> {
    match source.fetch_all().await {
        Ok(records) => {
            info!(count = records.len(), "vehicles loaded");
            records
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch vehicles");
            Vec::new()
        }
    }
}
