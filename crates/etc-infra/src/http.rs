//! Vehicle listing over HTTP

use etc_domain::repository::VehicleSource;
use etc_types::{Error, Result, VehicleRecord};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, info};

/// Fetches the whole vehicle collection from one REST endpoint.
///
/// No query parameters are sent; filtering happens client-side.
pub struct HttpVehicleSource {
    client: Client,
    url: String,
}

fn http_error(e: reqwest::Error) -> Error {
    Error::Http(e.to_string())
}

impl HttpVehicleSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build().map_err(http_error)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl VehicleSource for HttpVehicleSource {
    async fn fetch_all(&self) -> Result<Vec<VehicleRecord>> {
        info!(url = %self.url, "fetching vehicles");

        let response = self
            .client
            .get(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("{} returned {}", self.url, status)));
        }

        let body = response.bytes().await.map_err(http_error)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::EmptyResponse);
        }

        // A literal `null` body counts as no data
        let records: Option<Vec<VehicleRecord>> = serde_json::from_slice(&body)?;
        let records = records.ok_or(Error::EmptyResponse)?;

        debug!(count = records.len(), "decoded vehicle records");
        Ok(records)
    }
}
