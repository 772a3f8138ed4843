//! Vehicle search form state and its URL query string form

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search form fields; empty means no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub vehicle_id: String,
    pub license_plate: String,
    pub status: String,
    pub vehicle_type: String,
}

/// One field of the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    VehicleId,
    LicensePlate,
    Status,
    VehicleType,
}

impl SearchField {
    /// Query string order
    pub const ALL: [SearchField; 4] = [
        SearchField::VehicleId,
        SearchField::LicensePlate,
        SearchField::Status,
        SearchField::VehicleType,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SearchField::VehicleId => "vehicleId",
            SearchField::LicensePlate => "licensePlate",
            SearchField::Status => "status",
            SearchField::VehicleType => "vehicleType",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        SearchField::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl SearchQuery {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::VehicleId => &self.vehicle_id,
            SearchField::LicensePlate => &self.license_plate,
            SearchField::Status => &self.status,
            SearchField::VehicleType => &self.vehicle_type,
        }
    }

    pub fn field_mut(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::VehicleId => &mut self.vehicle_id,
            SearchField::LicensePlate => &mut self.license_plate,
            SearchField::Status => &mut self.status,
            SearchField::VehicleType => &mut self.vehicle_type,
        }
    }

    /// Parse a query string (leading `?` optional). Unknown keys are
    /// ignored and the first occurrence of a key wins.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = SearchQuery::default();
        let mut seen = Vec::new();

        for pair in qs.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(field) = SearchField::from_key(&decode_component(raw_key)) else {
                continue;
            };
            if seen.contains(&field) {
                continue;
            }
            seen.push(field);
            *query.field_mut(field) = decode_component(raw_value);
        }

        query
    }

    /// Encode non-empty fields as `key=value` pairs joined by `&`
    pub fn to_query_string(&self) -> String {
        SearchField::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .map(|f| format!("{}={}", f.key(), urlencoding::encode(self.get(*f))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Pending search edits and the last submitted search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryController {
    pending: SearchQuery,
    committed: SearchQuery,
}

impl QueryController {
    /// Initialize both pending and committed state from the page URL
    pub fn from_query_string(qs: &str) -> Self {
        let query = SearchQuery::from_query_string(qs);
        Self {
            pending: query.clone(),
            committed: query,
        }
    }

    pub fn pending(&self) -> &SearchQuery {
        &self.pending
    }

    pub fn committed(&self) -> &SearchQuery {
        &self.committed
    }

    /// Edit one pending field; nothing is applied until `submit`
    pub fn set_field(&mut self, field: SearchField, value: impl Into<String>) {
        *self.pending.field_mut(field) = value.into();
    }

    pub fn pending_mut(&mut self, field: SearchField) -> &mut String {
        self.pending.field_mut(field)
    }

    /// Commit the pending edits and return the URL to navigate to
    pub fn submit(&mut self, path: &str) -> String {
        self.committed = self.pending.clone();
        let url = format!("{}?{}", path, self.committed.to_query_string());
        debug!(%url, "search submitted");
        url
    }
}

/// Option in a search form drop-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATUS_OPTIONS: [SearchOption; 5] = [
    SearchOption { label: "All", value: "" },
    SearchOption { label: "Active", value: "active" },
    SearchOption { label: "Expire", value: "expire" },
    SearchOption { label: "Inactive", value: "inactive" },
    SearchOption { label: "No Toll Tag", value: "null" },
];

pub const VEHICLE_TYPE_OPTIONS: [SearchOption; 7] = [
    SearchOption { label: "All", value: "" },
    SearchOption { label: "Car", value: "car" },
    SearchOption { label: "Bus", value: "bus" },
    SearchOption { label: "Minibus", value: "minibus" },
    SearchOption { label: "Truck", value: "truck" },
    SearchOption { label: "Van", value: "van" },
    SearchOption { label: "Motorcycle", value: "motorcycle" },
];
