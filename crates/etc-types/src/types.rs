//! Vehicle, toll tag and account records

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Text form of a JSON scalar; null, objects and arrays have none
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accept any JSON scalar as a string; objects, arrays and null become empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Scalars map through `From<String>`; anything else is the default type
fn lenient_vehicle_type<'de, D>(deserializer: D) -> Result<VehicleType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?)
        .map(VehicleType::from)
        .unwrap_or_default())
}

/// Scalars map through `From<String>`; anything else is no status
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<TagStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).map(TagStatus::from))
}

/// A toll tag must be an object; any other shape means no tag
fn lenient_toll_tag<'de, D>(deserializer: D) -> Result<Option<TollTag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Accept integers given as numbers or numeric strings; anything else is 0
fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_timestamp(&s),
        _ => None,
    })
}

/// Parse an API timestamp.
///
/// Accepts RFC 3339, offset-less ISO date-times (read as UTC) and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Vehicle category as reported by the vehicle API
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleType {
    Car,
    Bus,
    Minibus,
    Truck,
    Van,
    Motorcycle,
    /// Unrecognized value, kept verbatim
    Other(String),
}

impl VehicleType {
    /// Every known vehicle type, in menu order
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Car,
        VehicleType::Bus,
        VehicleType::Minibus,
        VehicleType::Truck,
        VehicleType::Van,
        VehicleType::Motorcycle,
    ];

    /// Wire value (lowercase for known types)
    pub fn as_str(&self) -> &str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bus => "bus",
            VehicleType::Minibus => "minibus",
            VehicleType::Truck => "truck",
            VehicleType::Van => "van",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Other(s) => s,
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Bus => "Bus",
            VehicleType::Minibus => "Minibus",
            VehicleType::Truck => "Truck",
            VehicleType::Van => "Van",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Other(s) => s,
        }
    }
}

impl Default for VehicleType {
    fn default() -> Self {
        VehicleType::Other(String::new())
    }
}

impl From<String> for VehicleType {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "car" => VehicleType::Car,
            "bus" => VehicleType::Bus,
            "minibus" => VehicleType::Minibus,
            "truck" => VehicleType::Truck,
            "van" => VehicleType::Van,
            "motorcycle" => VehicleType::Motorcycle,
            _ => VehicleType::Other(value),
        }
    }
}

impl From<&str> for VehicleType {
    fn from(value: &str) -> Self {
        VehicleType::from(value.to_string())
    }
}

impl From<VehicleType> for String {
    fn from(value: VehicleType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toll tag lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagStatus {
    Active,
    Inactive,
    Expire,
    /// Unrecognized value, kept verbatim
    Other(String),
}

impl TagStatus {
    /// Every known status, in menu order
    pub const ALL: [TagStatus; 3] = [TagStatus::Active, TagStatus::Expire, TagStatus::Inactive];

    pub fn as_str(&self) -> &str {
        match self {
            TagStatus::Active => "active",
            TagStatus::Inactive => "inactive",
            TagStatus::Expire => "expire",
            TagStatus::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TagStatus::Active => "Active",
            TagStatus::Inactive => "Inactive",
            TagStatus::Expire => "Expire",
            TagStatus::Other(s) => s,
        }
    }
}

impl From<String> for TagStatus {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "active" => TagStatus::Active,
            "inactive" => TagStatus::Inactive,
            "expire" => TagStatus::Expire,
            _ => TagStatus::Other(value),
        }
    }
}

impl From<&str> for TagStatus {
    fn from(value: &str) -> Self {
        TagStatus::from(value.to_string())
    }
}

impl From<TagStatus> for String {
    fn from(value: TagStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for TagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toll tag assigned to a vehicle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollTag {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub activation_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub expired_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<TagStatus>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub vehicle_id: i64,
}

/// One registered vehicle as returned by the vehicle API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_vehicle_type")]
    pub vehicle_type: VehicleType,
    #[serde(default, deserialize_with = "lenient_string")]
    pub license_plate_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vehicle_owner_id: String,
    #[serde(default, deserialize_with = "lenient_toll_tag")]
    pub toll_tag: Option<TollTag>,
}

impl VehicleRecord {
    pub fn new(id: i64, vehicle_type: VehicleType, license_plate_number: impl Into<String>) -> Self {
        Self {
            id,
            vehicle_type,
            license_plate_number: license_plate_number.into(),
            vehicle_owner_id: String::new(),
            toll_tag: None,
        }
    }

    pub fn with_toll_tag(mut self, toll_tag: TollTag) -> Self {
        self.toll_tag = Some(toll_tag);
        self
    }

    /// Status of the assigned toll tag, if any
    pub fn status(&self) -> Option<&TagStatus> {
        self.toll_tag.as_ref().and_then(|t| t.status.as_ref())
    }
}

/// Stored credential for a signed-up user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique identifier
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
