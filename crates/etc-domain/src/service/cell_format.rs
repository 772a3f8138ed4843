//! Per-cell display values for the result table

use chrono::{DateTime, Local, TimeZone, Utc};
use etc_types::{TagStatus, VehicleRecord};

use crate::model::ColumnKey;

/// Placeholder for values a record does not have
pub const NOT_AVAILABLE: &str = "N/A";

/// Entries of the per-row actions menu
pub const ROW_ACTIONS: [&str; 3] = ["View", "Edit", "Delete"];

/// Semantic color of a status label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Success,
    Danger,
    Warning,
    Default,
}

pub fn status_color(status: &TagStatus) -> StatusColor {
    match status {
        TagStatus::Active => StatusColor::Success,
        TagStatus::Inactive => StatusColor::Danger,
        TagStatus::Expire => StatusColor::Warning,
        TagStatus::Other(_) => StatusColor::Default,
    }
}

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Status { label: String, color: StatusColor },
    DateTime { date: String, time: String },
    Actions,
}

impl Cell {
    fn not_available() -> Self {
        Cell::Text(NOT_AVAILABLE.to_string())
    }

    /// Single-line form for text output
    pub fn to_plain(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Status { label, .. } => label.clone(),
            Cell::DateTime { date, time } => format!("{date} {time}"),
            Cell::Actions => ROW_ACTIONS.join("/"),
        }
    }
}

/// Format a cell in the local time zone
pub fn format_cell(record: &VehicleRecord, column: ColumnKey) -> Cell {
    format_cell_in(record, column, &Local)
}

/// Format a cell, rendering timestamps in `tz`
pub fn format_cell_in<Tz>(record: &VehicleRecord, column: ColumnKey, tz: &Tz) -> Cell
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let tag = record.toll_tag.as_ref();
    match column {
        ColumnKey::Id => Cell::Text(record.id.to_string()),
        ColumnKey::VehicleType => Cell::Text(record.vehicle_type.as_str().to_string()),
        ColumnKey::LicensePlateNumber => Cell::Text(record.license_plate_number.clone()),
        ColumnKey::Status => match record.status() {
            Some(status) => Cell::Status {
                label: status.label().to_string(),
                color: status_color(status),
            },
            None => Cell::not_available(),
        },
        ColumnKey::TollTagId => tag
            .map(|t| Cell::Text(t.id.to_string()))
            .unwrap_or_else(Cell::not_available),
        ColumnKey::ActivationDate => date_cell(tag.and_then(|t| t.activation_date), tz),
        ColumnKey::ExpiredDate => date_cell(tag.and_then(|t| t.expired_date), tz),
        ColumnKey::Actions => Cell::Actions,
    }
}

fn date_cell<Tz>(ts: Option<DateTime<Utc>>, tz: &Tz) -> Cell
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match ts {
        Some(ts) => {
            let (date, time) = format_date_parts(&ts, tz);
            Cell::DateTime { date, time }
        }
        None => Cell::not_available(),
    }
}

/// `M/D/YYYY` and `h:mm:ss AM` parts of a timestamp
pub fn format_date_parts<Tz>(ts: &DateTime<Utc>, tz: &Tz) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let local = ts.with_timezone(tz);
    (
        local.format("%-m/%-d/%Y").to_string(),
        local.format("%-I:%M:%S %p").to_string(),
    )
}
