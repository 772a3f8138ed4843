//! Result table column descriptors

use super::selection::Selection;

/// Identifies one result table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKey {
    Id,
    VehicleType,
    LicensePlateNumber,
    Status,
    TollTagId,
    ActivationDate,
    ExpiredDate,
    Actions,
}

impl ColumnKey {
    /// Every column, in display order
    pub const ALL: [ColumnKey; 8] = [
        ColumnKey::Id,
        ColumnKey::VehicleType,
        ColumnKey::LicensePlateNumber,
        ColumnKey::Status,
        ColumnKey::TollTagId,
        ColumnKey::ActivationDate,
        ColumnKey::ExpiredDate,
        ColumnKey::Actions,
    ];

    /// Field name used as the column uid and sort column
    pub fn uid(&self) -> &'static str {
        match self {
            ColumnKey::Id => "id",
            ColumnKey::VehicleType => "vehicleType",
            ColumnKey::LicensePlateNumber => "licensePlateNumber",
            ColumnKey::Status => "status",
            ColumnKey::TollTagId => "tollTagId",
            ColumnKey::ActivationDate => "activationDate",
            ColumnKey::ExpiredDate => "expiredDate",
            ColumnKey::Actions => "actions",
        }
    }

    pub fn from_uid(uid: &str) -> Option<Self> {
        ColumnKey::ALL.into_iter().find(|k| k.uid() == uid)
    }

    pub fn def(&self) -> &'static ColumnDef {
        &COLUMNS[*self as usize]
    }
}

/// Header text and sortability of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub key: ColumnKey,
    pub sortable: bool,
}

pub const COLUMNS: [ColumnDef; 8] = [
    ColumnDef { name: "ID", key: ColumnKey::Id, sortable: true },
    ColumnDef { name: "VEHICLE TYPE", key: ColumnKey::VehicleType, sortable: false },
    ColumnDef { name: "LICENSE PLATE NUMBER", key: ColumnKey::LicensePlateNumber, sortable: true },
    ColumnDef { name: "STATUS", key: ColumnKey::Status, sortable: false },
    ColumnDef { name: "TOLL TAG ID", key: ColumnKey::TollTagId, sortable: false },
    ColumnDef { name: "ACTIVATION DATE", key: ColumnKey::ActivationDate, sortable: false },
    ColumnDef { name: "EXPIRED DATE", key: ColumnKey::ExpiredDate, sortable: false },
    ColumnDef { name: "ACTIONS", key: ColumnKey::Actions, sortable: false },
];

/// Columns to render for the given visibility selection
pub fn header_columns(visible: &Selection<ColumnKey>) -> Vec<&'static ColumnDef> {
    COLUMNS.iter().filter(|c| visible.contains(&c.key)).collect()
}
