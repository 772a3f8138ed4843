//! Domain model types

pub mod column;
pub mod query;
pub mod selection;
pub mod table;

pub use column::{header_columns, ColumnDef, ColumnKey, COLUMNS};
pub use query::{QueryController, SearchField, SearchOption, SearchQuery, STATUS_OPTIONS, VEHICLE_TYPE_OPTIONS};
pub use selection::Selection;
pub use table::{PageState, RowsPerPage, SortDescriptor, SortDirection, TableState};
