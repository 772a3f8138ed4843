//! Table state: filters, sort, pagination, selection, visible columns
//!
//! Every transition consumes the state and returns the next one.

use etc_types::{ConfigError, SortScope, TagStatus, VehicleType};
use serde::{Deserialize, Serialize};

use super::column::ColumnKey;
use super::selection::Selection;

/// Allowed page sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum RowsPerPage {
    #[default]
    Five,
    Ten,
    Fifteen,
}

impl RowsPerPage {
    pub const ALL: [RowsPerPage; 3] = [RowsPerPage::Five, RowsPerPage::Ten, RowsPerPage::Fifteen];

    pub fn get(self) -> usize {
        match self {
            RowsPerPage::Five => 5,
            RowsPerPage::Ten => 10,
            RowsPerPage::Fifteen => 15,
        }
    }
}

impl TryFrom<usize> for RowsPerPage {
    type Error = ConfigError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(RowsPerPage::Five),
            10 => Ok(RowsPerPage::Ten),
            15 => Ok(RowsPerPage::Fifteen),
            other => Err(ConfigError::InvalidValue {
                field: "rows_per_page",
                value: other.to_string(),
            }),
        }
    }
}

impl From<RowsPerPage> for usize {
    fn from(value: RowsPerPage) -> Self {
        value.get()
    }
}

/// Current page (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub rows_per_page: RowsPerPage,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: RowsPerPage::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column (a record field name) and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    pub column: String,
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Header click: same column flips direction, new column sorts ascending
    pub fn clicked(&self, column: &str) -> Self {
        if self.column == column {
            Self::new(column, self.direction.toggled())
        } else {
            Self::new(column, SortDirection::Ascending)
        }
    }
}

impl Default for SortDescriptor {
    fn default() -> Self {
        Self::new(ColumnKey::Id.uid(), SortDirection::Ascending)
    }
}

/// Everything that decides which rows the result table shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub filter_text: String,
    pub status_filter: Selection<TagStatus>,
    pub type_filter: Selection<VehicleType>,
    pub sort: SortDescriptor,
    pub sort_scope: SortScope,
    pub page: PageState,
    pub selected_rows: Selection<i64>,
    pub visible_columns: Selection<ColumnKey>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            status_filter: Selection::All,
            type_filter: Selection::All,
            sort: SortDescriptor::default(),
            sort_scope: SortScope::default(),
            page: PageState::default(),
            selected_rows: Selection::none(),
            visible_columns: Selection::keys(ColumnKey::ALL),
        }
    }
}

impl TableState {
    fn first_page(mut self) -> Self {
        self.page.current_page = 1;
        self
    }

    pub fn with_filter_text(mut self, text: impl Into<String>) -> Self {
        self.filter_text = text.into();
        self.first_page()
    }

    pub fn clear_filter_text(self) -> Self {
        self.with_filter_text(String::new())
    }

    pub fn with_status_filter(mut self, selection: Selection<TagStatus>) -> Self {
        self.status_filter = selection;
        self.first_page()
    }

    pub fn with_type_filter(mut self, selection: Selection<VehicleType>) -> Self {
        self.type_filter = selection;
        self.first_page()
    }

    pub fn with_rows_per_page(mut self, rows_per_page: RowsPerPage) -> Self {
        self.page.rows_per_page = rows_per_page;
        self.first_page()
    }

    pub fn with_sort(mut self, sort: SortDescriptor) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_sort_scope(mut self, scope: SortScope) -> Self {
        self.sort_scope = scope;
        self
    }

    /// Jump to `page`, clamped into `1..=total_pages`
    pub fn with_page(mut self, page: usize, total_pages: usize) -> Self {
        self.page.current_page = page.clamp(1, total_pages.max(1));
        self
    }

    pub fn with_selected_rows(mut self, selection: Selection<i64>) -> Self {
        self.selected_rows = selection;
        self
    }

    /// Replace the visible column set; an empty set is refused
    pub fn with_visible_columns(mut self, columns: Selection<ColumnKey>) -> Self {
        if columns.count(ColumnKey::ALL.len()) > 0 {
            self.visible_columns = columns;
        }
        self
    }

    pub fn advance_page(mut self, total_pages: usize) -> Self {
        self.page = crate::service::result_processor::advance_page(self.page, total_pages);
        self
    }

    pub fn retreat_page(mut self) -> Self {
        self.page = crate::service::result_processor::retreat_page(self.page);
        self
    }
}
