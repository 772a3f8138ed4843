//! Domain services

pub mod cell_format;
pub mod credentials;
pub mod result_processor;

pub use cell_format::{format_cell, format_cell_in, Cell, StatusColor, NOT_AVAILABLE, ROW_ACTIONS};
pub use credentials::{validate_credentials, CredentialsForm, FieldErrors, ValidCredentials};
pub use result_processor::{
    advance_page, apply_filters, paginate, process, retreat_page, selection_summary, sort_page,
    total_pages, ProcessedPage,
};
