//! Visible-row pipeline over the fetched vehicle collection
//!
//! Stages run in a fixed order: text filter, status filter, vehicle-type
//! filter, pagination slice, then sort. With [`SortScope::Page`] the sort
//! only reorders the rows of the current page; [`SortScope::All`] sorts the
//! filtered set before slicing.

use std::cmp::Ordering;

use etc_types::{OutOfRangeError, SortScope, TagStatus, VehicleRecord, VehicleType};
use tracing::debug;

use crate::model::{PageState, RowsPerPage, Selection, SortDescriptor, SortDirection, TableState};

/// Rows to display plus the counts the pager needs
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedPage<'a> {
    pub rows: Vec<&'a VehicleRecord>,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl ProcessedPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Apply the text, status and vehicle-type filters.
///
/// Records without a toll tag never match a narrowing status filter.
pub fn apply_filters<'a>(
    records: &'a [VehicleRecord],
    text_query: &str,
    status_selection: &Selection<TagStatus>,
    type_selection: &Selection<VehicleType>,
) -> Vec<&'a VehicleRecord> {
    let needle = text_query.to_lowercase();
    let by_status = status_selection.restricts(&TagStatus::ALL);
    let by_type = type_selection.restricts(&VehicleType::ALL);

    records
        .iter()
        .filter(|r| needle.is_empty() || r.license_plate_number.to_lowercase().contains(&needle))
        .filter(|r| !by_status || r.status().is_some_and(|s| status_selection.contains(s)))
        .filter(|r| !by_type || type_selection.contains(&r.vehicle_type))
        .collect()
}

/// Number of pages needed for `filtered_count` rows
pub fn total_pages(filtered_count: usize, rows_per_page: RowsPerPage) -> usize {
    filtered_count.div_ceil(rows_per_page.get())
}

/// Slice out page `page` (1-based). Pages past the end are empty.
pub fn paginate<T>(filtered: &[T], page: usize, rows_per_page: RowsPerPage) -> Result<&[T], OutOfRangeError> {
    if page < 1 {
        return Err(OutOfRangeError { page });
    }
    let rows = rows_per_page.get();
    let start = (page - 1).saturating_mul(rows).min(filtered.len());
    let end = start.saturating_add(rows).min(filtered.len());
    Ok(&filtered[start..end])
}

/// Comparable value of one record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey<'a> {
    Number(i64),
    Text(&'a str),
}

/// Sortable top-level fields; anything else has no key
fn sort_key<'a>(record: &'a VehicleRecord, column: &str) -> Option<SortKey<'a>> {
    match column {
        "id" => Some(SortKey::Number(record.id)),
        "vehicleType" => Some(SortKey::Text(record.vehicle_type.as_str())),
        "licensePlateNumber" => Some(SortKey::Text(&record.license_plate_number)),
        "vehicleOwnerId" => Some(SortKey::Text(&record.vehicle_owner_id)),
        _ => None,
    }
}

/// Three-way comparison; missing or mismatched keys compare equal
fn compare_keys(a: Option<SortKey<'_>>, b: Option<SortKey<'_>>) -> Ordering {
    match (a, b) {
        (Some(SortKey::Number(x)), Some(SortKey::Number(y))) => x.cmp(&y),
        (Some(SortKey::Text(x)), Some(SortKey::Text(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Stable sort of a page slice by the descriptor's column
pub fn sort_page<'a>(page_slice: &[&'a VehicleRecord], descriptor: &SortDescriptor) -> Vec<&'a VehicleRecord> {
    let mut sorted = page_slice.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = compare_keys(sort_key(a, &descriptor.column), sort_key(b, &descriptor.column));
        match descriptor.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    sorted
}

/// Next page, unless already on the last one
pub fn advance_page(state: PageState, total_pages: usize) -> PageState {
    if state.current_page < total_pages {
        PageState {
            current_page: state.current_page + 1,
            ..state
        }
    } else {
        state
    }
}

/// Previous page, unless already on the first one
pub fn retreat_page(state: PageState) -> PageState {
    if state.current_page > 1 {
        PageState {
            current_page: state.current_page - 1,
            ..state
        }
    } else {
        state
    }
}

/// Run the whole pipeline for one table state
pub fn process<'a>(records: &'a [VehicleRecord], state: &TableState) -> ProcessedPage<'a> {
    let mut filtered = apply_filters(records, &state.filter_text, &state.status_filter, &state.type_filter);
    let filtered_count = filtered.len();
    let pages = total_pages(filtered_count, state.page.rows_per_page);

    if state.sort_scope == SortScope::All {
        filtered = sort_page(&filtered, &state.sort);
    }

    let slice = paginate(&filtered, state.page.current_page, state.page.rows_per_page).unwrap_or_default();
    let rows = match state.sort_scope {
        SortScope::Page => sort_page(slice, &state.sort),
        SortScope::All => slice.to_vec(),
    };

    debug!(
        total = records.len(),
        filtered = filtered_count,
        pages,
        page = state.page.current_page,
        shown = rows.len(),
        "processed vehicle table"
    );

    ProcessedPage {
        rows,
        filtered_count,
        total_pages: pages,
        current_page: state.page.current_page,
    }
}

/// Footer text for the row selection
pub fn selection_summary(selection: &Selection<i64>, filtered_count: usize) -> String {
    match selection {
        Selection::All => "All items selected".to_string(),
        Selection::Keys(keys) => format!("{} of {} selected", keys.len(), filtered_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etc_types::TollTag;

    fn record(id: i64, plate: &str) -> VehicleRecord {
        VehicleRecord::new(id, VehicleType::Car, plate)
    }

    fn tagged(id: i64, plate: &str, vehicle_type: VehicleType, status: TagStatus) -> VehicleRecord {
        VehicleRecord::new(id, vehicle_type, plate).with_toll_tag(TollTag {
            id: id * 100,
            status: Some(status),
            vehicle_id: id,
            ..TollTag::default()
        })
    }

    fn sample_plates() -> Vec<VehicleRecord> {
        ["ABC1", "ABC2", "XYZ1", "XYZ2", "ABC3", "QRS1", "ABC4"]
            .iter()
            .enumerate()
            .map(|(i, p)| record(i as i64 + 1, p))
            .collect()
    }

    fn ids(rows: &[&VehicleRecord]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let records = sample_plates();
        let filtered = apply_filters(&records, "", &Selection::All, &Selection::All);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(apply_filters(&[], "abc", &Selection::All, &Selection::All).is_empty());
    }

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let records = sample_plates();
        for query in ["abc", "ABC", "z1", "s"] {
            let filtered = apply_filters(&records, query, &Selection::All, &Selection::All);
            assert!(filtered
                .iter()
                .all(|r| r.license_plate_number.to_lowercase().contains(&query.to_lowercase())));
        }
        let filtered = apply_filters(&records, "xyz", &Selection::All, &Selection::All);
        assert_eq!(ids(&filtered), vec![3, 4]);
    }

    #[test]
    fn test_plate_filter_paging() {
        let records = sample_plates();
        let filtered = apply_filters(&records, "abc", &Selection::All, &Selection::All);
        assert_eq!(filtered.len(), 4);
        assert_eq!(total_pages(filtered.len(), RowsPerPage::Five), 1);
        assert_eq!(paginate(&filtered, 1, RowsPerPage::Five).unwrap().len(), 4);
        assert!(paginate(&filtered, 2, RowsPerPage::Five).unwrap().is_empty());
    }

    #[test]
    fn test_status_filter_excludes_untagged() {
        let records = vec![
            tagged(1, "A", VehicleType::Car, TagStatus::Active),
            tagged(2, "B", VehicleType::Bus, TagStatus::Expire),
            record(3, "C"),
            tagged(4, "D", VehicleType::Van, TagStatus::Inactive),
        ];

        let active = Selection::keys([TagStatus::Active, TagStatus::Inactive]);
        let filtered = apply_filters(&records, "", &active, &Selection::All);
        assert_eq!(ids(&filtered), vec![1, 4]);

        // naming every status is the same as no filter, untagged included
        let every = Selection::keys(TagStatus::ALL);
        let filtered = apply_filters(&records, "", &every, &Selection::All);
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_type_filter() {
        let records = vec![
            tagged(1, "A", VehicleType::Car, TagStatus::Active),
            tagged(2, "B", VehicleType::Bus, TagStatus::Active),
            VehicleRecord::new(3, VehicleType::Other("tractor".into()), "C"),
        ];
        let buses = Selection::keys([VehicleType::Bus]);
        assert_eq!(ids(&apply_filters(&records, "", &Selection::All, &buses)), vec![2]);

        let every = Selection::keys(VehicleType::ALL);
        assert_eq!(apply_filters(&records, "", &Selection::All, &every).len(), 3);
    }

    #[test]
    fn test_unknown_filter_values_do_not_disable_filter() {
        let records = vec![
            tagged(1, "A", VehicleType::Car, TagStatus::Active),
            tagged(2, "B", VehicleType::Bus, TagStatus::Inactive),
            tagged(3, "C", VehicleType::Motorcycle, TagStatus::Expire),
        ];

        let statuses = Selection::keys(["active", "inactive", "bogus"].map(TagStatus::from));
        assert_eq!(ids(&apply_filters(&records, "", &statuses, &Selection::All)), vec![1, 2]);

        let types = Selection::keys(
            ["car", "bus", "minibus", "truck", "van", "tractor"].map(VehicleType::from),
        );
        assert_eq!(ids(&apply_filters(&records, "", &Selection::All, &types)), vec![1, 2]);
    }

    #[test]
    fn test_pages_reconstruct_filtered_set() {
        let records: Vec<_> = (1..=23).map(|i| record(i, &format!("P{i}"))).collect();
        let filtered = apply_filters(&records, "", &Selection::All, &Selection::All);

        for rows in RowsPerPage::ALL {
            let pages = total_pages(filtered.len(), rows);
            let mut seen = Vec::new();
            for page in 1..=pages {
                let slice = paginate(&filtered, page, rows).unwrap();
                assert!(slice.len() <= rows.get());
                seen.extend(ids(slice));
            }
            assert_eq!(seen, (1..=23).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_paginate_page_zero_is_error() {
        let records = sample_plates();
        let err = paginate(&records, 0, RowsPerPage::Ten).unwrap_err();
        assert_eq!(err.page, 0);
        assert!(paginate(&records, 99, RowsPerPage::Ten).unwrap().is_empty());
    }

    #[test]
    fn test_advance_and_retreat_bounds() {
        let last = PageState {
            current_page: 3,
            rows_per_page: RowsPerPage::Five,
        };
        assert_eq!(advance_page(last, 3), last);
        assert_eq!(advance_page(last, 4).current_page, 4);

        let first = PageState::default();
        assert_eq!(retreat_page(first), first);
        assert_eq!(retreat_page(last).current_page, 2);
        // no pages at all
        assert_eq!(advance_page(first, 0), first);
    }

    #[test]
    fn test_sort_by_id() {
        let records: Vec<_> = [5, 2, 9, 2, 7].iter().map(|i| record(*i, "X")).collect();
        let slice: Vec<_> = records.iter().collect();

        let asc = sort_page(&slice, &SortDescriptor::new("id", SortDirection::Ascending));
        assert!(asc.windows(2).all(|w| w[0].id <= w[1].id));

        let desc = sort_page(&slice, &SortDescriptor::new("id", SortDirection::Descending));
        assert!(desc.windows(2).all(|w| w[0].id >= w[1].id));
    }

    #[test]
    fn test_unknown_column_keeps_order() {
        let records = sample_plates();
        let slice: Vec<_> = records.iter().collect();
        let sorted = sort_page(&slice, &SortDescriptor::new("age", SortDirection::Descending));
        assert_eq!(ids(&sorted), ids(&slice));
    }

    #[test]
    fn test_sort_scope() {
        let records: Vec<_> = (1..=10).map(|i| record(i, &format!("P{i:02}"))).collect();
        let state = TableState::default().with_sort(SortDescriptor::new("id", SortDirection::Descending));

        let page_scoped = process(&records, &state);
        assert_eq!(ids(&page_scoped.rows), vec![5, 4, 3, 2, 1]);
        assert_eq!(page_scoped.total_pages, 2);

        let global = process(&records, &state.with_sort_scope(SortScope::All));
        assert_eq!(ids(&global.rows), vec![10, 9, 8, 7, 6]);
    }

    #[test]
    fn test_process_walks_pages() {
        let records = sample_plates();
        let state = TableState::default();
        let first = process(&records, &state);
        assert_eq!(first.filtered_count, 7);
        assert_eq!(first.total_pages, 2);

        let state = state.advance_page(first.total_pages);
        let second = process(&records, &state);
        assert_eq!(ids(&second.rows), vec![6, 7]);

        let state = state.advance_page(second.total_pages);
        assert_eq!(state.page.current_page, 2);
        assert_eq!(state.retreat_page().page.current_page, 1);
    }

    #[test]
    fn test_process_with_invalid_page_is_empty() {
        let records = sample_plates();
        let mut state = TableState::default();
        state.page.current_page = 0;
        let page = process(&records, &state);
        assert!(page.is_empty());
        assert_eq!(page.filtered_count, 7);
    }

    #[test]
    fn test_selection_summary() {
        assert_eq!(selection_summary(&Selection::All, 9), "All items selected");
        assert_eq!(selection_summary(&Selection::keys([1, 2]), 9), "2 of 9 selected");
    }
}
