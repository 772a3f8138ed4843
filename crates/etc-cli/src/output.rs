//! Output formatting module

use etc_app::auth::FormState;
use etc_app::constants::SITE;
use etc_domain::model::{header_columns, ColumnDef, ColumnKey, SearchQuery, TableState};
use etc_domain::service::{format_cell, ProcessedPage};
use etc_types::{Error, OutputFormat, Result};
use serde_json::json;
use std::io::Write;

/// Columns printed for a table state; the actions menu has no text form
fn printable_columns(state: &TableState) -> Vec<&'static ColumnDef> {
    header_columns(&state.visible_columns)
        .into_iter()
        .filter(|c| c.key != ColumnKey::Actions)
        .collect()
}

pub fn output_vehicle_page<W: Write>(
    out: &mut W,
    format: OutputFormat,
    page: &ProcessedPage<'_>,
    state: &TableState,
) -> Result<()> {
    let columns = printable_columns(state);
    let cells: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|record| columns.iter().map(|c| format_cell(record, c.key).to_plain()).collect())
        .collect();

    match format {
        OutputFormat::Json => {
            let value = json!({
                "page": page.current_page,
                "totalPages": page.total_pages,
                "rowsPerPage": state.page.rows_per_page.get(),
                "filteredCount": page.filtered_count,
                "rows": page.rows,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            let csv_error = |e: csv::Error| Error::Csv(e.to_string());
            writer
                .write_record(columns.iter().map(|c| c.name))
                .map_err(csv_error)?;
            for row in &cells {
                writer.write_record(row).map_err(csv_error)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if cells.is_empty() {
                writeln!(out, "No vehicles found")?;
            } else {
                let widths: Vec<usize> = columns
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        cells
                            .iter()
                            .map(|row| row[i].chars().count())
                            .chain(std::iter::once(c.name.len()))
                            .max()
                            .unwrap_or(0)
                    })
                    .collect();

                let header: Vec<String> = columns
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| format!("{:<w$}", c.name, w = *w))
                    .collect();
                writeln!(out, "{}", header.join("  ").trim_end())?;
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                writeln!(out, "{}", rule.join("  "))?;

                for row in &cells {
                    let line: Vec<String> = row
                        .iter()
                        .zip(&widths)
                        .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
                        .collect();
                    writeln!(out, "{}", line.join("  ").trim_end())?;
                }
            }

            writeln!(
                out,
                "\nPage {} of {} ({} vehicles, {} per page)",
                page.current_page,
                page.total_pages.max(1),
                page.filtered_count,
                state.page.rows_per_page.get()
            )?;
        }
    }

    Ok(())
}

pub fn output_search<W: Write>(out: &mut W, format: OutputFormat, url: &str, query: &SearchQuery) -> Result<()> {
    if format == OutputFormat::Json {
        let value = json!({ "url": url, "query": query });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "{}", url)?;
    }
    Ok(())
}

pub fn output_form_state<W: Write>(out: &mut W, format: OutputFormat, state: &FormState) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(state)?)?;
        return Ok(());
    }

    match state {
        FormState::Errors(errors) => {
            writeln!(out, "Please fix the following:")?;
            for (field, messages) in errors {
                for message in messages {
                    writeln!(out, "  {}: {}", field, message)?;
                }
            }
        }
        FormState::Message(message) => writeln!(out, "{}", message)?,
        FormState::Created { user_id } => writeln!(out, "Account created: {}", user_id)?,
        FormState::Validated => writeln!(out, "Credentials are valid (sign-in is not implemented; no session created)")?,
    }
    Ok(())
}

pub fn output_nav<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let items = |items: &[etc_app::constants::NavItem]| {
            items
                .iter()
                .map(|i| json!({ "label": i.label, "href": i.href }))
                .collect::<Vec<_>>()
        };
        let value = json!({
            "name": SITE.name,
            "description": SITE.description,
            "navItems": items(SITE.nav_items),
            "navMenuItems": items(SITE.nav_menu_items),
            "links": items(SITE.links),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "{}", SITE.name)?;
    writeln!(out, "{}", SITE.description)?;
    writeln!(out)?;
    for item in SITE.nav_items {
        writeln!(out, "  {:<10} {}", item.label, item.href)?;
    }
    writeln!(out)?;
    writeln!(out, "Menu:")?;
    for item in SITE.nav_menu_items {
        writeln!(out, "  {:<16} {}", item.label, item.href)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use etc_domain::model::Selection;
    use etc_domain::service::process;
    use etc_types::{VehicleRecord, VehicleType};

    fn render(format: OutputFormat, records: &[VehicleRecord], state: &TableState) -> String {
        let page = process(records, state);
        let mut buf = Vec::new();
        output_vehicle_page(&mut buf, format, &page, state).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn records() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord::new(2, VehicleType::Van, "XYZ2"),
            VehicleRecord::new(1, VehicleType::Car, "ABC1"),
        ]
    }

    #[test]
    fn test_table_renders_na_for_missing_tag() {
        let state = TableState::default()
            .with_visible_columns(Selection::keys([ColumnKey::Id, ColumnKey::LicensePlateNumber, ColumnKey::Status]));
        let text = render(OutputFormat::Table, &records(), &state);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID  LICENSE PLATE NUMBER  STATUS");
        assert_eq!(lines[2], "1   ABC1                  N/A");
        assert_eq!(lines[3], "2   XYZ2                  N/A");
        assert!(text.contains("Page 1 of 1 (2 vehicles, 5 per page)"));
    }

    #[test]
    fn test_table_empty_message() {
        let state = TableState::default().with_filter_text("nothing");
        let text = render(OutputFormat::Table, &records(), &state);
        assert!(text.starts_with("No vehicles found"));
    }

    #[test]
    fn test_csv_skips_actions_column() {
        let state = TableState::default().with_visible_columns(Selection::keys([ColumnKey::Id, ColumnKey::Actions]));
        let text = render(OutputFormat::Csv, &records(), &state);
        assert_eq!(text, "ID\n1\n2\n");
    }

    #[test]
    fn test_json_page_metadata() {
        let text = render(OutputFormat::Json, &records(), &TableState::default());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["filteredCount"], 2);
        assert_eq!(value["rows"][0]["licensePlateNumber"], "ABC1");
    }

    #[test]
    fn test_search_output() {
        let mut buf = Vec::new();
        output_search(&mut buf, OutputFormat::Table, "/vehicles?status=active", &SearchQuery::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "/vehicles?status=active\n");
    }

    #[test]
    fn test_form_errors_output() {
        let mut errors = etc_domain::service::FieldErrors::new();
        errors.insert("email".to_string(), vec!["Please enter a valid email.".to_string()]);
        let mut buf = Vec::new();
        output_form_state(&mut buf, OutputFormat::Table, &FormState::Errors(errors)).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("  email: Please enter a valid email."));
    }
}
