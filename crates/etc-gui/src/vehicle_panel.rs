//! Vehicles page: search form and the result table

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use etc_app::config::Config;
use etc_app::dashboard::load_vehicles;
use etc_app::repository::open_vehicle_source;
use etc_domain::model::{
    header_columns, ColumnKey, QueryController, RowsPerPage, SearchField, SearchOption, Selection,
    SortDirection, TableState, STATUS_OPTIONS, VEHICLE_TYPE_OPTIONS,
};
use etc_domain::service::{
    apply_filters, format_cell, process, selection_summary, Cell, StatusColor, ROW_ACTIONS,
};
use etc_types::{SortScope, TagStatus, VehicleRecord, VehicleType};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

fn status_color32(color: StatusColor) -> Color32 {
    match color {
        StatusColor::Success => Color32::from_rgb(23, 201, 100),
        StatusColor::Danger => Color32::from_rgb(243, 18, 96),
        StatusColor::Warning => Color32::from_rgb(245, 165, 36),
        StatusColor::Default => Color32::GRAY,
    }
}

pub struct VehiclePanel {
    config: Config,
    vehicles: Vec<VehicleRecord>,
    /// Receives the single fetch result
    receiver: Option<Receiver<Vec<VehicleRecord>>>,
    state: TableState,
    query: QueryController,
    /// URL produced by the last search submit
    search_url: Option<String>,
}

impl VehiclePanel {
    /// `initial_query` is the page query string the search form starts from
    pub fn new(config: &Config, initial_query: &str) -> Self {
        let mut panel = Self {
            config: config.clone(),
            vehicles: Vec::new(),
            receiver: None,
            state: config.table_state(),
            query: QueryController::from_query_string(initial_query),
            search_url: None,
        };
        panel.start_fetch();
        panel
    }

    /// Fetch the vehicle list once on a background thread
    fn start_fetch(&mut self) {
        let (tx, rx) = channel();
        self.receiver = Some(rx);
        let config = self.config.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(e) => {
                    warn!(error = %e, "cannot start fetch runtime");
                    let _ = tx.send(Vec::new());
                    return;
                }
            };
            let vehicles = match open_vehicle_source(&config) {
                Ok(source) => runtime.block_on(load_vehicles(&source)),
                Err(e) => {
                    warn!(error = %e, "cannot build vehicle source");
                    Vec::new()
                }
            };
            let _ = tx.send(vehicles);
        });
    }

    fn poll_fetch(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.receiver else {
            return;
        };
        match receiver.try_recv() {
            Ok(vehicles) => {
                self.vehicles = vehicles;
                self.receiver = None;
            }
            Err(TryRecvError::Empty) => ctx.request_repaint(),
            Err(TryRecvError::Disconnected) => self.receiver = None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        self.poll_fetch(ui.ctx());

        ui.heading("Vehicles");
        ui.add_space(10.0);

        self.render_search_form(ui);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        if self.receiver.is_some() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading vehicles...");
            });
            return;
        }

        self.render_top_content(ui);
        ui.add_space(6.0);
        self.render_table(ui);
    }

    fn search_combo(ui: &mut Ui, id: &str, value: &mut String, options: &[SearchOption]) {
        let selected = options
            .iter()
            .find(|o| o.value == value.as_str())
            .map_or(value.as_str(), |o| o.label)
            .to_string();
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, option.value.to_string(), option.label);
                }
            });
    }

    fn render_search_form(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Search").strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Vehicle ID:");
            ui.add(
                egui::TextEdit::singleline(self.query.pending_mut(SearchField::VehicleId))
                    .desired_width(80.0),
            );
            ui.label("License plate:");
            ui.add(
                egui::TextEdit::singleline(self.query.pending_mut(SearchField::LicensePlate))
                    .desired_width(120.0),
            );
            ui.label("Status:");
            Self::search_combo(ui, "search_status", self.query.pending_mut(SearchField::Status), &STATUS_OPTIONS);
            ui.label("Type:");
            Self::search_combo(
                ui,
                "search_type",
                self.query.pending_mut(SearchField::VehicleType),
                &VEHICLE_TYPE_OPTIONS,
            );
            if ui.button("Search").clicked() {
                self.search_url = Some(self.query.submit("/vehicles"));
            }
        });

        if let Some(ref url) = self.search_url {
            ui.label(RichText::new(url).small().monospace().color(Color32::GRAY));
        }
    }

    /// Filter box, filter menus, column menu and page size
    fn render_top_content(&mut self, ui: &mut Ui) {
        let mut state = self.state.clone();

        ui.horizontal(|ui| {
            let mut text = state.filter_text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text("Search by license plate...")
                    .desired_width(220.0),
            );
            if response.changed() {
                state = state.clone().with_filter_text(text);
            }
            if !state.filter_text.is_empty() && ui.small_button("x").clicked() {
                state = state.clone().clear_filter_text();
            }

            ui.menu_button("Status", |ui| {
                for status in TagStatus::ALL {
                    let mut checked = state.status_filter.contains(&status);
                    if ui.checkbox(&mut checked, status.label()).changed() {
                        let next = state.status_filter.clone().toggle(&status, &TagStatus::ALL);
                        state = state.clone().with_status_filter(next);
                    }
                }
            });

            ui.menu_button("Type", |ui| {
                for vehicle_type in VehicleType::ALL {
                    let mut checked = state.type_filter.contains(&vehicle_type);
                    if ui.checkbox(&mut checked, vehicle_type.label()).changed() {
                        let next = state.type_filter.clone().toggle(&vehicle_type, &VehicleType::ALL);
                        state = state.clone().with_type_filter(next);
                    }
                }
            });

            ui.menu_button("Columns", |ui| {
                for key in ColumnKey::ALL {
                    let mut checked = state.visible_columns.contains(&key);
                    if ui.checkbox(&mut checked, key.def().name).changed() {
                        let next = state.visible_columns.clone().toggle(&key, &ColumnKey::ALL);
                        state = state.clone().with_visible_columns(next);
                    }
                }
            });

            ui.separator();
            let mut scope = state.sort_scope;
            ui.radio_value(&mut scope, SortScope::Page, "Sort page");
            ui.radio_value(&mut scope, SortScope::All, "Sort all");
            if scope != state.sort_scope {
                state = state.clone().with_sort_scope(scope);
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("Total {} vehicles", self.vehicles.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut rows = state.page.rows_per_page;
                egui::ComboBox::from_id_salt("rows_per_page")
                    .selected_text(rows.get().to_string())
                    .show_ui(ui, |ui| {
                        for option in RowsPerPage::ALL {
                            ui.selectable_value(&mut rows, option, option.get().to_string());
                        }
                    });
                ui.label("Rows per page:");
                if rows != state.page.rows_per_page {
                    state = state.clone().with_rows_per_page(rows);
                }
            });
        });

        self.state = state;
    }

    fn render_table(&mut self, ui: &mut Ui) {
        let mut state = self.state.clone();
        let filtered_ids: Vec<i64> = apply_filters(
            &self.vehicles,
            &state.filter_text,
            &state.status_filter,
            &state.type_filter,
        )
        .iter()
        .map(|r| r.id)
        .collect();
        let page = process(&self.vehicles, &state);
        let columns = header_columns(&state.visible_columns);

        let max_scroll_height = ui.available_height() - 40.0;
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(24.0))
            .columns(Column::auto().at_least(60.0), columns.len())
            .max_scroll_height(max_scroll_height)
            .header(22.0, |mut header| {
                header.col(|ui| {
                    let mut all = state.selected_rows.is_all();
                    if ui.checkbox(&mut all, "").changed() {
                        let next = if all { Selection::All } else { Selection::none() };
                        state = state.clone().with_selected_rows(next);
                    }
                });
                for column in &columns {
                    header.col(|ui| {
                        if !column.sortable {
                            ui.strong(column.name);
                            return;
                        }
                        let uid = column.key.uid();
                        let marker = match (state.sort.column == uid, state.sort.direction) {
                            (false, _) => "",
                            (true, SortDirection::Ascending) => " ^",
                            (true, SortDirection::Descending) => " v",
                        };
                        let label = RichText::new(format!("{}{}", column.name, marker)).strong();
                        if ui.add(egui::Button::new(label).frame(false)).clicked() {
                            let next = state.sort.clicked(uid);
                            state = state.clone().with_sort(next);
                        }
                    });
                }
            })
            .body(|mut body| {
                for record in &page.rows {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            let mut checked = state.selected_rows.contains(&record.id);
                            if ui.checkbox(&mut checked, "").changed() {
                                let next = state.selected_rows.clone().toggle(&record.id, &filtered_ids);
                                state = state.clone().with_selected_rows(next);
                            }
                        });
                        for column in &columns {
                            row.col(|ui| render_cell(ui, record.id, format_cell(record, column.key)));
                        }
                    });
                }
            });

        if page.is_empty() {
            ui.label(RichText::new("No vehicles found").color(Color32::GRAY));
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(selection_summary(&state.selected_rows, page.filtered_count));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let last_page = page.total_pages.max(1);
                if ui
                    .add_enabled(state.page.current_page < page.total_pages, egui::Button::new("Next"))
                    .clicked()
                {
                    state = state.clone().advance_page(page.total_pages);
                }
                ui.label(format!("{} / {}", state.page.current_page, last_page));
                if ui
                    .add_enabled(state.page.current_page > 1, egui::Button::new("Previous"))
                    .clicked()
                {
                    state = state.clone().retreat_page();
                }
            });
        });

        self.state = state;
    }
}

fn render_cell(ui: &mut Ui, record_id: i64, cell: Cell) {
    match cell {
        Cell::Text(text) => {
            ui.label(text);
        }
        Cell::Status { label, color } => {
            ui.label(RichText::new(label).color(status_color32(color)));
        }
        Cell::DateTime { date, time } => {
            ui.vertical(|ui| {
                ui.label(RichText::new(date).strong());
                ui.label(RichText::new(time).small().color(Color32::GRAY));
            });
        }
        Cell::Actions => {
            ui.menu_button("...", |ui| {
                for action in ROW_ACTIONS {
                    if ui.button(action).clicked() {
                        debug!(action, id = record_id, "row action");
                        ui.close_menu();
                    }
                }
            });
        }
    }
}
