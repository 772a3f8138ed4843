//! GUI entry point for the ETC dashboard

mod app;
mod auth_panel;
mod vehicle_panel;

use app::{launch_location, DashboardApp};
use eframe::egui;

fn main() -> eframe::Result<()> {
    etc_app::logging::init_logging("info");
    let (page, initial_query) = launch_location(std::env::args());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        etc_app::constants::SITE.name,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, page, &initial_query)))),
    )
}
