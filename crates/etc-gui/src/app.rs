//! Main application structure with sidebar navigation

use eframe::egui::{self, Color32, RichText};
use etc_app::config::Config;
use etc_app::constants::SITE;
use tracing::warn;

use crate::auth_panel::{AuthMode, AuthPanel};
use crate::vehicle_panel::VehiclePanel;

/// Page shown in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Vehicles,
    Payment,
    SignUp,
    SignIn,
}

impl Page {
    /// Page for a navigation href
    pub fn from_href(href: &str) -> Option<Self> {
        match href {
            "/" => Some(Page::Home),
            "/vehicles" => Some(Page::Vehicles),
            "/payment" => Some(Page::Payment),
            "/signup" => Some(Page::SignUp),
            "/signin" => Some(Page::SignIn),
            _ => None,
        }
    }
}

/// Page and query string to open with, from the first program argument.
///
/// Accepts a location such as `/vehicles?status=active` or a bare
/// `?status=active`, which opens the vehicles page.
pub fn launch_location<I: IntoIterator<Item = String>>(args: I) -> (Page, String) {
    let Some(arg) = args.into_iter().nth(1) else {
        return (Page::default(), String::new());
    };
    let (path, query) = arg.split_once('?').unwrap_or((arg.as_str(), ""));
    let page = match path {
        "" => Page::Vehicles,
        path => Page::from_href(path).unwrap_or_default(),
    };
    (page, query.to_string())
}

/// Main application state
pub struct DashboardApp {
    current_page: Page,
    vehicle_panel: VehiclePanel,
    signup_panel: AuthPanel,
    signin_panel: AuthPanel,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, page: Page, initial_query: &str) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "config unreadable, using defaults");
            Config::default()
        });

        Self {
            current_page: page,
            vehicle_panel: VehiclePanel::new(&config, initial_query),
            signup_panel: AuthPanel::new(AuthMode::SignUp, &config),
            signin_panel: AuthPanel::new(AuthMode::SignIn, &config),
        }
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading(SITE.name);
        ui.add_space(12.0);

        for item in SITE.nav_items {
            let Some(page) = Page::from_href(item.href) else {
                continue;
            };
            if ui.selectable_label(self.current_page == page, item.label).clicked() {
                self.current_page = page;
            }
        }

        ui.add_space(12.0);
        ui.separator();
        for (page, label) in [(Page::SignUp, "Sign Up"), (Page::SignIn, "Sign In")] {
            if ui.selectable_label(self.current_page == page, label).clicked() {
                self.current_page = page;
            }
        }
    }

    fn render_home(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(SITE.name);
            ui.add_space(8.0);
            ui.label(SITE.description);
            ui.add_space(16.0);
            for link in SITE.links {
                ui.hyperlink_to(link.label, link.href);
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| self.render_sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| match self.current_page {
            Page::Home => Self::render_home(ui),
            Page::Vehicles => self.vehicle_panel.ui(ui),
            Page::Payment => {
                ui.heading("Payment");
                ui.label(RichText::new("Coming soon").color(Color32::GRAY));
            }
            Page::SignUp => self.signup_panel.ui(ui),
            Page::SignIn => self.signin_panel.ui(ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sidebar_entry_has_a_page() {
        for item in SITE.nav_items {
            assert!(Page::from_href(item.href).is_some(), "{}", item.href);
        }
        assert_eq!(Page::from_href("/team"), None);
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_launch_location() {
        assert_eq!(launch_location(args(&["etc-gui"])), (Page::Home, String::new()));
        assert_eq!(
            launch_location(args(&["etc-gui", "/vehicles?status=active&vehicleType=bus"])),
            (Page::Vehicles, "status=active&vehicleType=bus".to_string())
        );
        assert_eq!(
            launch_location(args(&["etc-gui", "?licensePlate=AB%2012"])),
            (Page::Vehicles, "licensePlate=AB%2012".to_string())
        );
        assert_eq!(launch_location(args(&["etc-gui", "/signin"])), (Page::SignIn, String::new()));
    }

    #[test]
    fn test_launch_query_seeds_search_form() {
        let (_, query) = launch_location(args(&["etc-gui", "/vehicles?licensePlate=AB%2012&status=expire"]));
        let controller = etc_domain::model::QueryController::from_query_string(&query);
        assert_eq!(controller.pending().license_plate, "AB 12");
        assert_eq!(controller.committed().status, "expire");
    }
}
