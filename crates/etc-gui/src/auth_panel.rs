//! Sign-up and sign-in forms

use eframe::egui::{self, Color32, RichText, Ui};
use etc_app::auth::{AuthService, FormState};
use etc_app::config::Config;
use etc_app::repository::open_user_repo;
use etc_domain::service::CredentialsForm;
use etc_infra::{Argon2Hasher, FileUserRepository};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    SignIn,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Sign Up",
            AuthMode::SignIn => "Sign In",
        }
    }
}

pub struct AuthPanel {
    mode: AuthMode,
    form: CredentialsForm,
    /// Outcome of the last submit
    state: Option<FormState>,
    service: Option<AuthService<FileUserRepository, Argon2Hasher>>,
    /// Why the account store could not be opened
    store_error: Option<String>,
}

impl AuthPanel {
    pub fn new(mode: AuthMode, config: &Config) -> Self {
        let (service, store_error) = match open_user_repo(config) {
            Ok(repo) => (Some(AuthService::new(repo, Argon2Hasher::new())), None),
            Err(e) => {
                warn!(error = %e, "account store unavailable");
                (None, Some(e.to_string()))
            }
        };

        Self {
            mode,
            form: CredentialsForm::default(),
            state: None,
            service,
            store_error,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        ui.heading(self.mode.title());
        ui.add_space(10.0);

        if let Some(ref error) = self.store_error {
            ui.label(RichText::new(format!("Account store unavailable: {}", error)).color(Color32::LIGHT_RED));
            return;
        }

        let errors = match &self.state {
            Some(FormState::Errors(errors)) => errors.clone(),
            _ => Default::default(),
        };

        egui::Grid::new(("auth_form", self.mode.title()))
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                let fields: [(&str, &str, &mut String, bool); 3] = [
                    ("name", "Name", &mut self.form.name, false),
                    ("email", "Email", &mut self.form.email, false),
                    ("password", "Password", &mut self.form.password, true),
                ];
                for (key, label, value, password) in fields {
                    ui.label(format!("{}:", label));
                    ui.vertical(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(value)
                                .password(password)
                                .desired_width(240.0),
                        );
                        for message in errors.get(key).into_iter().flatten() {
                            ui.label(RichText::new(message).small().color(Color32::LIGHT_RED));
                        }
                    });
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        if ui.button(self.mode.title()).clicked() {
            if let Some(service) = self.service.as_mut() {
                self.state = Some(match self.mode {
                    AuthMode::SignUp => service.signup(&self.form),
                    AuthMode::SignIn => service.signin(&self.form),
                });
            }
        }

        ui.add_space(8.0);
        match &self.state {
            Some(FormState::Message(message)) => {
                ui.label(RichText::new(message).color(Color32::LIGHT_RED));
            }
            Some(FormState::Created { user_id }) => {
                ui.label(RichText::new(format!("Account created ({})", user_id)).color(Color32::LIGHT_GREEN));
            }
            Some(FormState::Validated) => {
                ui.label(RichText::new("Credentials are valid").color(Color32::LIGHT_GREEN));
            }
            Some(FormState::Errors(_)) | None => {}
        }
    }
}
