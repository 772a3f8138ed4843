//! Command handlers

use crate::cli::{Cli, Commands, CredentialArgs};
use crate::output::{output_form_state, output_nav, output_search, output_vehicle_page};
use etc_app::auth::AuthService;
use etc_app::config::Config;
use etc_app::dashboard::load_vehicles;
use etc_app::repository::{open_user_repo, open_vehicle_source};
use etc_domain::model::{
    ColumnKey, QueryController, RowsPerPage, SearchField, Selection, SortDescriptor, SortDirection,
};
use etc_domain::service::{process, CredentialsForm};
use etc_infra::Argon2Hasher;
use etc_types::{ConfigError, OutOfRangeError, OutputFormat, Result, SortScope, TagStatus, VehicleType};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref api_url) = cli.api_url {
        config.api_url = api_url.clone();
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Vehicles {
            search,
            status,
            vehicle_type,
            sort,
            desc,
            page,
            rows,
            sort_scope,
            columns,
        } => {
            let options = VehicleListOptions {
                search,
                status,
                vehicle_type,
                sort,
                desc,
                page,
                rows,
                sort_scope,
                columns,
            };
            cmd_vehicles(&config, format, options)
        }
        Commands::Search {
            from,
            vehicle_id,
            license_plate,
            status,
            vehicle_type,
            path,
        } => {
            let mut controller = QueryController::from_query_string(from.as_deref().unwrap_or(""));
            let edits = [
                (SearchField::VehicleId, vehicle_id),
                (SearchField::LicensePlate, license_plate),
                (SearchField::Status, status),
                (SearchField::VehicleType, vehicle_type),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    controller.set_field(field, value);
                }
            }
            let url = controller.submit(&path);
            output_search(&mut std::io::stdout(), format, &url, controller.committed())
        }
        Commands::Signup(args) => cmd_signup(&config, format, args),
        Commands::Signin(args) => cmd_signin(&config, format, args),
        Commands::Config {
            show,
            set_api_url,
            set_store_dir,
            set_rows,
            set_output,
            set_sort_scope,
            reset,
        } => cmd_config(
            show,
            set_api_url,
            set_store_dir,
            set_rows,
            set_output,
            set_sort_scope,
            reset,
        ),
        Commands::Nav => output_nav(&mut std::io::stdout(), format),
    }
}

/// Arguments of the `vehicles` command
struct VehicleListOptions {
    search: Option<String>,
    status: Vec<String>,
    vehicle_type: Vec<String>,
    sort: Option<String>,
    desc: bool,
    page: usize,
    rows: Option<usize>,
    sort_scope: Option<SortScope>,
    columns: Vec<String>,
}

fn cmd_vehicles(config: &Config, format: OutputFormat, options: VehicleListOptions) -> Result<()> {
    if options.page < 1 {
        return Err(OutOfRangeError { page: options.page }.into());
    }

    let mut state = config.table_state();
    if let Some(rows) = options.rows {
        state = state.with_rows_per_page(RowsPerPage::try_from(rows)?);
    }
    if let Some(scope) = options.sort_scope {
        state = state.with_sort_scope(scope);
    }
    if let Some(text) = options.search {
        state = state.with_filter_text(text);
    }
    if !options.status.is_empty() {
        state = state.with_status_filter(Selection::keys(options.status.into_iter().map(TagStatus::from)));
    }
    if !options.vehicle_type.is_empty() {
        state = state.with_type_filter(Selection::keys(options.vehicle_type.into_iter().map(VehicleType::from)));
    }
    if let Some(column) = options.sort {
        let direction = if options.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        state = state.with_sort(SortDescriptor::new(column, direction));
    }
    if !options.columns.is_empty() {
        let keys = options
            .columns
            .iter()
            .map(|uid| {
                ColumnKey::from_uid(uid).ok_or_else(|| ConfigError::InvalidValue {
                    field: "columns",
                    value: uid.clone(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        state = state.with_visible_columns(Selection::keys(keys));
    }
    state.page.current_page = options.page;
    debug!(?state, "vehicle table state");

    let source = open_vehicle_source(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching vehicles from {}", source.url()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let vehicles = runtime.block_on(load_vehicles(&source));
    spinner.finish_and_clear();

    let processed = process(&vehicles, &state);
    output_vehicle_page(&mut std::io::stdout(), format, &processed, &state)
}

fn credentials(args: CredentialArgs) -> CredentialsForm {
    CredentialsForm {
        name: args.name,
        email: args.email,
        password: args.password,
    }
}

fn cmd_signup(config: &Config, format: OutputFormat, args: CredentialArgs) -> Result<()> {
    let mut auth = AuthService::new(open_user_repo(config)?, Argon2Hasher::new());
    let state = auth.signup(&credentials(args));
    output_form_state(&mut std::io::stdout(), format, &state)
}

fn cmd_signin(config: &Config, format: OutputFormat, args: CredentialArgs) -> Result<()> {
    let auth = AuthService::new(open_user_repo(config)?, Argon2Hasher::new());
    let state = auth.signin(&credentials(args));
    output_form_state(&mut std::io::stdout(), format, &state)
}

fn cmd_config(
    show: bool,
    set_api_url: Option<String>,
    set_store_dir: Option<PathBuf>,
    set_rows: Option<usize>,
    set_output: Option<OutputFormat>,
    set_sort_scope: Option<SortScope>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(api_url) = set_api_url {
        config.api_url = api_url;
        modified = true;
    }

    if let Some(store_dir) = set_store_dir {
        config.store_dir = Some(store_dir);
        modified = true;
    }

    if let Some(rows) = set_rows {
        config.rows_per_page = RowsPerPage::try_from(rows)?;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(sort_scope) = set_sort_scope {
        config.sort_scope = sort_scope;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
