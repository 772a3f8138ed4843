//! CLI definition using clap

use clap::{Parser, Subcommand};
use etc_types::{OutputFormat, SortScope};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "etc-dashboard")]
#[command(version)]
#[command(about = "Vehicle and toll tag dashboard for the ETC system")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vehicle API endpoint. Uses config value if not specified.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json, csv). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Name, email and password fields of the auth forms
#[derive(clap::Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch vehicles and show one page of the result table
    Vehicles {
        /// Filter by license plate substring (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Only these toll tag statuses (active, inactive, expire)
        #[arg(long, value_delimiter = ',')]
        status: Vec<String>,

        /// Only these vehicle types (car, bus, minibus, truck, van, motorcycle)
        #[arg(long = "type", value_delimiter = ',')]
        vehicle_type: Vec<String>,

        /// Sort column (id, licensePlateNumber, vehicleType, vehicleOwnerId)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page number, starting at 1
        #[arg(long, short = 'p', default_value = "1")]
        page: usize,

        /// Rows per page (5, 10, 15). Uses config value if not specified.
        #[arg(long, short = 'r')]
        rows: Option<usize>,

        /// Sort the current page only, or the whole result before paging
        #[arg(long)]
        sort_scope: Option<SortScope>,

        /// Columns to show, by uid (e.g. id,licensePlateNumber,status)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// Build the vehicle search URL from search form fields
    Search {
        /// Existing query string to start from (e.g. "?status=active")
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        vehicle_id: Option<String>,

        #[arg(long)]
        license_plate: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        vehicle_type: Option<String>,

        /// Page path the query is appended to
        #[arg(long, default_value = "/vehicles")]
        path: String,
    },

    /// Create an account
    Signup(CredentialArgs),

    /// Validate sign-in credentials (no session is created)
    Signin(CredentialArgs),

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set vehicle API endpoint
        #[arg(long)]
        set_api_url: Option<String>,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default rows per page (5, 10, 15)
        #[arg(long)]
        set_rows: Option<usize>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default sort scope
        #[arg(long)]
        set_sort_scope: Option<SortScope>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Show site navigation
    Nav,
}
