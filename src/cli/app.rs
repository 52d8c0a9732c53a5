//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use limbah::config::GlobalConfig;
use limbah::output::OutputMode;

use super::commands;

/// limbah - client for the hazardous-waste destruction workflow
#[derive(Parser, Debug)]
#[command(
    name = "limbah",
    version,
    about = "Hazardous-waste destruction workflow client",
    long_about = "Client for the hazardous-waste destruction workflow.\n\n\
                  List Berita Acara records, run the multi-role field\n\
                  verification, and generate container labels as PNG files."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the configured API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session token
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Clear the stored session (and invalidate it remotely)
    Logout,

    /// Exchange the stored refresh token for a fresh session
    Refresh,

    /// Show the logged-in user's profile
    Profile,

    /// Berita Acara records
    Records {
        #[command(subcommand)]
        action: RecordsAction,
    },

    /// Field verification
    Verify {
        #[command(subcommand)]
        action: VerifyAction,
    },

    /// Container labels
    Label {
        #[command(subcommand)]
        action: LabelAction,
    },

    /// User configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

/// Berita Acara subcommands
#[derive(Subcommand, Debug)]
pub enum RecordsAction {
    /// List records with pagination and filters
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 10)]
        per_page: u32,

        /// Free-text search filter
        #[arg(long)]
        search: Option<String>,

        /// Status filter (e.g. submitted, field_verified)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one record
    Show {
        /// Record id
        id: String,
    },

    /// Look up a record by its permohonan number
    Approval {
        /// Approval (permohonan) number
        number: String,
    },
}

/// Field-verification subcommands
#[derive(Subcommand, Debug)]
pub enum VerifyAction {
    /// Show per-role verification progress
    Status {
        /// Berita Acara record id
        record_id: String,
    },

    /// Approve one role (select, authenticate, checklist, submit)
    Approve {
        /// Berita Acara record id
        record_id: String,

        /// Role id (e.g. pelaksana-hse)
        #[arg(long)]
        role: String,

        /// Acting verifier's employee id
        #[arg(long)]
        user: String,

        /// Acting verifier's password
        #[arg(long)]
        password: String,

        /// Confirm one checklist item (repeatable)
        #[arg(long = "confirm", value_name = "ITEM_ID")]
        confirm: Vec<String>,

        /// Confirm every checklist item
        #[arg(long)]
        all: bool,
    },

    /// Reject the workflow (HSE Supervisor/Officer only)
    Reject {
        /// Berita Acara record id
        record_id: String,

        /// Role id (supervisor-hse)
        #[arg(long)]
        role: String,

        /// Acting verifier's employee id
        #[arg(long)]
        user: String,

        /// Acting verifier's password
        #[arg(long)]
        password: String,

        /// Rejection reason (at least 10 characters)
        #[arg(long)]
        reason: String,
    },
}

/// Label subcommands
#[derive(Subcommand, Debug)]
pub enum LabelAction {
    /// Render labels as PNG files
    Generate {
        /// Permohonan number to fetch label data for
        #[arg(long, value_name = "NO", conflicts_with = "input")]
        request: Option<String>,

        /// Read label data from a JSON file instead of the API
        #[arg(long, value_name = "FILE")]
        input: Option<String>,

        /// Only this container index
        #[arg(long)]
        wadah: Option<u32>,

        /// Output size (800x480, 1200x720, 1600x960)
        #[arg(long)]
        size: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List available output sizes
    Sizes,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a value (keys: api.base-url, label.default-size, label.output-dir)
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    let base_url =
        cli.api_url.unwrap_or_else(|| config.api.base_url.trim_end_matches('/').to_string());

    match cli.command {
        Some(Command::Login { username, password }) => {
            commands::login(&base_url, &username, &password, output_mode)
        },
        Some(Command::Logout) => commands::logout(&base_url, output_mode),
        Some(Command::Refresh) => commands::refresh(&base_url, output_mode),
        Some(Command::Profile) => commands::profile(&base_url, output_mode),
        Some(Command::Records { action }) => commands::records(&base_url, action, output_mode),
        Some(Command::Verify { action }) => commands::verify(&base_url, action, output_mode),
        Some(Command::Label { action }) => {
            commands::label(&base_url, &config, action, output_mode)
        },
        Some(Command::Config { action }) => commands::config_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("limbah v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("limbah v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'limbah --help' for usage");
                println!("Run 'limbah login' to get started");
            }
            Ok(())
        },
    }
}
