use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sehatkan
/// Health checkpoint register: vital signs in, interpreted CSV records out
#[derive(Parser)]
#[command(
    name = "sehatkan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Health checkpoint register: record vital signs, interpret them and keep a CSV history",
    long_about = None
)]
pub struct Cli {
    /// Override register path (useful for tests or a second checkpoint)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory where photos are stored
    #[arg(global = true, long = "photo-dir")]
    pub photo_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Operator username
    #[arg(global = true, long = "user", env = "SEHATKAN_USER")]
    pub user: Option<String>,

    /// Operator password
    #[arg(
        global = true,
        long = "password",
        env = "SEHATKAN_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the register and the photo directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the operations journal
    Log {
        #[arg(long = "print", help = "Print the operations journal")]
        print: bool,
    },

    /// Record one examination
    Add {
        #[arg(long, help = "Full name of the examinee")]
        name: Option<String>,

        #[arg(long = "national-id", visible_alias = "nik", help = "National ID number")]
        national_id: Option<String>,

        #[arg(long, default_value = "")]
        birthplace: String,

        #[arg(long = "birth-date", help = "Birth date (YYYY-MM-DD or DD-MM-YYYY)")]
        birth_date: Option<String>,

        #[arg(
            long,
            default_value = "Yantek",
            help = "Yantek, Billman, CS, Security, Yanbung, P2TL, DIJ or Driver"
        )]
        department: String,

        #[arg(
            long = "work-unit",
            default_value = "ULP Asembagus",
            help = "Asembagus, Panarukan, Besuki, Wonosari or Bondowoso"
        )]
        work_unit: String,

        #[arg(long, default_value = "", help = "WhatsApp number (0812… or 62812…)")]
        phone: String,

        #[arg(long, default_value = "", help = "Name of the examiner")]
        examiner: String,

        #[arg(long, default_value_t = 60.0, help = "Weight in kg")]
        weight: f64,

        #[arg(long, default_value_t = 165.0, help = "Height in cm")]
        height: f64,

        #[arg(long, default_value_t = 36.5, help = "Body temperature in °C")]
        temperature: f64,

        #[arg(long = "bp", default_value = "", help = "Blood pressure, e.g. 145/95")]
        blood_pressure: String,

        #[arg(long, default_value_t = 98.0, help = "Oxygen saturation in %")]
        oxygen: f64,

        #[arg(long, default_value_t = 0.0, help = "Blood alcohol in %")]
        alcohol: f64,

        #[arg(long, value_name = "IMAGE", help = "Photo of the examinee (any common image format)")]
        photo: Option<String>,
    },

    /// Print the result message and messaging link of a stored record
    Message {
        #[arg(long, help = "Row number as printed by `list`")]
        row: usize,
    },

    /// List stored records
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "alerts", help = "Only records with at least one alarming status")]
        alerts: bool,
    },

    /// Status distributions of the register
    Stats {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Change cells or delete rows, then save the whole register
    Edit {
        #[arg(
            long = "set",
            value_name = "ROW:COLUMN=VALUE",
            help = "Set one cell (empty VALUE clears it); repeatable"
        )]
        set: Vec<String>,

        #[arg(long = "delete", value_name = "ROW", help = "Delete a row; repeatable")]
        delete: Vec<usize>,
    },

    /// Delete the whole register
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Create a backup copy of the register
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the register
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
