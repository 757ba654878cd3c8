//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use loadplan_types::OutputFormat;

#[derive(Parser)]
#[command(name = "loadplan")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Truck capacity allocation planner")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate truck requirements for a shipment
    Calc {
        /// Path to a line-item CSV (name,quantity,volume_per_unit,weight_per_unit)
        items: Option<PathBuf>,

        /// Load items from a saved template instead of a CSV
        #[arg(long)]
        template: Option<String>,

        /// Destination name (required with --save)
        #[arg(long, short = 'd')]
        destination: Option<String>,

        /// Truck type name. Uses config default if not specified.
        #[arg(long, short = 't')]
        truck: Option<String>,

        /// Override truck volume capacity in m³
        #[arg(long)]
        truck_volume: Option<f64>,

        /// Override truck weight capacity in kg
        #[arg(long)]
        truck_weight: Option<f64>,

        /// Save the calculation to history
        #[arg(long)]
        save: bool,

        /// Seed for the route suggestion sampling (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Skip improvement suggestions
        #[arg(long)]
        no_suggestions: bool,
    },

    /// Compare the load against all configured truck types
    Compare {
        /// Path to a line-item CSV
        items: PathBuf,
    },

    /// Recommend additional quantities toward a target utilization
    Recommend {
        /// Path to a line-item CSV
        items: PathBuf,

        /// Truck type name. Uses config default if not specified.
        #[arg(long, short = 't')]
        truck: Option<String>,

        /// Target utilization percentage
        #[arg(long)]
        target: Option<f64>,
    },

    /// Show calculation history
    History {
        /// Maximum number of entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Delete all stored calculations
        #[arg(long)]
        clear: bool,
    },

    /// Aggregate statistics over stored calculations
    Stats,

    /// Manage item templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default truck type
        #[arg(long)]
        set_default_truck: Option<String>,

        /// Set data directory for history and templates
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Save a line-item CSV as a named template
    Save {
        /// Template name (unique; overwrites an existing template)
        name: String,

        /// Path to a line-item CSV
        items: PathBuf,
    },

    /// List saved templates
    List,

    /// Show the items of a template
    Show {
        /// Template name
        name: String,
    },

    /// Delete a template
    Delete {
        /// Template name
        name: String,
    },
}
