//! Command-line interface definitions using clap
//!
//! CLI argument structs carry the clap-specific attributes and convert into
//! the interface-agnostic parameter types from `infodesk_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Directory
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use infodesk_core::params::*;

/// Hospital facility directory
///
/// Reports on health providers, health services and the stored paths between
/// facility locations, and moves services between locations. Run without a
/// command to use the interactive menu.
#[derive(Parser)]
#[command(version, about, name = "infodesk")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/infodesk/infodesk.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Seconds to wait on a locked database file before failing
    #[arg(long, global = true, default_value_t = 5)]
    pub busy_timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Infodesk CLI
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Report health provider information
    Provider(ProviderArgs),
    /// Report health service information
    Service(ServiceArgs),
    /// Report the shortest stored path between two locations
    Path(PathArgs),
    /// Move a health service to another location
    UpdateService(UpdateServiceArgs),
    /// Execute a SQL script against the database
    Load(LoadArgs),
}

/// Report a health provider by ID
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct ProviderArgs {
    /// ID of the provider to report
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

impl From<ProviderArgs> for ProviderLookup {
    fn from(val: ProviderArgs) -> Self {
        ProviderLookup { id: val.id }
    }
}

/// Report a health service by name
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct ServiceArgs {
    /// Exact name of the service
    pub name: String,
}

impl From<ServiceArgs> for ServiceLookup {
    fn from(val: ServiceArgs) -> Self {
        ServiceLookup { name: val.name }
    }
}

/// Report the shortest path between two named locations
///
/// When several stored paths connect the locations, the one with the fewest
/// stops is shown; ties go to the lowest path ID.
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct PathArgs {
    /// Exact name of the starting location
    pub start: String,
    /// Exact name of the ending location
    pub end: String,
}

impl From<PathArgs> for PathQuery {
    fn from(val: PathArgs) -> Self {
        PathQuery {
            start: val.start,
            end: val.end,
        }
    }
}

/// Move a service to another location
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct UpdateServiceArgs {
    /// Exact name of the service to move
    pub service: String,
    /// Exact name of the new location
    pub location: String,
}

impl From<UpdateServiceArgs> for UpdateServiceLocation {
    fn from(val: UpdateServiceArgs) -> Self {
        UpdateServiceLocation {
            service: val.service,
            location: val.location,
        }
    }
}

/// Execute a SQL script, e.g. to load facility data
#[derive(ClapArgs, Debug, PartialEq, Eq)]
pub struct LoadArgs {
    /// Path of the SQL file to execute
    pub file: PathBuf,
}

impl From<LoadArgs> for LoadScript {
    fn from(val: LoadArgs) -> Self {
        LoadScript { path: val.file }
    }
}
