//! CLI argument structs for commands that take arguments.

use clap::Parser;
use std::path::PathBuf;

use super::types::CityRef;

/// Arguments for commands that start from one city (`neighbors`, `dfs`, `bfs`)
#[derive(Parser, Debug, Clone)]
pub struct CityArgs {
    /// City id or exact city name
    pub city: CityRef,
}

/// Arguments for the `route` command
#[derive(Parser, Debug, Clone)]
pub struct RouteArgs {
    /// Starting city (id or name)
    pub from: CityRef,

    /// Destination city (id or name)
    pub to: CityRef,
}

/// Arguments for the `export` command
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Path of the JSON snapshot to write
    pub path: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(short, long)]
    pub force: bool,
}
