//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for citymap using clap's
//! derive API. The CLI is non-interactive: each invocation loads a network,
//! runs one query and exits.
//!
//! # Commands
//!
//! - `info`: Show representation and city/route counts
//! - `cities`: List every city
//! - `neighbors <city>`: List direct routes from a city
//! - `dfs <city>` / `bfs <city>`: Show a traversal order
//! - `route <from> <to>`: Find the shortest route
//! - `render`: Dump the active representation
//! - `export <file>`: Write the network as a JSON snapshot
//!
//! Cities are given by id or by exact name.
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config <file>`: YAML configuration file (default: `citymap.yaml` in
//!   the working directory, if present)
//! - `--network <file>`: JSON snapshot to load instead of the default network
//! - `--representation <matrix|list>`: Backing representation
//!
//! # Example
//!
//! ```bash
//! citymap route Beijing Chengdu
//! citymap --representation list bfs 4
//! citymap --network saved.json --json info
//! ```

mod args;
mod execute;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{CityArgs, ExportArgs, RouteArgs};

// Re-export types
pub use types::{CityRef, RepresentationArg};

use crate::config::{CitymapConfig, CONFIG_FILE_NAME};
use crate::network::MapNetwork;
use crate::output::{self, OutputMode};

/// Citymap - query a network of cities and routes
///
/// Loads the built-in eight-city network, or a JSON snapshot, into an
/// adjacency matrix or adjacency list and answers traversal and
/// shortest-route queries.
#[derive(Parser, Debug)]
#[command(name = "citymap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (YAML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Network snapshot to load (JSON), overriding the configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub network: Option<PathBuf>,

    /// Graph representation, overriding the configuration
    #[arg(long, global = true, value_enum)]
    pub representation: Option<RepresentationArg>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show network information
    ///
    /// Displays the active representation, directedness, and city and route
    /// counts.
    Info,

    /// List all cities
    Cities,

    /// List direct routes from a city
    Neighbors(CityArgs),

    /// Depth-first traversal from a city
    Dfs(CityArgs),

    /// Breadth-first traversal from a city
    Bfs(CityArgs),

    /// Find the shortest route between two cities
    ///
    /// Uses Dijkstra's algorithm over route distances.
    Route(RouteArgs),

    /// Dump the active representation
    ///
    /// Prints the adjacency matrix table or the adjacency lists.
    Render,

    /// Export the network as a JSON snapshot
    ///
    /// The snapshot can be loaded again with `--network`.
    Export(ExportArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Resolve the effective configuration: config file, then flag overrides.
    ///
    /// Without `--config`, a `citymap.yaml` in the working directory is used
    /// when one exists.
    pub fn effective_config(&self) -> Result<CitymapConfig> {
        let config_path = self.config.clone().or_else(|| {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.is_file().then_some(local)
        });
        let mut config = CitymapConfig::load_or_default(config_path.as_deref())?;
        if let Some(path) = &self.network {
            config.network_file = Some(path.clone());
        }
        if let Some(representation) = self.representation {
            config.representation = representation.into();
        }
        Ok(config)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(command) = &self.command else {
            println!("Citymap city route network");
            println!("Use --help for more information");
            return Ok(());
        };

        let config = self.effective_config()?;
        let (network, warnings) = MapNetwork::from_config(&config)?;
        if !warnings.is_empty() {
            output::print_load_warnings(&warnings)?;
        }
        tracing::debug!(summary = ?network.summary(), "Network ready");

        match command {
            Commands::Info => execute::execute_info(&network, output_mode),
            Commands::Cities => execute::execute_cities(&network, output_mode),
            Commands::Neighbors(args) => execute::execute_neighbors(&network, args, output_mode),
            Commands::Dfs(args) => execute::execute_dfs(&network, args, output_mode),
            Commands::Bfs(args) => execute::execute_bfs(&network, args, output_mode),
            Commands::Route(args) => execute::execute_route(&network, args, output_mode),
            Commands::Render => execute::execute_render(&network, output_mode),
            Commands::Export(args) => execute::execute_export(&network, args, output_mode),
        }
    }
}
