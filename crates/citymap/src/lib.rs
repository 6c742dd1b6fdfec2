//! Citymap - a city route network with interchangeable graph storage.
//!
//! This crate provides both a CLI application and a library around
//! [`citygraph`]. The library centres on [`MapNetwork`], a facade that owns
//! one active graph representation, resolves cities by id or by name, and
//! can swap between the dense and sparse representations without losing
//! data.
//!
//! ```
//! use citygraph::domain::Representation;
//! use citymap::MapNetwork;
//!
//! # fn main() -> citymap::error::Result<()> {
//! let mut network = MapNetwork::with_default_network(Representation::Matrix)?;
//! let route = network.shortest_path_named("Beijing", "Chengdu")?;
//! assert_eq!(route.total_weight, 2600);
//!
//! network.set_representation(Representation::List)?;
//! assert_eq!(network.shortest_path_named("Beijing", "Chengdu")?.total_weight, 2600);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod error;
pub mod network;
pub mod snapshot;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting
pub mod output;

pub use network::{MapNetwork, NetworkSummary};
pub use snapshot::{LoadWarning, NetworkSnapshot};
