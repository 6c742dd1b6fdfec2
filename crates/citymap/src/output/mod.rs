//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use crate::network::{MapNetwork, NetworkSummary};
use crate::snapshot::LoadWarning;
use citygraph::domain::{City, CityId, PathResult, Weight};
use serde::Serialize;
use serde_json::json;
use std::env;
use std::io::{self, Write};

// Re-export public items
pub use color::{error, info, success, warning};

use color::{bold, colorize_distance, colorize_id, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `CITYMAP_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Respect NO_COLOR standard (https://no-color.org/)
        // Also support CITYMAP_COLOR for explicit control
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("CITYMAP_COLOR")
                .is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print network statistics in the specified format
pub fn print_summary(summary: &NetworkSummary, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_summary_text(&mut handle, summary, &config),
        OutputMode::Json => write_json(&mut handle, summary),
    }
}

/// Print a list of cities in the specified format
pub fn print_cities(cities: &[City], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_cities_text(&mut handle, cities, &config),
        OutputMode::Json => write_json(&mut handle, &cities),
    }
}

/// Print the direct neighbors of a city with their route distances
pub fn print_neighbors(
    network: &MapNetwork,
    city: &City,
    neighbors: &[CityId],
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_neighbors_text(&mut handle, network, city, neighbors, &config),
        OutputMode::Json => print_neighbors_json(&mut handle, network, city, neighbors),
    }
}

/// Print a traversal order
pub fn print_traversal(
    network: &MapNetwork,
    kind: &str,
    start: &City,
    order: &[CityId],
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_traversal_text(&mut handle, network, kind, start, order, &config),
        OutputMode::Json => write_json(
            &mut handle,
            &json!({
                "traversal": kind,
                "start": start,
                "order": resolve_cities(network, order),
            }),
        ),
    }
}

/// Print the result of a shortest-path query
pub fn print_path(
    network: &MapNetwork,
    from: &City,
    to: &City,
    result: &PathResult,
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_path_text(&mut handle, network, from, to, result, &config),
        OutputMode::Json => print_path_json(&mut handle, network, from, to, result),
    }
}

/// Report snapshot entries that were skipped while loading.
///
/// Goes to stderr so JSON output on stdout stays parseable.
pub fn print_load_warnings(warnings: &[LoadWarning]) -> io::Result<()> {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let config = OutputConfig::from_env();
    print_load_warnings_text(&mut handle, warnings, &config)
}

/// Print a simple message
pub fn print_message(msg: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{msg}")
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_summary_text<W: Write>(
    w: &mut W,
    summary: &NetworkSummary,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Citymap Network Information", config))?;
    writeln!(w, "===========================")?;
    writeln!(w)?;
    writeln!(
        w,
        "{} {}",
        dimmed("Representation:", config),
        summary.representation
    )?;
    writeln!(
        w,
        "{}       {}",
        dimmed("Directed:", config),
        if summary.directed { "yes" } else { "no" }
    )?;
    writeln!(w, "{}         {}", dimmed("Cities:", config), summary.cities)?;
    writeln!(w, "{}         {}", dimmed("Routes:", config), summary.routes)?;
    Ok(())
}

fn print_cities_text<W: Write>(w: &mut W, cities: &[City], config: &OutputConfig) -> io::Result<()> {
    if cities.is_empty() {
        writeln!(w, "No cities found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} city(ies):", cities.len())?;
    writeln!(w)?;

    for city in cities {
        writeln!(
            w,
            "{:>6}  {}",
            colorize_id(city.id, config),
            bold(&city.name, config)
        )?;
    }

    Ok(())
}

fn print_neighbors_text<W: Write>(
    w: &mut W,
    network: &MapNetwork,
    city: &City,
    neighbors: &[CityId],
    config: &OutputConfig,
) -> io::Result<()> {
    if neighbors.is_empty() {
        writeln!(w, "{} has no direct routes.", label(city, config))?;
        return Ok(());
    }

    writeln!(w, "Direct routes from {}:", label(city, config))?;
    for &id in neighbors {
        let distance = network
            .route_distance(city.id, id)
            .map_or_else(String::new, |weight| colorize_distance(weight, config));
        writeln!(
            w,
            "  {} {}  {}",
            dimmed("->", config),
            label(&name_for(network, id), config),
            distance
        )?;
    }

    Ok(())
}

fn print_traversal_text<W: Write>(
    w: &mut W,
    network: &MapNetwork,
    kind: &str,
    start: &City,
    order: &[CityId],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} from {} visits {} city(ies):",
        kind.to_uppercase(),
        label(start, config),
        order.len()
    )?;
    writeln!(w, "  {}", join_route(network, order, config))?;
    Ok(())
}

fn print_path_text<W: Write>(
    w: &mut W,
    network: &MapNetwork,
    from: &City,
    to: &City,
    result: &PathResult,
    config: &OutputConfig,
) -> io::Result<()> {
    let Some(distance) = result.distance() else {
        writeln!(
            w,
            "{} {} to {}",
            error("No route from", config),
            label(from, config),
            label(to, config)
        )?;
        return Ok(());
    };

    writeln!(
        w,
        "{} {} to {}: {} ({} hop(s))",
        success("Shortest route from", config),
        label(from, config),
        label(to, config),
        colorize_distance(distance, config),
        result.hops()
    )?;
    writeln!(w, "  {}", join_route(network, &result.path, config))?;
    Ok(())
}

fn print_load_warnings_text<W: Write>(
    w: &mut W,
    warnings: &[LoadWarning],
    config: &OutputConfig,
) -> io::Result<()> {
    for item in warnings {
        writeln!(w, "{} {item}", warning("warning:", config))?;
    }
    Ok(())
}

fn label(city: &City, config: &OutputConfig) -> String {
    format!("{} ({})", bold(&city.name, config), colorize_id(city.id, config))
}

fn join_route(network: &MapNetwork, ids: &[CityId], config: &OutputConfig) -> String {
    let arrow = format!(" {} ", dimmed("->", config));
    ids.iter()
        .map(|&id| label(&name_for(network, id), config))
        .collect::<Vec<_>>()
        .join(&arrow)
}

fn name_for(network: &MapNetwork, id: CityId) -> City {
    network
        .find_city(id)
        .unwrap_or_else(|| City::new(id, String::new()))
}

fn resolve_cities(network: &MapNetwork, ids: &[CityId]) -> Vec<City> {
    ids.iter().map(|&id| name_for(network, id)).collect()
}

// ============================================================================
// JSON Formatting
// ============================================================================

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

fn print_neighbors_json<W: Write>(
    w: &mut W,
    network: &MapNetwork,
    city: &City,
    neighbors: &[CityId],
) -> io::Result<()> {
    let routes: Vec<_> = neighbors
        .iter()
        .map(|&id| {
            json!({
                "city": name_for(network, id),
                "distance": network.route_distance(city.id, id).map(Weight::get),
            })
        })
        .collect();

    write_json(w, &json!({ "city": city, "neighbors": routes }))
}

fn print_path_json<W: Write>(
    w: &mut W,
    network: &MapNetwork,
    from: &City,
    to: &City,
    result: &PathResult,
) -> io::Result<()> {
    write_json(
        w,
        &json!({
            "from": from,
            "to": to,
            "found": result.found,
            "distance": result.distance(),
            "path": resolve_cities(network, &result.path),
        }),
    )
}
