//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Every
//! command runs against an already loaded [`MapNetwork`].

use anyhow::{bail, Result};

use super::args::{CityArgs, ExportArgs, RouteArgs};
use crate::network::MapNetwork;
use crate::output::{self, OutputMode};

/// Execute the info command
pub fn execute_info(network: &MapNetwork, output_mode: OutputMode) -> Result<()> {
    output::print_summary(&network.summary(), output_mode)?;
    Ok(())
}

/// Execute the cities command
pub fn execute_cities(network: &MapNetwork, output_mode: OutputMode) -> Result<()> {
    output::print_cities(&network.cities(), output_mode)?;
    Ok(())
}

/// Execute the neighbors command
pub fn execute_neighbors(
    network: &MapNetwork,
    args: &CityArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let city = args.city.resolve(network)?;
    let neighbors = network.neighbors(city.id);
    output::print_neighbors(network, &city, &neighbors, output_mode)?;
    Ok(())
}

/// Execute the dfs command
pub fn execute_dfs(network: &MapNetwork, args: &CityArgs, output_mode: OutputMode) -> Result<()> {
    let start = args.city.resolve(network)?;
    let order = network.traverse_dfs(start.id);
    output::print_traversal(network, "dfs", &start, &order, output_mode)?;
    Ok(())
}

/// Execute the bfs command
pub fn execute_bfs(network: &MapNetwork, args: &CityArgs, output_mode: OutputMode) -> Result<()> {
    let start = args.city.resolve(network)?;
    let order = network.traverse_bfs(start.id);
    output::print_traversal(network, "bfs", &start, &order, output_mode)?;
    Ok(())
}

/// Execute the route command
pub fn execute_route(network: &MapNetwork, args: &RouteArgs, output_mode: OutputMode) -> Result<()> {
    let from = args.from.resolve(network)?;
    let to = args.to.resolve(network)?;
    let result = network.shortest_path(from.id, to.id);
    output::print_path(network, &from, &to, &result, output_mode)?;
    Ok(())
}

/// Execute the render command
pub fn execute_render(network: &MapNetwork, output_mode: OutputMode) -> Result<()> {
    let rendered = network.render();
    match output_mode {
        OutputMode::Json => output::print_json(&serde_json::json!({
            "representation": network.representation(),
            "render": rendered,
        }))?,
        OutputMode::Text => print!("{rendered}"),
    }
    Ok(())
}

/// Execute the export command
pub fn execute_export(
    network: &MapNetwork,
    args: &ExportArgs,
    output_mode: OutputMode,
) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    let snapshot = network.snapshot();
    snapshot.save(&args.path)?;

    match output_mode {
        OutputMode::Json => output::print_json(&serde_json::json!({
            "path": args.path.display().to_string(),
            "cities": snapshot.cities.len(),
            "routes": snapshot.routes.len(),
        }))?,
        OutputMode::Text => output::print_message(&format!(
            "Exported {} city(ies) and {} route(s) to {}",
            snapshot.cities.len(),
            snapshot.routes.len(),
            args.path.display()
        ))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::CityRef;
    use crate::snapshot::NetworkSnapshot;
    use citygraph::domain::{CityId, Representation};
    use tempfile::TempDir;

    fn network() -> MapNetwork {
        MapNetwork::with_default_network(Representation::Matrix).unwrap()
    }

    #[test]
    fn test_export_writes_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("network.json");
        let args = ExportArgs {
            path: path.clone(),
            force: false,
        };

        execute_export(&network(), &args, OutputMode::Json).unwrap();

        let snapshot = NetworkSnapshot::load(&path).unwrap();
        assert_eq!(snapshot.cities.len(), 8);
        assert_eq!(snapshot.routes.len(), 8);
    }

    #[test]
    fn test_export_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("network.json");
        std::fs::write(&path, "keep me").unwrap();

        let mut args = ExportArgs {
            path: path.clone(),
            force: false,
        };
        let err = execute_export(&network(), &args, OutputMode::Json).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        args.force = true;
        execute_export(&network(), &args, OutputMode::Json).unwrap();
        assert!(NetworkSnapshot::load(&path).is_ok());
    }

    #[test]
    fn test_unknown_city_is_an_error() {
        let args = RouteArgs {
            from: CityRef::Name("Beijing".to_string()),
            to: CityRef::Id(CityId(404)),
        };
        let err = execute_route(&network(), &args, OutputMode::Json).unwrap_err();
        assert_eq!(err.to_string(), "City not found: 404");
    }
}
