//! The city network facade.
//!
//! [`MapNetwork`] owns exactly one active [`Graph`] and adds the conveniences
//! a caller wants on top of it:
//!
//! - every city, route and query operation in an id form and a name form
//! - raw `i64` weights validated into [`Weight`]s at the boundary
//! - representation hot-swap that carries every city and route across
//! - snapshots in and out
//!
//! Name forms resolve through a linear scan (lowest id wins on duplicate
//! names) and then delegate to the id form. Graph errors pass through
//! unchanged inside [`Error::Graph`].

use crate::config::CitymapConfig;
use crate::error::{Error, Result};
use crate::snapshot::{LoadWarning, NetworkSnapshot};
use citygraph::domain::{City, CityId, PathResult, Representation, Weight};
use citygraph::graph::{copy_into, create_graph, Graph};
use citygraph::GraphError;
use serde::Serialize;

/// Cities of the built-in demo network.
const DEFAULT_CITIES: [(u32, &str); 8] = [
    (1, "Beijing"),
    (2, "Shanghai"),
    (3, "Guangzhou"),
    (4, "Shenzhen"),
    (5, "Hangzhou"),
    (6, "Nanjing"),
    (7, "Wuhan"),
    (8, "Chengdu"),
];

/// Routes of the built-in demo network, in kilometres.
const DEFAULT_ROUTES: [(u32, u32, u32); 8] = [
    (1, 2, 1200),
    (1, 6, 1000),
    (2, 5, 200),
    (3, 4, 150),
    (2, 7, 800),
    (5, 3, 1200),
    (7, 8, 1100),
    (6, 7, 500),
];

/// Headline statistics of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    /// Active backing representation
    pub representation: Representation,
    /// Whether routes are one-way
    pub directed: bool,
    /// Number of cities
    pub cities: usize,
    /// Number of logical routes
    pub routes: usize,
}

/// A city network backed by one swappable graph representation.
#[derive(Debug)]
pub struct MapNetwork {
    graph: Box<dyn Graph>,
}

impl MapNetwork {
    /// Create an empty network
    pub fn new(representation: Representation, directed: bool) -> Self {
        Self {
            graph: create_graph(representation, directed),
        }
    }

    /// Create a network as described by a configuration.
    ///
    /// Loads `network_file` when set, otherwise builds the default network.
    /// Returns the warnings raised while loading the file.
    pub fn from_config(config: &CitymapConfig) -> Result<(Self, Vec<LoadWarning>)> {
        match &config.network_file {
            Some(path) => {
                let snapshot = NetworkSnapshot::load(path)?;
                Ok(Self::from_snapshot(&snapshot, config.representation))
            }
            None => {
                let mut network = Self::new(config.representation, config.directed);
                network.populate_default()?;
                Ok((network, Vec::new()))
            }
        }
    }

    /// Create the eight-city demo network
    pub fn with_default_network(representation: Representation) -> Result<Self> {
        let mut network = Self::new(representation, false);
        network.populate_default()?;
        Ok(network)
    }

    /// Replace the contents with the eight-city demo network
    pub fn populate_default(&mut self) -> Result<()> {
        self.graph.clear();
        for (id, name) in DEFAULT_CITIES {
            self.graph.add_vertex(City::new(CityId(id), name))?;
        }
        for (from, to, weight) in DEFAULT_ROUTES {
            self.graph
                .add_edge(CityId(from), CityId(to), Weight::from(weight))?;
        }
        tracing::debug!("Created default network");
        Ok(())
    }

    /// Create a network from a snapshot, skipping entries it cannot hold
    pub fn from_snapshot(
        snapshot: &NetworkSnapshot,
        representation: Representation,
    ) -> (Self, Vec<LoadWarning>) {
        let mut network = Self::new(representation, snapshot.directed);
        let warnings = snapshot.replay_into(network.graph.as_mut());
        (network, warnings)
    }

    /// Replace the contents with a snapshot.
    ///
    /// The representation is kept; directedness follows the snapshot.
    pub fn load_snapshot(&mut self, snapshot: &NetworkSnapshot) -> Vec<LoadWarning> {
        let (network, warnings) = Self::from_snapshot(snapshot, self.representation());
        *self = network;
        warnings
    }

    /// Capture every city and route
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::from_graph(self.graph.as_ref())
    }

    // ========== Representation ==========

    /// Active backing representation
    pub fn representation(&self) -> Representation {
        self.graph.representation()
    }

    /// Whether routes are one-way
    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    /// Switch to another representation, carrying every city and route over.
    ///
    /// A no-op when `representation` is already active. The new graph is
    /// fully built before the old one is dropped, so on error the network is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::CapacityExceeded` when switching to the matrix
    /// while a city id is too large for it.
    pub fn set_representation(&mut self, representation: Representation) -> Result<()> {
        if representation == self.representation() {
            return Ok(());
        }

        let mut replacement = create_graph(representation, self.is_directed());
        copy_into(self.graph.as_ref(), replacement.as_mut())?;

        tracing::debug!(
            from = %self.representation(),
            to = %representation,
            cities = replacement.vertex_count(),
            "Switched representation"
        );
        self.graph = replacement;
        Ok(())
    }

    // ========== Cities ==========

    /// Add a city with no routes
    pub fn add_city(&mut self, city: City) -> Result<()> {
        Ok(self.graph.add_vertex(city)?)
    }

    /// Remove a city and every route touching it
    pub fn remove_city(&mut self, id: CityId) -> Result<City> {
        Ok(self.graph.remove_vertex(id)?)
    }

    /// Remove the city carrying `name`
    pub fn remove_city_named(&mut self, name: &str) -> Result<City> {
        let id = self.resolve(name)?;
        self.remove_city(id)
    }

    /// The city with this id
    pub fn find_city(&self, id: CityId) -> Option<City> {
        self.graph.vertex(id)
    }

    /// The lowest-id city carrying `name`
    pub fn find_city_named(&self, name: &str) -> Option<City> {
        self.graph.vertex_by_name(name)
    }

    /// Change a city's display name
    pub fn rename_city(&mut self, id: CityId, name: impl Into<String>) -> Result<()> {
        Ok(self.graph.rename_vertex(id, name.into())?)
    }

    /// All city ids in ascending order
    pub fn city_ids(&self) -> Vec<CityId> {
        self.graph.vertex_ids()
    }

    /// All cities in ascending id order
    pub fn cities(&self) -> Vec<City> {
        self.graph.vertices().iter().cloned().collect()
    }

    /// Display name of a city, empty if absent
    pub fn city_name(&self, id: CityId) -> &str {
        self.graph.vertices().name_of(id)
    }

    // ========== Routes ==========

    /// Add or overwrite a route.
    ///
    /// # Errors
    ///
    /// - `GraphError::InvalidWeight` if `distance` is negative or too large
    /// - any error of [`Graph::add_edge`]
    pub fn add_route(&mut self, from: CityId, to: CityId, distance: i64) -> Result<()> {
        let weight = Weight::new(distance)?;
        Ok(self.graph.add_edge(from, to, weight)?)
    }

    /// Add or overwrite a route between two named cities
    pub fn add_route_named(&mut self, from: &str, to: &str, distance: i64) -> Result<()> {
        let (from, to) = self.resolve_pair(from, to)?;
        self.add_route(from, to, distance)
    }

    /// Remove a route, returning its distance
    pub fn remove_route(&mut self, from: CityId, to: CityId) -> Result<Weight> {
        Ok(self.graph.remove_edge(from, to)?)
    }

    /// Remove the route between two named cities
    pub fn remove_route_named(&mut self, from: &str, to: &str) -> Result<Weight> {
        let (from, to) = self.resolve_pair(from, to)?;
        self.remove_route(from, to)
    }

    /// Whether a direct route exists
    pub fn has_route(&self, from: CityId, to: CityId) -> bool {
        self.graph.has_edge(from, to)
    }

    /// Distance of the direct route, if any
    pub fn route_distance(&self, from: CityId, to: CityId) -> Option<Weight> {
        self.graph.edge_weight(from, to)
    }

    // ========== Queries ==========

    /// Cities one route away
    pub fn neighbors(&self, id: CityId) -> Vec<CityId> {
        self.graph.neighbors(id)
    }

    /// Cities one route away from the named city
    pub fn neighbors_named(&self, name: &str) -> Result<Vec<CityId>> {
        Ok(self.neighbors(self.resolve(name)?))
    }

    /// Depth-first visiting order
    pub fn traverse_dfs(&self, start: CityId) -> Vec<CityId> {
        self.graph.dfs(start)
    }

    /// Depth-first visiting order from the named city
    pub fn traverse_dfs_named(&self, start: &str) -> Result<Vec<CityId>> {
        Ok(self.traverse_dfs(self.resolve(start)?))
    }

    /// Breadth-first visiting order
    pub fn traverse_bfs(&self, start: CityId) -> Vec<CityId> {
        self.graph.bfs(start)
    }

    /// Breadth-first visiting order from the named city
    pub fn traverse_bfs_named(&self, start: &str) -> Result<Vec<CityId>> {
        Ok(self.traverse_bfs(self.resolve(start)?))
    }

    /// Shortest route. Missing cities yield a not-found result.
    pub fn shortest_path(&self, from: CityId, to: CityId) -> PathResult {
        self.graph.dijkstra(from, to)
    }

    /// Shortest route between two named cities
    pub fn shortest_path_named(&self, from: &str, to: &str) -> Result<PathResult> {
        let (from, to) = self.resolve_pair(from, to)?;
        Ok(self.shortest_path(from, to))
    }

    // ========== Statistics ==========

    /// Number of cities
    pub fn city_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of logical routes.
    ///
    /// Scans every pair of cities, so this is O(V²). Undirected networks
    /// count each unordered pair once; directed networks count each ordered
    /// pair.
    pub fn route_count(&self) -> usize {
        let ids = self.graph.vertex_ids();
        let directed = self.is_directed();
        let mut count = 0;

        for (i, &from) in ids.iter().enumerate() {
            for (j, &to) in ids.iter().enumerate() {
                let counted_pair = if directed { i != j } else { i < j };
                if counted_pair && self.graph.has_edge(from, to) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Whether the network has no cities
    pub fn is_empty(&self) -> bool {
        self.city_count() == 0
    }

    /// Headline statistics
    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            representation: self.representation(),
            directed: self.is_directed(),
            cities: self.city_count(),
            routes: self.route_count(),
        }
    }

    // ========== Housekeeping ==========

    /// Remove every city and route
    pub fn clear(&mut self) {
        self.graph.clear();
        tracing::debug!("Cleared network");
    }

    /// Human-readable dump of the active representation
    pub fn render(&self) -> String {
        self.graph.render()
    }

    /// Read-only access to the active graph
    pub fn graph(&self) -> &dyn Graph {
        self.graph.as_ref()
    }

    fn resolve(&self, name: &str) -> Result<CityId> {
        self.graph
            .vertices()
            .find_by_name(name)
            .map(|city| city.id)
            .ok_or_else(|| Error::Graph(GraphError::VertexNameNotFound(name.to_string())))
    }

    fn resolve_pair(&self, from: &str, to: &str) -> Result<(CityId, CityId)> {
        Ok((self.resolve(from)?, self.resolve(to)?))
    }
}

impl Default for MapNetwork {
    fn default() -> Self {
        Self::new(Representation::default(), false)
    }
}
