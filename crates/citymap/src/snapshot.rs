//! Network snapshots: the vertex list and edge list exchanged with files.
//!
//! A snapshot is plain data. It is written as pretty-printed JSON:
//!
//! ```json
//! {
//!   "directed": false,
//!   "cities": [{ "id": 1, "name": "Beijing" }],
//!   "routes": [{ "from": 1, "to": 2, "weight": 1200 }]
//! }
//! ```
//!
//! Undirected snapshots list each route once.
//!
//! # Loading
//!
//! Replaying a snapshot into a graph is resilient: entries the graph rejects
//! are skipped and reported as [`LoadWarning`]s rather than aborting the
//! load. A file that is not valid JSON, or holds a negative weight, still
//! fails as a whole.

use crate::error::Result;
use citygraph::domain::{City, CityId, Route};
use citygraph::graph::Graph;
use citygraph::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Serializable contents of a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Whether routes are one-way
    #[serde(default)]
    pub directed: bool,

    /// Cities in ascending id order
    #[serde(default)]
    pub cities: Vec<City>,

    /// One entry per logical route
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Non-fatal problems found while replaying a snapshot.
///
/// The offending entry is skipped; everything else is still loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A second city entry reused an id. The first entry wins.
    DuplicateCity {
        /// The repeated id
        id: CityId,
        /// Name carried by the skipped entry
        name: String,
    },

    /// A route references a city that is not in the snapshot.
    OrphanedRoute {
        /// Source city of the skipped route
        from: CityId,
        /// Target city of the skipped route
        to: CityId,
    },

    /// The graph rejected a city for another reason.
    RejectedCity {
        /// Id of the skipped city
        id: CityId,
        /// Why it was rejected
        error: GraphError,
    },

    /// The graph rejected a route for another reason, such as a self-loop.
    RejectedRoute {
        /// Source city of the skipped route
        from: CityId,
        /// Target city of the skipped route
        to: CityId,
        /// Why it was rejected
        error: GraphError,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::DuplicateCity { id, name } => {
                write!(f, "skipped duplicate city {id} ('{name}')")
            }
            LoadWarning::OrphanedRoute { from, to } => {
                write!(f, "skipped route {from} -> {to}: unknown city")
            }
            LoadWarning::RejectedCity { id, error } => {
                write!(f, "skipped city {id}: {error}")
            }
            LoadWarning::RejectedRoute { from, to, error } => {
                write!(f, "skipped route {from} -> {to}: {error}")
            }
        }
    }
}

impl NetworkSnapshot {
    /// Capture every city and logical route of a graph
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            directed: graph.is_directed(),
            cities: graph.vertices().iter().cloned().collect(),
            routes: graph.edges(),
        }
    }

    /// Read a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            cities = snapshot.cities.len(),
            routes = snapshot.routes.len(),
            "Read snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Wrote snapshot");
        Ok(())
    }

    /// Add every city and route to `graph`, skipping what it rejects.
    ///
    /// The graph is not cleared first. Each skipped entry is logged and
    /// returned as a warning.
    pub fn replay_into<G: Graph + ?Sized>(&self, graph: &mut G) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();

        for city in &self.cities {
            match graph.add_vertex(city.clone()) {
                Ok(()) => {}
                Err(GraphError::DuplicateVertex(id)) => warnings.push(LoadWarning::DuplicateCity {
                    id,
                    name: city.name.clone(),
                }),
                Err(error) => warnings.push(LoadWarning::RejectedCity { id: city.id, error }),
            }
        }

        for route in &self.routes {
            match graph.add_edge(route.from, route.to, route.weight) {
                Ok(()) => {}
                Err(GraphError::VertexNotFound(_)) => warnings.push(LoadWarning::OrphanedRoute {
                    from: route.from,
                    to: route.to,
                }),
                Err(error) => warnings.push(LoadWarning::RejectedRoute {
                    from: route.from,
                    to: route.to,
                    error,
                }),
            }
        }

        for warning in &warnings {
            tracing::warn!(%warning, "Snapshot entry skipped");
        }

        warnings
    }
}
