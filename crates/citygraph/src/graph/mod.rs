//! Graph abstraction for city networks.
//!
//! This module provides the core [`Graph`] trait and a factory for creating
//! graph representations. It supports two implementations:
//!
//! - **Adjacency matrix** ([`AdjacencyMatrix`]): square table indexed by city
//!   id. O(1) edge lookup, O(maxId) neighbor scan, O(maxId²) memory.
//! - **Adjacency list** ([`AdjacencyList`]): per-city list of
//!   `(neighbor, weight)` pairs. O(degree) lookup and scan, O(V+E) memory.
//!
//! # Architecture
//!
//! The trait is object-safe, allowing for dynamic dispatch via
//! `Box<dyn Graph>`. Representations only implement the storage primitives
//! (vertex and edge mutation, edge lookup, neighbor enumeration). Traversal
//! and shortest-path algorithms live in [`algorithms`] and are written once
//! against those primitives, so both representations get them as provided
//! trait methods.
//!
//! # Edge Policies
//!
//! Both representations apply the same rules:
//!
//! - **Duplicates**: re-adding an edge between the same ordered pair replaces
//!   its weight (last write wins). Neighbor order is unchanged.
//! - **Self-loops**: rejected with [`GraphError::SelfLoop`].
//! - **Undirected graphs**: every mutation is mirrored on the reverse pair.
//! - **Vertex removal**: retracts every edge touching the vertex, in both
//!   directions.
//!
//! # Concurrency
//!
//! Graphs are plain owned values with no interior mutability. Traversals
//! borrow the graph immutably for their whole run, so the borrow checker
//! already prevents mutation during a query.
//!
//! # Example
//!
//! ```
//! use citygraph::domain::{City, CityId, Representation, Weight};
//! use citygraph::graph::{create_graph, Graph};
//!
//! # fn main() -> citygraph::Result<()> {
//! let mut graph = create_graph(Representation::Matrix, false);
//! for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
//!     graph.add_vertex(City::new(CityId(id), name))?;
//! }
//! graph.add_edge(CityId(1), CityId(2), Weight::new(5)?)?;
//! graph.add_edge(CityId(2), CityId(3), Weight::new(7)?)?;
//!
//! assert_eq!(graph.bfs(CityId(1)), vec![CityId(1), CityId(2), CityId(3)]);
//! assert_eq!(graph.dijkstra(CityId(1), CityId(3)).total_weight, 12);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
mod list;
mod matrix;
mod vertices;

pub use list::AdjacencyList;
pub use matrix::{AdjacencyMatrix, MatrixCell, MAX_MATRIX_DIMENSION};
pub use vertices::VertexSet;

use crate::domain::{City, CityId, PathResult, Representation, Route, Weight};
use crate::error::{GraphError, Result};
use std::fmt;

/// Core graph trait for city networks.
///
/// # Method Categories
///
/// - **Vertices**: `add_vertex`, `remove_vertex`, `rename_vertex`, `vertex`,
///   `vertex_by_name`, `vertex_ids`, `vertex_count`
/// - **Edges**: `add_edge`, `remove_edge`, `has_edge`, `edge_weight`,
///   `neighbors`, `edges`, `edge_count`
/// - **Algorithms**: `dfs`, `bfs`, `dijkstra`
/// - **Housekeeping**: `clear`, `render`
///
/// # Error Handling
///
/// Mutations return `Result<T>` where the error is one of:
/// - `DuplicateVertex`: the id is already taken
/// - `VertexNotFound`: an endpoint or target vertex is absent
/// - `EdgeNotFound`: the edge to remove does not exist
/// - `SelfLoop`: both endpoints are the same vertex
/// - `CapacityExceeded`: the id does not fit the dense table
///
/// Queries never fail. Absent vertices yield empty results, and absent edges
/// yield `None` from [`Graph::edge_weight`].
pub trait Graph: fmt::Debug + Send + Sync {
    // ========== Representation Info ==========

    /// Which backing store this graph uses.
    fn representation(&self) -> Representation;

    /// Whether edges are one-way.
    fn is_directed(&self) -> bool;

    /// The vertex set backing this graph.
    fn vertices(&self) -> &VertexSet;

    // ========== Vertex Mutation ==========

    /// Insert a city with no edges.
    ///
    /// # Errors
    ///
    /// - `GraphError::DuplicateVertex` if the id is already present
    /// - `GraphError::CapacityExceeded` if the representation cannot hold the id
    fn add_vertex(&mut self, city: City) -> Result<()>;

    /// Remove a city and every edge referencing it.
    ///
    /// Returns the removed city.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::VertexNotFound` if the id is absent.
    fn remove_vertex(&mut self, id: CityId) -> Result<City>;

    /// Change the display name of a city.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::VertexNotFound` if the id is absent.
    fn rename_vertex(&mut self, id: CityId, name: String) -> Result<()>;

    // ========== Edge Mutation ==========

    /// Insert or overwrite the edge `from -> to`.
    ///
    /// Undirected graphs also write `to -> from`.
    ///
    /// # Errors
    ///
    /// - `GraphError::VertexNotFound` if either endpoint is absent
    /// - `GraphError::SelfLoop` if `from == to`
    fn add_edge(&mut self, from: CityId, to: CityId, weight: Weight) -> Result<()>;

    /// Remove the edge `from -> to`, returning its weight.
    ///
    /// Undirected graphs also remove `to -> from`.
    ///
    /// # Errors
    ///
    /// - `GraphError::VertexNotFound` if either endpoint is absent
    /// - `GraphError::EdgeNotFound` if no such edge exists
    fn remove_edge(&mut self, from: CityId, to: CityId) -> Result<Weight>;

    // ========== Edge Queries ==========

    /// Weight of the edge `from -> to`, or `None` if there is no such edge.
    fn edge_weight(&self, from: CityId, to: CityId) -> Option<Weight>;

    /// Ids reachable from `id` over exactly one edge.
    ///
    /// Order is representation-defined but stable: ascending id for the
    /// matrix, insertion order for the list.
    fn neighbors(&self, id: CityId) -> Vec<CityId>;

    // ========== Housekeeping ==========

    /// Remove all vertices and edges.
    fn clear(&mut self);

    /// Human-readable dump of the backing store.
    fn render(&self) -> String;

    // ========== Provided Queries ==========

    /// Whether the edge `from -> to` exists.
    fn has_edge(&self, from: CityId, to: CityId) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Number of cities.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Whether a city with this id exists.
    fn has_vertex(&self, id: CityId) -> bool {
        self.vertices().contains(id)
    }

    /// Whether any city carries this name. O(V).
    fn has_vertex_named(&self, name: &str) -> bool {
        self.vertices().find_by_name(name).is_some()
    }

    /// Owned copy of the city with this id.
    fn vertex(&self, id: CityId) -> Option<City> {
        self.vertices().get(id).cloned()
    }

    /// Owned copy of the lowest-id city carrying this name. O(V).
    fn vertex_by_name(&self, name: &str) -> Option<City> {
        self.vertices().find_by_name(name).cloned()
    }

    /// All city ids in ascending order.
    fn vertex_ids(&self) -> Vec<CityId> {
        self.vertices().ids().collect()
    }

    /// Every logical edge.
    ///
    /// Directed graphs report each stored edge. Undirected graphs report
    /// each edge once, with `from < to`.
    fn edges(&self) -> Vec<Route> {
        let directed = self.is_directed();
        let mut routes = Vec::new();

        for from in self.vertices().ids() {
            for to in self.neighbors(from) {
                if !directed && to < from {
                    continue;
                }
                if let Some(weight) = self.edge_weight(from, to) {
                    routes.push(Route::new(from, to, weight));
                }
            }
        }

        routes
    }

    /// Number of logical edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    // ========== Provided Algorithms ==========

    /// Depth-first visitation order from `start`. Empty if `start` is absent.
    fn dfs(&self, start: CityId) -> Vec<CityId> {
        algorithms::dfs(self, start)
    }

    /// Breadth-first visitation order from `start`. Empty if `start` is absent.
    fn bfs(&self, start: CityId) -> Vec<CityId> {
        algorithms::bfs(self, start)
    }

    /// Shortest path from `start` to `end`.
    fn dijkstra(&self, start: CityId, end: CityId) -> PathResult {
        algorithms::dijkstra(self, start, end)
    }
}

/// Create a graph with the given representation.
///
/// This factory function returns a trait object that can be used
/// polymorphically regardless of the representation.
pub fn create_graph(representation: Representation, directed: bool) -> Box<dyn Graph> {
    match representation {
        Representation::Matrix => Box::new(AdjacencyMatrix::new(directed)),
        Representation::List => Box::new(AdjacencyList::new(directed)),
    }
}

/// Replace the contents of `target` with every vertex and edge of `source`.
///
/// Vertices are replayed first, then each logical edge, so the target ends
/// up with the same vertex set, edge set and weights. Both graphs should
/// share the same directedness; replaying directed edges into an undirected
/// graph mirrors them.
///
/// # Errors
///
/// Propagates the first error the target reports, for example
/// `GraphError::CapacityExceeded` when copying large ids into a matrix. The
/// target is left partially populated in that case.
pub fn copy_into<S, T>(source: &S, target: &mut T) -> Result<()>
where
    S: Graph + ?Sized,
    T: Graph + ?Sized,
{
    target.clear();

    for city in source.vertices().iter() {
        target.add_vertex(city.clone())?;
    }

    for route in source.edges() {
        target.add_edge(route.from, route.to, route.weight)?;
    }

    tracing::debug!(
        from = %source.representation(),
        to = %target.representation(),
        vertices = target.vertex_count(),
        "Copied graph contents"
    );

    Ok(())
}

/// Validate both endpoints of an edge mutation.
pub(crate) fn check_endpoints(vertices: &VertexSet, from: CityId, to: CityId) -> Result<()> {
    vertices.require(from)?;
    vertices.require(to)?;
    if from == to {
        return Err(GraphError::SelfLoop(from));
    }
    Ok(())
}
