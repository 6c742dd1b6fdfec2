//! Sparse graph representation backed by adjacency lists.
//!
//! Each city maps to an ordered list of `(neighbor, weight)` pairs. A pair
//! appears at most once per ordered edge: re-adding an edge updates the
//! weight in place instead of appending a parallel entry.

use super::{check_endpoints, Graph, VertexSet};
use crate::domain::{City, CityId, Representation, Weight};
use crate::error::{GraphError, Result};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Outgoing edges of one city, in insertion order.
type EdgeList = Vec<(CityId, Weight)>;

/// Adjacency list graph.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    /// Cities indexed by id
    vertices: VertexSet,

    /// Outgoing edges per city.
    ///
    /// Invariant: has exactly one entry per city in `vertices`, and every
    /// neighbor id is also in `vertices`.
    adjacency: BTreeMap<CityId, EdgeList>,

    directed: bool,
}

impl AdjacencyList {
    /// Create an empty list graph
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: VertexSet::new(),
            adjacency: BTreeMap::new(),
            directed,
        }
    }

    /// Outgoing `(neighbor, weight)` pairs of a city
    pub fn entries(&self, id: CityId) -> &[(CityId, Weight)] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Insert or overwrite `from -> to` in one list.
    fn upsert(&mut self, from: CityId, to: CityId, weight: Weight) {
        let list = self.adjacency.entry(from).or_default();
        match list.iter_mut().find(|(neighbor, _)| *neighbor == to) {
            Some(entry) => entry.1 = weight,
            None => list.push((to, weight)),
        }
    }

    /// Remove `from -> to` from one list, returning its weight.
    fn retract(&mut self, from: CityId, to: CityId) -> Option<Weight> {
        let list = self.adjacency.get_mut(&from)?;
        let position = list.iter().position(|(neighbor, _)| *neighbor == to)?;
        Some(list.remove(position).1)
    }
}

impl Graph for AdjacencyList {
    fn representation(&self) -> Representation {
        Representation::List
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    fn add_vertex(&mut self, city: City) -> Result<()> {
        let id = city.id;
        self.vertices.insert(city)?;
        self.adjacency.entry(id).or_default();
        tracing::debug!(%id, "Added city to list");
        Ok(())
    }

    fn remove_vertex(&mut self, id: CityId) -> Result<City> {
        let city = self.vertices.remove(id)?;

        self.adjacency.remove(&id);
        for list in self.adjacency.values_mut() {
            list.retain(|(neighbor, _)| *neighbor != id);
        }

        tracing::debug!(%id, "Removed city from list");
        Ok(city)
    }

    fn rename_vertex(&mut self, id: CityId, name: String) -> Result<()> {
        self.vertices.rename(id, name)
    }

    fn add_edge(&mut self, from: CityId, to: CityId, weight: Weight) -> Result<()> {
        check_endpoints(&self.vertices, from, to)?;

        self.upsert(from, to, weight);
        if !self.directed {
            self.upsert(to, from, weight);
        }

        tracing::debug!(%from, %to, %weight, "Set list edge");
        Ok(())
    }

    fn remove_edge(&mut self, from: CityId, to: CityId) -> Result<Weight> {
        self.vertices.require(from)?;
        self.vertices.require(to)?;

        let weight = self
            .retract(from, to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        if !self.directed {
            self.retract(to, from);
        }

        tracing::debug!(%from, %to, "Removed list edge");
        Ok(weight)
    }

    fn edge_weight(&self, from: CityId, to: CityId) -> Option<Weight> {
        self.entries(from)
            .iter()
            .find(|(neighbor, _)| *neighbor == to)
            .map(|&(_, weight)| weight)
    }

    fn neighbors(&self, id: CityId) -> Vec<CityId> {
        self.entries(id)
            .iter()
            .map(|&(neighbor, _)| neighbor)
            .collect()
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }

    fn render(&self) -> String {
        let mut out = String::from("=== Adjacency List ===\n");

        for (&id, list) in &self.adjacency {
            let _ = write!(out, "{id} ({}) ->", self.vertices.name_of(id));
            for (neighbor, weight) in list {
                let _ = write!(out, " [{neighbor} ({weight})]");
            }
            out.push('\n');
        }

        out
    }
}
