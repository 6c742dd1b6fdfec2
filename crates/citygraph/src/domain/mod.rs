//! Domain types for city graphs.
//!
//! This module contains the value types shared by every graph
//! representation: city identity, validated weights, route records and the
//! result of a shortest-path query.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a city.
///
/// Ids are stable keys, not positions. The dense representation indexes its
/// table by id, so ids are unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub u32);

impl CityId {
    /// Position of this id in an id-indexed table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A labeled location in the network.
///
/// The id is the identity: two cities compare equal when their ids match,
/// whatever their names. Names are mutable and not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    /// Unique identifier
    pub id: CityId,

    /// Display name
    pub name: String,
}

impl City {
    /// Create a new city
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Replace the display name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for City {}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City{{{}, {}}}", self.id, self.name)
    }
}

/// A validated, non-negative edge weight.
///
/// Weights can only be built through [`Weight::new`] (or `TryFrom<i64>`), so
/// every stored weight already satisfies the non-negativity precondition of
/// the shortest-path algorithm. Zero is a legitimate weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Weight(u32);

impl Weight {
    /// Validate a raw weight.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidWeight` if `value` is negative or larger
    /// than `u32::MAX`.
    pub fn new(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| GraphError::InvalidWeight(value))
    }

    /// The weight as an unsigned integer
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Weight {
    type Error = GraphError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Weight> for u32 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logical edge, as exchanged with persistence.
///
/// Undirected graphs report each edge once, with `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Source city
    pub from: CityId,

    /// Target city
    pub to: CityId,

    /// Edge weight (distance)
    pub weight: Weight,
}

impl Route {
    /// Create a new route record
    pub fn new(from: CityId, to: CityId, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// Result of a shortest-path query.
///
/// When `found` is false the path is empty and `total_weight` holds
/// [`PathResult::UNREACHABLE`], which is not a meaningful distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Vertex ids from start to end, inclusive
    pub path: Vec<CityId>,

    /// Sum of edge weights along the path
    pub total_weight: u64,

    /// Whether a path exists
    pub found: bool,
}

impl PathResult {
    /// Sentinel carried by `total_weight` when no path exists.
    pub const UNREACHABLE: u64 = u64::MAX;

    /// A path that was found
    pub fn found(path: Vec<CityId>, total_weight: u64) -> Self {
        Self {
            path,
            total_weight,
            found: true,
        }
    }

    /// No path between the endpoints
    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            total_weight: Self::UNREACHABLE,
            found: false,
        }
    }

    /// The zero-length path from a vertex to itself
    pub fn trivial(id: CityId) -> Self {
        Self::found(vec![id], 0)
    }

    /// The total distance, if a path was found
    pub fn distance(&self) -> Option<u64> {
        self.found.then_some(self.total_weight)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl Default for PathResult {
    fn default() -> Self {
        Self::not_found()
    }
}

/// Backing representation of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// Dense adjacency matrix: O(1) edge lookup, O(maxId²) memory
    #[default]
    Matrix,

    /// Sparse adjacency list: O(degree) edge lookup, O(V+E) memory
    List,
}

impl Representation {
    /// The other representation
    pub fn toggled(self) -> Self {
        match self {
            Representation::Matrix => Representation::List,
            Representation::List => Representation::Matrix,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Matrix => write!(f, "adjacency matrix"),
            Representation::List => write!(f, "adjacency list"),
        }
    }
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "matrix" | "adjacency-matrix" | "dense" => Ok(Representation::Matrix),
            "list" | "adjacency-list" | "sparse" => Ok(Representation::List),
            other => Err(format!(
                "Invalid representation '{other}' (expected 'matrix' or 'list')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_rejects_negative_and_oversized_values() {
        assert_eq!(Weight::new(-1), Err(GraphError::InvalidWeight(-1)));
        assert_eq!(
            Weight::new(i64::from(u32::MAX) + 1),
            Err(GraphError::InvalidWeight(i64::from(u32::MAX) + 1))
        );
        assert_eq!(Weight::new(0).map(Weight::get), Ok(0));
        assert_eq!(Weight::new(1200).map(Weight::get), Ok(1200));
    }

    #[test]
    fn test_weight_deserialization_is_validated() {
        let ok: Weight = serde_json::from_str("150").unwrap();
        assert_eq!(ok.get(), 150);

        let err = serde_json::from_str::<Weight>("-3");
        assert!(err.is_err());
    }

    #[test]
    fn test_city_equality_is_by_id() {
        let a = City::new(CityId(1), "Beijing");
        let b = City::new(CityId(1), "Peking");
        let c = City::new(CityId(2), "Beijing");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "City{1, Beijing}");
    }

    #[test]
    fn test_path_result_constructors() {
        let missing = PathResult::not_found();
        assert!(!missing.found);
        assert!(missing.path.is_empty());
        assert_eq!(missing.distance(), None);
        assert_eq!(missing.total_weight, PathResult::UNREACHABLE);

        let trivial = PathResult::trivial(CityId(7));
        assert_eq!(trivial.path, vec![CityId(7)]);
        assert_eq!(trivial.distance(), Some(0));
        assert_eq!(trivial.hops(), 0);
    }

    #[test]
    fn test_representation_parsing() {
        assert_eq!("matrix".parse(), Ok(Representation::Matrix));
        assert_eq!(" List ".parse(), Ok(Representation::List));
        assert_eq!("sparse".parse(), Ok(Representation::List));
        assert!("tree".parse::<Representation>().is_err());
        assert_eq!(Representation::Matrix.toggled(), Representation::List);
    }

    #[test]
    fn test_representation_serde_names() {
        let json = serde_json::to_string(&Representation::List).unwrap();
        assert_eq!(json, "\"list\"");
    }
}
