//! Citygraph - weighted city graphs with interchangeable storage.
//!
//! This crate provides a single [`Graph`](graph::Graph) contract with two
//! backing representations, a dense adjacency matrix and a sparse adjacency
//! list, plus traversal and shortest-path algorithms that behave the same
//! regardless of which representation backs them.
//!
//! # Example
//!
//! ```
//! use citygraph::domain::{City, CityId, Representation, Weight};
//! use citygraph::graph::create_graph;
//!
//! # fn main() -> citygraph::Result<()> {
//! let mut graph = create_graph(Representation::List, false);
//! graph.add_vertex(City::new(CityId(1), "A"))?;
//! graph.add_vertex(City::new(CityId(2), "B"))?;
//! graph.add_edge(CityId(1), CityId(2), Weight::new(10)?)?;
//!
//! let result = graph.dijkstra(CityId(1), CityId(2));
//! assert!(result.found);
//! assert_eq!(result.total_weight, 10);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
