//! Dense graph representation backed by an adjacency matrix.
//!
//! The table is indexed directly by city id and sized to the largest id seen
//! so far, not to the vertex count. Ids are sparse keys, so a graph holding
//! ids `{1, 500}` allocates a 501×501 table. Growth is bounded by
//! [`MAX_MATRIX_DIMENSION`].
//!
//! Cells are tagged with [`MatrixCell`] so that "no edge", "self" and a
//! zero-weight edge are three distinct states.

use super::{check_endpoints, Graph, VertexSet};
use crate::domain::{City, CityId, Representation, Weight};
use crate::error::{GraphError, Result};
use std::fmt::Write as _;

/// Largest table dimension the matrix will grow to.
///
/// Ids at or above this value are rejected with
/// [`GraphError::CapacityExceeded`]; use the list representation for them.
pub const MAX_MATRIX_DIMENSION: usize = 4096;

/// Width of one rendered column.
const CELL_WIDTH: usize = 6;

/// Content of one adjacency matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixCell {
    /// No edge between the pair
    #[default]
    Empty,

    /// The self-distance cell on the diagonal (never an edge)
    Diagonal,

    /// An edge with its weight
    Edge(Weight),
}

impl MatrixCell {
    /// The edge weight, if this cell holds an edge
    pub fn weight(self) -> Option<Weight> {
        match self {
            MatrixCell::Edge(weight) => Some(weight),
            MatrixCell::Empty | MatrixCell::Diagonal => None,
        }
    }
}

/// Adjacency matrix graph.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    /// Cities indexed by id
    vertices: VertexSet,

    /// Square table, `cells[from][to]`.
    ///
    /// Invariant: every `Edge` cell has both endpoints in `vertices`.
    cells: Vec<Vec<MatrixCell>>,

    directed: bool,
}

impl AdjacencyMatrix {
    /// Create an empty matrix graph
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: VertexSet::new(),
            cells: Vec::new(),
            directed,
        }
    }

    /// Current table dimension (largest id seen + 1)
    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    /// Raw cell content, `Empty` when outside the table
    pub fn cell(&self, from: CityId, to: CityId) -> MatrixCell {
        self.cells
            .get(from.index())
            .and_then(|row| row.get(to.index()))
            .copied()
            .unwrap_or_default()
    }

    /// Grow the table so `id` is addressable, keeping every existing cell.
    fn ensure_dimension(&mut self, id: CityId) -> Result<()> {
        let needed = id.index() + 1;
        if needed > MAX_MATRIX_DIMENSION {
            return Err(GraphError::CapacityExceeded {
                id,
                limit: MAX_MATRIX_DIMENSION,
            });
        }

        let old = self.cells.len();
        if needed <= old {
            return Ok(());
        }

        for row in &mut self.cells {
            row.resize(needed, MatrixCell::Empty);
        }
        for i in old..needed {
            let mut row = vec![MatrixCell::Empty; needed];
            row[i] = MatrixCell::Diagonal;
            self.cells.push(row);
        }

        tracing::trace!(old, new = needed, "Grew adjacency matrix");
        Ok(())
    }

    /// Write a cell, and its mirror for undirected graphs.
    ///
    /// Both endpoints must already be addressable.
    fn set_pair(&mut self, from: CityId, to: CityId, cell: MatrixCell) {
        self.cells[from.index()][to.index()] = cell;
        if !self.directed {
            self.cells[to.index()][from.index()] = cell;
        }
    }
}

impl Graph for AdjacencyMatrix {
    fn representation(&self) -> Representation {
        Representation::Matrix
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    fn add_vertex(&mut self, city: City) -> Result<()> {
        if self.vertices.contains(city.id) {
            return Err(GraphError::DuplicateVertex(city.id));
        }
        self.ensure_dimension(city.id)?;
        tracing::debug!(id = %city.id, name = %city.name, "Added city to matrix");
        self.vertices.insert(city)
    }

    fn remove_vertex(&mut self, id: CityId) -> Result<City> {
        let city = self.vertices.remove(id)?;
        let index = id.index();

        // Clear row and column so no stale edge stays reachable by id.
        for (j, cell) in self.cells[index].iter_mut().enumerate() {
            if j != index {
                *cell = MatrixCell::Empty;
            }
        }
        for (i, row) in self.cells.iter_mut().enumerate() {
            if i != index {
                row[index] = MatrixCell::Empty;
            }
        }

        tracing::debug!(%id, "Removed city from matrix");
        Ok(city)
    }

    fn rename_vertex(&mut self, id: CityId, name: String) -> Result<()> {
        self.vertices.rename(id, name)
    }

    fn add_edge(&mut self, from: CityId, to: CityId, weight: Weight) -> Result<()> {
        check_endpoints(&self.vertices, from, to)?;
        self.set_pair(from, to, MatrixCell::Edge(weight));
        tracing::debug!(%from, %to, %weight, "Set matrix edge");
        Ok(())
    }

    fn remove_edge(&mut self, from: CityId, to: CityId) -> Result<Weight> {
        self.vertices.require(from)?;
        self.vertices.require(to)?;

        let weight = self
            .cell(from, to)
            .weight()
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        self.set_pair(from, to, MatrixCell::Empty);

        tracing::debug!(%from, %to, "Removed matrix edge");
        Ok(weight)
    }

    fn edge_weight(&self, from: CityId, to: CityId) -> Option<Weight> {
        self.cell(from, to).weight()
    }

    fn neighbors(&self, id: CityId) -> Vec<CityId> {
        if !self.vertices.contains(id) {
            return Vec::new();
        }

        self.cells[id.index()]
            .iter()
            .enumerate()
            .filter(|(_, cell)| matches!(cell, MatrixCell::Edge(_)))
            .filter_map(|(j, _)| u32::try_from(j).ok().map(CityId))
            .collect()
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.cells.clear();
    }

    fn render(&self) -> String {
        let ids: Vec<CityId> = self.vertices.ids().collect();
        let mut out = String::from("=== Adjacency Matrix ===\n");

        let _ = write!(out, "{:>CELL_WIDTH$}", "");
        for id in &ids {
            let _ = write!(out, "{:>CELL_WIDTH$}", id.0);
        }
        out.push('\n');

        for &from in &ids {
            let _ = write!(out, "{:>CELL_WIDTH$}", from.0);
            for &to in &ids {
                let text = match self.cell(from, to) {
                    MatrixCell::Empty => "INF".to_string(),
                    MatrixCell::Diagonal => "0".to_string(),
                    MatrixCell::Edge(weight) => weight.to_string(),
                };
                let _ = write!(out, "{text:>CELL_WIDTH$}");
            }
            out.push('\n');
        }

        out
    }
}
