//! Error types for graph operations.
//!
//! Every fallible operation on a [`Graph`](crate::graph::Graph) reports one of
//! these conditions as a value. None of them is transient, so callers should
//! surface them rather than retry.

use crate::domain::CityId;
use thiserror::Error;

/// The error type for graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex with this id is already present.
    #[error("City {0} already exists")]
    DuplicateVertex(CityId),

    /// No vertex with this id is present.
    #[error("City not found: {0}")]
    VertexNotFound(CityId),

    /// No vertex carries this name.
    #[error("City not found: '{0}'")]
    VertexNameNotFound(String),

    /// No edge connects the two vertices.
    #[error("No route from {from} to {to}")]
    EdgeNotFound {
        /// Source vertex of the missing edge
        from: CityId,
        /// Target vertex of the missing edge
        to: CityId,
    },

    /// The weight is negative or does not fit the weight type.
    #[error("Invalid route weight {0}: weights must be non-negative 32-bit values")]
    InvalidWeight(i64),

    /// Both endpoints of the edge are the same vertex.
    #[error("Route from city {0} to itself is not allowed")]
    SelfLoop(CityId),

    /// The id is too large for the dense representation.
    #[error("City id {id} exceeds the adjacency matrix limit of {limit}")]
    CapacityExceeded {
        /// Offending vertex id
        id: CityId,
        /// Largest dimension the matrix will grow to
        limit: usize,
    },
}

/// A specialized Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_ids() {
        let err = GraphError::EdgeNotFound {
            from: CityId(3),
            to: CityId(4),
        };
        assert_eq!(err.to_string(), "No route from 3 to 4");

        let err = GraphError::InvalidWeight(-5);
        assert!(err.to_string().contains("-5"));
    }
}
