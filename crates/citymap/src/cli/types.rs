//! CLI value types and domain type conversions.

use clap::ValueEnum;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::network::MapNetwork;
use citygraph::domain::{City, CityId, Representation};
use citygraph::GraphError;

// ============================================================================
// Value Enums
// ============================================================================

/// Graph representation for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationArg {
    /// Adjacency matrix, best for small dense networks
    #[value(alias = "dense")]
    Matrix,
    /// Adjacency list, best for large sparse networks
    #[value(alias = "sparse")]
    List,
}

impl fmt::Display for RepresentationArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix => write!(f, "matrix"),
            Self::List => write!(f, "list"),
        }
    }
}

impl From<RepresentationArg> for Representation {
    fn from(arg: RepresentationArg) -> Self {
        match arg {
            RepresentationArg::Matrix => Representation::Matrix,
            RepresentationArg::List => Representation::List,
        }
    }
}

// ============================================================================
// City References
// ============================================================================

/// A city given on the command line, either by id or by name.
///
/// Anything that parses as an unsigned integer is an id; everything else is
/// a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityRef {
    /// Numeric city id
    Id(CityId),
    /// City name, matched exactly
    Name(String),
}

impl CityRef {
    /// Look the city up in a network
    pub fn resolve(&self, network: &MapNetwork) -> Result<City> {
        let found = match self {
            CityRef::Id(id) => network
                .find_city(*id)
                .ok_or(GraphError::VertexNotFound(*id)),
            CityRef::Name(name) => network
                .find_city_named(name)
                .ok_or_else(|| GraphError::VertexNameNotFound(name.clone())),
        };
        Ok(found?)
    }
}

impl FromStr for CityRef {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed.parse::<u32>().map_or_else(
            |_| CityRef::Name(trimmed.to_string()),
            |id| CityRef::Id(CityId(id)),
        ))
    }
}

impl fmt::Display for CityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityRef::Id(id) => write!(f, "{id}"),
            CityRef::Name(name) => write!(f, "{name}"),
        }
    }
}
