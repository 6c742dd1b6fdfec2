//! Id-keyed vertex storage shared by both representations.

use crate::domain::{City, CityId};
use crate::error::{GraphError, Result};
use std::collections::BTreeMap;

/// The set of cities in a graph, keyed by id.
///
/// Lookups hand out borrows tied to `&self`, and the graph-level API clones
/// them, so callers never hold a reference into storage that a later
/// insertion could move.
#[derive(Debug, Clone, Default)]
pub struct VertexSet {
    cities: BTreeMap<CityId, City>,
}

impl VertexSet {
    /// Create an empty vertex set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cities
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the set holds no cities
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Whether a city with this id is present
    pub fn contains(&self, id: CityId) -> bool {
        self.cities.contains_key(&id)
    }

    /// The city with this id
    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    /// Linear scan for the lowest-id city with this name
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        self.cities.values().find(|city| city.name == name)
    }

    /// Display name for an id, empty if absent
    pub fn name_of(&self, id: CityId) -> &str {
        self.cities.get(&id).map_or("", |city| city.name.as_str())
    }

    /// Ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.keys().copied()
    }

    /// Cities in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.values()
    }

    pub(crate) fn require(&self, id: CityId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id))
        }
    }

    pub(crate) fn insert(&mut self, city: City) -> Result<()> {
        if self.contains(city.id) {
            return Err(GraphError::DuplicateVertex(city.id));
        }
        self.cities.insert(city.id, city);
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: CityId) -> Result<City> {
        self.cities
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub(crate) fn rename(&mut self, id: CityId, name: String) -> Result<()> {
        let city = self
            .cities
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        city.rename(name);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.cities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_ids() {
        let mut set = VertexSet::new();
        set.insert(City::new(CityId(1), "A")).unwrap();

        let err = set.insert(City::new(CityId(1), "B")).unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex(CityId(1)));
        assert_eq!(set.name_of(CityId(1)), "A");
    }

    #[test]
    fn test_name_lookup_prefers_lowest_id() {
        let mut set = VertexSet::new();
        set.insert(City::new(CityId(9), "Twin")).unwrap();
        set.insert(City::new(CityId(3), "Twin")).unwrap();

        assert_eq!(set.find_by_name("Twin").map(|c| c.id), Some(CityId(3)));
        assert!(set.find_by_name("Nowhere").is_none());
    }

    #[test]
    fn test_rename_and_remove() {
        let mut set = VertexSet::new();
        set.insert(City::new(CityId(2), "Old")).unwrap();

        set.rename(CityId(2), "New".to_string()).unwrap();
        assert_eq!(set.name_of(CityId(2)), "New");

        assert_eq!(
            set.rename(CityId(5), "x".to_string()),
            Err(GraphError::VertexNotFound(CityId(5)))
        );

        let removed = set.remove(CityId(2)).unwrap();
        assert_eq!(removed.name, "New");
        assert!(set.is_empty());
        assert_eq!(set.name_of(CityId(2)), "");
    }
}
