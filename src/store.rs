use crate::error::CatalogError;
use crate::model::Entity;
use std::collections::BTreeMap;

/// In-memory table for one entity kind.
///
/// Entities are handed out as clones; the only way to change a stored value
/// is [`Store::replace`].
#[derive(Debug)]
pub struct Store<T> {
    rows: BTreeMap<u64, T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Store {
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Entity> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored entities in ascending id order.
    pub fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// One past the largest stored id, or 1 for an empty table.
    ///
    /// Derived from the current contents, so asking twice without an insert
    /// in between yields the same id.
    pub fn next_id(&self) -> u64 {
        self.rows.keys().next_back().map_or(1, |max| max + 1)
    }

    pub fn insert(&mut self, entity: T) -> Result<T, CatalogError> {
        let id = entity.id();
        if self.contains(id) {
            return Err(CatalogError::IdTaken { kind: T::KIND, id });
        }
        self.rows.insert(id, entity.clone());
        Ok(entity)
    }

    pub fn get(&self, id: u64) -> Result<T, CatalogError> {
        self.rows
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound { kind: T::KIND, id })
    }

    pub fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn replace(&mut self, id: u64, entity: T) -> Result<T, CatalogError> {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(CatalogError::NotFound { kind: T::KIND, id }),
        }
    }
}
