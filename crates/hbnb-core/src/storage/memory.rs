//! In-memory entity store, one insertion-ordered table per entity kind

use std::collections::HashMap;

use hbnb_types::{Amenity, Entity, Place, Review, User};

use crate::error::{HbnbError, Result};

/// Rows of a single entity kind, keyed by id, remembering insertion order
pub struct Table<T> {
    rows: HashMap<String, T>,
    order: Vec<String>,
}

impl<T: Entity> Table<T> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Iterate rows in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }
}

/// Maps an entity type to its table inside a [`MemoryStore`].
pub trait Stored: Entity {
    fn table(store: &MemoryStore) -> &Table<Self>;
    fn table_mut(store: &mut MemoryStore) -> &mut Table<Self>;
}

macro_rules! impl_stored {
    ($entity:ty, $field:ident) => {
        impl Stored for $entity {
            fn table(store: &MemoryStore) -> &Table<Self> {
                &store.$field
            }

            fn table_mut(store: &mut MemoryStore) -> &mut Table<Self> {
                &mut store.$field
            }
        }
    };
}

impl_stored!(User, users);
impl_stored!(Amenity, amenities);
impl_stored!(Place, places);
impl_stored!(Review, reviews);

/// Type-partitioned keyed storage.
///
/// Knows nothing about relations between kinds; that is the facade's job.
/// Not synchronized on its own.
pub struct MemoryStore {
    users: Table<User>,
    amenities: Table<Amenity>,
    places: Table<Place>,
    reviews: Table<Review>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            amenities: Table::new(),
            places: Table::new(),
            reviews: Table::new(),
        }
    }

    /// Insert a new entity. Fails if its id is already present.
    pub fn add<T: Stored>(&mut self, entity: T) -> Result<()> {
        let table = T::table_mut(self);
        let id = entity.id().to_string();
        if table.rows.contains_key(&id) {
            return Err(HbnbError::DuplicateId { kind: T::KIND, id });
        }
        table.order.push(id.clone());
        table.rows.insert(id, entity);
        Ok(())
    }

    /// Look up an entity by id
    pub fn get<T: Stored>(&self, id: &str) -> Option<&T> {
        T::table(self).rows.get(id)
    }

    pub(crate) fn get_mut<T: Stored>(&mut self, id: &str) -> Option<&mut T> {
        T::table_mut(self).rows.get_mut(id)
    }

    /// Snapshot of every entity of a kind, in insertion order
    pub fn get_all<T: Stored>(&self) -> Vec<T> {
        self.iter::<T>().cloned().collect()
    }

    pub fn iter<T: Stored>(&self) -> impl Iterator<Item = &T> + '_ {
        T::table(self).iter()
    }

    /// Apply a patch through the entity's own update contract.
    ///
    /// `Ok(None)` when the id is absent.
    pub fn update<T: Stored>(&mut self, id: &str, patch: T::Patch) -> Result<Option<T>> {
        let Some(entity) = self.get_mut::<T>(id) else {
            return Ok(None);
        };
        entity.apply(patch)?;
        Ok(Some(entity.clone()))
    }

    /// Remove an entity; `false` if it was not there
    pub fn delete<T: Stored>(&mut self, id: &str) -> bool {
        let table = T::table_mut(self);
        if table.rows.remove(id).is_none() {
            return false;
        }
        table.order.retain(|existing| existing != id);
        true
    }

    pub fn exists<T: Stored>(&self, id: &str) -> bool {
        T::table(self).rows.contains_key(id)
    }

    pub fn count<T: Stored>(&self) -> usize {
        T::table(self).rows.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_types::{AmenityPatch, NewAmenity, ValidationError};

    fn amenity(name: &str) -> Amenity {
        Amenity::new(NewAmenity {
            name: name.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_basic_operations() {
        let mut store = MemoryStore::new();
        let wifi = amenity("WiFi");
        let id = wifi.meta.id.clone();

        store.add(wifi).unwrap();
        assert!(store.exists::<Amenity>(&id));
        assert_eq!(store.get::<Amenity>(&id).unwrap().name, "WiFi");

        // Kinds are partitioned
        assert!(!store.exists::<User>(&id));
        assert!(store.get::<Place>(&id).is_none());

        assert!(store.delete::<Amenity>(&id));
        assert!(!store.delete::<Amenity>(&id));
        assert!(store.get::<Amenity>(&id).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = MemoryStore::new();
        let wifi = amenity("WiFi");
        store.add(wifi.clone()).unwrap();

        let mut clash = amenity("Pool");
        clash.meta.id = wifi.meta.id.clone();
        let err = store.add(clash).unwrap_err();
        assert!(matches!(err, HbnbError::DuplicateId { .. }));
        assert_eq!(store.get::<Amenity>(&wifi.meta.id).unwrap().name, "WiFi");
        assert_eq!(store.count::<Amenity>(), 1);
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let mut store = MemoryStore::new();
        let names = ["WiFi", "Pool", "Sauna", "Parking"];
        for name in names {
            store.add(amenity(name)).unwrap();
        }
        let second = store.get_all::<Amenity>()[1].meta.id.clone();
        store.delete::<Amenity>(&second);

        let listed: Vec<String> = store
            .get_all::<Amenity>()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(listed, vec!["WiFi", "Sauna", "Parking"]);
        assert_eq!(store.count::<Amenity>(), 3);
        assert_eq!(store.count::<Place>(), 0);
    }

    #[test]
    fn test_snapshot_does_not_alias_store() {
        let mut store = MemoryStore::new();
        store.add(amenity("WiFi")).unwrap();

        let mut snapshot = store.get_all::<Amenity>();
        snapshot[0].name = "Hacked".to_string();
        snapshot.clear();

        assert_eq!(store.get_all::<Amenity>()[0].name, "WiFi");
    }

    #[test]
    fn test_update() {
        let mut store = MemoryStore::new();
        let wifi = amenity("WiFi");
        let id = wifi.meta.id.clone();
        store.add(wifi).unwrap();

        let updated = store
            .update::<Amenity>(
                &id,
                AmenityPatch {
                    name: Some("Fast WiFi".to_string()),
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Fast WiFi");

        let missing = store
            .update::<Amenity>("nope", AmenityPatch::default())
            .unwrap();
        assert!(missing.is_none());

        let err = store
            .update::<Amenity>(
                &id,
                AmenityPatch {
                    name: Some(String::new()),
                },
            )
            .unwrap_err();
        assert_eq!(err, HbnbError::Validation(ValidationError::Required("name")));
        assert_eq!(store.get::<Amenity>(&id).unwrap().name, "Fast WiFi");
    }
}
