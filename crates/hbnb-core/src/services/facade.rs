//! Facade over the entity store
//!
//! The only place where more than one entity is touched in a single
//! operation. Every reference check runs before any mutation, and each
//! operation holds the store lock for its whole duration, so no reader ever
//! sees a half-applied change.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hbnb_types::{
    Amenity, AmenityPatch, AmenitySummary, NewAmenity, NewPlace, NewReview, NewUser,
    OwnerSummary, Place, PlacePatch, PlaceView, Review, ReviewPatch, User, UserPatch,
};
use tracing::{debug, info, warn};

use crate::error::{ReferenceError, Result};
use crate::storage::MemoryStore;

pub struct HbnbFacade {
    store: RwLock<MemoryStore>,
}

impl HbnbFacade {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Wrap an already populated store
    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    // Every operation validates before its first write; poisoned data is consistent.
    fn read(&self) -> RwLockReadGuard<'_, MemoryStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn create_user(&self, draft: NewUser) -> Result<User> {
        let user = User::new(draft)?;
        self.write().add(user.clone())?;
        info!("Created user {}", user.meta.id);
        Ok(user)
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        debug!("Looking up user {}", id);
        self.read().get::<User>(id).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.read().get_all::<User>()
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>> {
        let updated = self.write().update::<User>(id, patch)?;
        if updated.is_some() {
            info!("Updated user {}", id);
        }
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Amenities
    // ------------------------------------------------------------------

    pub fn create_amenity(&self, draft: NewAmenity) -> Result<Amenity> {
        let amenity = Amenity::new(draft)?;
        self.write().add(amenity.clone())?;
        info!("Created amenity {} ({})", amenity.meta.id, amenity.name);
        Ok(amenity)
    }

    pub fn get_amenity(&self, id: &str) -> Option<Amenity> {
        debug!("Looking up amenity {}", id);
        self.read().get::<Amenity>(id).cloned()
    }

    pub fn list_amenities(&self) -> Vec<Amenity> {
        self.read().get_all::<Amenity>()
    }

    pub fn update_amenity(&self, id: &str, patch: AmenityPatch) -> Result<Option<Amenity>> {
        let updated = self.write().update::<Amenity>(id, patch)?;
        if updated.is_some() {
            info!("Updated amenity {}", id);
        }
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Places
    // ------------------------------------------------------------------

    pub fn create_place(&self, draft: NewPlace) -> Result<PlaceView> {
        let mut store = self.write();

        ensure_owner(&store, &draft.owner_id)?;
        ensure_amenities(&store, &draft.amenity_ids)?;

        let place = Place::new(draft)?;
        store.add(place.clone())?;

        if let Some(owner) = store.get_mut::<User>(&place.owner_id) {
            push_unique(&mut owner.place_ids, &place.meta.id);
        }

        info!("Created place {} for owner {}", place.meta.id, place.owner_id);
        Ok(compose_place(&store, place))
    }

    pub fn get_place(&self, id: &str) -> Option<PlaceView> {
        debug!("Looking up place {}", id);
        let store = self.read();
        let place = store.get::<Place>(id)?.clone();
        Some(compose_place(&store, place))
    }

    pub fn list_places(&self) -> Vec<PlaceView> {
        let store = self.read();
        store
            .iter::<Place>()
            .map(|place| compose_place(&store, place.clone()))
            .collect()
    }

    pub fn place_exists(&self, id: &str) -> bool {
        self.read().exists::<Place>(id)
    }

    /// Update a place, re-checking any owner or amenity ids it names.
    ///
    /// Replacing the owner moves the place between the two owners'
    /// `place_ids`.
    pub fn update_place(&self, id: &str, patch: PlacePatch) -> Result<Option<PlaceView>> {
        let mut store = self.write();

        if let Some(owner_id) = &patch.owner_id {
            ensure_owner(&store, owner_id)?;
        }
        if let Some(amenity_ids) = &patch.amenity_ids {
            ensure_amenities(&store, amenity_ids)?;
        }

        let Some(previous_owner) = store.get::<Place>(id).map(|p| p.owner_id.clone()) else {
            return Ok(None);
        };
        let Some(place) = store.update::<Place>(id, patch)? else {
            return Ok(None);
        };

        if place.owner_id != previous_owner {
            if let Some(old) = store.get_mut::<User>(&previous_owner) {
                old.place_ids.retain(|pid| pid != id);
            }
            if let Some(current) = store.get_mut::<User>(&place.owner_id) {
                push_unique(&mut current.place_ids, id);
            }
            info!(
                "Moved place {} from owner {} to {}",
                id, previous_owner, place.owner_id
            );
        }

        info!("Updated place {}", id);
        Ok(Some(compose_place(&store, place)))
    }

    // ------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------

    pub fn create_review(&self, draft: NewReview) -> Result<Review> {
        let mut store = self.write();

        if !store.exists::<User>(&draft.user_id) {
            warn!("Rejected review: user {} not found", draft.user_id);
            return Err(ReferenceError::User(draft.user_id).into());
        }
        if !store.exists::<Place>(&draft.place_id) {
            warn!("Rejected review: place {} not found", draft.place_id);
            return Err(ReferenceError::Place(draft.place_id).into());
        }

        let review = Review::new(draft)?;
        store.add(review.clone())?;

        if let Some(place) = store.get_mut::<Place>(&review.place_id) {
            push_unique(&mut place.review_ids, &review.meta.id);
        }
        if let Some(user) = store.get_mut::<User>(&review.user_id) {
            push_unique(&mut user.review_ids, &review.meta.id);
        }

        info!(
            "Created review {} by user {} for place {}",
            review.meta.id, review.user_id, review.place_id
        );
        Ok(review)
    }

    pub fn get_review(&self, id: &str) -> Option<Review> {
        debug!("Looking up review {}", id);
        self.read().get::<Review>(id).cloned()
    }

    pub fn update_review(&self, id: &str, patch: ReviewPatch) -> Result<Option<Review>> {
        let updated = self.write().update::<Review>(id, patch)?;
        if updated.is_some() {
            info!("Updated review {}", id);
        }
        Ok(updated)
    }

    /// Remove a review and unlink it from its place and author.
    ///
    /// Returns `false` when the review does not exist.
    pub fn delete_review(&self, id: &str) -> bool {
        let mut store = self.write();

        let Some((place_id, user_id)) = store
            .get::<Review>(id)
            .map(|r| (r.place_id.clone(), r.user_id.clone()))
        else {
            debug!("Review {} not found for deletion", id);
            return false;
        };

        if let Some(place) = store.get_mut::<Place>(&place_id) {
            place.review_ids.retain(|rid| rid != id);
        }
        if let Some(user) = store.get_mut::<User>(&user_id) {
            user.review_ids.retain(|rid| rid != id);
        }

        let deleted = store.delete::<Review>(id);
        info!("Deleted review {}", id);
        deleted
    }

    /// All reviews naming `place_id`, found by scanning the review table
    /// rather than the place's `review_ids`.
    pub fn list_reviews_for_place(&self, place_id: &str) -> Vec<Review> {
        self.read()
            .iter::<Review>()
            .filter(|review| review.place_id == place_id)
            .cloned()
            .collect()
    }
}

impl Default for HbnbFacade {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_owner(store: &MemoryStore, owner_id: &str) -> Result<()> {
    if !store.exists::<User>(owner_id) {
        warn!("Owner {} not found", owner_id);
        return Err(ReferenceError::Owner(owner_id.to_string()).into());
    }
    Ok(())
}

fn ensure_amenities(store: &MemoryStore, amenity_ids: &[String]) -> Result<()> {
    if let Some(missing) = amenity_ids
        .iter()
        .find(|id| !store.exists::<Amenity>(id))
    {
        warn!("Amenity {} not found", missing);
        return Err(ReferenceError::Amenity(missing.clone()).into());
    }
    Ok(())
}

fn push_unique(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}

fn compose_place(store: &MemoryStore, place: Place) -> PlaceView {
    let owner = store.get::<User>(&place.owner_id).map(OwnerSummary::from);
    let amenities = place
        .amenity_ids
        .iter()
        .filter_map(|id| store.get::<Amenity>(id))
        .map(AmenitySummary::from)
        .collect();
    let reviews = place
        .review_ids
        .iter()
        .filter_map(|id| store.get::<Review>(id))
        .cloned()
        .collect();

    PlaceView {
        place,
        owner,
        amenities,
        reviews,
    }
}
