use chrono::Utc;
use parking_lot::RwLock;

use crate::entity::{Entity, Timestamps};
use crate::error::StoreError;
use crate::ids::IdGenerator;
use crate::page::{CursorPage, ListRequest, Page};

type FilterFn<T, Q> = dyn Fn(Vec<T>, &Q) -> Vec<T> + Send + Sync;

/// CRUD, filtering and pagination over an in-process collection.
///
/// The store never interprets filter criteria itself: the filter function
/// receives a snapshot of every entity and returns the matches in the order
/// they should be paginated. Reads work on that snapshot, so the lock is never
/// held while the filter runs.
pub struct InMemoryEntityStore<T: Entity, Q> {
    entities: RwLock<Vec<T>>,
    filter: Box<FilterFn<T, Q>>,
    ids: Box<dyn IdGenerator<T::Id>>,
}

impl<T: Entity, Q> InMemoryEntityStore<T, Q> {
    pub fn new<F, G>(filter: F, ids: G, initial: Vec<T>) -> Self
    where
        F: Fn(Vec<T>, &Q) -> Vec<T> + Send + Sync + 'static,
        G: IdGenerator<T::Id> + 'static,
    {
        Self {
            entities: RwLock::new(initial),
            filter: Box::new(filter),
            ids: Box::new(ids),
        }
    }

    /// Filters, then returns the requested window with total counts.
    ///
    /// A page past the end yields empty `data`; the totals still describe the
    /// whole filtered set.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidLimit`] when the page size is 0.
    pub fn get_entities(&self, request: &ListRequest<Q>) -> Result<Page<T>, StoreError> {
        let page = request.page.validated()?;
        let matching = self.filtered(&request.filter);

        let total_count = matching.len();
        let total_pages = total_count.div_ceil(page.size());
        let data = matching
            .into_iter()
            .skip(page.offset())
            .take(page.size())
            .collect();

        Ok(Page {
            data,
            total_count,
            page: page.page,
            limit: page.limit,
            total_pages,
        })
    }

    /// Filters, then returns the requested window and whether more follow.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidLimit`] when the page size is 0.
    pub fn get_entities_cursor(
        &self,
        request: &ListRequest<Q>,
    ) -> Result<CursorPage<T>, StoreError> {
        let page = request.page.validated()?;
        let size = page.size();

        let mut data: Vec<T> = self
            .filtered(&request.filter)
            .into_iter()
            .skip(page.offset())
            .take(size.saturating_add(1))
            .collect();
        let has_next = data.len() > size;
        data.truncate(size);

        Ok(CursorPage {
            data,
            page: page.page,
            limit: page.limit,
            has_next,
        })
    }

    pub fn get_entity(&self, id: &T::Id) -> Option<T> {
        self.entities.read().iter().find(|e| e.id() == id).cloned()
    }

    /// Stores a new entity with a generated id and both timestamps set to now.
    ///
    /// # Errors
    /// Returns [`StoreError::IdCollision`] when the generator keeps returning
    /// ids that are already taken.
    pub fn create_entity(&self, draft: T::Draft) -> Result<T, StoreError> {
        let mut entities = self.entities.write();

        let mut id = self.ids.next_id();
        let mut attempts = 0;
        while entities.iter().any(|e| e.id() == &id) {
            attempts += 1;
            if attempts > entities.len() {
                tracing::warn!(%id, "Id generator exhausted its retries");
                return Err(StoreError::id_collision(id.to_string()));
            }
            tracing::debug!(%id, "Generated id already in use, retrying");
            id = self.ids.next_id();
        }

        let entity = T::from_draft(id, Timestamps::at(Utc::now()), draft);
        entities.push(entity.clone());
        Ok(entity)
    }

    /// Merges `patch` into the entity with `id`, refreshing `updated_at`.
    ///
    /// The id and `created_at` are preserved. Returns `None` if no entity has `id`.
    pub fn update_entity(&self, id: &T::Id, patch: T::Patch) -> Option<T> {
        let mut entities = self.entities.write();
        let entity = entities.iter_mut().find(|e| e.id() == id)?;

        let timestamps = *entity.timestamps();
        entity.apply_patch(patch);
        let mut refreshed = timestamps;
        refreshed.touch(Utc::now());
        *entity.timestamps_mut() = refreshed;

        Some(entity.clone())
    }

    /// Removes the entity with `id`; `false` if there was none.
    pub fn delete_entity(&self, id: &T::Id) -> bool {
        let mut entities = self.entities.write();
        let before = entities.len();
        entities.retain(|e| e.id() != id);
        entities.len() != before
    }

    /// Atomically replaces the whole collection.
    pub fn seed(&self, entities: Vec<T>) {
        let count = entities.len();
        *self.entities.write() = entities;
        tracing::debug!(count, "Entity store seeded");
    }

    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }

    fn filtered(&self, criteria: &Q) -> Vec<T> {
        let snapshot = self.entities.read().clone();
        (self.filter)(snapshot, criteria)
    }
}
