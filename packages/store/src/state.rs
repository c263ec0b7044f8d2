//! # Per-entity client state machine
//!
//! [`EntityState`] is the in-memory cache one entity type keeps on the
//! client: the last fetched page, the selected record, and the request
//! lifecycle flags the views render from. It is updated exclusively through
//! [`reduce`], a pure function over [`EntityEvent`]s — the request layer
//! turns gateway outcomes into events, the views only ever read the state.
//!
//! Transitions:
//!
//! | Event | Effect |
//! |-------|--------|
//! | `ListPending` / `GetPending` | `loading = true`, clears `error_message` and `update_success` |
//! | `MutationPending` | `updating = true`, clears `error_message` and `update_success` |
//! | `ListFulfilled` | replaces `entities` and `total_items`, `loading = false` |
//! | `GetFulfilled` | replaces `entity`, `loading = false` |
//! | `MutationFulfilled` | `entity` set to the returned record, `updating = false`, `update_success = true` |
//! | `DeleteFulfilled` | clears `entity`, `updating = false`, `update_success = true` |
//! | `Rejected` | stores the failure, clears both busy flags; `entities` and `entity` keep their previous values |
//! | `Reset` | clears `entity` and `update_success` (used when opening a create form) |
//!
//! There is no deduplication or cancellation: a second request while one is
//! pending simply re-enters the pending state.

use serde::{Deserialize, Serialize};

/// A request failure as surfaced to the views.
///
/// Covers both transport errors (no response reached the server, `status` is
/// `None`) and server rejections (4xx/5xx with the status recorded).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
    pub status: Option<u16>,
}

impl ErrorMessage {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn rejection(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Client-side cache and request lifecycle flags for one entity type.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState<T> {
    /// The most recently fetched page of records.
    pub entities: Vec<T>,
    /// The selected record (detail, edit, delete screens).
    pub entity: Option<T>,
    /// Server-reported total count across all pages.
    pub total_items: i64,
    /// A list or single-record fetch is in flight.
    pub loading: bool,
    /// A create/update/delete is in flight.
    pub updating: bool,
    pub error_message: Option<ErrorMessage>,
    /// Set when the last mutation completed; forms navigate away on it.
    pub update_success: bool,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            entity: None,
            total_items: 0,
            loading: false,
            updating: false,
            error_message: None,
            update_success: false,
        }
    }
}

impl<T> EntityState<T> {
    /// Apply an event in place. Sugar over [`reduce`] for signal-held state.
    pub fn apply(&mut self, event: EntityEvent<T>) {
        *self = reduce(std::mem::take(self), event);
    }
}

/// Outcome of a gateway request, as consumed by [`reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum EntityEvent<T> {
    ListPending,
    GetPending,
    MutationPending,
    ListFulfilled { entities: Vec<T>, total_items: i64 },
    GetFulfilled(T),
    MutationFulfilled(T),
    DeleteFulfilled,
    Rejected(ErrorMessage),
    Reset,
}

/// The pure reducer: `(state, event) -> state`.
pub fn reduce<T>(mut state: EntityState<T>, event: EntityEvent<T>) -> EntityState<T> {
    match event {
        EntityEvent::ListPending | EntityEvent::GetPending => {
            state.error_message = None;
            state.update_success = false;
            state.loading = true;
        }
        EntityEvent::MutationPending => {
            state.error_message = None;
            state.update_success = false;
            state.updating = true;
        }
        EntityEvent::ListFulfilled {
            entities,
            total_items,
        } => {
            state.loading = false;
            state.entities = entities;
            state.total_items = total_items;
        }
        EntityEvent::GetFulfilled(entity) => {
            state.loading = false;
            state.entity = Some(entity);
        }
        EntityEvent::MutationFulfilled(entity) => {
            state.updating = false;
            state.loading = false;
            state.update_success = true;
            state.entity = Some(entity);
        }
        EntityEvent::DeleteFulfilled => {
            state.updating = false;
            state.update_success = true;
            state.entity = None;
        }
        EntityEvent::Rejected(error) => {
            state.loading = false;
            state.updating = false;
            state.error_message = Some(error);
        }
        EntityEvent::Reset => {
            state.entity = None;
            state.update_success = false;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn city(id: i64, name: &str) -> City {
        City {
            id: Some(id),
            city_name: Some(name.to_string()),
        }
    }

    #[test]
    fn list_lifecycle() {
        let state = EntityState::<City>::default();
        let state = reduce(state, EntityEvent::ListPending);
        assert!(state.loading);
        assert!(state.error_message.is_none());

        let state = reduce(
            state,
            EntityEvent::ListFulfilled {
                entities: vec![city(1, "Geneva")],
                total_items: 1,
            },
        );
        assert!(!state.loading);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.total_items, 1);
    }

    #[test]
    fn get_lifecycle() {
        let state = reduce(EntityState::<City>::default(), EntityEvent::GetPending);
        assert!(state.loading);
        let state = reduce(state, EntityEvent::GetFulfilled(city(3, "Lausanne")));
        assert!(!state.loading);
        assert_eq!(state.entity, Some(city(3, "Lausanne")));
    }

    #[test]
    fn mutation_sets_update_success() {
        let state = reduce(EntityState::<City>::default(), EntityEvent::MutationPending);
        assert!(state.updating);
        assert!(!state.update_success);
        let state = reduce(state, EntityEvent::MutationFulfilled(city(9, "Zurich")));
        assert!(!state.updating);
        assert!(state.update_success);
        assert_eq!(state.entity, Some(city(9, "Zurich")));
    }

    #[test]
    fn delete_clears_selected() {
        let mut state = EntityState::<City>::default();
        state.entity = Some(city(4, "Bern"));
        let state = reduce(state, EntityEvent::MutationPending);
        let state = reduce(state, EntityEvent::DeleteFulfilled);
        assert!(state.entity.is_none());
        assert!(state.update_success);
    }

    #[test]
    fn rejection_keeps_previous_data() {
        let mut state = EntityState::<City>::default();
        state.entities = vec![city(1, "Geneva")];
        state.entity = Some(city(1, "Geneva"));

        let state = reduce(state, EntityEvent::GetPending);
        let state = reduce(
            state,
            EntityEvent::Rejected(ErrorMessage::rejection(404, "Not Found")),
        );
        assert!(!state.loading);
        assert!(!state.updating);
        assert_eq!(state.error_message.as_ref().unwrap().status, Some(404));
        // Previously displayed data stays in place.
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.entity, Some(city(1, "Geneva")));
        assert!(!state.update_success);
    }

    #[test]
    fn pending_clears_stale_error_and_success() {
        let mut state = EntityState::<City>::default();
        state.error_message = Some(ErrorMessage::transport("network down"));
        state.update_success = true;

        let state = reduce(state, EntityEvent::MutationPending);
        assert!(state.error_message.is_none());
        assert!(!state.update_success);
    }

    #[test]
    fn reset_clears_selected_and_success() {
        let mut state = EntityState::<City>::default();
        state.entity = Some(city(2, "Sion"));
        state.update_success = true;
        state.entities = vec![city(2, "Sion")];

        let state = reduce(state, EntityEvent::Reset);
        assert!(state.entity.is_none());
        assert!(!state.update_success);
        // The cached list is untouched.
        assert_eq!(state.entities.len(), 1);
    }
}
