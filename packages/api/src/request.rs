//! # Request layer — gateway outcomes as reducer events
//!
//! The `*_event` functions perform one gateway call and map its outcome to
//! the [`EntityEvent`] the store reducer consumes, logging failures on the
//! way. The `load_*`/`save_*`/`delete_entity` drivers wrap them with the
//! pending transitions and, for mutations, the automatic re-list that keeps
//! `entities` consistent with the server after every successful
//! create/update/delete.
//!
//! The automatic re-list skips the pending phase on purpose: it must not
//! clear `update_success`, which forms watch to navigate away, and it should
//! not flash the loading state for a refresh the user never asked for.

use store::{EntityEvent, EntityState, ListParams};

use crate::error::GatewayError;
use crate::gateway::EntityApi;

fn rejected<T>(operation: &'static str, err: GatewayError) -> EntityEvent<T> {
    tracing::error!(operation, error = %err, "entity request failed");
    EntityEvent::Rejected(err.into_message())
}

pub async fn list_event<T, A: EntityApi<T>>(api: &A, params: &ListParams) -> EntityEvent<T> {
    match api.list(params).await {
        Ok((entities, total_items)) => EntityEvent::ListFulfilled {
            entities,
            total_items,
        },
        Err(err) => rejected("list", err),
    }
}

pub async fn get_event<T, A: EntityApi<T>>(api: &A, id: i64) -> EntityEvent<T> {
    match api.get(id).await {
        Ok(entity) => EntityEvent::GetFulfilled(entity),
        Err(err) => rejected("get", err),
    }
}

pub async fn create_event<T, A: EntityApi<T>>(api: &A, entity: &T) -> EntityEvent<T> {
    match api.create(entity).await {
        Ok(entity) => EntityEvent::MutationFulfilled(entity),
        Err(err) => rejected("create", err),
    }
}

pub async fn update_event<T, A: EntityApi<T>>(api: &A, entity: &T) -> EntityEvent<T> {
    match api.update(entity).await {
        Ok(entity) => EntityEvent::MutationFulfilled(entity),
        Err(err) => rejected("update", err),
    }
}

pub async fn partial_update_event<T, A: EntityApi<T>>(api: &A, entity: &T) -> EntityEvent<T> {
    match api.partial_update(entity).await {
        Ok(entity) => EntityEvent::MutationFulfilled(entity),
        Err(err) => rejected("partial_update", err),
    }
}

pub async fn delete_event<T, A: EntityApi<T>>(api: &A, id: i64) -> EntityEvent<T> {
    match api.delete(id).await {
        Ok(()) => EntityEvent::DeleteFulfilled,
        Err(err) => rejected("delete", err),
    }
}

/// Fetch a page into the state.
pub async fn load_entities<T, A: EntityApi<T>>(
    api: &A,
    state: &mut EntityState<T>,
    params: &ListParams,
) {
    state.apply(EntityEvent::ListPending);
    let event = list_event(api, params).await;
    state.apply(event);
}

/// Fetch a single record into the selected slot.
pub async fn load_entity<T, A: EntityApi<T>>(api: &A, state: &mut EntityState<T>, id: i64) {
    state.apply(EntityEvent::GetPending);
    let event = get_event(api, id).await;
    state.apply(event);
}

async fn relist_after_mutation<T, A: EntityApi<T>>(
    api: &A,
    state: &mut EntityState<T>,
    event: EntityEvent<T>,
    relist: &ListParams,
) {
    let fulfilled = !matches!(event, EntityEvent::Rejected(_));
    state.apply(event);
    if fulfilled {
        let refresh = list_event(api, relist).await;
        state.apply(refresh);
    }
}

/// Create a record, then refresh the list on success.
pub async fn create_entity<T, A: EntityApi<T>>(
    api: &A,
    state: &mut EntityState<T>,
    entity: &T,
    relist: &ListParams,
) {
    state.apply(EntityEvent::MutationPending);
    let event = create_event(api, entity).await;
    relist_after_mutation(api, state, event, relist).await;
}

/// Full-replace update, then refresh the list on success.
pub async fn update_entity<T, A: EntityApi<T>>(
    api: &A,
    state: &mut EntityState<T>,
    entity: &T,
    relist: &ListParams,
) {
    state.apply(EntityEvent::MutationPending);
    let event = update_event(api, entity).await;
    relist_after_mutation(api, state, event, relist).await;
}

/// Partial (PATCH) update, then refresh the list on success.
pub async fn partial_update_entity<T, A: EntityApi<T>>(
    api: &A,
    state: &mut EntityState<T>,
    entity: &T,
    relist: &ListParams,
) {
    state.apply(EntityEvent::MutationPending);
    let event = partial_update_event(api, entity).await;
    relist_after_mutation(api, state, event, relist).await;
}

/// Delete a record, then refresh the list on success.
pub async fn delete_entity<T, A: EntityApi<T>>(
    api: &A,
    state: &mut EntityState<T>,
    id: i64,
    relist: &ListParams,
) {
    state.apply(EntityEvent::MutationPending);
    let event = delete_event(api, id).await;
    relist_after_mutation(api, state, event, relist).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use store::City;

    use crate::error::{GatewayError, Problem};

    fn city(id: i64, name: &str) -> City {
        City {
            id: Some(id),
            city_name: Some(name.to_string()),
        }
    }

    /// Deterministic in-memory gateway recording every call it serves.
    #[derive(Default)]
    struct StubApi {
        items: RefCell<Vec<City>>,
        total: i64,
        fail_get: Option<u16>,
        calls: RefCell<Vec<String>>,
    }

    impl StubApi {
        fn with_items(items: Vec<City>) -> Self {
            let total = items.len() as i64;
            Self {
                items: RefCell::new(items),
                total,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn not_found() -> GatewayError {
            GatewayError::Rejection {
                status: 404,
                problem: Some(Problem {
                    title: Some("Not Found".to_string()),
                    ..Problem::default()
                }),
            }
        }
    }

    impl EntityApi<City> for StubApi {
        async fn list(&self, params: &ListParams) -> Result<(Vec<City>, i64), GatewayError> {
            self.calls.borrow_mut().push(format!(
                "list page={} size={} sort={}",
                params.page,
                params.size,
                params.sort.as_deref().unwrap_or("-")
            ));
            Ok((self.items.borrow().clone(), self.total))
        }

        async fn get(&self, id: i64) -> Result<City, GatewayError> {
            self.calls.borrow_mut().push(format!("get {id}"));
            if let Some(status) = self.fail_get {
                return Err(GatewayError::Rejection {
                    status,
                    problem: None,
                });
            }
            self.items
                .borrow()
                .iter()
                .find(|c| c.id == Some(id))
                .cloned()
                .ok_or_else(Self::not_found)
        }

        async fn create(&self, entity: &City) -> Result<City, GatewayError> {
            self.calls.borrow_mut().push("create".to_string());
            let created = City {
                id: Some(100),
                ..entity.clone()
            };
            self.items.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update(&self, entity: &City) -> Result<City, GatewayError> {
            let id = entity.id.ok_or(GatewayError::MissingId)?;
            self.calls.borrow_mut().push(format!("update {id}"));
            Ok(entity.clone())
        }

        async fn partial_update(&self, entity: &City) -> Result<City, GatewayError> {
            let id = entity.id.ok_or(GatewayError::MissingId)?;
            self.calls.borrow_mut().push(format!("patch {id}"));
            Ok(entity.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), GatewayError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.items.borrow_mut().retain(|c| c.id != Some(id));
            Ok(())
        }
    }

    fn page_one() -> ListParams {
        ListParams {
            page: 0,
            size: 20,
            sort: Some("id,asc".to_string()),
        }
    }

    #[tokio::test]
    async fn list_fills_entities_and_total() {
        let api = StubApi::with_items(vec![city(1, "Geneva")]);
        let mut state = EntityState::default();

        load_entities(&api, &mut state, &page_one()).await;

        assert_eq!(state.entities, vec![city(1, "Geneva")]);
        assert_eq!(state.total_items, 1);
        assert!(!state.loading);
        assert!(state.error_message.is_none());
        assert_eq!(api.calls(), vec!["list page=0 size=20 sort=id,asc"]);
    }

    #[tokio::test]
    async fn create_succeeds_and_refreshes_list() {
        let api = StubApi::with_items(vec![]);
        let mut state = EntityState::default();

        let draft = City {
            id: None,
            city_name: Some("Geneva".to_string()),
        };
        create_entity(&api, &mut state, &draft, &page_one()).await;

        assert!(!state.updating);
        assert!(state.update_success);
        assert_eq!(state.entity.as_ref().and_then(|c| c.id), Some(100));
        // The fresh list call went out with the current list params.
        assert_eq!(
            api.calls(),
            vec!["create", "list page=0 size=20 sort=id,asc"]
        );
        assert_eq!(state.entities.len(), 1);
    }

    #[tokio::test]
    async fn rejected_get_keeps_previous_entity() {
        let mut api = StubApi::with_items(vec![city(1, "Geneva")]);
        let mut state = EntityState::default();

        load_entity(&api, &mut state, 1).await;
        assert_eq!(state.entity, Some(city(1, "Geneva")));

        api.fail_get = Some(404);
        load_entity(&api, &mut state, 999).await;

        assert!(!state.loading);
        let error = state.error_message.as_ref().unwrap();
        assert_eq!(error.status, Some(404));
        // The previously selected record is untouched.
        assert_eq!(state.entity, Some(city(1, "Geneva")));
    }

    #[tokio::test]
    async fn repeated_get_is_idempotent() {
        let api = StubApi::with_items(vec![city(5, "Bern")]);
        let mut state = EntityState::default();

        load_entity(&api, &mut state, 5).await;
        let first = state.entity.clone();
        load_entity(&api, &mut state, 5).await;

        assert_eq!(state.entity, first);
    }

    #[tokio::test]
    async fn delete_clears_selected_and_refreshes() {
        let api = StubApi::with_items(vec![city(1, "Geneva"), city(2, "Sion")]);
        let mut state = EntityState::default();

        load_entity(&api, &mut state, 1).await;
        delete_entity(&api, &mut state, 1, &page_one()).await;

        assert!(state.entity.is_none());
        assert!(state.update_success);
        assert_eq!(state.entities, vec![city(2, "Sion")]);
        assert_eq!(
            api.calls(),
            vec!["get 1", "delete 1", "list page=0 size=20 sort=id,asc"]
        );
    }

    #[tokio::test]
    async fn update_without_id_is_rejected_without_relist() {
        let api = StubApi::with_items(vec![]);
        let mut state = EntityState::default();

        let unsaved = City {
            id: None,
            city_name: Some("Draft".to_string()),
        };
        update_entity(&api, &mut state, &unsaved, &page_one()).await;

        assert!(!state.updating);
        assert!(!state.update_success);
        assert!(state.error_message.is_some());
        // No refresh after a failed mutation.
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn partial_update_refreshes_like_update() {
        let api = StubApi::with_items(vec![city(3, "Old")]);
        let mut state = EntityState::default();

        partial_update_entity(&api, &mut state, &city(3, "New"), &page_one()).await;

        assert!(state.update_success);
        assert_eq!(state.entity, Some(city(3, "New")));
        assert_eq!(
            api.calls(),
            vec!["patch 3", "list page=0 size=20 sort=id,asc"]
        );
    }
}
