//! Signal-side wrappers over [`api::request`].
//!
//! Views hold their entity state in a `Signal<EntityState<T>>`; a signal
//! write guard cannot be held across an await point, so each helper clones
//! the state out, publishes the pending transition immediately (the views
//! render loading/updating from it), runs the request-layer driver on the
//! local copy, and publishes the final state.

use dioxus::prelude::*;

use api::gateway::EntityApi;
use api::request;
use store::{EntityEvent, EntityState, ListParams};

/// Fetch a page into the signal.
pub async fn load_entities<T, A>(api: &A, mut state: Signal<EntityState<T>>, params: &ListParams)
where
    T: Clone + 'static,
    A: EntityApi<T>,
{
    let mut local = state.peek().clone();
    local.apply(EntityEvent::ListPending);
    state.set(local.clone());

    request::load_entities(api, &mut local, params).await;
    state.set(local);
}

/// Fetch a single record into the selected slot.
pub async fn load_entity<T, A>(api: &A, mut state: Signal<EntityState<T>>, id: i64)
where
    T: Clone + 'static,
    A: EntityApi<T>,
{
    let mut local = state.peek().clone();
    local.apply(EntityEvent::GetPending);
    state.set(local.clone());

    request::load_entity(api, &mut local, id).await;
    state.set(local);
}

/// Create a record; on success the list is refreshed with `relist`.
pub async fn save_new<T, A>(
    api: &A,
    mut state: Signal<EntityState<T>>,
    entity: &T,
    relist: &ListParams,
) where
    T: Clone + 'static,
    A: EntityApi<T>,
{
    let mut local = state.peek().clone();
    local.apply(EntityEvent::MutationPending);
    state.set(local.clone());

    request::create_entity(api, &mut local, entity, relist).await;
    state.set(local);
}

/// Full-replace update; on success the list is refreshed with `relist`.
pub async fn save_existing<T, A>(
    api: &A,
    mut state: Signal<EntityState<T>>,
    entity: &T,
    relist: &ListParams,
) where
    T: Clone + 'static,
    A: EntityApi<T>,
{
    let mut local = state.peek().clone();
    local.apply(EntityEvent::MutationPending);
    state.set(local.clone());

    request::update_entity(api, &mut local, entity, relist).await;
    state.set(local);
}

/// Delete a record; on success the list is refreshed with `relist`.
pub async fn delete_entity<T, A>(
    api: &A,
    mut state: Signal<EntityState<T>>,
    id: i64,
    relist: &ListParams,
) where
    T: Clone + 'static,
    A: EntityApi<T>,
{
    let mut local = state.peek().clone();
    local.apply(EntityEvent::MutationPending);
    state.set(local.clone());

    request::delete_entity(api, &mut local, id, relist).await;
    state.set(local);
}

/// Clear the selected record before opening a create form.
pub fn reset<T: 'static>(mut state: Signal<EntityState<T>>) {
    state.write().apply(EntityEvent::Reset);
}
