//! Ride screens: paginated list, detail, create/edit form and delete dialog.

use dioxus::prelude::*;

use store::{datetime, resolve_reference, City, EntityState, ListParams, Ride, RideType, Users};
use ui::icons::{FaArrowsRotate, FaPlus};
use ui::{
    actions, DeleteConfirm, EmptyAlert, ErrorAlert, Icon, ItemCount, LoadingBanner, PaginationBar,
    SortHeader,
};

use crate::gateways::use_gateways;
use crate::views::{non_empty, reference_value, route_pagination};
use crate::Route;

const DEFAULT_SORT: &str = "id";

#[component]
pub fn RideList(page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<Ride>::default);
    let items_per_page = gateways.items_per_page;

    // Mirror the route query into a signal so the loader re-runs on every
    // navigation: sort clicks, page clicks, the back button.
    let mut route_query = use_signal(|| (page, sort.clone()));
    if *route_query.peek() != (page, sort.clone()) {
        route_query.set((page, sort.clone()));
    }

    let loader_gw = gateways.clone();
    let mut loader = use_resource(move || {
        let gw = loader_gw.clone();
        let (page, sort) = route_query();
        async move {
            let params = route_pagination(page, &sort, DEFAULT_SORT, items_per_page).list_params();
            actions::load_entities(&gw.rides, state, &params).await;
        }
    });

    let pagination = route_pagination(page, &sort, DEFAULT_SORT, items_per_page);

    let on_sort = {
        let pagination = pagination.clone();
        move |field: String| {
            let mut p = pagination.clone();
            p.toggle_sort(&field);
            nav.push(Route::RideList {
                page: p.active_page,
                sort: p.sort_param(),
            });
        }
    };

    let s = state();

    rsx! {
        div {
            class: "entity-page",
            div {
                class: "page-heading",
                h2 { "Rides" }
                div {
                    class: "page-actions",
                    button {
                        class: "btn btn-info",
                        disabled: s.loading,
                        onclick: move |_| loader.restart(),
                        Icon { width: 14, height: 14, icon: FaArrowsRotate }
                        " Refresh list"
                    }
                    Link {
                        class: "btn btn-primary",
                        to: Route::RideNew {},
                        Icon { width: 14, height: 14, icon: FaPlus }
                        " Create a new Ride"
                    }
                }
            }
            if let Some(error) = s.error_message.clone() {
                ErrorAlert { error }
            }
            if s.loading && s.entities.is_empty() {
                LoadingBanner {}
            } else if s.entities.is_empty() {
                EmptyAlert { message: "No Rides found" }
            }
            if !s.entities.is_empty() {
                table {
                    class: "table",
                    thead {
                        tr {
                            SortHeader { label: "ID", field: "id", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "Ride Date Time", field: "rideDateTime", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "Ride Type", field: "rideType", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "Ride Comments", field: "rideComments", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            th { "Ride User" }
                            th { "Ride City From" }
                            th { "Ride City To" }
                            th {}
                        }
                    }
                    tbody {
                        for ride in s.entities.iter() {
                            RideRow {
                                key: "{ride.id.unwrap_or_default()}",
                                ride: ride.clone(),
                                page: pagination.active_page,
                                sort: pagination.sort_param(),
                            }
                        }
                    }
                }
            }
            if s.total_items > 0 {
                div {
                    class: "pagination-footer",
                    ItemCount {
                        active_page: pagination.active_page,
                        total_items: s.total_items,
                        items_per_page,
                    }
                    PaginationBar {
                        active_page: pagination.active_page,
                        total_items: s.total_items,
                        items_per_page,
                        on_select: {
                            let pagination = pagination.clone();
                            move |selected: u64| {
                                let mut p = pagination.clone();
                                p.active_page = selected;
                                nav.push(Route::RideList {
                                    page: p.active_page,
                                    sort: p.sort_param(),
                                });
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn RideRow(ride: Ride, page: u64, sort: String) -> Element {
    let id = ride.id.unwrap_or_default();
    let date = ride
        .ride_date_time
        .as_ref()
        .map(datetime::to_display)
        .unwrap_or_default();
    let kind = ride
        .ride_type
        .map(|t| t.label().to_string())
        .unwrap_or_default();
    let comments = ride.ride_comments.clone().unwrap_or_default();
    let user = ride
        .ride_user
        .as_ref()
        .and_then(|u| u.user_name.clone())
        .unwrap_or_default();
    let from = ride
        .ride_city_from
        .as_ref()
        .and_then(|c| c.city_name.clone())
        .unwrap_or_default();
    let to = ride
        .ride_city_to
        .as_ref()
        .and_then(|c| c.city_name.clone())
        .unwrap_or_default();

    rsx! {
        tr {
            td { Link { to: Route::RideDetail { id }, "{id}" } }
            td { "{date}" }
            td { "{kind}" }
            td { "{comments}" }
            td { "{user}" }
            td { "{from}" }
            td { "{to}" }
            td {
                class: "row-actions",
                Link { class: "btn btn-sm", to: Route::RideDetail { id }, "View" }
                Link { class: "btn btn-sm", to: Route::RideEdit { id, page, sort: sort.clone() }, "Edit" }
                Link { class: "btn btn-sm btn-danger", to: Route::RideDelete { id, page, sort: sort.clone() }, "Delete" }
            }
        }
    }
}

#[component]
pub fn RideDetail(id: i64) -> Element {
    let gateways = use_gateways();
    let state = use_signal(EntityState::<Ride>::default);

    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        let id = id_signal();
        async move {
            actions::load_entity(&gw.rides, state, id).await;
        }
    });

    let s = state();
    let ride = s.entity.clone().unwrap_or_default();
    let date = ride
        .ride_date_time
        .as_ref()
        .map(datetime::to_display)
        .unwrap_or_default();
    let kind = ride
        .ride_type
        .map(|t| t.label().to_string())
        .unwrap_or_default();
    let user = ride
        .ride_user
        .as_ref()
        .and_then(|u| u.user_name.clone())
        .unwrap_or_default();
    let from = ride
        .ride_city_from
        .as_ref()
        .and_then(|c| c.city_name.clone())
        .unwrap_or_default();
    let to = ride
        .ride_city_to
        .as_ref()
        .and_then(|c| c.city_name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "entity-detail",
            h2 { "Ride" }
            if let Some(error) = s.error_message.clone() {
                ErrorAlert { error }
            }
            if s.loading {
                LoadingBanner {}
            } else {
                dl {
                    dt { "ID" }
                    dd { "{ride.id.unwrap_or_default()}" }
                    dt { "Ride Date Time" }
                    dd { "{date}" }
                    dt { "Ride Type" }
                    dd { "{kind}" }
                    dt { "Ride Comments" }
                    dd { {ride.ride_comments.clone().unwrap_or_default()} }
                    dt { "Ride User" }
                    dd { "{user}" }
                    dt { "Ride City From" }
                    dd { "{from}" }
                    dt { "Ride City To" }
                    dd { "{to}" }
                }
            }
            div {
                class: "page-actions",
                Link {
                    class: "btn btn-secondary",
                    to: Route::RideList { page: 0, sort: String::new() },
                    "Back"
                }
                Link {
                    class: "btn btn-primary",
                    to: Route::RideEdit { id, page: 0, sort: String::new() },
                    "Edit"
                }
            }
        }
    }
}

#[component]
pub fn RideNew() -> Element {
    rsx! {
        RideForm { page: 0u64, sort: String::new() }
    }
}

#[component]
pub fn RideEdit(id: i64, page: u64, sort: String) -> Element {
    rsx! {
        RideForm { id, page, sort }
    }
}

#[component]
fn RideForm(id: Option<i64>, page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<Ride>::default);
    let users_state = use_signal(EntityState::<Users>::default);
    let cities_state = use_signal(EntityState::<City>::default);
    let items_per_page = gateways.items_per_page;

    let mut ride_date_time = use_signal(String::new);
    let mut ride_type = use_signal(|| RideType::Offer.as_str().to_string());
    let mut ride_comments = use_signal(String::new);
    let mut ride_user = use_signal(String::new);
    let mut ride_city_from = use_signal(String::new);
    let mut ride_city_to = use_signal(String::new);
    let mut hydrated = use_signal(|| false);

    // Load the record (when editing) and the reference collections the
    // selects offer.
    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        async move {
            if let Some(id) = id {
                actions::load_entity(&gw.rides, state, id).await;
            } else {
                actions::reset(state);
                ride_date_time.set(datetime::default_input_value());
            }
            actions::load_entities(&gw.users, users_state, &ListParams::default()).await;
            actions::load_entities(&gw.cities, cities_state, &ListParams::default()).await;
        }
    });

    // Fill the inputs once the record arrives, and only once: later events
    // (a rejected save, the post-save refresh) must not clobber edits.
    use_effect(move || {
        if id.is_none() || hydrated() {
            return;
        }
        let Some(ride) = state().entity else {
            return;
        };
        ride_date_time.set(
            ride.ride_date_time
                .as_ref()
                .map(datetime::to_input_value)
                .unwrap_or_default(),
        );
        if let Some(kind) = ride.ride_type {
            ride_type.set(kind.as_str().to_string());
        }
        ride_comments.set(ride.ride_comments.clone().unwrap_or_default());
        ride_user.set(reference_value(ride.ride_user.as_ref()));
        ride_city_from.set(reference_value(ride.ride_city_from.as_ref()));
        ride_city_to.set(reference_value(ride.ride_city_to.as_ref()));
        hydrated.set(true);
    });

    // A fulfilled save navigates back to the list slice the form was opened
    // from.
    let nav_sort = sort.clone();
    use_effect(move || {
        if state().update_success {
            nav.push(Route::RideList {
                page,
                sort: nav_sort.clone(),
            });
        }
    });

    let submit_gw = gateways.clone();
    let relist = route_pagination(page, &sort, DEFAULT_SORT, items_per_page).list_params();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let entity = Ride {
            id: state.peek().entity.as_ref().and_then(|e| e.id),
            ride_date_time: datetime::from_input_value(&ride_date_time.peek()),
            ride_type: RideType::from_param(&ride_type.peek()),
            ride_comments: non_empty(&ride_comments.peek()),
            ride_user: resolve_reference(&ride_user.peek(), &users_state.peek().entities).cloned(),
            ride_city_from: resolve_reference(&ride_city_from.peek(), &cities_state.peek().entities)
                .cloned(),
            ride_city_to: resolve_reference(&ride_city_to.peek(), &cities_state.peek().entities)
                .cloned(),
        };
        let gw = submit_gw.clone();
        let relist = relist.clone();
        spawn(async move {
            if id.is_some() {
                actions::save_existing(&gw.rides, state, &entity, &relist).await;
            } else {
                actions::save_new(&gw.rides, state, &entity, &relist).await;
            }
        });
    };

    let s = state();
    let heading = if id.is_some() {
        "Edit Ride"
    } else {
        "Create a new Ride"
    };

    rsx! {
        div {
            class: "entity-form",
            h2 { "{heading}" }
            if let Some(error) = s.error_message.clone() {
                ErrorAlert { error }
            }
            if id.is_some() && s.loading {
                LoadingBanner {}
            } else {
                form {
                    onsubmit: on_submit,
                    div {
                        class: "form-field",
                        label { "Ride Date Time" }
                        input {
                            r#type: "datetime-local",
                            value: ride_date_time(),
                            oninput: move |evt| ride_date_time.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Ride Type" }
                        select {
                            value: ride_type(),
                            onchange: move |evt| ride_type.set(evt.value()),
                            for kind in RideType::ALL {
                                option { value: kind.as_str(), "{kind.label()}" }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Ride Comments" }
                        input {
                            r#type: "text",
                            value: ride_comments(),
                            oninput: move |evt| ride_comments.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Ride User" }
                        select {
                            value: ride_user(),
                            onchange: move |evt| ride_user.set(evt.value()),
                            option { value: "", "" }
                            for user in users_state().entities {
                                option {
                                    value: "{user.id.unwrap_or_default()}",
                                    {user.user_name.unwrap_or_default()}
                                }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Ride City From" }
                        select {
                            value: ride_city_from(),
                            onchange: move |evt| ride_city_from.set(evt.value()),
                            option { value: "", "" }
                            for city in cities_state().entities {
                                option {
                                    value: "{city.id.unwrap_or_default()}",
                                    {city.city_name.unwrap_or_default()}
                                }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Ride City To" }
                        select {
                            value: ride_city_to(),
                            onchange: move |evt| ride_city_to.set(evt.value()),
                            option { value: "", "" }
                            for city in cities_state().entities {
                                option {
                                    value: "{city.id.unwrap_or_default()}",
                                    {city.city_name.unwrap_or_default()}
                                }
                            }
                        }
                    }
                    div {
                        class: "form-actions",
                        Link {
                            class: "btn btn-secondary",
                            to: Route::RideList { page, sort: sort.clone() },
                            "Back"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: s.updating,
                            "Save"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RideDelete(id: i64, page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<Ride>::default);

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        async move {
            actions::load_entity(&gw.rides, state, id).await;
        }
    });

    let back_success = Route::RideList {
        page,
        sort: sort.clone(),
    };
    use_effect(move || {
        if state().update_success {
            nav.push(back_success.clone());
        }
    });

    let relist = route_pagination(page, &sort, DEFAULT_SORT, gateways.items_per_page).list_params();
    let confirm_gw = gateways.clone();
    let on_confirm = move |_| {
        let gw = confirm_gw.clone();
        let relist = relist.clone();
        spawn(async move {
            actions::delete_entity(&gw.rides, state, id, &relist).await;
        });
    };
    let back_cancel = Route::RideList {
        page,
        sort: sort.clone(),
    };
    let on_cancel = move |_| {
        nav.push(back_cancel.clone());
    };

    let s = state();

    rsx! {
        if let Some(error) = s.error_message.clone() {
            ErrorAlert { error }
        }
        DeleteConfirm {
            heading: "Confirm delete operation",
            message: format!("Are you sure you want to delete Ride {id}?"),
            busy: s.updating,
            on_confirm: on_confirm,
            on_cancel: on_cancel,
        }
    }
}
