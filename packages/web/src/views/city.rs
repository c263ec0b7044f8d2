//! City screens.

use dioxus::prelude::*;

use store::{City, EntityState};
use ui::icons::{FaArrowsRotate, FaPlus};
use ui::{
    actions, DeleteConfirm, EmptyAlert, ErrorAlert, Icon, ItemCount, LoadingBanner, PaginationBar,
    SortHeader,
};

use crate::gateways::use_gateways;
use crate::views::{non_empty, route_pagination};
use crate::Route;

const DEFAULT_SORT: &str = "id";

#[component]
pub fn CityList(page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<City>::default);
    let items_per_page = gateways.items_per_page;

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
            actions::load_entities(&gw.cities, state, &params).await;
        }
    });

    let pagination = route_pagination(page, &sort, DEFAULT_SORT, items_per_page);

    let on_sort = {
        let pagination = pagination.clone();
        move |field: String| {
            let mut p = pagination.clone();
            p.toggle_sort(&field);
            nav.push(Route::CityList {
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
                h2 { "Cities" }
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
                        to: Route::CityNew {},
                        Icon { width: 14, height: 14, icon: FaPlus }
                        " Create a new City"
                    }
                }
            }
            if let Some(error) = s.error_message.clone() {
                ErrorAlert { error }
            }
            if s.loading && s.entities.is_empty() {
                LoadingBanner {}
            } else if s.entities.is_empty() {
                EmptyAlert { message: "No Cities found" }
            }
            if !s.entities.is_empty() {
                table {
                    class: "table",
                    thead {
                        tr {
                            SortHeader { label: "ID", field: "id", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "City Name", field: "cityName", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            th {}
                        }
                    }
                    tbody {
                        for city in s.entities.iter() {
                            CityRow {
                                key: "{city.id.unwrap_or_default()}",
                                city: city.clone(),
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
                                nav.push(Route::CityList {
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
fn CityRow(city: City, page: u64, sort: String) -> Element {
    let id = city.id.unwrap_or_default();
    let name = city.city_name.clone().unwrap_or_default();

    rsx! {
        tr {
            td { Link { to: Route::CityDetail { id }, "{id}" } }
            td { "{name}" }
            td {
                class: "row-actions",
                Link { class: "btn btn-sm", to: Route::CityDetail { id }, "View" }
                Link { class: "btn btn-sm", to: Route::CityEdit { id, page, sort: sort.clone() }, "Edit" }
                Link { class: "btn btn-sm btn-danger", to: Route::CityDelete { id, page, sort: sort.clone() }, "Delete" }
            }
        }
    }
}

#[component]
pub fn CityDetail(id: i64) -> Element {
    let gateways = use_gateways();
    let state = use_signal(EntityState::<City>::default);

    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        let id = id_signal();
        async move {
            actions::load_entity(&gw.cities, state, id).await;
        }
    });

    let s = state();
    let city = s.entity.clone().unwrap_or_default();

    rsx! {
        div {
            class: "entity-detail",
            h2 { "City" }
            if let Some(error) = s.error_message.clone() {
                ErrorAlert { error }
            }
            if s.loading {
                LoadingBanner {}
            } else {
                dl {
                    dt { "ID" }
                    dd { "{city.id.unwrap_or_default()}" }
                    dt { "City Name" }
                    dd { {city.city_name.clone().unwrap_or_default()} }
                }
            }
            div {
                class: "page-actions",
                Link {
                    class: "btn btn-secondary",
                    to: Route::CityList { page: 0, sort: String::new() },
                    "Back"
                }
                Link {
                    class: "btn btn-primary",
                    to: Route::CityEdit { id, page: 0, sort: String::new() },
                    "Edit"
                }
            }
        }
    }
}

#[component]
pub fn CityNew() -> Element {
    rsx! {
        CityForm { page: 0u64, sort: String::new() }
    }
}

#[component]
pub fn CityEdit(id: i64, page: u64, sort: String) -> Element {
    rsx! {
        CityForm { id, page, sort }
    }
}

#[component]
fn CityForm(id: Option<i64>, page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<City>::default);
    let items_per_page = gateways.items_per_page;

    let mut city_name = use_signal(String::new);
    let mut hydrated = use_signal(|| false);

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        async move {
            if let Some(id) = id {
                actions::load_entity(&gw.cities, state, id).await;
            } else {
                actions::reset(state);
            }
        }
    });

    use_effect(move || {
        if id.is_none() || hydrated() {
            return;
        }
        let Some(city) = state().entity else {
            return;
        };
        city_name.set(city.city_name.clone().unwrap_or_default());
        hydrated.set(true);
    });

    let nav_sort = sort.clone();
    use_effect(move || {
        if state().update_success {
            nav.push(Route::CityList {
                page,
                sort: nav_sort.clone(),
            });
        }
    });

    let submit_gw = gateways.clone();
    let relist = route_pagination(page, &sort, DEFAULT_SORT, items_per_page).list_params();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let entity = City {
            id: state.peek().entity.as_ref().and_then(|e| e.id),
            city_name: non_empty(&city_name.peek()),
        };
        let gw = submit_gw.clone();
        let relist = relist.clone();
        spawn(async move {
            if id.is_some() {
                actions::save_existing(&gw.cities, state, &entity, &relist).await;
            } else {
                actions::save_new(&gw.cities, state, &entity, &relist).await;
            }
        });
    };

    let s = state();
    let heading = if id.is_some() {
        "Edit City"
    } else {
        "Create a new City"
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
                        label { "City Name" }
                        input {
                            r#type: "text",
                            value: city_name(),
                            oninput: move |evt| city_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-actions",
                        Link {
                            class: "btn btn-secondary",
                            to: Route::CityList { page, sort: sort.clone() },
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
pub fn CityDelete(id: i64, page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<City>::default);

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        async move {
            actions::load_entity(&gw.cities, state, id).await;
        }
    });

    let back_success = Route::CityList {
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
            actions::delete_entity(&gw.cities, state, id, &relist).await;
        });
    };
    let back_cancel = Route::CityList {
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
            message: format!("Are you sure you want to delete City {id}?"),
            busy: s.updating,
            on_confirm: on_confirm,
            on_cancel: on_cancel,
        }
    }
}
