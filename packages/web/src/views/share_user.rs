//! Share user screens.

use dioxus::prelude::*;

use store::{EntityState, ShareUser, UserRole, UserStatus};
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
pub fn ShareUserList(page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<ShareUser>::default);
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
            actions::load_entities(&gw.share_users, state, &params).await;
        }
    });

    let pagination = route_pagination(page, &sort, DEFAULT_SORT, items_per_page);

    let on_sort = {
        let pagination = pagination.clone();
        move |field: String| {
            let mut p = pagination.clone();
            p.toggle_sort(&field);
            nav.push(Route::ShareUserList {
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
                h2 { "Share Users" }
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
                        to: Route::ShareUserNew {},
                        Icon { width: 14, height: 14, icon: FaPlus }
                        " Create a new Share User"
                    }
                }
            }
            if let Some(error) = s.error_message.clone() {
                ErrorAlert { error }
            }
            if s.loading && s.entities.is_empty() {
                LoadingBanner {}
            } else if s.entities.is_empty() {
                EmptyAlert { message: "No Share Users found" }
            }
            if !s.entities.is_empty() {
                table {
                    class: "table",
                    thead {
                        tr {
                            SortHeader { label: "ID", field: "id", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "User Name", field: "userName", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "User Email", field: "userEmail", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "User Role", field: "userRole", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "User Phone", field: "userPhone", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            SortHeader { label: "User Status", field: "userStatus", current_sort: pagination.sort.clone(), order: pagination.order, on_sort: on_sort.clone() }
                            th {}
                        }
                    }
                    tbody {
                        for user in s.entities.iter() {
                            ShareUserRow {
                                key: "{user.id.unwrap_or_default()}",
                                user: user.clone(),
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
                                nav.push(Route::ShareUserList {
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
fn ShareUserRow(user: ShareUser, page: u64, sort: String) -> Element {
    let id = user.id.unwrap_or_default();
    let name = user.user_name.clone().unwrap_or_default();
    let email = user.user_email.clone().unwrap_or_default();
    let role = user
        .user_role
        .map(|r| r.label().to_string())
        .unwrap_or_default();
    let phone = user.user_phone.clone().unwrap_or_default();
    let status = user
        .user_status
        .map(|st| st.label().to_string())
        .unwrap_or_default();

    rsx! {
        tr {
            td { Link { to: Route::ShareUserDetail { id }, "{id}" } }
            td { "{name}" }
            td { "{email}" }
            td { "{role}" }
            td { "{phone}" }
            td { "{status}" }
            td {
                class: "row-actions",
                Link { class: "btn btn-sm", to: Route::ShareUserDetail { id }, "View" }
                Link { class: "btn btn-sm", to: Route::ShareUserEdit { id, page, sort: sort.clone() }, "Edit" }
                Link { class: "btn btn-sm btn-danger", to: Route::ShareUserDelete { id, page, sort: sort.clone() }, "Delete" }
            }
        }
    }
}

#[component]
pub fn ShareUserDetail(id: i64) -> Element {
    let gateways = use_gateways();
    let state = use_signal(EntityState::<ShareUser>::default);

    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        let id = id_signal();
        async move {
            actions::load_entity(&gw.share_users, state, id).await;
        }
    });

    let s = state();
    let user = s.entity.clone().unwrap_or_default();
    let role = user
        .user_role
        .map(|r| r.label().to_string())
        .unwrap_or_default();
    let status = user
        .user_status
        .map(|st| st.label().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "entity-detail",
            h2 { "Share User" }
            if let Some(error) = s.error_message.clone() {
                ErrorAlert { error }
            }
            if s.loading {
                LoadingBanner {}
            } else {
                dl {
                    dt { "ID" }
                    dd { "{user.id.unwrap_or_default()}" }
                    dt { "User Name" }
                    dd { {user.user_name.clone().unwrap_or_default()} }
                    dt { "User Email" }
                    dd { {user.user_email.clone().unwrap_or_default()} }
                    dt { "User Role" }
                    dd { "{role}" }
                    dt { "User Phone" }
                    dd { {user.user_phone.clone().unwrap_or_default()} }
                    dt { "User Status" }
                    dd { "{status}" }
                }
            }
            div {
                class: "page-actions",
                Link {
                    class: "btn btn-secondary",
                    to: Route::ShareUserList { page: 0, sort: String::new() },
                    "Back"
                }
                Link {
                    class: "btn btn-primary",
                    to: Route::ShareUserEdit { id, page: 0, sort: String::new() },
                    "Edit"
                }
            }
        }
    }
}

#[component]
pub fn ShareUserNew() -> Element {
    rsx! {
        ShareUserForm { page: 0u64, sort: String::new() }
    }
}

#[component]
pub fn ShareUserEdit(id: i64, page: u64, sort: String) -> Element {
    rsx! {
        ShareUserForm { id, page, sort }
    }
}

#[component]
fn ShareUserForm(id: Option<i64>, page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<ShareUser>::default);
    let items_per_page = gateways.items_per_page;

    let mut user_name = use_signal(String::new);
    let mut user_email = use_signal(String::new);
    let mut user_role = use_signal(|| UserRole::Admin.as_str().to_string());
    let mut user_phone = use_signal(String::new);
    let mut user_status = use_signal(|| UserStatus::Active.as_str().to_string());
    let mut hydrated = use_signal(|| false);

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        async move {
            if let Some(id) = id {
                actions::load_entity(&gw.share_users, state, id).await;
            } else {
                actions::reset(state);
            }
        }
    });

    use_effect(move || {
        if id.is_none() || hydrated() {
            return;
        }
        let Some(user) = state().entity else {
            return;
        };
        user_name.set(user.user_name.clone().unwrap_or_default());
        user_email.set(user.user_email.clone().unwrap_or_default());
        if let Some(role) = user.user_role {
            user_role.set(role.as_str().to_string());
        }
        user_phone.set(user.user_phone.clone().unwrap_or_default());
        if let Some(status) = user.user_status {
            user_status.set(status.as_str().to_string());
        }
        hydrated.set(true);
    });

    let nav_sort = sort.clone();
    use_effect(move || {
        if state().update_success {
            nav.push(Route::ShareUserList {
                page,
                sort: nav_sort.clone(),
            });
        }
    });

    let submit_gw = gateways.clone();
    let relist = route_pagination(page, &sort, DEFAULT_SORT, items_per_page).list_params();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let entity = ShareUser {
            id: state.peek().entity.as_ref().and_then(|e| e.id),
            user_name: non_empty(&user_name.peek()),
            user_email: non_empty(&user_email.peek()),
            user_role: UserRole::from_param(&user_role.peek()),
            user_phone: non_empty(&user_phone.peek()),
            user_status: UserStatus::from_param(&user_status.peek()),
        };
        let gw = submit_gw.clone();
        let relist = relist.clone();
        spawn(async move {
            if id.is_some() {
                actions::save_existing(&gw.share_users, state, &entity, &relist).await;
            } else {
                actions::save_new(&gw.share_users, state, &entity, &relist).await;
            }
        });
    };

    let s = state();
    let heading = if id.is_some() {
        "Edit Share User"
    } else {
        "Create a new Share User"
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
                        label { "User Name" }
                        input {
                            r#type: "text",
                            value: user_name(),
                            oninput: move |evt| user_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "User Email" }
                        input {
                            r#type: "email",
                            value: user_email(),
                            oninput: move |evt| user_email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "User Role" }
                        select {
                            value: user_role(),
                            onchange: move |evt| user_role.set(evt.value()),
                            for role in UserRole::ALL {
                                option { value: role.as_str(), "{role.label()}" }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { "User Phone" }
                        input {
                            r#type: "text",
                            value: user_phone(),
                            oninput: move |evt| user_phone.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "User Status" }
                        select {
                            value: user_status(),
                            onchange: move |evt| user_status.set(evt.value()),
                            for status in UserStatus::ALL {
                                option { value: status.as_str(), "{status.label()}" }
                            }
                        }
                    }
                    div {
                        class: "form-actions",
                        Link {
                            class: "btn btn-secondary",
                            to: Route::ShareUserList { page, sort: sort.clone() },
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
pub fn ShareUserDelete(id: i64, page: u64, sort: String) -> Element {
    let gateways = use_gateways();
    let nav = use_navigator();
    let state = use_signal(EntityState::<ShareUser>::default);

    let loader_gw = gateways.clone();
    let _loader = use_resource(move || {
        let gw = loader_gw.clone();
        async move {
            actions::load_entity(&gw.share_users, state, id).await;
        }
    });

    let back_success = Route::ShareUserList {
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
            actions::delete_entity(&gw.share_users, state, id, &relist).await;
        });
    };
    let back_cancel = Route::ShareUserList {
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
            message: format!("Are you sure you want to delete Share User {id}?"),
            busy: s.updating,
            on_confirm: on_confirm,
            on_cancel: on_cancel,
        }
    }
}
