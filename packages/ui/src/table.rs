//! Table and status building blocks for the list screens.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaSort, FaSortDown, FaSortUp};
use dioxus_free_icons::Icon;

use store::{ErrorMessage, SortOrder};

/// Clickable column header. Clicking reports the field; the view decides
/// whether that toggles the direction or switches the sort field.
#[component]
pub fn SortHeader(
    label: String,
    field: String,
    current_sort: String,
    order: SortOrder,
    on_sort: EventHandler<String>,
) -> Element {
    let active = field == current_sort;
    let sort_field = field.clone();

    rsx! {
        th {
            class: "sortable",
            onclick: move |_| on_sort.call(sort_field.clone()),
            "{label} "
            if !active {
                Icon { width: 12, height: 12, icon: FaSort }
            } else if order == SortOrder::Asc {
                Icon { width: 12, height: 12, icon: FaSortUp }
            } else {
                Icon { width: 12, height: 12, icon: FaSortDown }
            }
        }
    }
}

/// Inline error message for a failed request.
#[component]
pub fn ErrorAlert(error: ErrorMessage) -> Element {
    rsx! {
        div {
            class: "alert alert-danger",
            "{error}"
        }
    }
}

#[component]
pub fn LoadingBanner() -> Element {
    rsx! {
        p { class: "loading", "Loading..." }
    }
}

/// Shown when a list request came back empty.
#[component]
pub fn EmptyAlert(message: String) -> Element {
    rsx! {
        div {
            class: "alert alert-warning",
            "{message}"
        }
    }
}
