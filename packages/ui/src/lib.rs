//! Shared UI for the entity CRUD screens: action helpers that drive a
//! signal-held [`store::EntityState`], and the list/dialog components every
//! entity view composes.

pub mod actions;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod pagination;
pub use pagination::{page_window, total_pages, ItemCount, PaginationBar};

mod table;
pub use table::{EmptyAlert, ErrorAlert, LoadingBanner, SortHeader};

mod delete_dialog;
pub use delete_dialog::DeleteConfirm;
