//! One module per entity; each carries the list, detail, create/edit form
//! and delete dialog views.

mod city;
mod ride;
mod share_city;
mod share_ride;
mod share_user;
mod users;

pub use city::{CityDelete, CityDetail, CityEdit, CityList, CityNew};
pub use ride::{RideDelete, RideDetail, RideEdit, RideList, RideNew};
pub use share_city::{
    ShareCityDelete, ShareCityDetail, ShareCityEdit, ShareCityList, ShareCityNew,
};
pub use share_ride::{
    ShareRideDelete, ShareRideDetail, ShareRideEdit, ShareRideList, ShareRideNew,
};
pub use share_user::{
    ShareUserDelete, ShareUserDetail, ShareUserEdit, ShareUserList, ShareUserNew,
};
pub use users::{UsersDelete, UsersDetail, UsersEdit, UsersList, UsersNew};

use store::{EntityId, PaginationState};

/// Pagination state from the route's query parameters. Missing or malformed
/// values fall back to the first page, ascending by `default_sort`.
pub(crate) fn route_pagination(
    page: u64,
    sort: &str,
    default_sort: &str,
    items_per_page: u64,
) -> PaginationState {
    PaginationState::from_route(
        Some(page),
        Some(sort),
        PaginationState::new(default_sort, items_per_page),
    )
}

/// Select value of an entity reference: its id as a string, or empty when
/// nothing is selected.
pub(crate) fn reference_value<T: EntityId>(entity: Option<&T>) -> String {
    entity
        .and_then(|e| e.id())
        .map(|id| id.to_string())
        .unwrap_or_default()
}

/// Trimmed form input, `None` when blank so the field is absent from the
/// payload.
pub(crate) fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{SortOrder, Users};

    #[test]
    fn route_pagination_defaults_when_query_is_empty() {
        let state = route_pagination(0, "", "id", 20);
        assert_eq!(state.active_page, 1);
        assert_eq!(state.sort, "id");
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn route_pagination_reads_the_query() {
        let state = route_pagination(3, "userName,desc", "id", 20);
        assert_eq!(state.active_page, 3);
        assert_eq!(state.sort, "userName");
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn reference_value_is_the_id_or_empty() {
        let user = Users {
            id: Some(42),
            ..Users::default()
        };
        assert_eq!(reference_value(Some(&user)), "42");
        assert_eq!(reference_value(None::<&Users>), "");
        let unsaved = Users::default();
        assert_eq!(reference_value(Some(&unsaved)), "");
    }

    #[test]
    fn non_empty_trims_and_drops_blanks() {
        assert_eq!(non_empty("  hello "), Some("hello".to_string()));
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(""), None);
    }
}
