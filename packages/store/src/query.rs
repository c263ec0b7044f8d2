//! # Pagination and sort state, and its query-string mapping
//!
//! List views keep a local [`PaginationState`] that is synchronized both ways
//! with the URL: state changes are written out through
//! [`PaginationState::to_query`] and pushed as a navigation, and incoming
//! navigations (including the back button) are read back through
//! [`PaginationState::from_route`]. The wire-facing [`ListParams`] is derived
//! from the same state: pages are 1-based in the URL and 0-based on the wire,
//! and sort is always serialized as `field,asc|desc`.

use serde::{Deserialize, Serialize};

/// Default page size for list screens.
pub const ITEMS_PER_PAGE: u64 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Parse a `field,direction` sort parameter.
pub fn parse_sort_param(s: &str) -> Option<(String, SortOrder)> {
    let (field, order) = s.split_once(',')?;
    if field.is_empty() {
        return None;
    }
    Some((field.to_string(), SortOrder::from_param(order)?))
}

/// Local pagination state of a list view. `active_page` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub active_page: u64,
    pub items_per_page: u64,
    pub sort: String,
    pub order: SortOrder,
}

impl PaginationState {
    /// Initial state: first page, ascending by the given field.
    pub fn new(default_sort: &str, items_per_page: u64) -> Self {
        Self {
            active_page: 1,
            items_per_page,
            sort: default_sort.to_string(),
            order: SortOrder::Asc,
        }
    }

    /// Override the defaults with whatever the route's query carried.
    /// Missing or malformed parameters leave the defaults in place.
    pub fn from_route(page: Option<u64>, sort: Option<&str>, default: Self) -> Self {
        let mut state = default;
        if let Some(page) = page {
            if page >= 1 {
                state.active_page = page;
            }
        }
        if let Some((field, order)) = sort.and_then(parse_sort_param) {
            state.sort = field;
            state.order = order;
        }
        state
    }

    /// The wire sort parameter: `field,asc|desc`.
    pub fn sort_param(&self) -> String {
        format!("{},{}", self.sort, self.order.as_str())
    }

    /// The query string a list view keeps in the URL: `page=N&sort=field,dir`.
    pub fn to_query(&self) -> String {
        format!("page={}&sort={}", self.active_page, self.sort_param())
    }

    /// Clicking a column header: same field toggles direction, a new field
    /// sorts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort == field {
            self.order = self.order.toggled();
        } else {
            self.sort = field.to_string();
            self.order = SortOrder::Asc;
        }
    }

    /// The gateway parameters for the current state (0-based page).
    pub fn list_params(&self) -> ListParams {
        ListParams {
            page: self.active_page.saturating_sub(1),
            size: self.items_per_page,
            sort: Some(self.sort_param()),
        }
    }
}

/// Parameters of a paginated list request. `page` is 0-based on the wire.
/// `sort: None` requests the server's default slice — used when preloading a
/// reference collection for a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub page: u64,
    pub size: u64,
    pub sort: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: ITEMS_PER_PAGE,
            sort: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_param_round_trip() {
        let state = PaginationState::new("id", ITEMS_PER_PAGE);
        assert_eq!(state.sort_param(), "id,asc");
        assert_eq!(
            parse_sort_param("id,asc"),
            Some(("id".to_string(), SortOrder::Asc))
        );
        assert_eq!(parse_sort_param("userName,desc").unwrap().1, SortOrder::Desc);
        assert_eq!(parse_sort_param("nope"), None);
        assert_eq!(parse_sort_param(",asc"), None);
        assert_eq!(parse_sort_param("id,sideways"), None);
    }

    #[test]
    fn query_string_mapping() {
        let mut state = PaginationState::new("id", ITEMS_PER_PAGE);
        state.active_page = 3;
        state.toggle_sort("cityName");
        assert_eq!(state.to_query(), "page=3&sort=cityName,asc");
    }

    #[test]
    fn from_route_overrides_defaults() {
        let default = PaginationState::new("id", ITEMS_PER_PAGE);
        let state =
            PaginationState::from_route(Some(4), Some("userEmail,desc"), default.clone());
        assert_eq!(state.active_page, 4);
        assert_eq!(state.sort, "userEmail");
        assert_eq!(state.order, SortOrder::Desc);

        // Malformed input keeps the defaults.
        let state = PaginationState::from_route(Some(0), Some("garbage"), default.clone());
        assert_eq!(state, default);
    }

    #[test]
    fn toggle_same_field_flips_direction() {
        let mut state = PaginationState::new("id", ITEMS_PER_PAGE);
        state.toggle_sort("id");
        assert_eq!(state.order, SortOrder::Desc);
        state.toggle_sort("id");
        assert_eq!(state.order, SortOrder::Asc);
        state.toggle_sort("rideDateTime");
        assert_eq!(state.sort, "rideDateTime");
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn list_params_use_zero_based_page() {
        let mut state = PaginationState::new("id", ITEMS_PER_PAGE);
        state.active_page = 2;
        let params = state.list_params();
        assert_eq!(params.page, 1);
        assert_eq!(params.size, 20);
        assert_eq!(params.sort.as_deref(), Some("id,asc"));

        assert_eq!(ListParams::default().sort, None);
    }
}
