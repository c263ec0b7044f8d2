//! App-wide gateway context: one REST gateway per entity, all resolved
//! against the same API origin.

use dioxus::prelude::*;

use api::RestGateway;
use store::{City, ClientConfig, Ride, ShareCity, ShareRide, ShareUser, Users};

#[derive(Clone)]
pub struct Gateways {
    pub rides: RestGateway<Ride>,
    pub cities: RestGateway<City>,
    pub users: RestGateway<Users>,
    pub share_rides: RestGateway<ShareRide>,
    pub share_cities: RestGateway<ShareCity>,
    pub share_users: RestGateway<ShareUser>,
    pub items_per_page: u64,
}

impl Gateways {
    pub fn new(config: &ClientConfig, base_url: &str) -> Self {
        Self {
            rides: api::rides(base_url),
            cities: api::cities(base_url),
            users: api::users(base_url),
            share_rides: api::share_rides(base_url),
            share_cities: api::share_cities(base_url),
            share_users: api::share_users(base_url),
            items_per_page: config.list.items_per_page,
        }
    }

    pub fn from_env() -> Self {
        let config = ClientConfig::default();
        let base_url = api_origin(&config);
        Self::new(&config, &base_url)
    }
}

/// In the browser the API is served from the app's own origin; elsewhere the
/// configured base URL applies.
fn api_origin(config: &ClientConfig) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    config.api.base_url.clone()
}

pub fn use_gateways() -> Gateways {
    use_context()
}
