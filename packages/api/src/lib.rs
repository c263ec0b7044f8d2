//! # API crate — remote data gateways for the Shareazade entities
//!
//! One [`RestGateway`] per entity type, all speaking the same conventional
//! REST contract under `api/<plural-entity-name>`. The [`EntityApi`] trait is
//! the seam views and tests program against; [`request`] turns gateway
//! outcomes into store reducer events and owns the automatic post-mutation
//! list refresh.

use store::{City, Ride, ShareCity, ShareRide, ShareUser, Users};

pub mod error;
pub mod gateway;
pub mod request;

pub use error::{GatewayError, Problem};
pub use gateway::{EntityApi, RestGateway};

pub fn rides(base_url: &str) -> RestGateway<Ride> {
    RestGateway::new(base_url, "api/rides")
}

pub fn cities(base_url: &str) -> RestGateway<City> {
    RestGateway::new(base_url, "api/cities")
}

pub fn users(base_url: &str) -> RestGateway<Users> {
    RestGateway::new(base_url, "api/users")
}

pub fn share_rides(base_url: &str) -> RestGateway<ShareRide> {
    RestGateway::new(base_url, "api/share-rides")
}

pub fn share_cities(base_url: &str) -> RestGateway<ShareCity> {
    RestGateway::new(base_url, "api/share-cities")
}

pub fn share_users(base_url: &str) -> RestGateway<ShareUser> {
    RestGateway::new(base_url, "api/share-users")
}
