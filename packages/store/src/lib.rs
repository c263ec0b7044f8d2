pub mod config;
pub mod datetime;
pub mod models;
pub mod query;
pub mod resolver;
pub mod state;

pub use config::ClientConfig;
pub use models::{
    City, EntityId, Ride, RideType, ShareCity, ShareCountry, ShareRide, ShareUser, UserRole,
    UserStatus, Users,
};
pub use query::{ListParams, PaginationState, SortOrder, ITEMS_PER_PAGE};
pub use resolver::resolve_reference;
pub use state::{reduce, EntityEvent, EntityState, ErrorMessage};
