//! # Domain models for the Shareazade entities
//!
//! Plain records with optional fields, matching the REST API's camelCase JSON
//! wire format. `None` fields are omitted on serialization so that a create
//! payload never carries an `id` and an empty reference selection is simply
//! absent from the body.
//!
//! Two parallel entity sets exist: the platform entities ([`Ride`], [`City`],
//! [`Users`]) and the share variants ([`ShareRide`], [`ShareCity`],
//! [`ShareUser`]) served under their own endpoints. The share variants carry
//! the same field names but reference each other, never the platform set.
//!
//! Identifiers are server-assigned: `id == None` means the record has not
//! been persisted yet. [`EntityId`] is the one trait every entity implements;
//! it is what the reference resolver and the gateway key on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entity with a server-assigned identifier.
pub trait EntityId {
    /// The persisted identifier, or `None` for a record not yet created.
    fn id(&self) -> Option<i64>;
}

/// Kind of ride posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RideType {
    Offer,
    Request,
}

impl RideType {
    pub const ALL: [RideType; 2] = [RideType::Offer, RideType::Request];

    /// Wire value, also used as the form select value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RideType::Offer => "OFFER",
            RideType::Request => "REQUEST",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// Human-readable label for detail and list screens.
    pub fn label(&self) -> &'static str {
        match self {
            RideType::Offer => "Offer",
            RideType::Request => "Request",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Admin, UserRole::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

/// Country of a share city.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareCountry {
    CH,
    FR,
}

impl ShareCountry {
    pub const ALL: [ShareCountry; 2] = [ShareCountry::CH, ShareCountry::FR];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShareCountry::CH => "CH",
            ShareCountry::FR => "FR",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShareCountry::CH => "Switzerland",
            ShareCountry::FR => "France",
        }
    }
}

/// A city a ride can start from or go to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

impl EntityId for City {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A platform user who can own rides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Users {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
}

impl EntityId for Users {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A ride posting, referencing its owner and its from/to cities.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_type: Option<RideType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_user: Option<Users>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_city_from: Option<City>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_city_to: Option<City>,
}

impl EntityId for Ride {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Share-application variant of [`Users`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
}

impl EntityId for ShareUser {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Share-application variant of [`City`], with a country.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareCity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_country: Option<ShareCountry>,
}

impl EntityId for ShareCity {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Share-application variant of [`Ride`], referencing [`ShareUser`] and
/// [`ShareCity`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareRide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_type: Option<RideType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_user: Option<ShareUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_city_from: Option<ShareCity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_city_to: Option<ShareCity>,
}

impl EntityId for ShareRide {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_skips_none() {
        let city = City {
            id: Some(7),
            city_name: Some("Geneva".to_string()),
        };
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["cityName"], "Geneva");

        let new_city = City {
            id: None,
            city_name: Some("Geneva".to_string()),
        };
        let json = serde_json::to_value(&new_city).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn empty_reference_is_absent_from_payload() {
        let ride = Ride {
            ride_type: Some(RideType::Offer),
            ..Ride::default()
        };
        let json = serde_json::to_value(&ride).unwrap();
        assert!(json.get("rideUser").is_none());
        assert!(json.get("rideCityFrom").is_none());
        assert_eq!(json["rideType"], "OFFER");
    }

    #[test]
    fn deserializes_partial_records() {
        let ride: Ride = serde_json::from_str(
            r#"{"id":1,"rideDateTime":"2023-01-15T08:30:00Z","rideType":"REQUEST",
                "rideCityFrom":{"id":2,"cityName":"Lausanne"}}"#,
        )
        .unwrap();
        assert_eq!(ride.id, Some(1));
        assert_eq!(ride.ride_type, Some(RideType::Request));
        assert_eq!(
            ride.ride_city_from.unwrap().city_name.as_deref(),
            Some("Lausanne")
        );
        assert!(ride.ride_user.is_none());
    }

    #[test]
    fn enum_params_round_trip() {
        for v in RideType::ALL {
            assert_eq!(RideType::from_param(v.as_str()), Some(v));
        }
        for v in ShareCountry::ALL {
            assert_eq!(ShareCountry::from_param(v.as_str()), Some(v));
        }
        assert_eq!(UserRole::from_param(""), None);
        assert_eq!(UserStatus::from_param("bogus"), None);
    }
}
