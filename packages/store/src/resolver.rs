//! Cross-entity reference resolution.
//!
//! Forms render reference fields as selects whose option values are entity
//! ids rendered as text. On submit, the chosen value is matched back against
//! the preloaded collection of the referenced entity so the full record can
//! be embedded in the payload. Resolution is synchronous and purely
//! client-side; it never re-validates against the server.

use crate::models::EntityId;

/// Resolve a selected identifier against a preloaded reference collection.
///
/// Ids are compared as text, which tolerates the value coming straight out
/// of a form control. An empty selection resolves to `None`, which the
/// caller submits as an absent field rather than an error.
pub fn resolve_reference<'a, T: EntityId>(selected: &str, candidates: &'a [T]) -> Option<&'a T> {
    let selected = selected.trim();
    if selected.is_empty() {
        return None;
    }
    candidates
        .iter()
        .find(|c| c.id().is_some_and(|id| id.to_string() == selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn cities() -> Vec<City> {
        vec![
            City {
                id: Some(1),
                city_name: Some("Geneva".to_string()),
            },
            City {
                id: Some(22),
                city_name: Some("Lausanne".to_string()),
            },
        ]
    }

    #[test]
    fn resolves_matching_id_as_text() {
        let all = cities();
        let hit = resolve_reference("22", &all).unwrap();
        assert_eq!(hit.city_name.as_deref(), Some("Lausanne"));
    }

    #[test]
    fn empty_selection_resolves_to_none() {
        assert!(resolve_reference("", &cities()).is_none());
        assert!(resolve_reference("   ", &cities()).is_none());
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        assert!(resolve_reference("99", &cities()).is_none());
    }

    #[test]
    fn unsaved_candidates_never_match() {
        let all = vec![City {
            id: None,
            city_name: Some("Draft".to_string()),
        }];
        assert!(resolve_reference("0", &all).is_none());
    }

    // Submitting an edit form without touching anything rebuilds the fetched
    // record exactly: input-string conversions and reference resolution are
    // lossless at minute precision.
    #[test]
    fn unchanged_edit_round_trips() {
        use chrono::{TimeZone, Utc};

        use crate::datetime;
        use crate::models::{Ride, RideType, Users};

        let users = vec![Users {
            id: Some(7),
            user_name: Some("ana".to_string()),
            ..Users::default()
        }];
        let all_cities = cities();
        let fetched = Ride {
            id: Some(3),
            ride_date_time: Some(Utc.with_ymd_and_hms(2023, 1, 15, 8, 30, 0).unwrap()),
            ride_type: Some(RideType::Offer),
            ride_comments: Some("two seats".to_string()),
            ride_user: Some(users[0].clone()),
            ride_city_from: Some(all_cities[0].clone()),
            ride_city_to: Some(all_cities[1].clone()),
        };

        // The values the form controls would hold after hydration.
        let date_value = datetime::to_input_value(fetched.ride_date_time.as_ref().unwrap());
        let type_value = fetched.ride_type.unwrap().as_str();
        let user_value = fetched.ride_user.as_ref().unwrap().id.unwrap().to_string();
        let from_value = fetched
            .ride_city_from
            .as_ref()
            .unwrap()
            .id
            .unwrap()
            .to_string();
        let to_value = fetched
            .ride_city_to
            .as_ref()
            .unwrap()
            .id
            .unwrap()
            .to_string();

        let rebuilt = Ride {
            id: fetched.id,
            ride_date_time: datetime::from_input_value(&date_value),
            ride_type: RideType::from_param(type_value),
            ride_comments: fetched.ride_comments.clone(),
            ride_user: resolve_reference(&user_value, &users).cloned(),
            ride_city_from: resolve_reference(&from_value, &all_cities).cloned(),
            ride_city_to: resolve_reference(&to_value, &all_cities).cloned(),
        };

        assert_eq!(rebuilt, fetched);
    }
}
