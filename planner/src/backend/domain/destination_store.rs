//! In-memory destination collection with an active selection.
//!
//! Every operation borrows the current store and returns a complete
//! replacement, leaving the original untouched on error. Callers swap the
//! new store in and persist its destination list as a whole.

use thiserror::Error;

use crate::backend::domain::models::destination::{Accommodation, Destination, Flight};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DestinationError {
    #[error("Destination not found: {0}")]
    NotFound(String),
    #[error("Destination already exists: {0}")]
    Duplicate(String),
    #[error("Flight {flight_id} not found in destination {destination_id}")]
    FlightNotFound { destination_id: String, flight_id: String },
    #[error("Flight {flight_id} already exists in destination {destination_id}")]
    DuplicateFlight { destination_id: String, flight_id: String },
    #[error("Accommodation {accommodation_id} not found in destination {destination_id}")]
    AccommodationNotFound { destination_id: String, accommodation_id: String },
    #[error("Accommodation {accommodation_id} already exists in destination {destination_id}")]
    DuplicateAccommodation { destination_id: String, accommodation_id: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DestinationStore {
    destinations: Vec<Destination>,
    active_id: Option<String>,
}

impl DestinationStore {
    /// Hydrate from persisted data, selecting the first destination if any
    pub fn from_persisted(destinations: Vec<Destination>) -> Self {
        let active_id = destinations.first().map(|d| d.id.clone());
        Self {
            destinations,
            active_id,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Append a destination and make it active
    pub fn add(&self, destination: Destination) -> Result<Self, DestinationError> {
        if self.get(&destination.id).is_some() {
            return Err(DestinationError::Duplicate(destination.id));
        }

        let active_id = Some(destination.id.clone());
        let mut destinations = self.destinations.clone();
        destinations.push(destination);

        Ok(Self {
            destinations,
            active_id,
        })
    }

    /// Replace the destination with the same id
    pub fn update(&self, destination: Destination) -> Result<Self, DestinationError> {
        let position = self
            .position(&destination.id)
            .ok_or_else(|| DestinationError::NotFound(destination.id.clone()))?;

        let mut destinations = self.destinations.clone();
        destinations[position] = destination;

        Ok(Self {
            destinations,
            active_id: self.active_id.clone(),
        })
    }

    /// Delete a destination; if it was active the first remaining one takes over
    pub fn remove(&self, id: &str) -> Result<Self, DestinationError> {
        if self.position(id).is_none() {
            return Err(DestinationError::NotFound(id.to_string()));
        }

        let destinations: Vec<Destination> = self
            .destinations
            .iter()
            .filter(|d| d.id != id)
            .cloned()
            .collect();

        let active_id = if self.active_id.as_deref() == Some(id) {
            destinations.first().map(|d| d.id.clone())
        } else {
            self.active_id.clone()
        };

        Ok(Self {
            destinations,
            active_id,
        })
    }

    pub fn select(&self, id: &str) -> Result<Self, DestinationError> {
        if self.position(id).is_none() {
            return Err(DestinationError::NotFound(id.to_string()));
        }
        Ok(Self {
            destinations: self.destinations.clone(),
            active_id: Some(id.to_string()),
        })
    }

    /// Swap in a whole new list, keeping the selection only if it survives
    pub fn replace_all(&self, destinations: Vec<Destination>) -> Self {
        let keep_active = self
            .active_id
            .as_deref()
            .filter(|id| destinations.iter().any(|d| d.id == *id))
            .map(str::to_string);

        let active_id = keep_active.or_else(|| destinations.first().map(|d| d.id.clone()));

        Self {
            destinations,
            active_id,
        }
    }

    pub fn add_flight(&self, destination_id: &str, flight: Flight) -> Result<Self, DestinationError> {
        self.modify(destination_id, |dest| {
            if dest.find_flight(&flight.id).is_some() {
                return Err(DestinationError::DuplicateFlight {
                    destination_id: dest.id.clone(),
                    flight_id: flight.id,
                });
            }
            dest.flights.push(flight);
            Ok(())
        })
    }

    pub fn update_flight(&self, destination_id: &str, flight: Flight) -> Result<Self, DestinationError> {
        self.modify(destination_id, |dest| {
            match dest.flights.iter_mut().find(|f| f.id == flight.id) {
                Some(slot) => {
                    *slot = flight;
                    Ok(())
                }
                None => Err(DestinationError::FlightNotFound {
                    destination_id: dest.id.clone(),
                    flight_id: flight.id,
                }),
            }
        })
    }

    pub fn remove_flight(&self, destination_id: &str, flight_id: &str) -> Result<Self, DestinationError> {
        self.modify(destination_id, |dest| {
            if dest.find_flight(flight_id).is_none() {
                return Err(DestinationError::FlightNotFound {
                    destination_id: dest.id.clone(),
                    flight_id: flight_id.to_string(),
                });
            }
            dest.flights.retain(|f| f.id != flight_id);
            Ok(())
        })
    }

    pub fn add_accommodation(
        &self,
        destination_id: &str,
        accommodation: Accommodation,
    ) -> Result<Self, DestinationError> {
        self.modify(destination_id, |dest| {
            if dest.find_accommodation(&accommodation.id).is_some() {
                return Err(DestinationError::DuplicateAccommodation {
                    destination_id: dest.id.clone(),
                    accommodation_id: accommodation.id,
                });
            }
            dest.accommodations.push(accommodation);
            Ok(())
        })
    }

    pub fn update_accommodation(
        &self,
        destination_id: &str,
        accommodation: Accommodation,
    ) -> Result<Self, DestinationError> {
        self.modify(destination_id, |dest| {
            match dest.accommodations.iter_mut().find(|a| a.id == accommodation.id) {
                Some(slot) => {
                    *slot = accommodation;
                    Ok(())
                }
                None => Err(DestinationError::AccommodationNotFound {
                    destination_id: dest.id.clone(),
                    accommodation_id: accommodation.id,
                }),
            }
        })
    }

    pub fn remove_accommodation(
        &self,
        destination_id: &str,
        accommodation_id: &str,
    ) -> Result<Self, DestinationError> {
        self.modify(destination_id, |dest| {
            if dest.find_accommodation(accommodation_id).is_none() {
                return Err(DestinationError::AccommodationNotFound {
                    destination_id: dest.id.clone(),
                    accommodation_id: accommodation_id.to_string(),
                });
            }
            dest.accommodations.retain(|a| a.id != accommodation_id);
            Ok(())
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.destinations.iter().position(|d| d.id == id)
    }

    /// Clone one destination, edit the clone, and build a store around it
    fn modify<F>(&self, destination_id: &str, edit: F) -> Result<Self, DestinationError>
    where
        F: FnOnce(&mut Destination) -> Result<(), DestinationError>,
    {
        let mut destination = self
            .get(destination_id)
            .cloned()
            .ok_or_else(|| DestinationError::NotFound(destination_id.to_string()))?;
        edit(&mut destination)?;
        self.update(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(id: &str) -> Destination {
        Destination::build(id.to_string(), &format!("City {id}"), 10.0, 20.0).unwrap()
    }

    fn flight(id: &str, price: f64) -> Flight {
        Flight::build(id.to_string(), "https://flights.example", None, "", "", price).unwrap()
    }

    fn accommodation(id: &str, price: f64) -> Accommodation {
        Accommodation::build(id.to_string(), "https://stay.example", "Flat", price, "", "").unwrap()
    }

    fn store_with(ids: &[&str]) -> DestinationStore {
        ids.iter().fold(DestinationStore::default(), |store, id| {
            store.add(destination(id)).unwrap()
        })
    }

    #[test]
    fn test_add_makes_destination_active() {
        let store = store_with(&["a", "b"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_id(), Some("b"));
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let store = store_with(&["a"]);
        assert_eq!(
            store.add(destination("a")),
            Err(DestinationError::Duplicate("a".to_string()))
        );
    }

    #[test]
    fn test_operations_leave_original_untouched() {
        let store = store_with(&["a"]);
        let next = store.add(destination("b")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = store_with(&["a", "b"]);
        let mut renamed = destination("a");
        renamed.name = "Porto".to_string();

        let next = store.update(renamed).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next.destinations()[0].name, "Porto");
        assert_eq!(next.active_id(), Some("b"));
    }

    #[test]
    fn test_update_unknown_id_is_an_error() {
        let store = store_with(&["a"]);
        assert_eq!(
            store.update(destination("zzz")),
            Err(DestinationError::NotFound("zzz".to_string()))
        );
    }

    #[test]
    fn test_remove_active_selects_first_remaining() {
        let store = store_with(&["a", "b", "c"]).select("b").unwrap();
        let next = store.remove("b").unwrap();
        assert_eq!(next.active_id(), Some("a"));
    }

    #[test]
    fn test_remove_inactive_keeps_selection() {
        let store = store_with(&["a", "b", "c"]);
        let next = store.remove("a").unwrap();
        assert_eq!(next.active_id(), Some("c"));
    }

    #[test]
    fn test_remove_last_clears_selection() {
        let store = store_with(&["a"]);
        let next = store.remove("a").unwrap();
        assert!(next.is_empty());
        assert_eq!(next.active_id(), None);
    }

    #[test]
    fn test_selection_always_points_at_existing_destination() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        for id in ["d", "a", "c", "b"] {
            store = store.remove(id).unwrap();
            match store.active_id() {
                Some(active) => assert!(store.get(active).is_some()),
                None => assert!(store.is_empty()),
            }
        }
    }

    #[test]
    fn test_select_unknown_is_an_error() {
        let store = store_with(&["a"]);
        assert!(store.select("nope").is_err());
        assert_eq!(store.select("a").unwrap().active_id(), Some("a"));
    }

    #[test]
    fn test_from_persisted_selects_first() {
        let store = DestinationStore::from_persisted(vec![destination("x"), destination("y")]);
        assert_eq!(store.active_id(), Some("x"));
        assert_eq!(DestinationStore::from_persisted(Vec::new()).active_id(), None);
    }

    #[test]
    fn test_replace_all_keeps_surviving_selection() {
        let store = store_with(&["a", "b"]);
        let next = store.replace_all(vec![destination("c"), destination("b")]);
        assert_eq!(next.active_id(), Some("b"));

        let next = store.replace_all(vec![destination("c"), destination("d")]);
        assert_eq!(next.active_id(), Some("c"));

        let next = store.replace_all(Vec::new());
        assert_eq!(next.active_id(), None);
    }

    #[test]
    fn test_flight_lifecycle() {
        let store = store_with(&["a"]);
        let store = store.add_flight("a", flight("f1", 100.0)).unwrap();
        assert_eq!(store.get("a").unwrap().flights.len(), 1);

        assert!(matches!(
            store.add_flight("a", flight("f1", 50.0)),
            Err(DestinationError::DuplicateFlight { .. })
        ));

        let store = store.update_flight("a", flight("f1", 80.0)).unwrap();
        assert_eq!(store.get("a").unwrap().flights[0].price_per_person, 80.0);

        let store = store.remove_flight("a", "f1").unwrap();
        assert!(store.get("a").unwrap().flights.is_empty());

        assert!(matches!(
            store.remove_flight("a", "f1"),
            Err(DestinationError::FlightNotFound { .. })
        ));
    }

    #[test]
    fn test_accommodation_lifecycle() {
        let store = store_with(&["a"]);
        let store = store.add_accommodation("a", accommodation("h1", 400.0)).unwrap();
        let store = store.update_accommodation("a", accommodation("h1", 350.0)).unwrap();
        assert_eq!(store.get("a").unwrap().accommodations[0].total_price, 350.0);

        assert!(matches!(
            store.update_accommodation("a", accommodation("h2", 1.0)),
            Err(DestinationError::AccommodationNotFound { .. })
        ));

        let store = store.remove_accommodation("a", "h1").unwrap();
        assert!(store.get("a").unwrap().accommodations.is_empty());
    }

    #[test]
    fn test_nested_edit_on_unknown_destination() {
        let store = store_with(&["a"]);
        assert_eq!(
            store.add_flight("b", flight("f1", 1.0)),
            Err(DestinationError::NotFound("b".to_string()))
        );
    }

    #[test]
    fn test_options_are_owned_per_destination() {
        let store = store_with(&["a", "b"]);
        let store = store.add_flight("a", flight("f1", 100.0)).unwrap();
        let store = store.add_flight("b", flight("f1", 200.0)).unwrap();
        assert_eq!(store.get("a").unwrap().flights[0].price_per_person, 100.0);
        assert_eq!(store.get("b").unwrap().flights[0].price_per_person, 200.0);
    }
}
