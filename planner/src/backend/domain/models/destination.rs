use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::dates::{optional_date, parse_optional_date, validate_date_order};
use super::route::Coordinates;
use super::ValidationError;

const MAX_NAME_LENGTH: usize = 100;

/// A trip location owning its flight and accommodation options.
///
/// This is also the record shape of the persisted list and of export files,
/// hence the camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "optional_date")]
    pub end_date: Option<NaiveDate>,
    pub price_per_person: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    pub total_price: f64,
    #[serde(default, with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "optional_date")]
    pub end_date: Option<NaiveDate>,
}

/// Opaque identifier for destinations, flights and accommodations
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

impl Destination {
    /// Build a validated destination with no travel options yet
    pub fn build(id: String, name: &str, latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        validate_coordinates(latitude, longitude)?;

        Ok(Self {
            id,
            name,
            latitude,
            longitude,
            flights: Vec::new(),
            accommodations: Vec::new(),
        })
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Re-check a record that arrived already built, e.g. from an import file
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_coordinates(self.latitude, self.longitude)?;
        self.flights.iter().try_for_each(Flight::validate)?;
        self.accommodations.iter().try_for_each(Accommodation::validate)
    }

    /// First flight or accommodation id used twice within its own list
    pub fn duplicate_option_id(&self) -> Option<&str> {
        first_repeat(self.flights.iter().map(|f| f.id.as_str()))
            .or_else(|| first_repeat(self.accommodations.iter().map(|a| a.id.as_str())))
    }

    pub fn find_flight(&self, flight_id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == flight_id)
    }

    pub fn find_accommodation(&self, accommodation_id: &str) -> Option<&Accommodation> {
        self.accommodations.iter().find(|a| a.id == accommodation_id)
    }
}

impl Flight {
    pub fn build(
        id: String,
        link: &str,
        description: Option<&str>,
        start_date: &str,
        end_date: &str,
        price_per_person: f64,
    ) -> Result<Self, ValidationError> {
        let link = validate_link(link)?;
        validate_price(price_per_person)?;
        let start_date = parse_optional_date(start_date)?;
        let end_date = parse_optional_date(end_date)?;
        validate_date_order(start_date, end_date)?;

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Self {
            id,
            link,
            description,
            start_date,
            end_date,
            price_per_person,
        })
    }
}

impl Flight {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_link(&self.link)?;
        validate_price(self.price_per_person)?;
        validate_date_order(self.start_date, self.end_date)
    }
}

impl Accommodation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_link(&self.link)?;
        validate_price(self.total_price)?;
        validate_date_order(self.start_date, self.end_date)
    }

    pub fn build(
        id: String,
        link: &str,
        description: &str,
        total_price: f64,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, ValidationError> {
        let link = validate_link(link)?;
        validate_price(total_price)?;
        let start_date = parse_optional_date(start_date)?;
        let end_date = parse_optional_date(end_date)?;
        validate_date_order(start_date, end_date)?;

        Ok(Self {
            id,
            link,
            description: description.trim().to_string(),
            total_price,
            start_date,
            end_date,
        })
    }
}

pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong(MAX_NAME_LENGTH));
    }
    Ok(trimmed.to_string())
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

fn validate_link(link: &str) -> Result<String, ValidationError> {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyLink);
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::InvalidPrice(price));
    }
    Ok(())
}

fn first_repeat<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
