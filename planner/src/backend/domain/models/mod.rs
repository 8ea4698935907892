pub mod budget;
pub mod dates;
pub mod destination;
pub mod route;
pub mod settings;

use thiserror::Error;

/// Input problems caught before a mutation reaches the store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Destination name cannot be empty")]
    EmptyName,
    #[error("Destination name cannot exceed {0} characters")]
    NameTooLong(usize),
    #[error("Latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
    #[error("Link cannot be empty")]
    EmptyLink,
    #[error("Price must be a positive amount, got {0}")]
    InvalidPrice(f64),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: String, end: String },
    #[error("Total budget must be zero or more, got {0}")]
    InvalidBudget(f64),
    #[error("People count must be at least 1")]
    InvalidPeopleCount,
    #[error("Search text cannot be empty")]
    EmptyQuery,
}
