//! Outbound place-name search.

pub mod nominatim;

pub use nominatim::{NominatimClient, DEFAULT_ENDPOINT};
