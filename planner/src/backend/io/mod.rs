//! # IO Module
//!
//! Adapter layer between the outside world and the domain logic.
//!
//! - **rest**: the loopback JSON API consumed by the view, with DTO mappers
//!   and domain-error to status-code translation
//! - **geocoding**: the outbound HTTP client behind the `PlaceLookup` seam

pub mod geocoding;
pub mod rest;
