use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A bookable flight option attached to a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    /// Booking or search-result URL
    pub link: String,
    pub description: Option<String>,
    /// Outbound date (YYYY-MM-DD), empty when not set
    pub start_date: String,
    /// Return date (YYYY-MM-DD), empty when not set
    pub end_date: String,
    pub price_per_person: f64,
}

/// A bookable accommodation option attached to a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: String,
    pub link: String,
    pub description: String,
    /// Price for the whole stay, independent of headcount
    pub total_price: f64,
    pub start_date: String,
    pub end_date: String,
}

/// A trip location with its own travel options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub flights: Vec<Flight>,
    pub accommodations: Vec<Accommodation>,
}

/// Process-wide budget and headcount shared by every destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    pub total_budget: f64,
    pub people_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

// ----------------------------------------------------------------------------
// Destinations
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationListResponse {
    pub destinations: Vec<Destination>,
    pub active_destination_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDestinationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Partial edit of a destination's own fields; flights and accommodations
/// are edited through their own endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateDestinationRequest {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationResponse {
    pub destination: Destination,
    pub active_destination_id: Option<String>,
    /// False when the change was applied but could not be written to disk
    pub persisted: bool,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveDestinationResponse {
    pub removed_id: String,
    pub active_destination_id: Option<String>,
    pub persisted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectDestinationResponse {
    pub active_destination_id: Option<String>,
}

/// Fields for creating or replacing a flight option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRequest {
    pub link: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    pub price_per_person: f64,
}

/// Fields for creating or replacing an accommodation option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationRequest {
    pub link: String,
    #[serde(default)]
    pub description: String,
    pub total_price: f64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

// ----------------------------------------------------------------------------
// Budget
// ----------------------------------------------------------------------------

/// Person-count per flight option plus at most one accommodation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BudgetSelectionRequest {
    #[serde(default)]
    pub flight_allocations: BTreeMap<String, u32>,
    #[serde(default)]
    pub accommodation_id: Option<String>,
}

/// Non-fatal notice about a budget selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetWarning {
    /// More seats allocated than people travelling
    OverAllocated { assigned: u32, people_count: u32 },
    /// Some travellers have no flight allocated yet
    UnderAllocated { assigned: u32, people_count: u32 },
    /// Allocation refers to a flight that no longer exists
    StaleFlight { flight_id: String },
    /// Selected accommodation no longer exists
    StaleAccommodation { accommodation_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub destination_id: String,
    pub flight_cost: f64,
    pub accommodation_cost: f64,
    pub total_cost: f64,
    pub remaining: f64,
    pub over_budget: bool,
    pub settings: PlannerSettings,
    pub warnings: Vec<BudgetWarning>,
}

// ----------------------------------------------------------------------------
// Settings
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub total_budget: f64,
    pub people_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: PlannerSettings,
    pub persisted: bool,
}

// ----------------------------------------------------------------------------
// Export / import
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported_count: usize,
    pub active_destination_id: Option<String>,
    pub persisted: bool,
    pub success_message: String,
}

/// Error body returned by the API; `kind` is stable, `message` is for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub message: String,
}

// ----------------------------------------------------------------------------
// Geocoding and route
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeRequest {
    pub q: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub query: String,
    /// None when the place could not be found; coordinates can still be entered by hand
    pub coordinates: Option<Coordinates>,
    /// True when the lookup was superseded or dismissed before it finished
    #[serde(default)]
    pub discarded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub origin_name: String,
    pub origin: Coordinates,
    pub destination_name: String,
    pub destination: Coordinates,
    pub distance_km: f64,
}
