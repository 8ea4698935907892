//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod destination {
    use crate::backend::domain::models::destination::Destination;

    /// Input for adding a destination; the id is generated by the service.
    #[derive(Debug, Clone)]
    pub struct CreateDestinationCommand {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
    }

    /// Partial edit of a destination's own fields.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateDestinationCommand {
        pub destination_id: String,
        pub name: Option<String>,
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,
    }

    /// Result of listing destinations.
    #[derive(Debug, Clone)]
    pub struct DestinationListResult {
        pub destinations: Vec<Destination>,
        pub active_destination_id: Option<String>,
    }

    /// Result of any mutation that yields a single destination.
    #[derive(Debug, Clone)]
    pub struct DestinationResult {
        pub destination: Destination,
        pub active_destination_id: Option<String>,
        pub persisted: bool,
    }

    /// Result of swapping in a whole destination list.
    #[derive(Debug, Clone)]
    pub struct ReplaceDestinationsResult {
        pub destination_count: usize,
        pub active_destination_id: Option<String>,
        pub persisted: bool,
    }

    /// Result of removing a destination.
    #[derive(Debug, Clone)]
    pub struct RemoveDestinationResult {
        pub removed_id: String,
        pub active_destination_id: Option<String>,
        pub persisted: bool,
    }
}

pub mod options {
    /// Fields for a new or replacement flight option.
    #[derive(Debug, Clone)]
    pub struct FlightCommand {
        pub destination_id: String,
        pub link: String,
        pub description: Option<String>,
        pub start_date: String,
        pub end_date: String,
        pub price_per_person: f64,
    }

    /// Fields for a new or replacement accommodation option.
    #[derive(Debug, Clone)]
    pub struct AccommodationCommand {
        pub destination_id: String,
        pub link: String,
        pub description: String,
        pub total_price: f64,
        pub start_date: String,
        pub end_date: String,
    }
}

pub mod budget {
    use crate::backend::domain::models::budget::{AllocationWarning, BudgetBreakdown, BudgetSelection};
    use crate::backend::domain::models::settings::PlannerSettings;

    /// Input for pricing a selection against the shared budget.
    #[derive(Debug, Clone)]
    pub struct EvaluateBudgetCommand {
        pub destination_id: String,
        pub selection: BudgetSelection,
    }

    /// Result of pricing a selection.
    #[derive(Debug, Clone)]
    pub struct BudgetReport {
        pub destination_id: String,
        pub breakdown: BudgetBreakdown,
        pub settings: PlannerSettings,
        pub warnings: Vec<AllocationWarning>,
    }
}

pub mod settings {
    use crate::backend::domain::models::settings::PlannerSettings;

    #[derive(Debug, Clone)]
    pub struct UpdateSettingsCommand {
        pub total_budget: f64,
        pub people_count: u32,
    }

    #[derive(Debug, Clone)]
    pub struct SettingsResult {
        pub settings: PlannerSettings,
        pub persisted: bool,
    }
}

pub mod transfer {
    /// A downloadable export of the destination list.
    #[derive(Debug, Clone)]
    pub struct ExportFile {
        pub filename: String,
        pub bytes: Vec<u8>,
    }

    /// Result of a successful import.
    #[derive(Debug, Clone)]
    pub struct ImportResult {
        pub imported_count: usize,
        pub active_destination_id: Option<String>,
        pub persisted: bool,
    }
}
