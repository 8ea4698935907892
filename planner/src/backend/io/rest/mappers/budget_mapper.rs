use shared::{
    BudgetResponse, BudgetSelectionRequest, BudgetWarning, Coordinates, PlannerSettings, RouteSummary,
    SettingsResponse,
};

use crate::backend::domain::commands::budget::BudgetReport;
use crate::backend::domain::commands::settings::SettingsResult;
use crate::backend::domain::models::budget::{AllocationWarning, BudgetSelection};
use crate::backend::domain::models::route::{Coordinates as DomainCoordinates, Route};
use crate::backend::domain::models::settings::PlannerSettings as DomainSettings;

pub struct BudgetMapper;

impl BudgetMapper {
    pub fn to_selection(request: BudgetSelectionRequest) -> BudgetSelection {
        BudgetSelection {
            flight_allocations: request.flight_allocations,
            accommodation_id: request.accommodation_id,
        }
    }

    pub fn warning_to_dto(warning: AllocationWarning) -> BudgetWarning {
        match warning {
            AllocationWarning::OverAllocated { assigned, people_count } => {
                BudgetWarning::OverAllocated { assigned, people_count }
            }
            AllocationWarning::UnderAllocated { assigned, people_count } => {
                BudgetWarning::UnderAllocated { assigned, people_count }
            }
            AllocationWarning::StaleFlight { flight_id } => BudgetWarning::StaleFlight { flight_id },
            AllocationWarning::StaleAccommodation { accommodation_id } => {
                BudgetWarning::StaleAccommodation { accommodation_id }
            }
        }
    }

    pub fn settings_to_dto(settings: DomainSettings) -> PlannerSettings {
        PlannerSettings {
            total_budget: settings.total_budget,
            people_count: settings.people_count,
        }
    }

    pub fn to_settings_response(result: SettingsResult) -> SettingsResponse {
        SettingsResponse {
            settings: Self::settings_to_dto(result.settings),
            persisted: result.persisted,
        }
    }

    pub fn to_budget_response(report: BudgetReport) -> BudgetResponse {
        let breakdown = report.breakdown;
        BudgetResponse {
            destination_id: report.destination_id,
            flight_cost: breakdown.flight_cost,
            accommodation_cost: breakdown.accommodation_cost,
            total_cost: breakdown.total_cost,
            remaining: breakdown.remaining,
            over_budget: breakdown.over_budget,
            settings: Self::settings_to_dto(report.settings),
            warnings: report.warnings.into_iter().map(Self::warning_to_dto).collect(),
        }
    }

    pub fn coordinates_to_dto(coordinates: DomainCoordinates) -> Coordinates {
        Coordinates {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }

    pub fn to_route_summary(route: Route) -> RouteSummary {
        RouteSummary {
            origin_name: route.origin_name,
            origin: Self::coordinates_to_dto(route.origin),
            destination_name: route.destination_name,
            destination: Self::coordinates_to_dto(route.destination),
            distance_km: route.distance_km,
        }
    }
}
