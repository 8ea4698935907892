//! Budget aggregation for a destination's flight and accommodation options.
//!
//! [`compute_budget`] is a pure function of its inputs and is safe to call on
//! every keystroke. Over-budget results and over-allocated headcounts are
//! reported as data, never as errors.

use anyhow::Result;
use tracing::{debug, info};

use crate::backend::domain::commands::budget::{BudgetReport, EvaluateBudgetCommand};
use crate::backend::domain::destination_service::DestinationService;
use crate::backend::domain::destination_store::DestinationError;
use crate::backend::domain::models::budget::{AllocationWarning, BudgetBreakdown, BudgetSelection};
use crate::backend::domain::models::destination::{Accommodation, Flight};
use crate::backend::domain::models::settings::PlannerSettings;
use crate::backend::domain::settings_service::SettingsService;

/// Price a selection against the shared budget
pub fn compute_budget(
    flights: &[Flight],
    accommodations: &[Accommodation],
    selection: &BudgetSelection,
    settings: &PlannerSettings,
) -> BudgetBreakdown {
    let flight_cost: f64 = selection
        .flight_allocations
        .iter()
        .filter_map(|(flight_id, count)| {
            flights
                .iter()
                .find(|f| &f.id == flight_id)
                .map(|f| f.price_per_person * f64::from(*count))
        })
        .sum();

    let accommodation_cost = selection
        .accommodation_id
        .as_deref()
        .and_then(|id| accommodations.iter().find(|a| a.id == id))
        .map(|a| a.total_price)
        .unwrap_or(0.0);

    let total_cost = flight_cost + accommodation_cost;
    let remaining = settings.total_budget - total_cost;

    BudgetBreakdown {
        flight_cost,
        accommodation_cost,
        total_cost,
        remaining,
        over_budget: remaining < 0.0,
    }
}

/// Caller-level checks on a selection; none of these block the computation
pub fn check_allocation(
    flights: &[Flight],
    accommodations: &[Accommodation],
    selection: &BudgetSelection,
    settings: &PlannerSettings,
) -> Vec<AllocationWarning> {
    let mut warnings = Vec::new();
    let mut assigned: u32 = 0;

    for (flight_id, count) in &selection.flight_allocations {
        if flights.iter().any(|f| &f.id == flight_id) {
            assigned = assigned.saturating_add(*count);
        } else {
            warnings.push(AllocationWarning::StaleFlight {
                flight_id: flight_id.clone(),
            });
        }
    }

    if let Some(accommodation_id) = selection.accommodation_id.as_deref() {
        if !accommodations.iter().any(|a| a.id == accommodation_id) {
            warnings.push(AllocationWarning::StaleAccommodation {
                accommodation_id: accommodation_id.to_string(),
            });
        }
    }

    let people_count = settings.people_count;
    if assigned > people_count {
        warnings.push(AllocationWarning::OverAllocated { assigned, people_count });
    } else if assigned > 0 && assigned < people_count {
        warnings.push(AllocationWarning::UnderAllocated { assigned, people_count });
    }

    warnings
}

/// Loads a destination and the current settings, then prices a selection
#[derive(Clone)]
pub struct BudgetService {
    destination_service: DestinationService,
    settings_service: SettingsService,
}

impl BudgetService {
    pub fn new(destination_service: DestinationService, settings_service: SettingsService) -> Self {
        Self {
            destination_service,
            settings_service,
        }
    }

    pub async fn evaluate(&self, command: EvaluateBudgetCommand) -> Result<BudgetReport> {
        info!(
            "Evaluating budget for destination {} ({} flight allocations)",
            command.destination_id,
            command.selection.flight_allocations.len()
        );

        let destination = self
            .destination_service
            .get_destination(&command.destination_id)
            .await
            .ok_or_else(|| DestinationError::NotFound(command.destination_id.clone()))?;
        let settings = self.settings_service.get_settings().await;

        let breakdown = compute_budget(
            &destination.flights,
            &destination.accommodations,
            &command.selection,
            &settings,
        );
        let warnings = check_allocation(
            &destination.flights,
            &destination.accommodations,
            &command.selection,
            &settings,
        );

        debug!(
            "Budget for {}: total {:.2}, remaining {:.2}, {} warning(s)",
            destination.id,
            breakdown.total_cost,
            breakdown.remaining,
            warnings.len()
        );

        Ok(BudgetReport {
            destination_id: destination.id,
            breakdown,
            settings,
            warnings,
        })
    }
}
