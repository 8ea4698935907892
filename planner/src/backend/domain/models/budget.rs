use std::collections::BTreeMap;

/// Which options the user is currently pricing up.
///
/// Flight ids map to the number of people booked on that flight. Ids that no
/// longer exist on the destination are ignored by the aggregator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetSelection {
    pub flight_allocations: BTreeMap<String, u32>,
    pub accommodation_id: Option<String>,
}

/// Cost totals for a selection; never cached, always recomputed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBreakdown {
    pub flight_cost: f64,
    pub accommodation_cost: f64,
    pub total_cost: f64,
    pub remaining: f64,
    pub over_budget: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AllocationWarning {
    OverAllocated { assigned: u32, people_count: u32 },
    UnderAllocated { assigned: u32, people_count: u32 },
    StaleFlight { flight_id: String },
    StaleAccommodation { accommodation_id: String },
}
