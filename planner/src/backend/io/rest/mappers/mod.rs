pub mod budget_mapper;
pub mod destination_mapper;

pub use budget_mapper::BudgetMapper;
pub use destination_mapper::DestinationMapper;
