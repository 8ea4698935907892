//! Local trip planner backend: destinations with their flight and
//! accommodation options, a shared budget, and a portable JSON export.

pub mod backend;
pub mod config;
