pub mod reconciliation_builder;
pub mod roster_builder;
pub mod service;
pub mod troop_builder;
