pub mod a001_order;
pub mod a002_scout;
pub mod a003_transfer;
pub mod a004_allocation;
pub mod store;
