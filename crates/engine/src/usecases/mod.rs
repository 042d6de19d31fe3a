pub mod u501_import_digital_cookie;
pub mod u502_import_council_report;
pub mod u503_import_transfer_ledger;
pub mod u504_import_orders_search;
pub mod u505_import_allocations;
