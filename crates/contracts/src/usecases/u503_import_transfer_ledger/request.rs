//! Колонки выгрузки журнала перемещений Smart Cookies

pub const TRANSFER_TYPE: &str = "Type";
pub const FROM: &str = "From";
pub const TO: &str = "To";
pub const DATE: &str = "Date";
pub const TOTAL_PACKAGES: &str = "Total Packages";
pub const TOTAL_CASES: &str = "Total Cases";
pub const AMOUNT: &str = "Amount";
pub const STATUS: &str = "Status";
pub const ACTION: &str = "Action";

pub const CORE_COLUMNS: &[&str] = &[
    TRANSFER_TYPE,
    FROM,
    TO,
    DATE,
    TOTAL_PACKAGES,
    TOTAL_CASES,
    AMOUNT,
    STATUS,
    ACTION,
];
