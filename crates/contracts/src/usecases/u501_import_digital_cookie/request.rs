//! Колонки выгрузки заказов Digital Cookie ("all order data")
//!
//! Всё, что не входит в [`CORE_COLUMNS`], трактуется как колонка сорта и
//! резолвится через таблицу алиасов; неопознанная колонка сорта - warning.

pub const ORDER_NUMBER: &str = "Order Number";
pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const SCOUT_ID: &str = "Scout ID";
pub const ORDER_TYPE: &str = "Order Type";
pub const PAYMENT_TYPE: &str = "Payment Type";
pub const ORDER_DATE: &str = "Order Date";
pub const ORDER_AMOUNT: &str = "Order Amount";
pub const TOTAL_PACKAGES: &str = "Total Packages";
pub const DONATION_PACKAGES: &str = "Donation Packages";
pub const ORDER_STATUS: &str = "Order Status";
pub const TROOP: &str = "Troop";
pub const SERVICE_UNIT: &str = "Service Unit";

/// Колонки, которые не являются колонками сортов
pub const CORE_COLUMNS: &[&str] = &[
    ORDER_NUMBER,
    FIRST_NAME,
    LAST_NAME,
    SCOUT_ID,
    ORDER_TYPE,
    PAYMENT_TYPE,
    ORDER_DATE,
    ORDER_AMOUNT,
    TOTAL_PACKAGES,
    DONATION_PACKAGES,
    ORDER_STATUS,
    TROOP,
    SERVICE_UNIT,
];
