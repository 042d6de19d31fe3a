//! Колонки сводного отчёта совета
//!
//! Отчёт обогащает уже известные заказы организационным контекстом и
//! кросс-системными идентификаторами продавцов; основные поля заказа он
//! не перетирает (enrichment-слияние).

pub const ORDER_NUMBER: &str = "Order Number";
pub const GIRL_FIRST_NAME: &str = "Girl First Name";
pub const GIRL_LAST_NAME: &str = "Girl Last Name";
pub const GIRL_ID: &str = "Girl ID";
pub const GRADE: &str = "Grade";
pub const TROOP: &str = "Troop";
pub const SERVICE_UNIT: &str = "Service Unit";
pub const COUNCIL: &str = "Council";
pub const DISTRICT: &str = "District";
pub const ORDER_STATUS: &str = "Order Status";

pub const CORE_COLUMNS: &[&str] = &[
    ORDER_NUMBER,
    GIRL_FIRST_NAME,
    GIRL_LAST_NAME,
    GIRL_ID,
    GRADE,
    TROOP,
    SERVICE_UNIT,
    COUNCIL,
    DISTRICT,
    ORDER_STATUS,
];
