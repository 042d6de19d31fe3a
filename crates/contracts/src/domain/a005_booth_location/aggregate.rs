use crate::domain::common::VarietyCounts;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Временной слот точки продаж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoothTimeSlot {
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Точка продаж из справочника Smart Cookies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoothLocation {
    pub location_id: String,
    pub store_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub slots: Vec<BoothTimeSlot>,
}

/// Бронь точки продаж
///
/// `distributed` - коробки брони уже разнесены divider-ом по продавцам.
/// Нераспределённые брони - диагностика, а не ошибка.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoothReservation {
    pub reservation_id: String,
    pub store_name: Option<String>,
    pub booth_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub varieties: VarietyCounts,
    pub distributed: bool,
}
