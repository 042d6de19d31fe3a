use crate::usecases::common::CookieQuantity;
use serde::{Deserialize, Serialize};

/// Direct-ship divider: распределение отрядных отправок по продавцам
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectShipDividerPayload {
    #[serde(default)]
    pub divider_id: Option<serde_json::Value>,
    #[serde(default)]
    pub girls: Vec<DirectShipGirlAllocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectShipGirlAllocation {
    pub girl_id: serde_json::Value,
    #[serde(default)]
    pub cookies: Vec<CookieQuantity>,
}

/// Booth divider: распределение продаж точек по продавцам, сгруппированное
/// по броням
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothDividerPayload {
    #[serde(default)]
    pub reservations: Vec<BoothDividerReservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothDividerReservation {
    pub reservation_id: serde_json::Value,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub booth_date: Option<String>,
    /// Виртуальная точка (зачёты идут в канал virtual booth)
    #[serde(default)]
    pub virtual_booth: bool,
    #[serde(default)]
    pub girls: Vec<BoothGirlAllocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothGirlAllocation {
    pub girl_id: serde_json::Value,
    #[serde(default)]
    pub cookies: Vec<CookieQuantity>,
}

/// Фид броней точек продаж
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsPayload {
    #[serde(default)]
    pub reservations: Vec<ReservationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub reservation_id: serde_json::Value,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub booth_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub cookies: Vec<CookieQuantity>,
    #[serde(default)]
    pub distributed: Option<bool>,
}

/// Справочник точек продаж
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothLocationsPayload {
    #[serde(default)]
    pub locations: Vec<BoothLocationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothLocationRecord {
    pub location_id: serde_json::Value,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub slots: Vec<TimeSlotRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}
