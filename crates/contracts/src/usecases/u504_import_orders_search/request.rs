use crate::usecases::common::CookieQuantity;
use serde::{Deserialize, Serialize};

/// Ответ orders/search Smart Cookies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersSearchPayload {
    #[serde(default)]
    pub orders: Vec<OrderSearchRecord>,
}

/// Сторона перемещения (совет / отряд / участница)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRef {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub party_type: Option<String>,
}

/// Одна запись фида: перемещение или маркер заказа
///
/// Числа и даты приходят то строками, то числами - поля оставлены
/// слабо типизированными, разбор защитный.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchRecord {
    #[serde(default)]
    pub order_number: Option<String>,
    /// Код типа перемещения ("C2T", "T2G", ...)
    #[serde(rename = "type")]
    pub transfer_type: String,
    #[serde(default)]
    pub from: Option<PartyRef>,
    #[serde(default)]
    pub to: Option<PartyRef>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub cookies: Vec<CookieQuantity>,
    #[serde(default)]
    pub total: Option<serde_json::Value>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    /// Флаги divider-ов, уточняющие T2G
    #[serde(default)]
    pub virtual_booth: bool,
    #[serde(default)]
    pub booth_divider: bool,
    #[serde(default)]
    pub direct_ship_divider: bool,
}
