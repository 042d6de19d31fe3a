use serde::{Deserialize, Serialize};

/// Количество одного сорта во вложенном массиве JSON-фида
///
/// Оба поля приходят то числами, то строками - разбор только защитный
/// (`shared::format` в engine).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieQuantity {
    /// Идентификатор сорта в Smart Cookies
    pub id: serde_json::Value,
    pub quantity: serde_json::Value,
}
