use serde::{Deserialize, Serialize};

/// Тип заказа (канал исполнения)
///
/// `Unrecognized` - код из выгрузки не удалось сопоставить; исходная
/// строка сохраняется в `Order::order_type_raw`, а случай попадает в
/// блокирующий health-счётчик.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Доставка участницей (girl delivery)
    Delivery,
    /// Продажа из рук в руки
    InHand,
    /// Прямая отправка покупателю со склада пекаря
    DirectShip,
    /// Полностью благотворительный заказ (Cookie Share)
    Donation,
    /// Продажа на точке (booth)
    Booth,
    Unrecognized,
}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::Unrecognized
    }
}

impl OrderType {
    pub fn code(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::InHand => "in_hand",
            OrderType::DirectShip => "direct_ship",
            OrderType::Donation => "donation",
            OrderType::Booth => "booth",
            OrderType::Unrecognized => "unrecognized",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderType::Delivery => "Girl Delivery",
            OrderType::InHand => "In Hand",
            OrderType::DirectShip => "Direct Ship",
            OrderType::Donation => "Donation",
            OrderType::Booth => "Booth Sale",
            OrderType::Unrecognized => "Unrecognized",
        }
    }

    /// Парсинг кода из выгрузки. Регистр и дефисы не значимы.
    /// `None` - неизвестный код; вызывающая сторона фиксирует warning.
    pub fn from_code(raw: &str) -> Option<Self> {
        let norm = raw.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "delivery" | "girl delivery" | "delivered" => Some(OrderType::Delivery),
            "in hand" | "cookies in hand" | "in person" => Some(OrderType::InHand),
            "direct ship" | "shipped" | "ship" => Some(OrderType::DirectShip),
            "donation" | "donated" | "cookie share" => Some(OrderType::Donation),
            "booth" | "booth sale" => Some(OrderType::Booth),
            _ => None,
        }
    }

    /// Заказ исполняется из физического запаса продавца
    pub fn consumes_inventory(&self) -> bool {
        matches!(self, OrderType::Delivery | OrderType::InHand)
    }

    pub fn is_direct_ship(&self) -> bool {
        matches!(self, OrderType::DirectShip)
    }
}
