use serde::{Deserialize, Serialize};

/// Способ оплаты заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    Venmo,
    Unrecognized,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Unrecognized
    }
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Venmo => "venmo",
            PaymentMethod::Unrecognized => "unrecognized",
        }
    }

    /// `None` - неизвестный способ оплаты; вызывающая сторона фиксирует warning
    pub fn from_code(raw: &str) -> Option<Self> {
        let norm = raw.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "credit card" | "credit" | "card" => Some(PaymentMethod::CreditCard),
            "venmo" => Some(PaymentMethod::Venmo),
            _ => None,
        }
    }

    pub fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }

    /// Электронный платёж (синхронизируется между платформами автоматически)
    pub fn is_electronic(&self) -> bool {
        matches!(self, PaymentMethod::CreditCard | PaymentMethod::Venmo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(PaymentMethod::from_code("Cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::from_code("Credit Card"), Some(PaymentMethod::CreditCard));
        assert_eq!(PaymentMethod::from_code("VENMO"), Some(PaymentMethod::Venmo));
        assert_eq!(PaymentMethod::from_code("barter"), None);
    }

    #[test]
    fn test_is_electronic() {
        assert!(PaymentMethod::CreditCard.is_electronic());
        assert!(PaymentMethod::Venmo.is_electronic());
        assert!(!PaymentMethod::Cash.is_electronic());
        assert!(!PaymentMethod::Unrecognized.is_electronic());
    }
}
