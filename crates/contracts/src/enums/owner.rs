use serde::{Deserialize, Serialize};

/// Владелец заказа: конкретная участница или сам отряд ("site"-заказы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderOwner {
    Girl,
    Troop,
}

impl Default for OrderOwner {
    fn default() -> Self {
        OrderOwner::Troop
    }
}

impl OrderOwner {
    pub fn is_girl(&self) -> bool {
        matches!(self, OrderOwner::Girl)
    }

    pub fn is_troop(&self) -> bool {
        matches!(self, OrderOwner::Troop)
    }
}
