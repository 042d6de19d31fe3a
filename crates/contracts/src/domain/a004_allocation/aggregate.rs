use crate::domain::common::{DataSource, VarietyCounts};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Канал, через который продавцу засчитана отрядная продажа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationChannel {
    BoothSale,
    VirtualBooth,
    DirectShip,
}

impl AllocationChannel {
    pub fn key(&self) -> &'static str {
        match self {
            AllocationChannel::BoothSale => "booth_sale",
            AllocationChannel::VirtualBooth => "virtual_booth",
            AllocationChannel::DirectShip => "direct_ship",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AllocationChannel::BoothSale => "Booth sale divider",
            AllocationChannel::VirtualBooth => "Virtual booth divider",
            AllocationChannel::DirectShip => "Direct ship divider",
        }
    }

    pub fn all() -> Vec<AllocationChannel> {
        vec![
            AllocationChannel::BoothSale,
            AllocationChannel::VirtualBooth,
            AllocationChannel::DirectShip,
        ]
    }
}

/// Зачёт продавцу за продажу, исполненную отрядным каналом
///
/// Дедупликация по составному ключу (divider_key, girl_id): повторная
/// выгрузка того же состояния divider-а не создаёт новый зачёт.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub channel: AllocationChannel,
    /// Числовой id продавца в Smart Cookies
    pub girl_id: i64,
    /// Физические коробки
    pub packages: i32,
    /// Пожертвования (Cookie Share)
    pub donations: i32,
    pub varieties: VarietyCounts,
    /// Идентичность divider-а или брони
    pub divider_key: String,
    pub store_name: Option<String>,
    pub booth_date: Option<NaiveDate>,
    pub source: DataSource,
}

impl Allocation {
    pub fn from_varieties(
        channel: AllocationChannel,
        girl_id: i64,
        divider_key: impl Into<String>,
        varieties: VarietyCounts,
        source: DataSource,
    ) -> Self {
        Self {
            channel,
            girl_id,
            packages: varieties.physical_total(),
            donations: varieties.donation_count(),
            varieties,
            divider_key: divider_key.into(),
            store_name: None,
            booth_date: None,
            source,
        }
    }

    pub fn dedup_key(&self) -> (String, i64) {
        (self.divider_key.clone(), self.girl_id)
    }

    /// Полный зачёт продавцу: коробки + пожертвования
    pub fn credited(&self) -> i32 {
        self.packages + self.donations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Variety;

    #[test]
    fn test_from_varieties_splits_donations() {
        let mut counts = VarietyCounts::new();
        counts.add(Variety::Samoas, 4);
        counts.add(Variety::CookieShare, 1);

        let a = Allocation::from_varieties(
            AllocationChannel::BoothSale,
            501,
            "res-1",
            counts,
            DataSource::BoothDivider,
        );
        assert_eq!(a.packages, 4);
        assert_eq!(a.donations, 1);
        assert_eq!(a.credited(), 5);
        assert_eq!(a.dedup_key(), ("res-1".to_string(), 501));
    }
}
