use crate::domain::common::{DataSource, VarietyCounts};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Категория перемещения
///
/// Назначается классификатором ровно один раз при создании записи и дальше
/// никогда не пересчитывается: только категория решает, в какой карман
/// отряда/продавца попадут коробки перемещения.
///
/// `Unclassified` несёт исходный код: неизвестный тип не маскируется под
/// существующую категорию и не попадает ни в один итог.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferCategory {
    /// Совет -> отряд (включая начальный заказ)
    CouncilToTroop,
    /// Отряд -> другой отряд (исходящее)
    TroopOutgoing,
    /// Отряд -> участница (выдача со склада)
    GirlPickup,
    /// Участница -> отряд (возврат)
    GirlReturn,
    /// Выдача через virtual booth divider
    VirtualBoothAllocation,
    /// Выдача через booth divider
    BoothSalesAllocation,
    /// Выдача через direct-ship divider
    DirectShipAllocation,
    /// Маркер записи заказа
    OrderRecord,
    /// Ручная запись пожертвования
    DonationRecord,
    /// Пожертвование с точки продаж
    BoothDonationRecord,
    /// Прямая отправка
    DirectShip,
    /// Плановый заказ
    Planned,
    /// Неопознанный код типа (сохраняется как есть)
    Unclassified(String),
}

impl TransferCategory {
    /// Ключ кармана для разбивок
    pub fn key(&self) -> &'static str {
        match self {
            TransferCategory::CouncilToTroop => "council_to_troop",
            TransferCategory::TroopOutgoing => "troop_outgoing",
            TransferCategory::GirlPickup => "girl_pickup",
            TransferCategory::GirlReturn => "girl_return",
            TransferCategory::VirtualBoothAllocation => "virtual_booth_allocation",
            TransferCategory::BoothSalesAllocation => "booth_sales_allocation",
            TransferCategory::DirectShipAllocation => "direct_ship_allocation",
            TransferCategory::OrderRecord => "order_record",
            TransferCategory::DonationRecord => "donation_record",
            TransferCategory::BoothDonationRecord => "booth_donation_record",
            TransferCategory::DirectShip => "direct_ship",
            TransferCategory::Planned => "planned",
            TransferCategory::Unclassified(_) => "unclassified",
        }
    }

    pub fn is_unclassified(&self) -> bool {
        matches!(self, TransferCategory::Unclassified(_))
    }
}

/// Одно перемещение коробок/денег между советом, отрядом и участницами
///
/// Идентичности нет: список перемещений append-only, дубликаты между
/// пересекающимися фидами возможны и не подавляются.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    /// Исходный код типа из фида
    pub raw_type: String,
    pub category: TransferCategory,
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<NaiveDate>,
    /// Все коробки, включая Cookie Share
    pub packages: i32,
    /// Без Cookie Share
    pub physical_packages: i32,
    pub varieties: VarietyCounts,
    pub physical_varieties: VarietyCounts,
    pub amount: f64,
    pub status: Option<String>,
    pub pending: bool,
    pub source: DataSource,
}

impl Transfer {
    /// Собрать перемещение из количеств по сортам; итоги и физическая
    /// проекция выводятся из `varieties`
    pub fn from_varieties(
        raw_type: impl Into<String>,
        category: TransferCategory,
        varieties: VarietyCounts,
        source: DataSource,
    ) -> Self {
        let physical_varieties = varieties.physical();
        Self {
            raw_type: raw_type.into(),
            category,
            from: None,
            to: None,
            date: None,
            packages: varieties.total(),
            physical_packages: physical_varieties.total(),
            varieties,
            physical_varieties,
            amount: 0.0,
            status: None,
            pending: false,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Variety;

    #[test]
    fn test_from_varieties_splits_physical() {
        let mut counts = VarietyCounts::new();
        counts.add(Variety::ThinMints, 4);
        counts.add(Variety::CookieShare, 2);

        let t = Transfer::from_varieties(
            "T2G",
            TransferCategory::GirlPickup,
            counts,
            DataSource::TransferLedger,
        );
        assert_eq!(t.packages, 6);
        assert_eq!(t.physical_packages, 4);
        assert_eq!(t.physical_varieties.get(Variety::CookieShare), 0);
    }

    #[test]
    fn test_unclassified_keeps_raw_code() {
        let c = TransferCategory::Unclassified("XB9".to_string());
        assert_eq!(c.key(), "unclassified");
        assert!(c.is_unclassified());
    }
}
