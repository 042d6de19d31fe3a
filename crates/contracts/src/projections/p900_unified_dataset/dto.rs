//! Выходные типы единого датасета
//!
//! Всё здесь - вычисляемые представления: агрегатор строит их заново на
//! каждом прогоне и никогда не записывает производные поля обратно в
//! персистентные сущности.

use crate::domain::a001_order::aggregate::Order;
use crate::domain::a004_allocation::aggregate::Allocation;
use crate::domain::common::{Variety, VarietyCounts};
use crate::shared::run_log::{ImportProvenance, Warning};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Недостача по сорту: возврат/продажа превысили выдачу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativeInventoryIssue {
    pub variety: Variety,
    /// Величина недостачи (положительное число коробок)
    pub shortfall: i32,
}

/// Складская картина продавца
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutInventory {
    /// Выдано со склада отряда (girl pickup, физические коробки)
    pub picked_up: VarietyCounts,
    /// Возвращено на склад отряда
    pub returned: VarietyCounts,
    /// Остаток по сорту: выдано − возвращено − продано (знаковый)
    pub remainders: BTreeMap<Variety, i32>,
    /// Знаковая сумма остатков; может быть отрицательной
    pub signed_total: i32,
    /// Витринный итог: сумма только положительных остатков
    pub display_total: i32,
    /// Витринные остатки (только положительные)
    pub display_by_variety: BTreeMap<Variety, i32>,
}

/// Финансовые итоги продавца
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoutFinancials {
    /// Наличные по заказам продавца
    pub cash_collected: f64,
    /// Электронные платежи по заказам, исполняемым из запаса
    /// (direct-ship не списывает физический запас и сюда не входит)
    pub electronic_payments: f64,
    /// Стоимость взятого запаса: (выдано − возвращено) × цена сорта
    pub inventory_value: f64,
    /// max(0, inventory_value − electronic − наличные по запасу)
    pub unsold_value: f64,
    /// cash_collected + unsold_value
    pub cash_owed: f64,
}

/// Зачёты по каналам divider-ов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditedByChannel {
    pub booth_sale: i32,
    pub virtual_booth: i32,
    pub direct_ship: i32,
}

impl CreditedByChannel {
    pub fn total(&self) -> i32 {
        self.booth_sale + self.virtual_booth + self.direct_ship
    }
}

/// Итоги продавца
///
/// Определяющее равенство, по построению:
/// `total_sold == delivered + shipped + donations + credited`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutTotals {
    /// Физические коробки по заказам delivery/in-hand
    pub delivered: i32,
    /// Физические коробки по direct-ship заказам
    pub shipped: i32,
    /// Пожертвования по всем заказам продавца
    pub donations: i32,
    /// Сумма зачётов по всем каналам
    pub credited: i32,
    pub credited_by_channel: CreditedByChannel,
    pub total_sold: i32,
    pub financial: ScoutFinancials,
}

/// Продавец в едином датасете
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedScout {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub girl_id: Option<i64>,
    pub dc_id: Option<String>,
    /// Псевдопродавец отряда ("site"); исключён из складского учёта
    pub is_site: bool,
    /// Заказы продавца в порядке дат, затем номеров
    pub orders: Vec<Order>,
    pub allocations: Vec<Allocation>,
    pub inventory: ScoutInventory,
    pub totals: ScoutTotals,
    pub issues: Vec<NegativeInventoryIssue>,
    /// Количество заказов по статусам
    pub status_counts: BTreeMap<String, usize>,
}

/// Суммы одной категории перемещений
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub count: usize,
    pub packages: i32,
    pub physical_packages: i32,
    pub amount: f64,
}

/// Разбивка перемещений по категориям (ключ - `TransferCategory::key`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferBreakdown {
    pub by_category: BTreeMap<String, CategoryTotals>,
}

/// Финансовая проекция выручки отряда
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProceedsProjection {
    pub active_scouts: usize,
    /// Ставка за коробку, выбранная по числу активных продавцов
    pub rate: f64,
    pub packages_credited: i32,
    pub gross_proceeds: f64,
    pub exempt_packages_per_scout: i32,
    /// Вычет за первые N коробок каждого активного продавца
    pub exemption_deduction: f64,
    pub troop_proceeds: f64,
}

/// Участие продавцов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipationCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub negative_inventory: usize,
}

/// Итоги отряда
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TroopTotals {
    // Карманы по категориям перемещений (физические коробки)
    pub council_received: i32,
    pub troop_outgoing: i32,
    pub girl_pickups: i32,
    pub virtual_booth: i32,
    pub booth_divider: i32,
    pub direct_ship: i32,
    pub returns: i32,
    /// Site-заказы, исполненные из отрядного запаса
    pub site_from_stock: i32,

    /// received − girl_pickups − (booth_divider + virtual_booth)
    ///          − site_from_stock + returns
    pub net_inventory: i32,
    /// Пожертвования DC (не-site) + пожертвования из зачётов
    pub donations: i32,
    /// received + donations + direct_ship - база проекции выручки
    pub packages_credited: i32,
    pub proceeds: ProceedsProjection,
    pub participation: ParticipationCounts,
}

/// Сводка по сорту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarietyTotals {
    pub variety: Variety,
    /// Продано по заказам всех продавцов
    pub sold: i32,
    /// Зачтено через divider-ы
    pub credited: i32,
    /// Отрядный остаток по перемещениям (для Cookie Share всегда 0)
    pub troop_inventory: i32,
    pub unit_price: f64,
}

/// Сверка пожертвований между платформами
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationReconciliation {
    /// Синхронизируются автоматически (электронная оплата)
    pub auto_synced: i32,
    /// Требуют ручного ввода на стороне совета
    pub needs_manual: i32,
    /// Введено вручную (donation-записи журнала перемещений)
    pub manual_entered: i32,
    /// needs_manual == manual_entered
    pub reconciled: bool,
}

/// Канал site-заказов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteChannel {
    pub order_numbers: Vec<String>,
    /// Физические коробки site-заказов канала
    pub packages: i32,
    /// Разнесено divider-ом по продавцам (физические коробки)
    pub allocated: i32,
    /// packages − allocated
    pub unallocated: i32,
    pub has_warning: bool,
}

/// Заказы отряда ("site"), отслеживаемые отдельно от продавцов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteOrdersDataset {
    pub booth_sale: SiteChannel,
    pub direct_ship: SiteChannel,
    pub girl_delivery: SiteChannel,
}

/// Health-счётчики прогона
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthChecks {
    /// Неопознанные типы заказов DC - блокирующий для витрины счётчик
    pub unknown_order_types: usize,
    pub unknown_payment_methods: usize,
    pub unknown_transfer_types: usize,
    pub unresolved_transfer_directions: usize,
    pub unknown_girl_ids: usize,
    pub negative_inventory_scouts: usize,
}

/// Метаданные прогона
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub troop_number: Option<String>,
    pub troop_name: Option<String>,
    pub built_at: DateTime<Utc>,
    pub provenance: Vec<ImportProvenance>,
    pub warnings: Vec<Warning>,
    pub health: HealthChecks,
    pub booth_locations: usize,
    pub reservations: usize,
    /// Брони, ещё не разнесённые divider-ом
    pub undistributed_reservations: usize,
}

/// Единый датасет - результат агрегации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedDataset {
    /// Продавцы по отображаемому имени
    pub scouts: BTreeMap<String, UnifiedScout>,
    pub troop: TroopTotals,
    pub transfers: TransferBreakdown,
    pub varieties: Vec<VarietyTotals>,
    pub donations: DonationReconciliation,
    pub site_orders: SiteOrdersDataset,
    pub report: RunReport,
}
