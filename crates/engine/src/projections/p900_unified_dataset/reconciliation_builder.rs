//! Проход 8: сводки по сортам и сверка пожертвований

use crate::domain::store::CookieStore;
use contracts::domain::a003_transfer::aggregate::TransferCategory;
use contracts::domain::common::Variety;
use contracts::enums::OrderOwner;
use contracts::domain::common::DataSource;
use contracts::projections::p900_unified_dataset::dto::{DonationReconciliation, VarietyTotals};

/// Сводка по каждому сорту: продано, зачтено, отрядный остаток
///
/// Отрядный остаток считается только по категориям перемещений: приход на
/// C2T, расход на выдаче и booth-каналах, возврат обратно на G2T.
/// Виртуальный сорт в складскую арифметику не входит.
pub fn build_variety_totals(store: &CookieStore) -> Vec<VarietyTotals> {
    let mut totals: Vec<VarietyTotals> = Variety::all()
        .into_iter()
        .map(|variety| VarietyTotals {
            variety,
            sold: 0,
            credited: 0,
            troop_inventory: 0,
            unit_price: store.config.pricing.unit_price(variety),
        })
        .collect();

    for entry in totals.iter_mut() {
        let v = entry.variety;

        for order in store.orders.values() {
            if order.owner == OrderOwner::Girl {
                entry.sold += order.varieties.get(v);
            }
        }

        for allocation in &store.allocations {
            entry.credited += allocation.varieties.get(v);
        }

        if v.is_physical() {
            for transfer in &store.transfers {
                let n = transfer.physical_varieties.get(v);
                match &transfer.category {
                    TransferCategory::CouncilToTroop => entry.troop_inventory += n,
                    TransferCategory::GirlPickup
                    | TransferCategory::BoothSalesAllocation
                    | TransferCategory::VirtualBoothAllocation => entry.troop_inventory -= n,
                    TransferCategory::GirlReturn => entry.troop_inventory += n,
                    _ => {}
                }
            }
        }
    }

    totals
}

/// Сверка пожертвований между платформами
///
/// Электронно оплаченные пожертвования DC доезжают до совета сами;
/// наличные требуют ручной записи (DOC) в журнале перемещений. Сверка
/// сошлась, когда ручная потребность равна ручным записям.
pub fn build_donation_reconciliation(store: &CookieStore) -> DonationReconciliation {
    let mut auto_synced = 0;
    let mut needs_manual = 0;
    for order in store.orders.values() {
        if order.owner != OrderOwner::Girl
            || !order.has_source(DataSource::DigitalCookieExport)
            || order.donations == 0
        {
            continue;
        }
        if order.payment_method.is_electronic() {
            auto_synced += order.donations;
        } else {
            needs_manual += order.donations;
        }
    }

    let mut manual_entered = 0;
    for transfer in &store.transfers {
        if matches!(
            transfer.category,
            TransferCategory::DonationRecord | TransferCategory::BoothDonationRecord
        ) {
            manual_entered += transfer.packages;
        }
    }

    DonationReconciliation {
        auto_synced,
        needs_manual,
        manual_entered,
        reconciled: needs_manual == manual_entered,
    }
}
