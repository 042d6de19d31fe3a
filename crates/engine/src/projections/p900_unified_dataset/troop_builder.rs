//! Проход 7: карманы отряда, разбивка перемещений, проекция выручки

use crate::domain::store::CookieStore;
use crate::projections::p900_unified_dataset::roster_builder::{site_from_stock, RosterOutput};
use contracts::domain::a003_transfer::aggregate::TransferCategory;
use contracts::domain::common::DataSource;
use contracts::enums::OrderOwner;
use contracts::projections::p900_unified_dataset::dto::{
    CategoryTotals, ParticipationCounts, ProceedsProjection, TransferBreakdown, TroopTotals,
};

/// Разбивка перемещений по категориям
///
/// Неопознанные коды собираются в собственный карман "unclassified" и не
/// загрязняют ни один осмысленный итог.
pub fn build_breakdown(store: &CookieStore) -> TransferBreakdown {
    let mut breakdown = TransferBreakdown::default();
    for transfer in &store.transfers {
        let entry = breakdown
            .by_category
            .entry(transfer.category.key().to_string())
            .or_insert_with(CategoryTotals::default);
        entry.count += 1;
        entry.packages += transfer.packages;
        entry.physical_packages += transfer.physical_packages;
        entry.amount += transfer.amount;
    }
    breakdown
}

pub fn build_troop_totals(store: &CookieStore, roster: &RosterOutput) -> TroopTotals {
    let mut totals = TroopTotals::default();

    for transfer in &store.transfers {
        let physical = transfer.physical_packages;
        match &transfer.category {
            TransferCategory::CouncilToTroop => totals.council_received += physical,
            TransferCategory::TroopOutgoing => totals.troop_outgoing += physical,
            TransferCategory::GirlPickup => totals.girl_pickups += physical,
            TransferCategory::VirtualBoothAllocation => totals.virtual_booth += physical,
            TransferCategory::BoothSalesAllocation => totals.booth_divider += physical,
            TransferCategory::DirectShip => totals.direct_ship += physical,
            TransferCategory::GirlReturn => totals.returns += physical,
            _ => {}
        }
    }

    totals.site_from_stock = site_from_stock(&roster.site_orders);
    totals.net_inventory = totals.council_received
        - totals.girl_pickups
        - (totals.booth_divider + totals.virtual_booth)
        - totals.site_from_stock
        + totals.returns;

    // Пожертвования: DC-заказы продавцов (site не в счёт) + зачёты divider-ов
    let mut donations = 0;
    for order in store.orders.values() {
        if order.owner == OrderOwner::Girl && order.has_source(DataSource::DigitalCookieExport) {
            donations += order.donations;
        }
    }
    for allocation in &store.allocations {
        donations += allocation.donations;
    }
    totals.donations = donations;

    totals.packages_credited = totals.council_received + totals.donations + totals.direct_ship;

    totals.participation = participation(roster);
    totals.proceeds = proceeds(store, totals.packages_credited, totals.participation.active);
    totals
}

fn participation(roster: &RosterOutput) -> ParticipationCounts {
    let real_scouts: Vec<_> = roster.scouts.values().filter(|s| !s.is_site).collect();
    let active = real_scouts
        .iter()
        .filter(|s| s.totals.total_sold > 0)
        .count();
    let negative_inventory = real_scouts
        .iter()
        .filter(|s| !s.issues.is_empty())
        .count();
    ParticipationCounts {
        total: real_scouts.len(),
        active,
        inactive: real_scouts.len() - active,
        negative_inventory,
    }
}

/// Проекция выручки: ставка - ступенчатая функция числа активных
/// продавцов, первые N коробок каждого активного продавца не приносят
/// отряду выручки
fn proceeds(store: &CookieStore, packages_credited: i32, active: usize) -> ProceedsProjection {
    let section = &store.config.proceeds;
    let rate = section.rate_for_active(active);
    let gross_proceeds = f64::from(packages_credited) * rate;
    let exemption_deduction =
        (active as f64) * f64::from(section.exempt_packages_per_scout) * rate;
    ProceedsProjection {
        active_scouts: active,
        rate,
        packages_credited,
        gross_proceeds,
        exempt_packages_per_scout: section.exempt_packages_per_scout,
        exemption_deduction,
        troop_proceeds: gross_proceeds - exemption_deduction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_transfer::service::{record_transfer, TransferDraft};
    use crate::projections::p900_unified_dataset::roster_builder::build_roster;
    use crate::shared::config::default_config;
    use contracts::domain::common::{Variety, VarietyCounts};

    fn counts(v: Variety, n: i32) -> VarietyCounts {
        let mut c = VarietyCounts::new();
        c.add(v, n);
        c
    }

    #[test]
    fn test_breakdown_keys_and_unclassified_bucket() {
        let mut store = CookieStore::new(default_config());
        record_transfer(
            &mut store,
            TransferDraft {
                raw_type: "C2T".into(),
                varieties: counts(Variety::ThinMints, 10),
                ..Default::default()
            },
            DataSource::TransferLedger,
        );
        record_transfer(
            &mut store,
            TransferDraft {
                raw_type: "XB9".into(),
                varieties: counts(Variety::Trefoils, 3),
                ..Default::default()
            },
            DataSource::TransferLedger,
        );

        let breakdown = build_breakdown(&store);
        assert_eq!(breakdown.by_category["council_to_troop"].physical_packages, 10);
        assert_eq!(breakdown.by_category["unclassified"].count, 1);
        assert_eq!(breakdown.by_category["unclassified"].physical_packages, 3);
    }

    #[test]
    fn test_unclassified_does_not_leak_into_buckets() {
        let mut store = CookieStore::new(default_config());
        record_transfer(
            &mut store,
            TransferDraft {
                raw_type: "XB9".into(),
                varieties: counts(Variety::ThinMints, 50),
                ..Default::default()
            },
            DataSource::TransferLedger,
        );
        let roster = build_roster(&store);
        let totals = build_troop_totals(&store, &roster);
        assert_eq!(totals.council_received, 0);
        assert_eq!(totals.net_inventory, 0);
        assert_eq!(totals.packages_credited, 0);
    }
}
