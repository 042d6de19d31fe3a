//! Проходы 1–6: состав продавцов, заказы, склад, зачёты, итоги, финансы
//!
//! Строит по-продавцовую часть единого датасета. Хранилище только
//! читается; выход собирается с нуля на каждом прогоне.

use crate::domain::store::CookieStore;
use contracts::domain::a003_transfer::aggregate::TransferCategory;
use contracts::domain::a004_allocation::aggregate::AllocationChannel;
use contracts::domain::common::{Variety, VarietyCounts};
use contracts::enums::{OrderOwner, OrderType};
use contracts::projections::p900_unified_dataset::dto::{
    CreditedByChannel, NegativeInventoryIssue, ScoutFinancials, ScoutInventory, ScoutTotals,
    SiteOrdersDataset, UnifiedScout,
};
use std::collections::{BTreeMap, BTreeSet};

/// Результат по-продавцовых проходов
#[derive(Debug)]
pub struct RosterOutput {
    pub scouts: BTreeMap<String, UnifiedScout>,
    pub site_orders: SiteOrdersDataset,
    /// Зачёты, чей girl_id не нашёлся ни у одного продавца
    pub unmatched_allocations: usize,
}

pub fn build_roster(store: &CookieStore) -> RosterOutput {
    let mut scouts = init_scouts(store);
    let mut site_orders = attach_orders(store, &mut scouts);
    attach_inventory(store, &mut scouts);
    let unmatched_allocations = attach_allocations(store, &mut scouts);
    compute_totals(store, &mut scouts);
    allocate_site_channels(store, &mut site_orders);

    RosterOutput {
        scouts,
        site_orders,
        unmatched_allocations,
    }
}

/// Проход 1: объединение продавцов из заказов и реестра
///
/// Дедупликация по каноническому имени "First Last"; идентификаторы
/// подтягиваются из реестра, не перетирая уже известные.
fn init_scouts(store: &CookieStore) -> BTreeMap<String, UnifiedScout> {
    let mut names: BTreeSet<String> = BTreeSet::new();
    for order in store.orders.values() {
        if !order.scout_name.trim().is_empty() {
            names.insert(order.scout_name.trim().to_string());
        }
    }
    for name in store.scouts.keys() {
        names.insert(name.clone());
    }

    let mut scouts = BTreeMap::new();
    for name in names {
        let record = store.scouts.get(&name);
        let (first_name, last_name) = match record {
            Some(r) if !r.first_name.is_empty() || !r.last_name.is_empty() => {
                (r.first_name.clone(), r.last_name.clone())
            }
            _ => split_display_name(&name),
        };
        let is_site = last_name
            .trim()
            .eq_ignore_ascii_case(&store.config.troop.site_last_name);

        scouts.insert(
            name.clone(),
            UnifiedScout {
                display_name: name,
                first_name,
                last_name,
                girl_id: record.and_then(|r| r.girl_id),
                dc_id: record.and_then(|r| r.dc_id.clone()),
                is_site,
                orders: Vec::new(),
                allocations: Vec::new(),
                inventory: ScoutInventory::default(),
                totals: ScoutTotals::default(),
                issues: Vec::new(),
                status_counts: BTreeMap::new(),
            },
        );
    }
    scouts
}

fn split_display_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Проход 2: раскладка заказов
///
/// Заказы продавцов прикрепляются к их спискам; заказы отряда ("site")
/// уходят в отдельный датасет по каналам исполнения.
fn attach_orders(
    store: &CookieStore,
    scouts: &mut BTreeMap<String, UnifiedScout>,
) -> SiteOrdersDataset {
    let mut site = SiteOrdersDataset::default();

    for order in store.orders.values() {
        if order.owner == OrderOwner::Troop {
            let channel = match order.order_type {
                OrderType::Booth => Some(&mut site.booth_sale),
                OrderType::DirectShip => Some(&mut site.direct_ship),
                OrderType::Delivery | OrderType::InHand => Some(&mut site.girl_delivery),
                _ => None,
            };
            if let Some(channel) = channel {
                channel.order_numbers.push(order.order_number.clone());
                channel.packages += order.physical_packages;
            }
            continue;
        }

        let name = order.scout_name.trim();
        if name.is_empty() {
            continue;
        }
        if let Some(scout) = scouts.get_mut(name) {
            if let Some(status) = &order.status {
                *scout.status_counts.entry(status.clone()).or_insert(0) += 1;
            }
            scout.orders.push(order.clone());
        }
    }

    for scout in scouts.values_mut() {
        scout
            .orders
            .sort_by(|a, b| (a.order_date, &a.order_number).cmp(&(b.order_date, &b.order_number)));
    }
    site
}

/// Проход 3: склад продавца из перемещений выдачи и возврата
///
/// Site-псевдопродавец исключён из персонального складского учёта.
fn attach_inventory(store: &CookieStore, scouts: &mut BTreeMap<String, UnifiedScout>) {
    for scout in scouts.values_mut() {
        if scout.is_site {
            continue;
        }
        let mut picked_up = VarietyCounts::new();
        let mut returned = VarietyCounts::new();

        for transfer in &store.transfers {
            match &transfer.category {
                TransferCategory::GirlPickup => {
                    if party_is(transfer.to.as_deref(), &scout.display_name) {
                        picked_up.add_counts(&transfer.physical_varieties);
                    }
                }
                TransferCategory::GirlReturn => {
                    if party_is(transfer.from.as_deref(), &scout.display_name) {
                        returned.add_counts(&transfer.physical_varieties);
                    }
                }
                _ => {}
            }
        }

        scout.inventory.picked_up = picked_up;
        scout.inventory.returned = returned;
    }
}

fn party_is(party: Option<&str>, name: &str) -> bool {
    party
        .map(|p| p.trim().eq_ignore_ascii_case(name.trim()))
        .unwrap_or(false)
}

/// Проход 4: зачёты по girl_id
fn attach_allocations(store: &CookieStore, scouts: &mut BTreeMap<String, UnifiedScout>) -> usize {
    let mut by_girl_id: BTreeMap<i64, String> = BTreeMap::new();
    for scout in scouts.values() {
        if let Some(id) = scout.girl_id {
            by_girl_id.entry(id).or_insert_with(|| scout.display_name.clone());
        }
    }

    let mut unmatched = 0;
    for allocation in &store.allocations {
        let scout = by_girl_id
            .get(&allocation.girl_id)
            .and_then(|name| scouts.get_mut(name));
        match scout {
            Some(scout) => scout.allocations.push(allocation.clone()),
            None => {
                tracing::warn!(
                    "allocation for unknown girl id {} left unattached",
                    allocation.girl_id
                );
                unmatched += 1;
            }
        }
    }
    unmatched
}

/// Проходы 5–6: итоги и финансы продавца
///
/// Определяющее равенство собирается по построению:
/// `total_sold = delivered + shipped + donations + credited`.
fn compute_totals(store: &CookieStore, scouts: &mut BTreeMap<String, UnifiedScout>) {
    for scout in scouts.values_mut() {
        if scout.is_site {
            continue;
        }

        let mut delivered = 0;
        let mut shipped = 0;
        let mut donations = 0;
        let mut sold_from_stock = VarietyCounts::new();
        let mut cash_collected = 0.0;
        let mut electronic_payments = 0.0;
        let mut cash_from_stock_orders = 0.0;

        for order in &scout.orders {
            donations += order.donations;
            if order.order_type.consumes_inventory() {
                delivered += order.physical_packages;
                sold_from_stock.add_counts(&order.varieties.physical());
                if order.payment_method.is_cash() {
                    cash_from_stock_orders += order.amount;
                } else if order.payment_method.is_electronic() {
                    electronic_payments += order.amount;
                }
            } else if order.order_type.is_direct_ship() {
                shipped += order.physical_packages;
            }
            if order.payment_method.is_cash() {
                cash_collected += order.amount;
            }
        }

        let mut credited_by_channel = CreditedByChannel::default();
        for allocation in &scout.allocations {
            let credited = allocation.credited();
            match allocation.channel {
                AllocationChannel::BoothSale => credited_by_channel.booth_sale += credited,
                AllocationChannel::VirtualBooth => credited_by_channel.virtual_booth += credited,
                AllocationChannel::DirectShip => credited_by_channel.direct_ship += credited,
            }
        }
        let credited = credited_by_channel.total();

        // Остатки по сортам: выдано − возвращено − продано со склада.
        // Отрицательный остаток не зажимается, а фиксируется как недостача.
        let mut remainders: BTreeMap<Variety, i32> = BTreeMap::new();
        let mut varieties_seen: BTreeSet<Variety> = BTreeSet::new();
        for (v, _) in scout.inventory.picked_up.iter() {
            varieties_seen.insert(v);
        }
        for (v, _) in scout.inventory.returned.iter() {
            varieties_seen.insert(v);
        }
        for (v, _) in sold_from_stock.iter() {
            varieties_seen.insert(v);
        }

        let mut signed_total = 0;
        let mut display_total = 0;
        let mut display_by_variety = BTreeMap::new();
        let mut issues = Vec::new();
        let mut inventory_value = 0.0;

        for v in varieties_seen {
            let net_picked = scout.inventory.picked_up.get(v) - scout.inventory.returned.get(v);
            inventory_value += f64::from(net_picked) * store.config.pricing.unit_price(v);

            let remainder = net_picked - sold_from_stock.get(v);
            remainders.insert(v, remainder);
            signed_total += remainder;
            if remainder > 0 {
                display_total += remainder;
                display_by_variety.insert(v, remainder);
            } else if remainder < 0 {
                issues.push(NegativeInventoryIssue {
                    variety: v,
                    shortfall: -remainder,
                });
            }
        }

        let unsold_value =
            (inventory_value - electronic_payments - cash_from_stock_orders).max(0.0);
        let cash_owed = cash_collected + unsold_value;

        scout.inventory.remainders = remainders;
        scout.inventory.signed_total = signed_total;
        scout.inventory.display_total = display_total;
        scout.inventory.display_by_variety = display_by_variety;
        scout.issues = issues;
        scout.totals = ScoutTotals {
            delivered,
            shipped,
            donations,
            credited,
            credited_by_channel,
            total_sold: delivered + shipped + donations + credited,
            financial: ScoutFinancials {
                cash_collected,
                electronic_payments,
                inventory_value,
                unsold_value,
                cash_owed,
            },
        };
    }
}

/// Разнесение зачётов по каналам site-заказов
///
/// Канал считается закрытым, когда divider разнёс все физические коробки.
fn allocate_site_channels(store: &CookieStore, site: &mut SiteOrdersDataset) {
    let mut booth_sale = 0;
    let mut virtual_booth = 0;
    let mut direct_ship = 0;
    for allocation in &store.allocations {
        match allocation.channel {
            AllocationChannel::BoothSale => booth_sale += allocation.packages,
            AllocationChannel::VirtualBooth => virtual_booth += allocation.packages,
            AllocationChannel::DirectShip => direct_ship += allocation.packages,
        }
    }

    for (channel, allocated) in [
        (&mut site.booth_sale, booth_sale),
        (&mut site.direct_ship, direct_ship),
        (&mut site.girl_delivery, virtual_booth),
    ] {
        channel.allocated = allocated;
        channel.unallocated = channel.packages - allocated;
        channel.has_warning = channel.unallocated > 0;
    }
}

/// Взято продавцом на руки site-заказов, исполняемых из отрядного запаса
pub fn site_from_stock(site: &SiteOrdersDataset) -> i32 {
    site.girl_delivery.packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    #[test]
    fn test_split_display_name() {
        assert_eq!(
            split_display_name("Ava Anderson"),
            ("Ava".to_string(), "Anderson".to_string())
        );
        assert_eq!(
            split_display_name("Mary Jo Baker"),
            ("Mary".to_string(), "Jo Baker".to_string())
        );
        assert_eq!(split_display_name("Cher"), ("Cher".to_string(), String::new()));
    }

    #[test]
    fn test_empty_store_builds_empty_roster() {
        let store = CookieStore::new(default_config());
        let roster = build_roster(&store);
        assert!(roster.scouts.is_empty());
        assert_eq!(roster.unmatched_allocations, 0);
        assert!(!roster.site_orders.booth_sale.has_warning);
    }

    #[test]
    fn test_negative_remainder_is_surfaced_not_clamped() {
        use crate::domain::a003_transfer::service::{record_transfer, TransferDraft};
        use contracts::domain::common::DataSource;

        let mut store = CookieStore::new(default_config());

        // Выдано 2 Tagalongs, возвращено 5: данные противоречивы
        let mut picked = VarietyCounts::new();
        picked.add(Variety::Tagalongs, 2);
        picked.add(Variety::Samoas, 4);
        record_transfer(
            &mut store,
            TransferDraft {
                raw_type: "T2G".into(),
                to: Some("Bella Brooks".into()),
                varieties: picked,
                ..Default::default()
            },
            DataSource::TransferLedger,
        );
        let mut returned = VarietyCounts::new();
        returned.add(Variety::Tagalongs, 5);
        record_transfer(
            &mut store,
            TransferDraft {
                raw_type: "G2T".into(),
                from: Some("Bella Brooks".into()),
                varieties: returned,
                ..Default::default()
            },
            DataSource::TransferLedger,
        );
        crate::domain::a002_scout::service::upsert_scout(
            &mut store,
            contracts::domain::a002_scout::aggregate::ScoutRecord::new("Bella", "Brooks"),
        );

        let roster = build_roster(&store);
        let bella = &roster.scouts["Bella Brooks"];

        // Знаковый итог отрицательную недостачу учитывает, витринный - нет
        assert_eq!(bella.inventory.remainders[&Variety::Tagalongs], -3);
        assert_eq!(bella.inventory.remainders[&Variety::Samoas], 4);
        assert_eq!(bella.inventory.signed_total, 1);
        assert_eq!(bella.inventory.display_total, 4);
        assert!(!bella.inventory.display_by_variety.contains_key(&Variety::Tagalongs));
        assert_eq!(
            bella.issues,
            vec![NegativeInventoryIssue { variety: Variety::Tagalongs, shortfall: 3 }]
        );
    }
}
