//! Сборка единого датасета
//!
//! Запускается один раз после всех импортов. Чистая функция хранилища:
//! читает его и возвращает свежую структуру; проблемы качества данных
//! никогда не являются ошибкой - ошибка возможна только на структурно
//! непригодном хранилище.

use crate::domain::store::CookieStore;
use crate::projections::p900_unified_dataset::{
    reconciliation_builder, roster_builder, troop_builder,
};
use crate::shared::error::EngineError;
use chrono::Utc;
use contracts::projections::p900_unified_dataset::dto::{
    HealthChecks, RunReport, UnifiedDataset,
};
use contracts::shared::run_log::WarningKind;

pub fn build(store: &CookieStore) -> Result<UnifiedDataset, EngineError> {
    if store.config.proceeds.bands.is_empty() {
        return Err(EngineError::InvalidStore("proceeds band table is empty"));
    }
    if !(store.config.pricing.default_price > 0.0) {
        return Err(EngineError::InvalidStore("pricing has no usable default price"));
    }

    tracing::info!(
        "building unified dataset: {} orders, {} transfers, {} allocations",
        store.orders.len(),
        store.transfers.len(),
        store.allocations.len()
    );

    let roster = roster_builder::build_roster(store);
    let transfers = troop_builder::build_breakdown(store);
    let troop = troop_builder::build_troop_totals(store, &roster);
    let varieties = reconciliation_builder::build_variety_totals(store);
    let donations = reconciliation_builder::build_donation_reconciliation(store);

    let health = HealthChecks {
        unknown_order_types: store.log.count_kind(WarningKind::UnknownOrderType),
        unknown_payment_methods: store.log.count_kind(WarningKind::UnknownPaymentMethod),
        unknown_transfer_types: store.log.count_kind(WarningKind::UnknownTransferType),
        unresolved_transfer_directions: store
            .log
            .count_kind(WarningKind::UnresolvedTransferDirection),
        unknown_girl_ids: store.log.count_kind(WarningKind::UnknownGirlId)
            + roster.unmatched_allocations,
        negative_inventory_scouts: troop.participation.negative_inventory,
    };

    let report = RunReport {
        run_id: store.run_id,
        troop_number: store.troop.number.clone(),
        troop_name: store.troop.name.clone(),
        built_at: Utc::now(),
        provenance: store.provenance.clone(),
        warnings: store.log.warnings().to_vec(),
        health,
        booth_locations: store.booth_locations.len(),
        reservations: store.reservations.len(),
        undistributed_reservations: store
            .reservations
            .iter()
            .filter(|r| !r.distributed)
            .count(),
    };

    Ok(UnifiedDataset {
        scouts: roster.scouts,
        troop,
        transfers,
        varieties,
        donations,
        site_orders: roster.site_orders,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use crate::shared::rows::rows_from_csv;
    use crate::usecases::{
        u501_import_digital_cookie, u502_import_council_report, u503_import_transfer_ledger,
        u504_import_orders_search, u505_import_allocations,
    };
    use contracts::domain::common::Variety;
    use contracts::usecases::u504_import_orders_search::request::OrdersSearchPayload;
    use contracts::usecases::u505_import_allocations::request::BoothDividerPayload;

    const DC_EXPORT: &str = "\
Order Number,First Name,Last Name,Scout ID,Order Type,Payment Type,Order Date,Order Amount,Order Status,Thin Mints,Trefoils,Tagalongs,Adventurefuls,Cookie Share
1001,Ava,Anderson,dc-501,Girl Delivery,Credit Card,01/10/2026,$30.00,Delivered,3,2,0,0,0
1002,Ava,Anderson,dc-501,Cookies In Hand,Cash,01/12/2026,$12.00,Completed,2,0,0,0,0
1003,Ava,Anderson,dc-501,Donation,Credit Card,01/14/2026,$6.00,Completed,0,0,0,0,1
2001,Bella,Brooks,dc-502,Girl Delivery,Credit Card,01/15/2026,$24.00,Delivered,0,0,4,0,0
3001,Troop40123,Site,,Booth Sale,Credit Card,01/20/2026,$60.00,Completed,0,0,0,10,0
";

    const COUNCIL_REPORT: &str = "\
Order Number,Girl First Name,Girl Last Name,Girl ID,Troop,Service Unit
1001,Ava,Anderson,501,40123,SU-88
2001,Bella,Brooks,502,40123,SU-88
";

    const TRANSFER_LEDGER: &str = "\
Type,From,To,Date,Amount,Status,Thin Mints,Trefoils,Tagalongs,Samoas,Lemon-Ups
C2T,Council Cupboard,Troop 40123,01/05/2026,300.00,Completed,10,10,10,10,10
T2G,Troop 40123,Ava Anderson,01/08/2026,,Completed,8,7,0,0,0
T2G,Troop 40123,Bella Brooks,01/08/2026,,Completed,0,0,10,0,0
G2T,Ava Anderson,Troop 40123,01/18/2026,,Completed,0,2,0,0,0
";

    fn orders_search_payload() -> OrdersSearchPayload {
        serde_json::from_value(serde_json::json!({
            "orders": [
                {
                    "type": "T2G",
                    "virtualBooth": true,
                    "from": {"name": "Troop 40123"},
                    "to": {"name": "Ava Anderson"},
                    "date": "2026-01-22",
                    "cookies": [{"id": 24, "quantity": 5}]
                },
                {
                    "type": "SHIP",
                    "date": "2026-01-23",
                    "cookies": [{"id": 44, "quantity": 9}]
                }
            ]
        }))
        .unwrap()
    }

    fn booth_divider_payload() -> BoothDividerPayload {
        serde_json::from_value(serde_json::json!({
            "reservations": [{
                "reservationId": 1,
                "storeName": "Maple St Grocery",
                "boothDate": "01/24/2026",
                "girls": [
                    {"girlId": 501, "cookies": [{"id": 24, "quantity": 4}, {"id": 90, "quantity": 1}]}
                ]
            }]
        }))
        .unwrap()
    }

    /// Полный конвейер на репрезентативных фикстурах: два продавца плюс
    /// site-псевдопродавец отряда
    fn imported_store() -> CookieStore {
        let mut config = default_config();
        config.troop.number = Some("40123".to_string());
        let mut store = CookieStore::new(config);

        let dc_rows = rows_from_csv(DC_EXPORT.as_bytes()).unwrap();
        u501_import_digital_cookie::executor::run(&mut store, &dc_rows).unwrap();

        let council_rows = rows_from_csv(COUNCIL_REPORT.as_bytes()).unwrap();
        u502_import_council_report::executor::run(&mut store, &council_rows).unwrap();

        let ledger_rows = rows_from_csv(TRANSFER_LEDGER.as_bytes()).unwrap();
        u503_import_transfer_ledger::executor::run(&mut store, &ledger_rows).unwrap();

        u504_import_orders_search::executor::run(&mut store, &orders_search_payload()).unwrap();

        u505_import_allocations::executor::run_booth_divider(&mut store, &booth_divider_payload())
            .unwrap();

        store
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scout_totals_and_inventory() {
        let store = imported_store();
        let dataset = build(&store).unwrap();

        let ava = &dataset.scouts["Ava Anderson"];
        assert!(!ava.is_site);
        assert_eq!(ava.girl_id, Some(501));
        assert_eq!(ava.orders.len(), 3);

        assert_eq!(ava.totals.delivered, 7, "5 delivery + 2 in-hand");
        assert_eq!(ava.totals.shipped, 0);
        assert_eq!(ava.totals.donations, 1);
        assert_eq!(ava.totals.credited, 5, "4 packages + 1 donation from booth divider");
        assert_eq!(ava.totals.total_sold, 13);

        // Выдано 15, возвращено 2, продано со склада 7
        assert_eq!(ava.inventory.signed_total, 6);
        assert_eq!(ava.inventory.display_total, 6);
        assert_eq!(ava.inventory.display_by_variety[&Variety::ThinMints], 3);
        assert_eq!(ava.inventory.display_by_variety[&Variety::Trefoils], 3);
        assert!(ava.issues.is_empty());
    }

    #[test]
    fn test_scout_financials() {
        let store = imported_store();
        let dataset = build(&store).unwrap();
        let fin = &dataset.scouts["Ava Anderson"].totals.financial;

        assert!(close(fin.inventory_value, 78.0), "(15 - 2) packages x $6");
        assert!(close(fin.electronic_payments, 30.0), "delivery order only");
        assert!(close(fin.cash_collected, 12.0));
        assert!(close(fin.unsold_value, 36.0), "78 - 30 - 12");
        assert!(close(fin.cash_owed, 48.0));
    }

    #[test]
    fn test_defining_equation_holds_for_all_scouts() {
        let store = imported_store();
        let dataset = build(&store).unwrap();
        for scout in dataset.scouts.values() {
            let t = &scout.totals;
            assert_eq!(
                t.total_sold,
                t.delivered + t.shipped + t.donations + t.credited,
                "defining equation broken for {}",
                scout.display_name
            );
            assert_eq!(t.credited, t.credited_by_channel.total());
            assert!(t.financial.unsold_value >= 0.0);
            assert!(t.financial.cash_owed >= t.financial.cash_collected);
            for (_, n) in &scout.inventory.display_by_variety {
                assert!(*n > 0);
            }
        }
    }

    #[test]
    fn test_troop_rollup() {
        let store = imported_store();
        let dataset = build(&store).unwrap();
        let troop = &dataset.troop;

        assert_eq!(troop.council_received, 50);
        assert_eq!(troop.girl_pickups, 25);
        assert_eq!(troop.virtual_booth, 5);
        assert_eq!(troop.booth_divider, 0);
        assert_eq!(troop.returns, 2);
        assert_eq!(troop.site_from_stock, 0);
        assert_eq!(troop.net_inventory, 22, "50 - 25 - 5 - 0 + 2");
        assert_eq!(troop.donations, 2, "1 DC donation + 1 credited booth donation");
        assert_eq!(troop.direct_ship, 9);
        assert_eq!(troop.packages_credited, 61, "50 + 2 + 9");

        assert_eq!(troop.participation.total, 2);
        assert_eq!(troop.participation.active, 2);
        assert_eq!(troop.proceeds.rate, 0.80, "band for 2 active sellers");
        assert!(close(troop.proceeds.gross_proceeds, 61.0 * 0.80));
        assert!(close(troop.proceeds.exemption_deduction, 2.0 * 12.0 * 0.80));
        assert!(close(
            troop.proceeds.troop_proceeds,
            troop.proceeds.gross_proceeds - troop.proceeds.exemption_deduction
        ));
    }

    #[test]
    fn test_site_orders_unallocated_warning_lifecycle() {
        let mut store = imported_store();
        let dataset = build(&store).unwrap();

        let booth = &dataset.site_orders.booth_sale;
        assert_eq!(booth.packages, 10);
        assert_eq!(booth.allocated, 4);
        assert_eq!(booth.unallocated, 6);
        assert!(booth.has_warning);

        // Divider дораспределяет оставшиеся коробки - предупреждение гаснет
        let second: BoothDividerPayload = serde_json::from_value(serde_json::json!({
            "reservations": [{
                "reservationId": 2,
                "girls": [{"girlId": 502, "cookies": [{"id": 48, "quantity": 6}]}]
            }]
        }))
        .unwrap();
        u505_import_allocations::executor::run_booth_divider(&mut store, &second).unwrap();

        let dataset = build(&store).unwrap();
        let booth = &dataset.site_orders.booth_sale;
        assert_eq!(booth.allocated, 10);
        assert_eq!(booth.unallocated, 0);
        assert!(!booth.has_warning);
    }

    #[test]
    fn test_variety_and_donation_reconciliation() {
        let store = imported_store();
        let dataset = build(&store).unwrap();

        let tagalongs = dataset
            .varieties
            .iter()
            .find(|v| v.variety == Variety::Tagalongs)
            .unwrap();
        assert_eq!(tagalongs.sold, 4);
        assert_eq!(tagalongs.troop_inventory, 0, "10 received - 10 picked up");

        let thin_mints = dataset
            .varieties
            .iter()
            .find(|v| v.variety == Variety::ThinMints)
            .unwrap();
        assert_eq!(thin_mints.troop_inventory, 2, "10 received - 8 picked up");

        // Единственное пожертвование DC оплачено картой - ручной ввод не нужен
        assert_eq!(dataset.donations.auto_synced, 1);
        assert_eq!(dataset.donations.needs_manual, 0);
        assert_eq!(dataset.donations.manual_entered, 0);
        assert!(dataset.donations.reconciled);
    }

    #[test]
    fn test_health_checks_clean_run() {
        let store = imported_store();
        let dataset = build(&store).unwrap();
        assert_eq!(dataset.report.health, HealthChecks::default());
        assert_eq!(dataset.report.provenance.len(), 5);
        assert_eq!(dataset.report.troop_number.as_deref(), Some("40123"));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let store = imported_store();
        let first = build(&store).unwrap();
        let second = build(&store).unwrap();
        assert_eq!(
            serde_json::to_value(&first.scouts).unwrap(),
            serde_json::to_value(&second.scouts).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&first.troop).unwrap(),
            serde_json::to_value(&second.troop).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&first.site_orders).unwrap(),
            serde_json::to_value(&second.site_orders).unwrap()
        );
    }

    #[test]
    fn test_build_rejects_structurally_invalid_store() {
        let mut config = default_config();
        config.proceeds.bands.clear();
        let store = CookieStore::new(config);
        let err = build(&store).unwrap_err();
        assert!(matches!(err, EngineError::InvalidStore(_)));
    }
}
