//! Импорт JSON-фида orders/search Smart Cookies
//!
//! Тот же поток перемещений, что и журнал (фиды пересекаются - дубликаты
//! возможны и не подавляются), но с флагами divider-ов, уточняющими T2G,
//! и маркерами заказов/отправок/пожертвований.

use crate::domain::a003_transfer::classifier::DividerFlags;
use crate::domain::a003_transfer::service::{self as transfer_service, TransferDraft};
use crate::domain::store::CookieStore;
use crate::shared::{format, varieties};
use anyhow::Result;
use chrono::Utc;
use contracts::domain::common::DataSource;
use contracts::usecases::common::ImportSummary;
use contracts::usecases::u504_import_orders_search::request::{
    OrderSearchRecord, OrdersSearchPayload,
};

const SOURCE: DataSource = DataSource::OrdersSearch;

pub fn run(store: &mut CookieStore, payload: &OrdersSearchPayload) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(SOURCE);
    summary.records_seen = payload.orders.len();

    for record in &payload.orders {
        process_search_record(store, record);
        summary.created += 1;
    }

    summary.warnings = store.log.len() - warnings_before;
    store.record_provenance(SOURCE, started_at, payload.orders.len(), summary.created);
    Ok(summary)
}

fn process_search_record(store: &mut CookieStore, record: &OrderSearchRecord) {
    let context = match &record.order_number {
        Some(n) => format!("orders/search {}", n),
        None => format!("orders/search {}", record.transfer_type),
    };

    let counts =
        varieties::parse_cookie_quantities(&record.cookies, &mut store.log, SOURCE, &context);
    let amount = record
        .amount
        .as_ref()
        .map(|v| format::json_money(v, &mut store.log, SOURCE, &context))
        .unwrap_or(0.0);
    let date = record
        .date
        .as_deref()
        .and_then(|raw| format::parse_date(raw, &mut store.log, SOURCE, &context));

    let pending = record
        .status
        .as_deref()
        .map(|s| s.eq_ignore_ascii_case("pending"))
        .unwrap_or(false)
        || record
            .action
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("pending"))
            .unwrap_or(false);

    let flags = DividerFlags {
        virtual_booth: record.virtual_booth,
        booth_divider: record.booth_divider,
        direct_ship_divider: record.direct_ship_divider,
    };

    transfer_service::record_transfer(
        store,
        TransferDraft {
            raw_type: record.transfer_type.clone(),
            flags,
            from: record.from.as_ref().and_then(party_label),
            to: record.to.as_ref().and_then(party_label),
            date,
            varieties: counts,
            amount,
            status: record.status.clone(),
            pending,
        },
        SOURCE,
    );
}

/// Имя стороны; без имени - идентификатор
fn party_label(party: &contracts::usecases::u504_import_orders_search::request::PartyRef) -> Option<String> {
    party
        .name
        .as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| party.id.as_ref().and_then(format::json_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use contracts::domain::a003_transfer::aggregate::TransferCategory;
    use contracts::domain::common::Variety;

    fn store_with_troop() -> CookieStore {
        let mut config = default_config();
        config.troop.number = Some("40123".to_string());
        CookieStore::new(config)
    }

    fn payload_from_json(json: serde_json::Value) -> OrdersSearchPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_t2g_with_virtual_booth_flag() {
        let payload = payload_from_json(serde_json::json!({
            "orders": [{
                "type": "T2G",
                "virtualBooth": true,
                "from": {"name": "Troop 40123"},
                "to": {"name": "Ava Anderson"},
                "date": "2026-01-22",
                "cookies": [{"id": 24, "quantity": "5"}],
                "amount": "30.00"
            }]
        }));
        let mut store = store_with_troop();
        let summary = run(&mut store, &payload).unwrap();
        assert_eq!(summary.created, 1);

        let t = &store.transfers[0];
        assert_eq!(t.category, TransferCategory::VirtualBoothAllocation);
        assert_eq!(t.physical_packages, 5);
        assert_eq!(t.varieties.get(Variety::Samoas), 5);
        assert_eq!(t.amount, 30.0);
    }

    #[test]
    fn test_ship_marker_and_pending_status() {
        let payload = payload_from_json(serde_json::json!({
            "orders": [
                {"type": "SHIP", "cookies": [{"id": 44, "quantity": 9}], "status": "Pending"},
                {"type": "ORDER", "orderNumber": "1001", "cookies": []}
            ]
        }));
        let mut store = store_with_troop();
        run(&mut store, &payload).unwrap();
        assert_eq!(store.transfers[0].category, TransferCategory::DirectShip);
        assert!(store.transfers[0].pending);
        assert_eq!(store.transfers[0].physical_packages, 9);
        assert_eq!(store.transfers[1].category, TransferCategory::OrderRecord);
    }

    #[test]
    fn test_unknown_cookie_id_warns_but_record_survives() {
        let payload = payload_from_json(serde_json::json!({
            "orders": [{
                "type": "C2T",
                "cookies": [{"id": 777, "quantity": 10}, {"id": 28, "quantity": 4}]
            }]
        }));
        let mut store = store_with_troop();
        let summary = run(&mut store, &payload).unwrap();
        assert_eq!(summary.warnings, 1);
        assert_eq!(store.transfers[0].physical_packages, 4);
    }
}
