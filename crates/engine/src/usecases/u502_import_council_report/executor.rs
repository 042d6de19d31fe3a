//! Импорт сводного отчёта совета
//!
//! Менее авторитетный источник: заказы он только обогащает
//! организационным контекстом и статусом, основные поля DC не трогает
//! (enrichment-слияние). Главная ценность - кросс-системные идентификаторы
//! продавцов (girl_id, service unit, округ).

use crate::domain::a001_order::service as order_service;
use crate::domain::a002_scout::service as scout_service;
use crate::domain::store::CookieStore;
use anyhow::{anyhow, Result};
use chrono::Utc;
use contracts::domain::a001_order::aggregate::{Order, OrderPatch};
use contracts::domain::a002_scout::aggregate::{display_name, ScoutRecord};
use contracts::domain::common::DataSource;
use contracts::shared::run_log::WarningKind;
use contracts::usecases::common::{ImportSummary, SourceRow};
use contracts::usecases::u502_import_council_report::request as columns;

const SOURCE: DataSource = DataSource::CouncilReport;

/// Enrichment-правило отчёта совета: контекст и статус, ничего больше
fn council_enrichment(order: &mut Order, patch: &OrderPatch) {
    order_service::apply_context(order, patch);
    if let Some(status) = &patch.status {
        order.status = Some(status.clone());
    }
}

pub fn run(store: &mut CookieStore, rows: &[SourceRow]) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(SOURCE);
    summary.records_seen = rows.len();

    for (idx, row) in rows.iter().enumerate() {
        let is_new = process_report_row(store, row)
            .map_err(|e| anyhow!("row {}: {}", idx + 1, e))?;
        if is_new {
            summary.created += 1;
        } else {
            summary.merged += 1;
        }
    }

    summary.warnings = store.log.len() - warnings_before;
    store.record_provenance(SOURCE, started_at, rows.len(), summary.created + summary.merged);
    Ok(summary)
}

fn process_report_row(store: &mut CookieStore, row: &SourceRow) -> Result<bool> {
    let order_number = row
        .get(columns::ORDER_NUMBER)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("missing '{}'", columns::ORDER_NUMBER))?
        .to_string();
    let context = format!("council report, order {}", order_number);

    let first_name = row.get(columns::GIRL_FIRST_NAME).cloned().unwrap_or_default();
    let last_name = row.get(columns::GIRL_LAST_NAME).cloned().unwrap_or_default();

    let girl_id = match row.get(columns::GIRL_ID).map(|s| s.trim()) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                store.log.warn(
                    WarningKind::MalformedNumber,
                    Some(SOURCE),
                    format!("non-numeric girl id '{}'", raw),
                    Some(context.clone()),
                );
                None
            }
        },
    };

    let patch = OrderPatch {
        status: non_empty(row.get(columns::ORDER_STATUS)),
        troop_id: non_empty(row.get(columns::TROOP)),
        service_unit: non_empty(row.get(columns::SERVICE_UNIT)),
        council: non_empty(row.get(columns::COUNCIL)),
        district: non_empty(row.get(columns::DISTRICT)),
        ..Default::default()
    };

    let raw_payload = serde_json::to_value(row)?;
    let is_new = order_service::merge_or_create_order(
        store,
        &order_number,
        patch,
        SOURCE,
        raw_payload,
        Some(council_enrichment),
    );

    let scout = display_name(&first_name, &last_name);
    if !scout.is_empty() {
        let mut record = ScoutRecord::new(&first_name, &last_name);
        record.girl_id = girl_id;
        record.grade = non_empty(row.get(columns::GRADE));
        record.troop_id = non_empty(row.get(columns::TROOP));
        record.service_unit = non_empty(row.get(columns::SERVICE_UNIT));
        record.council = non_empty(row.get(columns::COUNCIL));
        record.district = non_empty(row.get(columns::DISTRICT));
        scout_service::upsert_scout(store, record);
    }

    Ok(is_new)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
