//! Импорт выгрузки заказов Digital Cookie ("all order data")
//!
//! Единственный фид с индивидуальными заказами покупателей. Строки с
//! фамилией-сентинелом - заказы отряда ("site"): они получают owner=TROOP
//! и исключаются из персонального складского учёта, но остаются для
//! отрядных сводок.

use crate::domain::a001_order::service as order_service;
use crate::domain::a002_scout::service as scout_service;
use crate::domain::store::CookieStore;
use crate::shared::{format, varieties};
use anyhow::{anyhow, Result};
use chrono::Utc;
use contracts::domain::a001_order::aggregate::OrderPatch;
use contracts::domain::a002_scout::aggregate::{display_name, ScoutRecord};
use contracts::domain::common::DataSource;
use contracts::enums::{OrderOwner, OrderType, PaymentMethod};
use contracts::shared::run_log::WarningKind;
use contracts::usecases::common::{ImportSummary, SourceRow};
use contracts::usecases::u501_import_digital_cookie::request as columns;

const SOURCE: DataSource = DataSource::DigitalCookieExport;

/// Выполнить импорт
///
/// Ошибка структуры строки (нет номера заказа) обрывает оставшиеся строки
/// этого импортёра; уже применённые записи не откатываются.
pub fn run(store: &mut CookieStore, rows: &[SourceRow]) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(SOURCE);
    summary.records_seen = rows.len();

    for (idx, row) in rows.iter().enumerate() {
        let is_new = process_order_row(store, row)
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

/// Обработать одну строку выгрузки
///
/// Возвращает `true`, если заказ создан впервые.
fn process_order_row(store: &mut CookieStore, row: &SourceRow) -> Result<bool> {
    let order_number = row
        .get(columns::ORDER_NUMBER)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("missing '{}'", columns::ORDER_NUMBER))?
        .to_string();
    let context = format!("DC order {}", order_number);

    let first_name = row.get(columns::FIRST_NAME).cloned().unwrap_or_default();
    let last_name = row.get(columns::LAST_NAME).cloned().unwrap_or_default();
    let scout = display_name(&first_name, &last_name);
    let is_site = last_name
        .trim()
        .eq_ignore_ascii_case(&store.config.troop.site_last_name);

    let counts = varieties::parse_variety_columns(
        row,
        columns::CORE_COLUMNS,
        &mut store.log,
        SOURCE,
        &context,
    );

    // Колонка пожертвований авторитетнее, чем Cookie Share среди сортов
    let donations = match row.get(columns::DONATION_PACKAGES) {
        Some(raw) => format::parse_count(raw, &mut store.log, SOURCE, &context),
        None => counts.donation_count(),
    };
    let physical_packages = counts.physical_total();

    let order_type_raw = row.get(columns::ORDER_TYPE).cloned().unwrap_or_default();
    let order_type = match OrderType::from_code(&order_type_raw) {
        Some(t) => t,
        None => {
            // Блокирующий для витрины счётчик: дальше считаем, но витрина
            // обязана показать проблему
            store.log.warn(
                WarningKind::UnknownOrderType,
                Some(SOURCE),
                format!("unrecognized order type '{}'", order_type_raw.trim()),
                Some(context.clone()),
            );
            OrderType::Unrecognized
        }
    };

    let payment_raw = row.get(columns::PAYMENT_TYPE).cloned().unwrap_or_default();
    let payment = match PaymentMethod::from_code(&payment_raw) {
        Some(p) => p,
        None => {
            store.log.warn(
                WarningKind::UnknownPaymentMethod,
                Some(SOURCE),
                format!("unrecognized payment type '{}'", payment_raw.trim()),
                Some(context.clone()),
            );
            PaymentMethod::Unrecognized
        }
    };

    let amount = row
        .get(columns::ORDER_AMOUNT)
        .map(|raw| format::parse_money(raw, &mut store.log, SOURCE, &context))
        .unwrap_or(0.0);
    let order_date = row
        .get(columns::ORDER_DATE)
        .and_then(|raw| format::parse_date(raw, &mut store.log, SOURCE, &context));
    let status = row
        .get(columns::ORDER_STATUS)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let troop_id = non_empty(row.get(columns::TROOP));
    let service_unit = non_empty(row.get(columns::SERVICE_UNIT));

    let patch = OrderPatch {
        scout_name: Some(scout.clone()),
        owner: Some(if is_site { OrderOwner::Troop } else { OrderOwner::Girl }),
        order_type: Some((order_type, order_type_raw)),
        packages: Some(physical_packages + donations),
        physical_packages: Some(physical_packages),
        donations: Some(donations),
        amount: Some(amount),
        payment_method: Some((payment, payment_raw)),
        status,
        order_date,
        varieties: Some(counts),
        troop_id: troop_id.clone(),
        service_unit: service_unit.clone(),
        ..Default::default()
    };

    let raw_payload = serde_json::to_value(row)?;
    let is_new = order_service::merge_or_create_order(
        store,
        &order_number,
        patch,
        SOURCE,
        raw_payload,
        None,
    );

    if !scout.is_empty() {
        let mut record = ScoutRecord::new(&first_name, &last_name);
        record.dc_id = non_empty(row.get(columns::SCOUT_ID));
        record.troop_id = troop_id;
        record.service_unit = service_unit;
        scout_service::upsert_scout(store, record);
    }

    Ok(is_new)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
