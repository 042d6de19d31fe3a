use crate::domain::store::CookieStore;
use contracts::domain::a001_order::aggregate::{Order, OrderPatch};
use contracts::domain::common::DataSource;

/// Source-specific правило обогащения: копирует в существующий заказ только
/// разрешённый источнику набор полей
pub type EnrichmentFn = fn(&mut Order, &OrderPatch);

/// Применить все предоставленные поля патча (поздний источник побеждает)
pub fn apply_patch(order: &mut Order, patch: &OrderPatch) {
    if let Some(v) = &patch.scout_name {
        order.scout_name = v.clone();
    }
    if let Some(v) = patch.owner {
        order.owner = v;
    }
    if let Some((t, raw)) = &patch.order_type {
        order.order_type = *t;
        order.order_type_raw = raw.clone();
    }
    if let Some(v) = patch.packages {
        order.packages = v;
    }
    if let Some(v) = patch.physical_packages {
        order.physical_packages = v;
    }
    if let Some(v) = patch.donations {
        order.donations = v;
    }
    if let Some(v) = patch.amount {
        order.amount = v;
    }
    if let Some((m, raw)) = &patch.payment_method {
        order.payment_method = *m;
        order.payment_method_raw = raw.clone();
    }
    if let Some(v) = &patch.status {
        order.status = Some(v.clone());
    }
    if let Some(v) = patch.order_date {
        order.order_date = Some(v);
    }
    if let Some(v) = &patch.varieties {
        order.varieties = v.clone();
    }
    apply_context(order, patch);
}

/// Организационный контекст - общая часть полного и enrichment-слияния
pub fn apply_context(order: &mut Order, patch: &OrderPatch) {
    if let Some(v) = &patch.troop_id {
        order.context.troop_id = Some(v.clone());
    }
    if let Some(v) = &patch.service_unit {
        order.context.service_unit = Some(v.clone());
    }
    if let Some(v) = &patch.council {
        order.context.council = Some(v.clone());
    }
    if let Some(v) = &patch.district {
        order.context.district = Some(v.clone());
    }
}

/// Создать заказ или слить в существующий
///
/// Первый источник создаёт заказ с дефолтами и применяет патч целиком.
/// Повторное появление номера: источник добавляется в provenance (без
/// дубликатов), сырая запись кладётся в слот источника, затем либо
/// работает enrichment-функция источника, либо безусловная перезапись
/// предоставленных полей.
///
/// Возвращает `true`, если заказ создан впервые.
pub fn merge_or_create_order(
    store: &mut CookieStore,
    order_number: &str,
    patch: OrderPatch,
    source: DataSource,
    raw_payload: serde_json::Value,
    enrichment: Option<EnrichmentFn>,
) -> bool {
    if let Some(existing) = store.orders.get_mut(order_number) {
        existing.push_source(source);
        existing.set_raw_payload(source, raw_payload);
        match enrichment {
            Some(enrich) => enrich(existing, &patch),
            None => apply_patch(existing, &patch),
        }
        tracing::debug!("order {} merged from {}", order_number, source.code());
        false
    } else {
        let mut order = Order::new(order_number, source);
        order.set_raw_payload(source, raw_payload);
        apply_patch(&mut order, &patch);
        store.orders.insert(order_number.to_string(), order);
        true
    }
}
