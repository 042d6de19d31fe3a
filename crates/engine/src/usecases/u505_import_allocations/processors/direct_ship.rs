use crate::domain::a004_allocation::service as allocation_service;
use crate::domain::store::CookieStore;
use crate::shared::{format, varieties};
use contracts::domain::a004_allocation::aggregate::{Allocation, AllocationChannel};
use contracts::domain::common::DataSource;
use contracts::shared::run_log::WarningKind;
use contracts::usecases::u505_import_allocations::request::DirectShipDividerPayload;

const SOURCE: DataSource = DataSource::DirectShipDivider;

/// Обработать состояние direct-ship divider-а
///
/// Возвращает число добавленных зачётов (дубликаты и нераспознанные
/// girl_id пропускаются).
pub fn process(store: &mut CookieStore, payload: &DirectShipDividerPayload) -> usize {
    let divider_key = payload
        .divider_id
        .as_ref()
        .and_then(format::json_id)
        .map(|id| format!("ds-{}", id))
        .unwrap_or_else(|| "ds-default".to_string());

    let mut applied = 0;
    for entry in &payload.girls {
        let girl_id = match format::json_girl_id(&entry.girl_id) {
            Some(id) => id,
            None => {
                store.log.warn(
                    WarningKind::UnknownGirlId,
                    Some(SOURCE),
                    format!("unparsed girl id {} in direct ship divider", entry.girl_id),
                    Some(divider_key.clone()),
                );
                continue;
            }
        };
        let context = format!("{} girl {}", divider_key, girl_id);
        let counts =
            varieties::parse_cookie_quantities(&entry.cookies, &mut store.log, SOURCE, &context);

        let allocation = Allocation::from_varieties(
            AllocationChannel::DirectShip,
            girl_id,
            divider_key.clone(),
            counts,
            SOURCE,
        );
        if allocation_service::record_allocation(store, allocation) {
            applied += 1;
        }
    }
    applied
}
