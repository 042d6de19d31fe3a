use crate::domain::a004_allocation::service as allocation_service;
use crate::domain::store::CookieStore;
use crate::shared::{format, varieties};
use contracts::domain::a004_allocation::aggregate::{Allocation, AllocationChannel};
use contracts::domain::common::DataSource;
use contracts::shared::run_log::WarningKind;
use contracts::usecases::u505_import_allocations::request::BoothDividerPayload;

const SOURCE: DataSource = DataSource::BoothDivider;

/// Обработать состояние booth divider-а
///
/// Зачёты группируются по броням; бронь с флагом `virtual_booth` кладёт
/// зачёты в канал virtual booth.
pub fn process(store: &mut CookieStore, payload: &BoothDividerPayload) -> usize {
    let mut applied = 0;
    for reservation in &payload.reservations {
        let reservation_key = format::json_id(&reservation.reservation_id)
            .map(|id| format!("res-{}", id))
            .unwrap_or_else(|| "res-unknown".to_string());
        let channel = if reservation.virtual_booth {
            AllocationChannel::VirtualBooth
        } else {
            AllocationChannel::BoothSale
        };
        let booth_date = reservation.booth_date.as_deref().and_then(|raw| {
            format::parse_date(raw, &mut store.log, SOURCE, &reservation_key)
        });

        for entry in &reservation.girls {
            let girl_id = match format::json_girl_id(&entry.girl_id) {
                Some(id) => id,
                None => {
                    store.log.warn(
                        WarningKind::UnknownGirlId,
                        Some(SOURCE),
                        format!("unparsed girl id {} in booth divider", entry.girl_id),
                        Some(reservation_key.clone()),
                    );
                    continue;
                }
            };
            let context = format!("{} girl {}", reservation_key, girl_id);
            let counts = varieties::parse_cookie_quantities(
                &entry.cookies,
                &mut store.log,
                SOURCE,
                &context,
            );

            let mut allocation = Allocation::from_varieties(
                channel,
                girl_id,
                reservation_key.clone(),
                counts,
                SOURCE,
            );
            allocation.store_name = reservation.store_name.clone();
            allocation.booth_date = booth_date;
            if allocation_service::record_allocation(store, allocation) {
                applied += 1;
            }
        }
    }
    applied
}
