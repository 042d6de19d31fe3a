use crate::domain::store::CookieStore;
use crate::shared::{format, varieties};
use contracts::domain::a005_booth_location::aggregate::BoothReservation;
use contracts::domain::common::DataSource;
use contracts::usecases::u505_import_allocations::request::ReservationsPayload;

const SOURCE: DataSource = DataSource::Reservations;

/// Сохранить брони точек продаж
///
/// Нераспределённая бронь (`distributed == false`) - диагностика для
/// отчёта прогона, сами коробки в учёт попадают через booth divider.
pub fn process(store: &mut CookieStore, payload: &ReservationsPayload) -> usize {
    let mut applied = 0;
    for record in &payload.reservations {
        let reservation_id = format::json_id(&record.reservation_id)
            .unwrap_or_else(|| "unknown".to_string());
        let context = format!("reservation {}", reservation_id);
        let booth_date = record
            .booth_date
            .as_deref()
            .and_then(|raw| format::parse_date(raw, &mut store.log, SOURCE, &context));
        let counts =
            varieties::parse_cookie_quantities(&record.cookies, &mut store.log, SOURCE, &context);

        store.reservations.push(BoothReservation {
            reservation_id,
            store_name: record.store_name.clone(),
            booth_date,
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            varieties: counts,
            distributed: record.distributed.unwrap_or(false),
        });
        applied += 1;
    }
    applied
}
