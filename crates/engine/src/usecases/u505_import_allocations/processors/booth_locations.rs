use crate::domain::store::CookieStore;
use crate::shared::format;
use contracts::domain::a005_booth_location::aggregate::{BoothLocation, BoothTimeSlot};
use contracts::domain::common::DataSource;
use contracts::usecases::u505_import_allocations::request::BoothLocationsPayload;

const SOURCE: DataSource = DataSource::BoothLocations;

/// Сохранить справочник точек продаж с их слотами
pub fn process(store: &mut CookieStore, payload: &BoothLocationsPayload) -> usize {
    let mut applied = 0;
    for record in &payload.locations {
        let location_id = format::json_id(&record.location_id)
            .unwrap_or_else(|| "unknown".to_string());
        let context = format!("booth location {}", location_id);

        let slots = record
            .slots
            .iter()
            .map(|slot| BoothTimeSlot {
                date: slot
                    .date
                    .as_deref()
                    .and_then(|raw| format::parse_date(raw, &mut store.log, SOURCE, &context)),
                start_time: slot.start_time.clone(),
                end_time: slot.end_time.clone(),
            })
            .collect();

        store.booth_locations.push(BoothLocation {
            location_id,
            store_name: record.store_name.clone().unwrap_or_default(),
            address: record.address.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip: record.zip.clone(),
            slots,
        });
        applied += 1;
    }
    applied
}
