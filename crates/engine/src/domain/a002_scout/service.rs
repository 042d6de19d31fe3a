use crate::domain::store::CookieStore;
use contracts::domain::a002_scout::aggregate::ScoutRecord;

/// Upsert записи продавца
///
/// Первое появление имени создаёт запись. Дальше копируются только
/// заполненные поля: источник, не знающий поле, никогда не сбрасывает
/// уже известное значение.
///
/// Возвращает `true`, если запись создана впервые.
pub fn upsert_scout(store: &mut CookieStore, incoming: ScoutRecord) -> bool {
    if incoming.display_name.is_empty() {
        tracing::debug!("scout upsert skipped: empty display name");
        return false;
    }
    match store.scouts.get_mut(&incoming.display_name) {
        Some(existing) => {
            if existing.girl_id.is_none() {
                existing.girl_id = incoming.girl_id;
            }
            if existing.dc_id.is_none() {
                existing.dc_id = incoming.dc_id;
            }
            if existing.grade.is_none() {
                existing.grade = incoming.grade;
            }
            if existing.service_unit.is_none() {
                existing.service_unit = incoming.service_unit;
            }
            if existing.troop_id.is_none() {
                existing.troop_id = incoming.troop_id;
            }
            if existing.council.is_none() {
                existing.council = incoming.council;
            }
            if existing.district.is_none() {
                existing.district = incoming.district;
            }
            false
        }
        None => {
            store
                .scouts
                .insert(incoming.display_name.clone(), incoming);
            true
        }
    }
}
