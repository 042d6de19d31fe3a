use crate::domain::store::CookieStore;
use contracts::domain::a004_allocation::aggregate::Allocation;
use contracts::shared::run_log::WarningKind;

/// Добавить зачёт с дедупликацией
///
/// Повторная пара (divider, girl) - признак повторной выгрузки того же
/// состояния divider-а: зачёт уже учтён, новый не создаётся.
///
/// Возвращает `true`, если зачёт добавлен.
pub fn record_allocation(store: &mut CookieStore, allocation: Allocation) -> bool {
    let key = allocation.dedup_key();
    if !store.seen_allocations.insert(key.clone()) {
        store.log.warn(
            WarningKind::DuplicateAllocation,
            Some(allocation.source),
            format!(
                "allocation for girl {} from divider '{}' already recorded",
                key.1, key.0
            ),
            None,
        );
        return false;
    }
    store.allocations.push(allocation);
    true
}
