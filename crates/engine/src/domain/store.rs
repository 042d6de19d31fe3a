use crate::shared::config::TroopConfig;
use crate::shared::run_log::RunLog;
use chrono::{DateTime, Utc};
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a002_scout::aggregate::ScoutRecord;
use contracts::domain::a003_transfer::aggregate::Transfer;
use contracts::domain::a004_allocation::aggregate::Allocation;
use contracts::domain::a005_booth_location::aggregate::{BoothLocation, BoothReservation};
use contracts::domain::common::DataSource;
use contracts::shared::run_log::ImportProvenance;
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

/// Известная идентичность отряда (для направления T2T)
#[derive(Debug, Clone, Default)]
pub struct TroopIdentity {
    pub number: Option<String>,
    pub name: Option<String>,
}

impl TroopIdentity {
    /// Совпадает ли сторона перемещения с нашим отрядом
    pub fn matches(&self, party: &str) -> bool {
        let party = party.trim();
        if party.is_empty() {
            return false;
        }
        // "Troop 40123" и "40123" считаются одним и тем же отправителем
        let party_number = party
            .strip_prefix("Troop")
            .map(str::trim)
            .unwrap_or(party);
        if let Some(number) = &self.number {
            if party_number.eq_ignore_ascii_case(number) || party.eq_ignore_ascii_case(number) {
                return true;
            }
        }
        if let Some(name) = &self.name {
            if party.eq_ignore_ascii_case(name) {
                return true;
            }
        }
        false
    }

    pub fn is_known(&self) -> bool {
        self.number.is_some() || self.name.is_some()
    }
}

/// In-memory хранилище канонических сущностей одного прогона
///
/// Мутируется только фазой импорта; агрегация читает его и строит свежую
/// выходную структуру. На следующем полном реимпорте хранилище
/// выбрасывается и собирается заново.
#[derive(Debug)]
pub struct CookieStore {
    pub run_id: Uuid,
    pub config: TroopConfig,
    pub troop: TroopIdentity,

    /// Реестр заказов по номеру
    pub orders: BTreeMap<String, Order>,
    /// Реестр продавцов по отображаемому имени
    pub scouts: BTreeMap<String, ScoutRecord>,
    /// Append-only список классифицированных перемещений
    pub transfers: Vec<Transfer>,
    /// Append-only список зачётов
    pub allocations: Vec<Allocation>,
    pub booth_locations: Vec<BoothLocation>,
    pub reservations: Vec<BoothReservation>,

    pub provenance: Vec<ImportProvenance>,
    pub log: RunLog,

    /// Виденные пары (divider, girl) для дедупликации зачётов
    pub(crate) seen_allocations: HashSet<(String, i64)>,
}

impl CookieStore {
    pub fn new(config: TroopConfig) -> Self {
        let troop = TroopIdentity {
            number: config.troop.number.clone(),
            name: config.troop.name.clone(),
        };
        Self {
            run_id: Uuid::new_v4(),
            config,
            troop,
            orders: BTreeMap::new(),
            scouts: BTreeMap::new(),
            transfers: Vec::new(),
            allocations: Vec::new(),
            booth_locations: Vec::new(),
            reservations: Vec::new(),
            provenance: Vec::new(),
            log: RunLog::new(),
            seen_allocations: HashSet::new(),
        }
    }

    /// Записать provenance завершённого импорта
    pub fn record_provenance(
        &mut self,
        source: DataSource,
        started_at: DateTime<Utc>,
        records_seen: usize,
        records_applied: usize,
    ) {
        self.provenance.push(ImportProvenance {
            source,
            started_at,
            finished_at: Utc::now(),
            records_seen,
            records_applied,
        });
        tracing::info!(
            "{}: imported {} of {} records",
            source.display_name(),
            records_applied,
            records_seen
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    fn identity(number: Option<&str>, name: Option<&str>) -> TroopIdentity {
        TroopIdentity {
            number: number.map(String::from),
            name: name.map(String::from),
        }
    }

    #[test]
    fn test_troop_identity_matches_number_and_name() {
        let id = identity(Some("40123"), Some("Trailblazers"));
        assert!(id.matches("40123"));
        assert!(id.matches("Troop 40123"));
        assert!(id.matches("trailblazers"));
        assert!(!id.matches("40999"));
        assert!(!id.matches(""));
    }

    #[test]
    fn test_unknown_identity_matches_nothing() {
        let id = identity(None, None);
        assert!(!id.is_known());
        assert!(!id.matches("40123"));
    }

    #[test]
    fn test_store_picks_identity_from_config() {
        let mut config = default_config();
        config.troop.number = Some("40123".to_string());
        let store = CookieStore::new(config);
        assert!(store.troop.is_known());
        assert!(store.orders.is_empty());
        assert!(store.transfers.is_empty());
    }
}
