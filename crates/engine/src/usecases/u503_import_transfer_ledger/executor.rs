//! Импорт выгрузки журнала перемещений Smart Cookies
//!
//! Плоская таблица: по строке на перемещение, количества по сортам в
//! отдельных колонках. Флагов divider-ов в выгрузке нет - T2G отсюда
//! всегда обычная выдача.

use crate::domain::a003_transfer::service::{self as transfer_service, TransferDraft};
use crate::domain::store::CookieStore;
use crate::shared::{format, varieties};
use anyhow::{anyhow, Result};
use chrono::Utc;
use contracts::domain::common::DataSource;
use contracts::usecases::common::{ImportSummary, SourceRow};
use contracts::usecases::u503_import_transfer_ledger::request as columns;

const SOURCE: DataSource = DataSource::TransferLedger;

pub fn run(store: &mut CookieStore, rows: &[SourceRow]) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(SOURCE);
    summary.records_seen = rows.len();

    for (idx, row) in rows.iter().enumerate() {
        process_ledger_row(store, row).map_err(|e| anyhow!("row {}: {}", idx + 1, e))?;
        summary.created += 1;
    }

    summary.warnings = store.log.len() - warnings_before;
    store.record_provenance(SOURCE, started_at, rows.len(), summary.created);
    Ok(summary)
}

fn process_ledger_row(store: &mut CookieStore, row: &SourceRow) -> Result<()> {
    let raw_type = row
        .get(columns::TRANSFER_TYPE)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("missing '{}'", columns::TRANSFER_TYPE))?
        .to_string();
    let context = format!("ledger {}", raw_type);

    let counts = varieties::parse_variety_columns(
        row,
        columns::CORE_COLUMNS,
        &mut store.log,
        SOURCE,
        &context,
    );
    let amount = row
        .get(columns::AMOUNT)
        .map(|raw| format::parse_money(raw, &mut store.log, SOURCE, &context))
        .unwrap_or(0.0);
    let date = row
        .get(columns::DATE)
        .and_then(|raw| format::parse_date(raw, &mut store.log, SOURCE, &context));
    let status = non_empty(row.get(columns::STATUS));
    let pending = status
        .as_deref()
        .map(|s| s.eq_ignore_ascii_case("pending"))
        .unwrap_or(false);

    transfer_service::record_transfer(
        store,
        TransferDraft {
            raw_type,
            from: non_empty(row.get(columns::FROM)),
            to: non_empty(row.get(columns::TO)),
            date,
            varieties: counts,
            amount,
            status,
            pending,
            ..Default::default()
        },
        SOURCE,
    );
    Ok(())
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use crate::shared::rows::rows_from_csv;
    use contracts::domain::a003_transfer::aggregate::TransferCategory;
    use contracts::domain::common::Variety;
    use contracts::shared::run_log::WarningKind;

    const FIXTURE: &str = "\
Type,From,To,Date,Total Packages,Amount,Status,Thin Mints,Trefoils
C2T,Council Cupboard,Troop 40123,01/05/2026,30,180.00,Completed,20,10
T2G,Troop 40123,Ava Anderson,01/08/2026,15,90.00,Completed,8,7
G2T,Ava Anderson,Troop 40123,01/18/2026,2,12.00,Completed,0,2
";

    fn store_with_troop() -> CookieStore {
        let mut config = default_config();
        config.troop.number = Some("40123".to_string());
        CookieStore::new(config)
    }

    #[test]
    fn test_ledger_rows_become_classified_transfers() {
        let mut store = store_with_troop();
        let rows = rows_from_csv(FIXTURE.as_bytes()).unwrap();
        let summary = run(&mut store, &rows).unwrap();
        assert_eq!(summary.created, 3);
        assert_eq!(store.transfers.len(), 3);

        assert_eq!(store.transfers[0].category, TransferCategory::CouncilToTroop);
        assert_eq!(store.transfers[0].physical_packages, 30);
        assert_eq!(store.transfers[0].varieties.get(Variety::ThinMints), 20);

        assert_eq!(store.transfers[1].category, TransferCategory::GirlPickup);
        assert_eq!(store.transfers[1].to.as_deref(), Some("Ava Anderson"));

        assert_eq!(store.transfers[2].category, TransferCategory::GirlReturn);
        assert_eq!(store.transfers[2].physical_packages, 2);
        assert!(store.log.is_empty());
    }

    #[test]
    fn test_unknown_type_still_recorded_as_unclassified() {
        let csv_text = "\
Type,From,To,Thin Mints
XB9,Somewhere,Troop 40123,4
";
        let mut store = store_with_troop();
        let rows = rows_from_csv(csv_text.as_bytes()).unwrap();
        run(&mut store, &rows).unwrap();
        assert_eq!(store.transfers.len(), 1);
        assert!(store.transfers[0].category.is_unclassified());
        assert_eq!(store.log.count_kind(WarningKind::UnknownTransferType), 1);
    }

    #[test]
    fn test_missing_type_aborts() {
        let csv_text = "\
Type,From,To
,Council,Troop 40123
";
        let mut store = store_with_troop();
        let rows = rows_from_csv(csv_text.as_bytes()).unwrap();
        assert!(run(&mut store, &rows).is_err());
        assert!(store.transfers.is_empty());
    }
}
