//! Импорт фидов распределения: divider-ы, брони, точки продаж
//!
//! Все четыре фида идемпотентны к повторной выгрузке на уровне зачётов:
//! пара (divider, girl) учитывается один раз за прогон.

use super::processors::{booth_divider, booth_locations, direct_ship, reservations};
use crate::domain::store::CookieStore;
use anyhow::Result;
use chrono::Utc;
use contracts::domain::common::DataSource;
use contracts::usecases::common::ImportSummary;
use contracts::usecases::u505_import_allocations::request::{
    BoothDividerPayload, BoothLocationsPayload, DirectShipDividerPayload, ReservationsPayload,
};

pub fn run_direct_ship(
    store: &mut CookieStore,
    payload: &DirectShipDividerPayload,
) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(DataSource::DirectShipDivider);
    summary.records_seen = payload.girls.len();

    summary.created = direct_ship::process(store, payload);
    summary.skipped = summary.records_seen - summary.created;

    summary.warnings = store.log.len() - warnings_before;
    store.record_provenance(
        DataSource::DirectShipDivider,
        started_at,
        summary.records_seen,
        summary.created,
    );
    Ok(summary)
}

pub fn run_booth_divider(
    store: &mut CookieStore,
    payload: &BoothDividerPayload,
) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(DataSource::BoothDivider);
    summary.records_seen = payload
        .reservations
        .iter()
        .map(|r| r.girls.len())
        .sum();

    summary.created = booth_divider::process(store, payload);
    summary.skipped = summary.records_seen - summary.created;

    summary.warnings = store.log.len() - warnings_before;
    store.record_provenance(
        DataSource::BoothDivider,
        started_at,
        summary.records_seen,
        summary.created,
    );
    Ok(summary)
}

pub fn run_reservations(
    store: &mut CookieStore,
    payload: &ReservationsPayload,
) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(DataSource::Reservations);
    summary.records_seen = payload.reservations.len();

    summary.created = reservations::process(store, payload);

    summary.warnings = store.log.len() - warnings_before;
    store.record_provenance(
        DataSource::Reservations,
        started_at,
        summary.records_seen,
        summary.created,
    );
    Ok(summary)
}

pub fn run_booth_locations(
    store: &mut CookieStore,
    payload: &BoothLocationsPayload,
) -> Result<ImportSummary> {
    let started_at = Utc::now();
    let warnings_before = store.log.len();
    let mut summary = ImportSummary::new(DataSource::BoothLocations);
    summary.records_seen = payload.locations.len();

    summary.created = booth_locations::process(store, payload);

    summary.warnings = store.log.len() - warnings_before;
    store.record_provenance(
        DataSource::BoothLocations,
        started_at,
        summary.records_seen,
        summary.created,
    );
    Ok(summary)
}
