use crate::enums::Platform;
use serde::{Deserialize, Serialize};

/// Источник данных (фид), из которого пришла запись
///
/// Используется как запись о происхождении на заказах и в provenance-логе
/// прогона. Каждый источник принадлежит ровно одной платформе.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Выгрузка заказов Digital Cookie ("all order data")
    DigitalCookieExport,
    /// Сводный отчёт совета
    CouncilReport,
    /// Выгрузка журнала перемещений Smart Cookies
    TransferLedger,
    /// JSON-фид orders/search Smart Cookies
    OrdersSearch,
    /// Direct-ship divider
    DirectShipDivider,
    /// Booth divider
    BoothDivider,
    /// Брони точек продаж
    Reservations,
    /// Справочник точек продаж
    BoothLocations,
}

impl DataSource {
    pub fn code(&self) -> &'static str {
        match self {
            DataSource::DigitalCookieExport => "dc_export",
            DataSource::CouncilReport => "council_report",
            DataSource::TransferLedger => "transfer_ledger",
            DataSource::OrdersSearch => "orders_search",
            DataSource::DirectShipDivider => "direct_ship_divider",
            DataSource::BoothDivider => "booth_divider",
            DataSource::Reservations => "reservations",
            DataSource::BoothLocations => "booth_locations",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DataSource::DigitalCookieExport => "Digital Cookie order export",
            DataSource::CouncilReport => "Council summary report",
            DataSource::TransferLedger => "Transfer ledger export",
            DataSource::OrdersSearch => "Orders search feed",
            DataSource::DirectShipDivider => "Direct ship divider",
            DataSource::BoothDivider => "Booth divider",
            DataSource::Reservations => "Booth reservations",
            DataSource::BoothLocations => "Booth locations",
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            DataSource::DigitalCookieExport => Platform::DigitalCookie,
            _ => Platform::SmartCookies,
        }
    }
}
