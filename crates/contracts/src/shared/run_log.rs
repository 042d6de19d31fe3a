use crate::domain::common::DataSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Вид предупреждения, накопленного за прогон
///
/// Предупреждения не прерывают обработку: значение берётся нулевым или
/// безопасным, а запись попадает в лог прогона и в health-счётчики.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Колонка/идентификатор сорта не опознан
    UnknownVariety,
    /// Нечисловое значение в числовом поле
    MalformedNumber,
    /// Дата не разобрана ни одним известным форматом
    MalformedDate,
    /// Неопознанный тип заказа (блокирующий для витрины счётчик)
    UnknownOrderType,
    /// Неопознанный способ оплаты
    UnknownPaymentMethod,
    /// Неопознанный код типа перемещения
    UnknownTransferType,
    /// Направление T2T не определить: идентичность отряда неизвестна
    UnresolvedTransferDirection,
    /// girl_id из divider-фида не разобран или не найден
    UnknownGirlId,
    /// Повторная пара (divider, girl) - зачёт уже учтён
    DuplicateAllocation,
}

/// Одно предупреждение прогона
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub source: Option<DataSource>,
    pub message: String,
    /// Контекст записи (номер заказа, имя колонки и т.п.)
    pub context: Option<String>,
}

/// Запись о выполненном импорте одного источника
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportProvenance {
    pub source: DataSource,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Записей во входном фиде
    pub records_seen: usize,
    /// Записей, применённых к хранилищу
    pub records_applied: usize,
}
