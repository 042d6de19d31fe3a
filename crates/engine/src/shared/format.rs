//! Защитный разбор чисел, денег и дат из внешних фидов
//!
//! Все числовые и датовые поля источников приходят строками или слабо
//! типизированными числами. Нечисловое значение - предупреждение и ноль,
//! никогда не ошибка; пустое значение - ноль без предупреждения.

use crate::shared::run_log::RunLog;
use chrono::NaiveDate;
use contracts::domain::common::DataSource;
use contracts::shared::run_log::WarningKind;

/// Разобрать целое количество коробок
pub fn parse_count(
    raw: &str,
    log: &mut RunLog,
    source: DataSource,
    context: &str,
) -> i32 {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0;
    }
    match cleaned.parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            log.warn(
                WarningKind::MalformedNumber,
                Some(source),
                format!("non-numeric count '{}' treated as 0", raw.trim()),
                Some(context.to_string()),
            );
            0
        }
    }
}

/// Разобрать денежную сумму ("$1,234.50" -> 1234.5)
pub fn parse_money(
    raw: &str,
    log: &mut RunLog,
    source: DataSource,
    context: &str,
) -> f64 {
    let cleaned = raw.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(n) => n,
        Err(_) => {
            log.warn(
                WarningKind::MalformedNumber,
                Some(source),
                format!("non-numeric amount '{}' treated as 0", raw.trim()),
                Some(context.to_string()),
            );
            0.0
        }
    }
}

/// Известные форматы дат выгрузок
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m/%d/%y"];

/// Разобрать дату; неразобранная непустая строка - предупреждение и `None`
pub fn parse_date(
    raw: &str,
    log: &mut RunLog,
    source: DataSource,
    context: &str,
) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // RFC3339 / "YYYY-MM-DDTHH:MM:SS" - берём датовую часть
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(date_part, fmt) {
            return Some(d);
        }
    }
    log.warn(
        WarningKind::MalformedDate,
        Some(source),
        format!("unparsed date '{}'", trimmed),
        Some(context.to_string()),
    );
    None
}

/// Целое из слабо типизированного JSON-значения (число или строка)
pub fn json_count(
    value: &serde_json::Value,
    log: &mut RunLog,
    source: DataSource,
    context: &str,
) -> i32 {
    match value {
        serde_json::Value::Null => 0,
        serde_json::Value::Number(n) => n.as_i64().map(|v| v as i32).unwrap_or_else(|| {
            // Дробное количество коробок - данные битые
            log.warn(
                WarningKind::MalformedNumber,
                Some(source),
                format!("non-integer count {} treated as 0", n),
                Some(context.to_string()),
            );
            0
        }),
        serde_json::Value::String(s) => parse_count(s, log, source, context),
        other => {
            log.warn(
                WarningKind::MalformedNumber,
                Some(source),
                format!("unexpected count value {} treated as 0", other),
                Some(context.to_string()),
            );
            0
        }
    }
}

/// Сумма из слабо типизированного JSON-значения
pub fn json_money(
    value: &serde_json::Value,
    log: &mut RunLog,
    source: DataSource,
    context: &str,
) -> f64 {
    match value {
        serde_json::Value::Null => 0.0,
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => parse_money(s, log, source, context),
        other => {
            log.warn(
                WarningKind::MalformedNumber,
                Some(source),
                format!("unexpected amount value {} treated as 0", other),
                Some(context.to_string()),
            );
            0.0
        }
    }
}

/// Идентификатор из JSON: число или строка -> каноническая строка
pub fn json_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                Some(t.to_string())
            }
        }
        _ => None,
    }
}

/// Числовой girl_id из JSON-значения
pub fn json_girl_id(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> RunLog {
        RunLog::new()
    }

    #[test]
    fn test_parse_count() {
        let mut l = log();
        assert_eq!(parse_count("42", &mut l, DataSource::TransferLedger, "t"), 42);
        assert_eq!(parse_count(" 1,250 ", &mut l, DataSource::TransferLedger, "t"), 1250);
        assert_eq!(parse_count("", &mut l, DataSource::TransferLedger, "t"), 0);
        assert_eq!(parse_count("-3", &mut l, DataSource::TransferLedger, "t"), -3);
        assert!(l.is_empty());

        assert_eq!(parse_count("abc", &mut l, DataSource::TransferLedger, "t"), 0);
        assert_eq!(l.count_kind(WarningKind::MalformedNumber), 1);
    }

    #[test]
    fn test_parse_money() {
        let mut l = log();
        assert_eq!(parse_money("$1,234.50", &mut l, DataSource::DigitalCookieExport, "t"), 1234.5);
        assert_eq!(parse_money("6", &mut l, DataSource::DigitalCookieExport, "t"), 6.0);
        assert_eq!(parse_money("", &mut l, DataSource::DigitalCookieExport, "t"), 0.0);
        assert!(l.is_empty());

        assert_eq!(parse_money("n/a", &mut l, DataSource::DigitalCookieExport, "t"), 0.0);
        assert_eq!(l.count_kind(WarningKind::MalformedNumber), 1);
    }

    #[test]
    fn test_parse_date_formats() {
        let mut l = log();
        let expected = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(parse_date("01/15/2026", &mut l, DataSource::TransferLedger, "t"), Some(expected));
        assert_eq!(parse_date("2026-01-15", &mut l, DataSource::TransferLedger, "t"), Some(expected));
        assert_eq!(parse_date("2026-01-15T10:30:00", &mut l, DataSource::OrdersSearch, "t"), Some(expected));
        assert_eq!(parse_date("", &mut l, DataSource::TransferLedger, "t"), None);
        assert!(l.is_empty());

        assert_eq!(parse_date("January 15", &mut l, DataSource::TransferLedger, "t"), None);
        assert_eq!(l.count_kind(WarningKind::MalformedDate), 1);
    }

    #[test]
    fn test_json_count_variants() {
        let mut l = log();
        assert_eq!(json_count(&serde_json::json!(7), &mut l, DataSource::OrdersSearch, "t"), 7);
        assert_eq!(json_count(&serde_json::json!("7"), &mut l, DataSource::OrdersSearch, "t"), 7);
        assert_eq!(json_count(&serde_json::Value::Null, &mut l, DataSource::OrdersSearch, "t"), 0);
        assert!(l.is_empty());

        assert_eq!(json_count(&serde_json::json!(1.5), &mut l, DataSource::OrdersSearch, "t"), 0);
        assert_eq!(json_count(&serde_json::json!("x"), &mut l, DataSource::OrdersSearch, "t"), 0);
        assert_eq!(l.count_kind(WarningKind::MalformedNumber), 2);
    }

    #[test]
    fn test_json_ids() {
        assert_eq!(json_id(&serde_json::json!(501)), Some("501".to_string()));
        assert_eq!(json_id(&serde_json::json!(" res-1 ")), Some("res-1".to_string()));
        assert_eq!(json_id(&serde_json::json!("")), None);
        assert_eq!(json_girl_id(&serde_json::json!(501)), Some(501));
        assert_eq!(json_girl_id(&serde_json::json!("501")), Some(501));
        assert_eq!(json_girl_id(&serde_json::json!("Ava")), None);
    }
}
