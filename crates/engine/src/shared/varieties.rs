//! Резолвинг сортов: алиасы колонок выгрузок и числовые id JSON-фидов

use crate::shared::format;
use crate::shared::run_log::RunLog;
use contracts::domain::common::{DataSource, Variety, VarietyCounts};
use contracts::shared::run_log::WarningKind;
use contracts::usecases::common::{CookieQuantity, SourceRow};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Алиасы названий колонок сортов, в нижнем регистре без пунктуации
static COLUMN_ALIASES: Lazy<HashMap<&'static str, Variety>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("adventurefuls", Variety::Adventurefuls);
    m.insert("lemon ups", Variety::LemonUps);
    m.insert("lemonups", Variety::LemonUps);
    m.insert("trefoils", Variety::Trefoils);
    m.insert("shortbread", Variety::Trefoils);
    m.insert("do si dos", Variety::DoSiDos);
    m.insert("dosidos", Variety::DoSiDos);
    m.insert("peanut butter sandwich", Variety::DoSiDos);
    m.insert("samoas", Variety::Samoas);
    m.insert("caramel delites", Variety::Samoas);
    m.insert("tagalongs", Variety::Tagalongs);
    m.insert("peanut butter patties", Variety::Tagalongs);
    m.insert("thin mints", Variety::ThinMints);
    m.insert("thinmints", Variety::ThinMints);
    m.insert("smores", Variety::Smores);
    m.insert("girl scout smores", Variety::Smores);
    m.insert("toffee tastic", Variety::ToffeeTastic);
    m.insert("toffeetastic", Variety::ToffeeTastic);
    m.insert("cookie share", Variety::CookieShare);
    m.insert("cshare", Variety::CookieShare);
    m.insert("donation", Variety::CookieShare);
    m
});

fn normalize_label(label: &str) -> String {
    // Апостроф убирается целиком ("S'mores" -> "smores"),
    // дефисы и подчёркивания становятся пробелами
    label
        .trim()
        .to_ascii_lowercase()
        .replace('\'', "")
        .replace(['-', '_', '.'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Сорт по названию колонки выгрузки
pub fn variety_from_label(label: &str) -> Option<Variety> {
    let norm = normalize_label(label);
    COLUMN_ALIASES
        .get(norm.as_str())
        .copied()
        .or_else(|| COLUMN_ALIASES.get(norm.replace(' ', "").as_str()).copied())
}

/// Собрать количества по сортам из колонок строки выгрузки
///
/// Колонкой сорта считается всё, что не входит в `core_columns`.
/// Неопознанная колонка - предупреждение, значение игнорируется.
pub fn parse_variety_columns(
    row: &SourceRow,
    core_columns: &[&str],
    log: &mut RunLog,
    source: DataSource,
    context: &str,
) -> VarietyCounts {
    let mut counts = VarietyCounts::new();
    for (column, value) in row {
        if core_columns.iter().any(|c| *c == column.as_str()) {
            continue;
        }
        match variety_from_label(column) {
            Some(variety) => {
                let n = format::parse_count(value, log, source, &format!("{context}:{column}"));
                counts.add(variety, n);
            }
            None => {
                log.warn(
                    WarningKind::UnknownVariety,
                    Some(source),
                    format!("unrecognized variety column '{}'", column),
                    Some(context.to_string()),
                );
            }
        }
    }
    counts
}

/// Собрать количества из вложенного массива `cookies` JSON-фида
///
/// Неопознанный идентификатор сорта - предупреждение, запись пропускается.
pub fn parse_cookie_quantities(
    cookies: &[CookieQuantity],
    log: &mut RunLog,
    source: DataSource,
    context: &str,
) -> VarietyCounts {
    let mut counts = VarietyCounts::new();
    for cookie in cookies {
        let id = match &cookie.id {
            serde_json::Value::Number(n) => n.as_u64().map(|v| v as u32),
            serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        };
        let variety = id.and_then(Variety::from_sc_id);
        match variety {
            Some(v) => {
                let n = format::json_count(&cookie.quantity, log, source, context);
                counts.add(v, n);
            }
            None => {
                log.warn(
                    WarningKind::UnknownVariety,
                    Some(source),
                    format!("unrecognized cookie id {} treated as 0", cookie.id),
                    Some(context.to_string()),
                );
            }
        }
    }
    counts
}
