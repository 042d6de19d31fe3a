//! Классификатор перемещений
//!
//! Единственное место, где решается, как движение коробок влияет на
//! дальнейший учёт. Тотальная детерминированная функция: любой вход даёт
//! ровно одну категорию; единственный побочный эффект - лог предупреждений.

use crate::domain::store::TroopIdentity;
use crate::shared::run_log::RunLog;
use contracts::domain::a003_transfer::aggregate::TransferCategory;
use contracts::domain::common::DataSource;
use contracts::shared::run_log::WarningKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Флаги divider-ов, уточняющие T2G-перемещение
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DividerFlags {
    pub virtual_booth: bool,
    pub booth_divider: bool,
    pub direct_ship_divider: bool,
}

/// Точные коды "совет -> отряд"
const COUNCIL_EXACT: &[&str] = &["C2T"];

/// Семейство префиксов "совет -> отряд": начальные заказы (IO, IO2, ...)
const COUNCIL_PREFIXES: &[&str] = &["IO"];

/// Остальные известные коды с однозначной категорией
static STATIC_CODES: Lazy<HashMap<&'static str, TransferCategory>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("ORDER", TransferCategory::OrderRecord);
    m.insert("SHIP", TransferCategory::DirectShip);
    m.insert("PLANNED", TransferCategory::Planned);
    m
});

/// Код относится к закрытому множеству "совет -> отряд"
pub fn is_council_code(code: &str) -> bool {
    COUNCIL_EXACT.contains(&code)
        || COUNCIL_PREFIXES.iter().any(|p| code.starts_with(p))
}

/// Классифицировать перемещение
///
/// Правила в порядке приоритета:
/// 1. код "совет -> отряд" (точный или префиксное семейство) ⇒ CouncilToTroop;
/// 2. T2T ⇒ направление по сравнению отправителя с идентичностью отряда;
///    неизвестная идентичность ⇒ входящее + предупреждение;
/// 3. T2G ⇒ уточнение флагами divider-ов, иначе обычная выдача;
/// 4. G2T ⇒ возврат;
/// 5. DOC ⇒ booth-пожертвование при флаге booth divider, иначе ручное;
/// 6. статическая таблица остальных известных кодов;
/// 7. всё прочее ⇒ `Unclassified(raw)` + предупреждение.
pub fn classify(
    raw_type: &str,
    flags: DividerFlags,
    from: Option<&str>,
    troop: &TroopIdentity,
    log: &mut RunLog,
    source: DataSource,
) -> TransferCategory {
    let code = raw_type.trim().to_ascii_uppercase();

    if is_council_code(&code) {
        return TransferCategory::CouncilToTroop;
    }

    match code.as_str() {
        "T2T" => {
            if !troop.is_known() {
                log.warn(
                    WarningKind::UnresolvedTransferDirection,
                    Some(source),
                    format!(
                        "T2T direction unresolved (troop identity unknown), \
                         treating transfer from '{}' as incoming",
                        from.unwrap_or("?")
                    ),
                    None,
                );
                return TransferCategory::CouncilToTroop;
            }
            match from {
                Some(sender) if troop.matches(sender) => TransferCategory::TroopOutgoing,
                _ => TransferCategory::CouncilToTroop,
            }
        }
        "T2G" => {
            // Приоритет флагов фиксированный: virtual booth старше booth
            // divider, тот старше direct ship
            if flags.virtual_booth {
                TransferCategory::VirtualBoothAllocation
            } else if flags.booth_divider {
                TransferCategory::BoothSalesAllocation
            } else if flags.direct_ship_divider {
                TransferCategory::DirectShipAllocation
            } else {
                TransferCategory::GirlPickup
            }
        }
        "G2T" => TransferCategory::GirlReturn,
        "DOC" => {
            if flags.booth_divider {
                TransferCategory::BoothDonationRecord
            } else {
                TransferCategory::DonationRecord
            }
        }
        other => match STATIC_CODES.get(other) {
            Some(category) => category.clone(),
            None => {
                log.warn(
                    WarningKind::UnknownTransferType,
                    Some(source),
                    format!("unrecognized transfer type '{}'", raw_type.trim()),
                    None,
                );
                TransferCategory::Unclassified(raw_type.trim().to_string())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn troop() -> TroopIdentity {
        TroopIdentity {
            number: Some("40123".to_string()),
            name: Some("Trailblazers".to_string()),
        }
    }

    fn unknown_troop() -> TroopIdentity {
        TroopIdentity::default()
    }

    fn classify_simple(raw: &str, log: &mut RunLog) -> TransferCategory {
        classify(
            raw,
            DividerFlags::default(),
            None,
            &troop(),
            log,
            DataSource::TransferLedger,
        )
    }

    #[test]
    fn test_council_code_list() {
        // Закрытое множество: точный код + семейство начальных заказов
        assert!(is_council_code("C2T"));
        assert!(is_council_code("IO"));
        assert!(is_council_code("IO2"));
        assert!(!is_council_code("T2T"));
        assert!(!is_council_code("G2T"));
        assert!(!is_council_code("DOC"));
        assert!(!is_council_code("XC2T"));
    }

    #[test]
    fn test_council_to_troop() {
        let mut log = RunLog::new();
        assert_eq!(classify_simple("C2T", &mut log), TransferCategory::CouncilToTroop);
        assert_eq!(classify_simple("io2", &mut log), TransferCategory::CouncilToTroop);
        assert!(log.is_empty());
    }

    #[test]
    fn test_t2t_direction() {
        let mut log = RunLog::new();
        let outgoing = classify(
            "T2T",
            DividerFlags::default(),
            Some("Troop 40123"),
            &troop(),
            &mut log,
            DataSource::TransferLedger,
        );
        assert_eq!(outgoing, TransferCategory::TroopOutgoing);

        let incoming = classify(
            "T2T",
            DividerFlags::default(),
            Some("Troop 40999"),
            &troop(),
            &mut log,
            DataSource::TransferLedger,
        );
        assert_eq!(incoming, TransferCategory::CouncilToTroop);
        assert!(log.is_empty());
    }

    #[test]
    fn test_t2t_by_name() {
        let mut log = RunLog::new();
        let outgoing = classify(
            "T2T",
            DividerFlags::default(),
            Some("trailblazers"),
            &troop(),
            &mut log,
            DataSource::TransferLedger,
        );
        assert_eq!(outgoing, TransferCategory::TroopOutgoing);
    }

    #[test]
    fn test_t2t_unknown_identity_defaults_incoming_with_warning() {
        let mut log = RunLog::new();
        let category = classify(
            "T2T",
            DividerFlags::default(),
            Some("Troop 40123"),
            &unknown_troop(),
            &mut log,
            DataSource::TransferLedger,
        );
        assert_eq!(category, TransferCategory::CouncilToTroop);
        assert_eq!(log.count_kind(WarningKind::UnresolvedTransferDirection), 1);
    }

    #[test]
    fn test_t2g_divider_flags() {
        let mut log = RunLog::new();
        let troop = troop();
        let cases = [
            (
                DividerFlags { virtual_booth: true, booth_divider: true, direct_ship_divider: true },
                TransferCategory::VirtualBoothAllocation,
            ),
            (
                DividerFlags { booth_divider: true, direct_ship_divider: true, ..Default::default() },
                TransferCategory::BoothSalesAllocation,
            ),
            (
                DividerFlags { direct_ship_divider: true, ..Default::default() },
                TransferCategory::DirectShipAllocation,
            ),
            (DividerFlags::default(), TransferCategory::GirlPickup),
        ];
        for (flags, expected) in cases {
            let got = classify("T2G", flags, None, &troop, &mut log, DataSource::OrdersSearch);
            assert_eq!(got, expected);
        }
        assert!(log.is_empty());
    }

    #[test]
    fn test_g2t_and_donation_codes() {
        let mut log = RunLog::new();
        assert_eq!(classify_simple("G2T", &mut log), TransferCategory::GirlReturn);
        assert_eq!(classify_simple("DOC", &mut log), TransferCategory::DonationRecord);

        let booth_doc = classify(
            "DOC",
            DividerFlags { booth_divider: true, ..Default::default() },
            None,
            &troop(),
            &mut log,
            DataSource::OrdersSearch,
        );
        assert_eq!(booth_doc, TransferCategory::BoothDonationRecord);
    }

    #[test]
    fn test_static_codes() {
        let mut log = RunLog::new();
        assert_eq!(classify_simple("ORDER", &mut log), TransferCategory::OrderRecord);
        assert_eq!(classify_simple("SHIP", &mut log), TransferCategory::DirectShip);
        assert_eq!(classify_simple("PLANNED", &mut log), TransferCategory::Planned);
        assert!(log.is_empty());
    }

    #[test]
    fn test_unknown_code_is_unclassified_one_warning_each() {
        let mut log = RunLog::new();
        let first = classify_simple("XB9", &mut log);
        assert_eq!(first, TransferCategory::Unclassified("XB9".to_string()));
        assert_eq!(log.count_kind(WarningKind::UnknownTransferType), 1);

        // Идемпотентность: тот же вход - та же категория, ровно ещё одно
        // предупреждение
        let second = classify_simple("XB9", &mut log);
        assert_eq!(second, first);
        assert_eq!(log.count_kind(WarningKind::UnknownTransferType), 2);
    }
}
