use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Сорта печенья сезона
///
/// `CookieShare` - виртуальный "сорт": благотворительное пожертвование,
/// физической коробки не существует, в складской арифметике не участвует.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Variety {
    Adventurefuls,
    LemonUps,
    Trefoils,
    DoSiDos,
    Samoas,
    Tagalongs,
    ThinMints,
    Smores,
    ToffeeTastic,
    CookieShare,
}

impl Variety {
    pub fn all() -> Vec<Variety> {
        vec![
            Variety::Adventurefuls,
            Variety::LemonUps,
            Variety::Trefoils,
            Variety::DoSiDos,
            Variety::Samoas,
            Variety::Tagalongs,
            Variety::ThinMints,
            Variety::Smores,
            Variety::ToffeeTastic,
            Variety::CookieShare,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Variety::Adventurefuls => "adventurefuls",
            Variety::LemonUps => "lemon_ups",
            Variety::Trefoils => "trefoils",
            Variety::DoSiDos => "do_si_dos",
            Variety::Samoas => "samoas",
            Variety::Tagalongs => "tagalongs",
            Variety::ThinMints => "thin_mints",
            Variety::Smores => "smores",
            Variety::ToffeeTastic => "toffee_tastic",
            Variety::CookieShare => "cookie_share",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variety::Adventurefuls => "Adventurefuls",
            Variety::LemonUps => "Lemon-Ups",
            Variety::Trefoils => "Trefoils",
            Variety::DoSiDos => "Do-Si-Dos",
            Variety::Samoas => "Samoas",
            Variety::Tagalongs => "Tagalongs",
            Variety::ThinMints => "Thin Mints",
            Variety::Smores => "Girl Scout S'mores",
            Variety::ToffeeTastic => "Toffee-Tastic",
            Variety::CookieShare => "Cookie Share",
        }
    }

    /// Числовой идентификатор сорта в API Smart Cookies
    pub fn sc_id(&self) -> u32 {
        match self {
            Variety::Adventurefuls => 48,
            Variety::LemonUps => 44,
            Variety::Trefoils => 20,
            Variety::DoSiDos => 22,
            Variety::Samoas => 24,
            Variety::Tagalongs => 26,
            Variety::ThinMints => 28,
            Variety::Smores => 40,
            Variety::ToffeeTastic => 36,
            Variety::CookieShare => 90,
        }
    }

    pub fn from_sc_id(id: u32) -> Option<Variety> {
        Variety::all().into_iter().find(|v| v.sc_id() == id)
    }

    pub fn from_code(code: &str) -> Option<Variety> {
        Variety::all().into_iter().find(|v| v.code() == code)
    }

    /// Физическая коробка (все сорта кроме Cookie Share)
    pub fn is_physical(&self) -> bool {
        !matches!(self, Variety::CookieShare)
    }
}

/// Количества коробок по сортам
///
/// Значения знаковые: классификатор и агрегатор оперируют и отрицательными
/// остатками (возврат больше выдачи - это данные, которые надо показать,
/// а не ошибка).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarietyCounts(BTreeMap<Variety, i32>);

impl VarietyCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variety: Variety) -> i32 {
        self.0.get(&variety).copied().unwrap_or(0)
    }

    /// Установить количество; нулевые значения не хранятся
    pub fn set(&mut self, variety: Variety, count: i32) {
        if count == 0 {
            self.0.remove(&variety);
        } else {
            self.0.insert(variety, count);
        }
    }

    pub fn add(&mut self, variety: Variety, count: i32) {
        self.set(variety, self.get(variety) + count);
    }

    pub fn add_counts(&mut self, other: &VarietyCounts) {
        for (v, n) in other.iter() {
            self.add(v, n);
        }
    }

    pub fn subtract_counts(&mut self, other: &VarietyCounts) {
        for (v, n) in other.iter() {
            self.add(v, -n);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variety, i32)> + '_ {
        self.0.iter().map(|(v, n)| (*v, *n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Сумма по всем сортам, включая Cookie Share
    pub fn total(&self) -> i32 {
        self.0.values().sum()
    }

    /// Сумма только по физическим сортам
    pub fn physical_total(&self) -> i32 {
        self.iter()
            .filter(|(v, _)| v.is_physical())
            .map(|(_, n)| n)
            .sum()
    }

    /// Количество Cookie Share (пожертвований)
    pub fn donation_count(&self) -> i32 {
        self.get(Variety::CookieShare)
    }

    /// Копия без виртуального сорта
    pub fn physical(&self) -> VarietyCounts {
        let mut out = VarietyCounts::new();
        for (v, n) in self.iter() {
            if v.is_physical() {
                out.set(v, n);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sc_id_round_trip() {
        for v in Variety::all() {
            assert_eq!(Variety::from_sc_id(v.sc_id()), Some(v));
        }
        assert_eq!(Variety::from_sc_id(9999), None);
    }

    #[test]
    fn test_totals_exclude_cookie_share() {
        let mut counts = VarietyCounts::new();
        counts.add(Variety::ThinMints, 3);
        counts.add(Variety::Trefoils, 2);
        counts.add(Variety::CookieShare, 4);

        assert_eq!(counts.total(), 9);
        assert_eq!(counts.physical_total(), 5);
        assert_eq!(counts.donation_count(), 4);
        assert_eq!(counts.physical().total(), 5);
    }

    #[test]
    fn test_zero_entries_are_dropped() {
        let mut counts = VarietyCounts::new();
        counts.add(Variety::Samoas, 5);
        counts.add(Variety::Samoas, -5);
        assert!(counts.is_empty());
        assert_eq!(counts.get(Variety::Samoas), 0);
    }

    #[test]
    fn test_subtract_can_go_negative() {
        let mut counts = VarietyCounts::new();
        counts.add(Variety::Tagalongs, 2);
        let mut returned = VarietyCounts::new();
        returned.add(Variety::Tagalongs, 5);
        counts.subtract_counts(&returned);
        assert_eq!(counts.get(Variety::Tagalongs), -3);
        assert_eq!(counts.total(), -3);
    }
}
