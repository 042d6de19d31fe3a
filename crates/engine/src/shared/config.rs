use contracts::domain::common::Variety;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
pub struct TroopConfig {
    pub troop: TroopSection,
    pub pricing: PricingSection,
    pub proceeds: ProceedsSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TroopSection {
    /// Номер отряда в Smart Cookies (нужен для направления T2T)
    pub number: Option<String>,
    pub name: Option<String>,
    /// Фамилия-сентинел site-продавца в выгрузке Digital Cookie
    #[serde(default = "default_site_last_name")]
    pub site_last_name: String,
}

fn default_site_last_name() -> String {
    "Site".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingSection {
    /// Цена коробки по умолчанию
    pub default_price: f64,
    /// Переопределения по кодам сортов (`Variety::code`)
    #[serde(default)]
    pub overrides: BTreeMap<String, f64>,
}

impl PricingSection {
    pub fn unit_price(&self, variety: Variety) -> f64 {
        self.overrides
            .get(variety.code())
            .copied()
            .unwrap_or(self.default_price)
    }
}

/// Ступень ставки выручки
#[derive(Debug, Deserialize, Clone)]
pub struct ProceedsBand {
    pub min_active: usize,
    pub rate: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProceedsSection {
    /// Ступени ставки по числу активных продавцов
    pub bands: Vec<ProceedsBand>,
    /// Первые N коробок каждого активного продавца вычитаются из выручки
    pub exempt_packages_per_scout: i32,
}

impl ProceedsSection {
    /// Ставка для данного числа активных продавцов: максимальная ступень,
    /// порог которой не превышает счётчик
    pub fn rate_for_active(&self, active: usize) -> f64 {
        self.bands
            .iter()
            .filter(|b| b.min_active <= active)
            .max_by_key(|b| b.min_active)
            .map(|b| b.rate)
            .unwrap_or(0.0)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[troop]
site_last_name = "Site"

[pricing]
default_price = 6.0

[pricing.overrides]
toffee_tastic = 7.0
smores = 7.0

[proceeds]
exempt_packages_per_scout = 12
bands = [
    { min_active = 0, rate = 0.75 },
    { min_active = 2, rate = 0.80 },
    { min_active = 5, rate = 0.85 },
    { min_active = 10, rate = 0.90 },
]
"#;

/// Конфигурация по умолчанию, зашитая в бинарь
pub fn default_config() -> TroopConfig {
    toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
}

/// Load configuration from troop.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<TroopConfig> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("troop.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: TroopConfig = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("troop.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: TroopConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.troop.site_last_name, "Site");
        assert_eq!(config.pricing.default_price, 6.0);
        assert_eq!(config.pricing.unit_price(Variety::ThinMints), 6.0);
        assert_eq!(config.pricing.unit_price(Variety::ToffeeTastic), 7.0);
        assert_eq!(config.proceeds.exempt_packages_per_scout, 12);
    }

    #[test]
    fn test_rate_band_lookup() {
        let config = default_config();
        let p = &config.proceeds;
        assert_eq!(p.rate_for_active(0), 0.75);
        assert_eq!(p.rate_for_active(1), 0.75);
        assert_eq!(p.rate_for_active(2), 0.80);
        assert_eq!(p.rate_for_active(4), 0.80);
        assert_eq!(p.rate_for_active(5), 0.85);
        assert_eq!(p.rate_for_active(25), 0.90);
    }
}
