use serde::{Deserialize, Serialize};

/// Внешние платформы, из которых приходят данные о продажах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    DigitalCookie,
    SmartCookies,
}

impl Platform {
    /// Получить код платформы
    pub fn code(&self) -> &'static str {
        match self {
            Platform::DigitalCookie => "dc",
            Platform::SmartCookies => "sc",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::DigitalCookie => "Digital Cookie",
            Platform::SmartCookies => "Smart Cookies",
        }
    }

    pub fn all() -> Vec<Platform> {
        vec![Platform::DigitalCookie, Platform::SmartCookies]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dc" => Some(Platform::DigitalCookie),
            "sc" => Some(Platform::SmartCookies),
            _ => None,
        }
    }
}
