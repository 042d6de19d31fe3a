use serde::{Deserialize, Serialize};

/// Кросс-системная идентичность продавца
///
/// Ключ реестра - отображаемое имя. Поля заполняются первым источником,
/// который их знает; позднейший источник без значения никогда не сбрасывает
/// уже известное поле в `None`.
///
/// Известный риск: два продавца с одинаковым именем сольются в одну запись.
/// На масштабе одного отряда принято как допустимое; числовой `girl_id`
/// используется для джойнов с divider-фидами.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoutRecord {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    /// Числовой id продавца в Smart Cookies
    pub girl_id: Option<i64>,
    /// Идентификатор в Digital Cookie
    pub dc_id: Option<String>,
    pub grade: Option<String>,
    pub service_unit: Option<String>,
    pub troop_id: Option<String>,
    pub council: Option<String>,
    pub district: Option<String>,
}

impl ScoutRecord {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            display_name: display_name(first_name, last_name),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            ..Default::default()
        }
    }
}

/// Каноническое отображаемое имя "First Last"
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name.trim(), last_name.trim())
        .trim()
        .to_string()
}
