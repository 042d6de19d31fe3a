use crate::domain::common::DataSource;
use serde::{Deserialize, Serialize};

/// Итог работы одного импортёра
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub source: DataSource,
    /// Записей во входном фиде
    pub records_seen: usize,
    /// Создано новых сущностей
    pub created: usize,
    /// Слито в существующие
    pub merged: usize,
    /// Пропущено (дубликаты, нераспознанные ключи)
    pub skipped: usize,
    /// Предупреждений добавлено этим импортом
    pub warnings: usize,
}

impl ImportSummary {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            records_seen: 0,
            created: 0,
            merged: 0,
            skipped: 0,
            warnings: 0,
        }
    }
}
