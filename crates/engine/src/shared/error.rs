use thiserror::Error;

/// Структурные ошибки движка
///
/// Проблемы качества данных сюда не попадают: они накапливаются как
/// предупреждения и диагностика. Ошибка возможна только если хранилище
/// или конфигурация непригодны для расчёта как таковые.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("data store is structurally invalid: {0}")]
    InvalidStore(&'static str),
}
