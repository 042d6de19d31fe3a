use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация системы трассировки (tracing)
///
/// Движок - библиотека: хостовое приложение зовёт это один раз на старте.
/// Повторный вызов (например, из нескольких тестов) не считается ошибкой.
pub fn initialize() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        // Подписчик уже установлен хостом
        tracing::debug!("tracing subscriber already initialized");
    }
}
