pub mod quantities;
pub mod summary;

pub use quantities::CookieQuantity;
pub use summary::ImportSummary;

use std::collections::BTreeMap;

/// Строка табличной выгрузки: колонка -> значение как в файле
///
/// Декодирование байтовых форматов (xlsx и т.п.) - забота внешних
/// коллабораторов; ядро получает уже готовые строки.
pub type SourceRow = BTreeMap<String, String>;
