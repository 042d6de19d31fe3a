//! Вспомогательный мост: CSV-текст -> строки выгрузки
//!
//! Декодирование реальных файлов выгрузок - забота внешних коллабораторов;
//! этот помощник нужен встраивающим приложениям и тестовым фикстурам.

use anyhow::Context;
use contracts::usecases::common::SourceRow;
use std::io::Read;

/// Прочитать CSV с заголовком в список строк "колонка -> значение"
pub fn rows_from_csv<R: Read>(reader: R) -> anyhow::Result<Vec<SourceRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr
        .headers()
        .context("CSV has no header row")?
        .clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.context("malformed CSV record")?;
        let mut row = SourceRow::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), value.to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}
