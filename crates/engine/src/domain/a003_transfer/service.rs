use crate::domain::a003_transfer::classifier::{self, DividerFlags};
use crate::domain::store::CookieStore;
use chrono::NaiveDate;
use contracts::domain::a003_transfer::aggregate::Transfer;
use contracts::domain::common::{DataSource, VarietyCounts};

/// Поля одного перемещения до классификации
#[derive(Debug, Clone, Default)]
pub struct TransferDraft {
    pub raw_type: String,
    pub flags: DividerFlags,
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<NaiveDate>,
    pub varieties: VarietyCounts,
    pub amount: f64,
    pub status: Option<String>,
    pub pending: bool,
}

/// Классифицировать и добавить перемещение в список
///
/// Категория назначается здесь ровно один раз и дальше никогда не
/// пересчитывается. Список append-only: дубликаты пересекающихся фидов
/// не подавляются.
pub fn record_transfer(store: &mut CookieStore, draft: TransferDraft, source: DataSource) {
    let category = classifier::classify(
        &draft.raw_type,
        draft.flags,
        draft.from.as_deref(),
        &store.troop,
        &mut store.log,
        source,
    );

    let mut transfer =
        Transfer::from_varieties(draft.raw_type, category, draft.varieties, source);
    transfer.from = draft.from;
    transfer.to = draft.to;
    transfer.date = draft.date;
    transfer.amount = draft.amount;
    transfer.status = draft.status;
    transfer.pending = draft.pending;

    store.transfers.push(transfer);
}
