use contracts::domain::common::DataSource;
use contracts::shared::run_log::{Warning, WarningKind};

/// Накопитель предупреждений прогона
///
/// Единственный побочный эффект парсеров и классификатора. Каждое
/// предупреждение дублируется в tracing и сохраняется для отчёта прогона.
#[derive(Debug, Default)]
pub struct RunLog {
    warnings: Vec<Warning>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(
        &mut self,
        kind: WarningKind,
        source: Option<DataSource>,
        message: impl Into<String>,
        context: Option<String>,
    ) {
        let message = message.into();
        match &context {
            Some(ctx) => tracing::warn!("{} ({})", message, ctx),
            None => tracing::warn!("{}", message),
        }
        self.warnings.push(Warning {
            kind,
            source,
            message,
            context,
        });
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Число предупреждений данного вида
    pub fn count_kind(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }
}
