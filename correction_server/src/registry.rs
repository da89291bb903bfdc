//! Per-kind capabilities: where rates and tables come from, which model to train

use crate::config::ServerConfig;
use crate::sources::{
    AccumulatedTableSource, BcbRateSource, CjfTableSource, RateSource, SourceError, TableSource,
};
use correction_forecast::ModelFamily;
use correction_math::{CorrectionTableKind, Period};
use std::collections::BTreeMap;
use std::sync::Arc;

/// What the service can do for one correction table kind
#[derive(Clone)]
pub struct KindCapabilities {
    /// Historical rates; `None` when the kind has no API to train or extend from
    pub rate_source: Option<Arc<dyn RateSource>>,
    /// Latest published table
    pub table_source: Arc<dyn TableSource>,
    /// Regression family trained for this kind
    pub family: ModelFamily,
    /// Earliest reference month accepted for corrections
    pub minimum_reference: Period,
}

/// Lookup from kind to capabilities.
///
/// Adding a kind means registering one more entry; handlers never branch on
/// the kind itself.
#[derive(Clone, Default)]
pub struct KindRegistry {
    entries: BTreeMap<CorrectionTableKind, KindCapabilities>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, kind: CorrectionTableKind, capabilities: KindCapabilities) -> Self {
        self.entries.insert(kind, capabilities);
        self
    }

    pub fn get(&self, kind: CorrectionTableKind) -> Option<&KindCapabilities> {
        self.entries.get(&kind)
    }

    /// Registered kinds in a stable order
    pub fn kinds(&self) -> impl Iterator<Item = CorrectionTableKind> + '_ {
        self.entries.keys().copied()
    }

    /// Production wiring for every supported kind
    pub fn from_config(config: &ServerConfig) -> Result<Self, SourceError> {
        let selic: Arc<dyn RateSource> = Arc::new(BcbRateSource::new(
            config.bcb_api_url.clone(),
            config.http_timeout,
        )?);

        let registry = Self::new()
            .register(
                CorrectionTableKind::Selic,
                KindCapabilities {
                    rate_source: Some(selic.clone()),
                    table_source: Arc::new(AccumulatedTableSource::new(selic, "selic.csv")),
                    family: ModelFamily::DecisionTree,
                    minimum_reference: CorrectionTableKind::Selic.minimum_reference(),
                },
            )
            .register(
                CorrectionTableKind::JusticaFederal,
                KindCapabilities {
                    rate_source: None,
                    table_source: Arc::new(CjfTableSource::new(config.cjf_url.clone())),
                    family: ModelFamily::DecisionTree,
                    minimum_reference: CorrectionTableKind::JusticaFederal.minimum_reference(),
                },
            );

        Ok(registry)
    }
}
