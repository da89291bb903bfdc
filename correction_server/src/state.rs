//! Shared application state

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::registry::{KindCapabilities, KindRegistry};
use correction_forecast::FileModelStore;
use correction_math::{CorrectionTableKind, Period};
use std::sync::Arc;

/// Source of "the current month" for future-date validation
pub type Clock = Arc<dyn Fn() -> Period + Send + Sync>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub store: Arc<FileModelStore>,
    pub registry: Arc<KindRegistry>,
    clock: Clock,
}

impl AppState {
    pub fn new(config: ServerConfig, registry: KindRegistry) -> Self {
        let store = FileModelStore::new(config.model_dir.clone());
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            registry: Arc::new(registry),
            clock: Arc::new(|| Period::from_date(chrono::Local::now().date_naive())),
        }
    }

    /// Replace the clock, mostly for tests
    pub fn with_clock(mut self, clock: impl Fn() -> Period + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn current_period(&self) -> Period {
        (self.clock)()
    }

    pub fn capabilities(&self, kind: CorrectionTableKind) -> Result<&KindCapabilities, ApiError> {
        self.registry.get(kind).ok_or_else(|| {
            ApiError::NotImplemented(format!("Tabela {} não está disponível.", kind))
        })
    }
}
