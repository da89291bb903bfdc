//! Upstream data sources: rate history and ready-made correction tables

use async_trait::async_trait;
use correction_forecast::data::DataLoader;
use correction_forecast::table::correction_table_csv;
use correction_forecast::ForecastError;
use correction_math::{accumulate, Series};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error(transparent)]
    Data(#[from] ForecastError),

    #[error("{0}")]
    Unsupported(String),
}

/// Supplier of a correction table's historical monthly rates
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch and clean the full history
    async fn fetch(&self) -> Result<Series, SourceError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Rates from the central bank SGS API
#[derive(Debug, Clone)]
pub struct BcbRateSource {
    client: reqwest::Client,
    url: String,
}

impl BcbRateSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RateSource for BcbRateSource {
    async fn fetch(&self) -> Result<Series, SourceError> {
        tracing::debug!(url = %self.url, "fetching rate history");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let series = DataLoader::from_bcb_slice(&body)?;
        tracing::debug!(observations = series.len(), "rate history fetched");
        Ok(series)
    }

    fn name(&self) -> &str {
        "bcb"
    }
}

/// A downloadable table file
#[derive(Debug, Clone, PartialEq)]
pub struct TableFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Supplier of the latest complete correction table for a kind
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn latest_table(&self) -> Result<TableFile, SourceError>;
}

/// Builds the table by accumulating a rate history
pub struct AccumulatedTableSource {
    rates: Arc<dyn RateSource>,
    file_name: String,
}

impl AccumulatedTableSource {
    pub fn new(rates: Arc<dyn RateSource>, file_name: impl Into<String>) -> Self {
        Self {
            rates,
            file_name: file_name.into(),
        }
    }
}

#[async_trait]
impl TableSource for AccumulatedTableSource {
    async fn latest_table(&self) -> Result<TableFile, SourceError> {
        let history = self.rates.fetch().await?;
        let table = accumulate(&history);
        let bytes = correction_table_csv(&table)?;

        Ok(TableFile {
            file_name: self.file_name.clone(),
            content_type: "text/csv; charset=utf-8",
            bytes,
        })
    }
}

/// Federal justice table, published only through an interactive web form
#[derive(Debug, Clone, Default)]
pub struct CjfTableSource {
    url: Option<String>,
}

impl CjfTableSource {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }
}

#[async_trait]
impl TableSource for CjfTableSource {
    async fn latest_table(&self) -> Result<TableFile, SourceError> {
        tracing::warn!(url = ?self.url, "federal justice table download requested");
        Err(SourceError::Unsupported(
            "Download automatizado da tabela da Justiça Federal não está disponível.".to_string(),
        ))
    }
}
