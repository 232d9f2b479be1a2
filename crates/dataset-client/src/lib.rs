use crate::error::LoadError;
use async_trait::async_trait;
use configuration::DatasetSettings;
use core_types::VendorRecord;
use tracing::{debug, info};

pub mod error;

// --- Public API ---
pub use error::LoadError as DatasetLoadError;

/// The generic, abstract interface for a vendor-dataset source.
/// This trait is the contract the dashboard session uses, allowing the
/// underlying implementation (HTTP or mock) to be swapped out.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetches the full vendor-sales record collection.
    ///
    /// Delivery is all-or-nothing: either the complete collection parses, or
    /// the call fails. No retry is attempted and no partial result is returned.
    async fn fetch_records(&self) -> Result<Vec<VendorRecord>, LoadError>;
}

/// A concrete `DatasetSource` that performs one GET of a static JSON resource.
#[derive(Clone)]
pub struct HttpDatasetClient {
    client: reqwest::Client,
    url: String,
}

impl HttpDatasetClient {
    pub fn new(settings: &DatasetSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: settings.url.clone(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetClient {
    async fn fetch_records(&self) -> Result<Vec<VendorRecord>, LoadError> {
        info!(url = %self.url, "Fetching vendor dataset");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Transport(status));
        }

        let body = response.text().await?;
        let records = parse_records(&body)?;
        info!(records = records.len(), "Vendor dataset loaded");

        Ok(records)
    }
}

/// Decodes a dataset body into records.
///
/// Split out of the HTTP path so the JSON contract is testable without a
/// network. The document must be a top-level array of record objects.
pub fn parse_records(body: &str) -> Result<Vec<VendorRecord>, LoadError> {
    let records: Vec<VendorRecord> =
        serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
    debug!(records = records.len(), "Parsed dataset body");
    Ok(records)
}
