use analytics::{AggregationEngine, DashboardReport};
use configuration::ChartSettings;
use core_types::VendorRecord;
use dataset_client::{DatasetSource, error::LoadError};
use tracing::info;

/// The explicit session context: owns the loaded record collection and the
/// report derived from it.
///
/// One load→aggregate cycle per session. The aggregation engine itself stays
/// stateless; everything a session accumulates lives here and is discarded on
/// `reset`, so nothing crosses session boundaries.
pub struct DashboardSession {
    records: Vec<VendorRecord>,
    report: DashboardReport,
}

impl DashboardSession {
    /// Opens a session: fetches the full collection once and derives every
    /// dashboard series from it.
    pub async fn open(
        source: &dyn DatasetSource,
        charts: &ChartSettings,
    ) -> Result<Self, LoadError> {
        let records = source.fetch_records().await?;
        let report = AggregationEngine::new().build_dashboard(&records, charts);
        info!(records = records.len(), "Dashboard session opened");

        Ok(Self { records, report })
    }

    pub fn records(&self) -> &[VendorRecord] {
        &self.records
    }

    pub fn report(&self) -> &DashboardReport {
        &self.report
    }

    /// Ends the session, dropping the collection and all derived state.
    pub fn reset(self) {
        info!(records = self.records.len(), "Dashboard session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct FixedSource(Vec<VendorRecord>);

    #[async_trait]
    impl DatasetSource for FixedSource {
        async fn fetch_records(&self) -> Result<Vec<VendorRecord>, LoadError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DatasetSource for FailingSource {
        async fn fetch_records(&self) -> Result<Vec<VendorRecord>, LoadError> {
            Err(LoadError::Parse("not an array".to_string()))
        }
    }

    fn record(vendor: &str, sales: rust_decimal::Decimal) -> VendorRecord {
        VendorRecord {
            vendor_name: vendor.to_string(),
            description: "Sample 750ml".to_string(),
            total_sales_dollars: sales,
            total_purchase_dollars: sales / dec!(2),
            total_purchase_quantity: 10,
            gross_profit: sales / dec!(2),
            profit_margin: dec!(50),
        }
    }

    #[tokio::test]
    async fn open_loads_once_and_derives_the_report() {
        let source = FixedSource(vec![record("A", dec!(100)), record("B", dec!(40))]);

        let session = DashboardSession::open(&source, &ChartSettings::default())
            .await
            .expect("fixed source cannot fail");

        assert_eq!(session.records().len(), 2);
        assert_eq!(session.report().summary.total_vendors, 2);
        assert_eq!(session.report().summary.total_sales, dec!(140));
    }

    #[tokio::test]
    async fn a_failed_load_never_opens_a_session() {
        let result = DashboardSession::open(&FailingSource, &ChartSettings::default()).await;
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }
}
