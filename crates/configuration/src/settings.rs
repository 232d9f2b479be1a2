use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub charts: ChartSettings,
}

/// Describes where the published vendor-sales dataset lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    /// URL of the vendor sales summary JSON document.
    pub url: String,
}

/// Tunable parameters for the derived chart series.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// How many leaders the ranked series keep before folding the rest into "Other".
    pub top_n: usize,
    /// Number of bins in the profit-margin histogram.
    pub histogram_bins: usize,
    /// A record joins the high-sales cohort when its sales exceed this share of total sales.
    /// 0.05 corresponds to 5%.
    pub high_share_threshold: Decimal,
    /// A record joins the low-sales cohort when its sales fall below this share of total sales.
    /// 0.01 corresponds to 1%.
    pub low_share_threshold: Decimal,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            histogram_bins: 20,
            high_share_threshold: dec!(0.05),
            low_share_threshold: dec!(0.01),
        }
    }
}
