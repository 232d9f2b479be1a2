use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A grouped-sum series: one `(label, summed value)` entry per distinct group
/// key, in insertion order of first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GroupedSeries {
    pub entries: Vec<(String, Decimal)>,
}

impl GroupedSeries {
    /// Sum of every entry value.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, value)| *value).sum()
    }

    /// Looks up the summed value for a label. Linear scan; the series is small.
    pub fn value(&self, label: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| *value)
    }
}

/// A ranked top-N series, descending by value, with everything past the cut
/// folded into a single remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RankedSeries {
    pub entries: Vec<(String, Decimal)>,
    /// Total of the source series minus the ranked entries. Zero when nothing
    /// was cut off.
    pub other: Decimal,
}

impl RankedSeries {
    /// Ranked entries plus the remainder; equals the source series total.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, value)| *value).sum::<Decimal>() + self.other
    }
}

/// Record counts of the three purchase-size segments, split at the 1/3 and 2/3
/// rank positions of the purchase-quantity distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuantileSegments {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl QuantileSegments {
    pub fn total(&self) -> usize {
        self.small + self.medium + self.large
    }
}

/// A fixed-bin frequency distribution. `labels` holds the lower edge of each
/// bin, formatted for display; `counts` is parallel to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// A direct projection of two numeric columns, one point per record, input
/// order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScatterSeries {
    pub points: Vec<(Decimal, Decimal)>,
}

/// Average profit margin of the high-sales and low-sales cohorts.
///
/// `None` is the "no data" sentinel for an empty cohort; it is never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CohortComparison {
    pub high_avg_margin: Option<Decimal>,
    pub low_avg_margin: Option<Decimal>,
}

/// The headline cards shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SummaryStats {
    /// Number of distinct vendor names in the collection.
    pub total_vendors: usize,
    pub total_sales: Decimal,
    pub total_gross_profit: Decimal,
    /// Mean of the per-record profit margins; zero for an empty collection.
    pub avg_profit_margin: Decimal,
}

/// Everything one dashboard session derives from the record collection: the
/// summary cards and the seven chart series.
///
/// The report is ephemeral. It is recomputed from scratch on every session and
/// discarded on reset; nothing in it is cached across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// When this report was derived. The published dataset carries a date
    /// column the same way.
    pub generated_at: DateTime<Utc>,
    pub summary: SummaryStats,
    pub top_vendors_by_sales: RankedSeries,
    pub top_brands_by_sales: RankedSeries,
    pub vendor_purchase_contribution: RankedSeries,
    pub purchase_size_segments: QuantileSegments,
    pub sales_vs_margin: ScatterSeries,
    pub profit_margin_distribution: Histogram,
    pub cohort_margin_comparison: CohortComparison,
}
