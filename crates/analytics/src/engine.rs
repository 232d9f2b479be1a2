use crate::report::{
    CohortComparison, DashboardReport, GroupedSeries, Histogram, QuantileSegments, RankedSeries,
    ScatterSeries, SummaryStats,
};
use chrono::Utc;
use configuration::ChartSettings;
use core_types::{DollarField, GroupKey, VendorRecord};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// A stateless calculator for deriving the dashboard series from the loaded
/// record collection.
///
/// Every operation is a pure function of its inputs: deterministic, re-entrant
/// and total. Each one re-scans the full collection independently; there is no
/// shared intermediate state between calls.
#[derive(Debug, Default)]
pub struct AggregationEngine {}

impl AggregationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: derives every series one dashboard session shows.
    ///
    /// # Arguments
    ///
    /// * `records` - The full, read-only record collection from the loader.
    /// * `settings` - Chart tunables (top-N cut, bin count, cohort thresholds).
    pub fn build_dashboard(
        &self,
        records: &[VendorRecord],
        settings: &ChartSettings,
    ) -> DashboardReport {
        debug!(records = records.len(), "Deriving dashboard series");

        let vendor_sales = self.group_sum(records, GroupKey::Vendor, DollarField::Sales);
        let brand_sales = self.group_sum(records, GroupKey::Brand, DollarField::Sales);
        let vendor_purchases = self.group_sum(records, GroupKey::Vendor, DollarField::Purchases);

        let margins: Vec<Decimal> = records.iter().map(|r| r.profit_margin).collect();

        DashboardReport {
            generated_at: Utc::now(),
            summary: self.summary(records),
            top_vendors_by_sales: self.top_n(&vendor_sales, settings.top_n),
            top_brands_by_sales: self.top_n(&brand_sales, settings.top_n),
            vendor_purchase_contribution: self.top_n(&vendor_purchases, settings.top_n),
            purchase_size_segments: self.quantile_segments(records),
            sales_vs_margin: self.scatter_pairs(records),
            profit_margin_distribution: self.histogram(&margins, settings.histogram_bins),
            cohort_margin_comparison: self.threshold_cohort_average(
                records,
                settings.high_share_threshold,
                settings.low_share_threshold,
            ),
        }
    }

    /// Accumulates one dollar column per distinct group key.
    ///
    /// Output order is the insertion order of each key's first occurrence.
    pub fn group_sum(
        &self,
        records: &[VendorRecord],
        key: GroupKey,
        value: DollarField,
    ) -> GroupedSeries {
        let mut entries: Vec<(String, Decimal)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in records {
            let label = key.of(record);
            match positions.get(label) {
                Some(&i) => entries[i].1 += value.of(record),
                None => {
                    positions.insert(label.to_string(), entries.len());
                    entries.push((label.to_string(), value.of(record)));
                }
            }
        }

        GroupedSeries { entries }
    }

    /// Ranks a grouped series descending by value and keeps the first `n`
    /// entries; the rest is folded into the `other` remainder.
    ///
    /// The sort is stable, so ties keep their insertion order. When `n` covers
    /// the whole series the remainder is zero.
    pub fn top_n(&self, grouped: &GroupedSeries, n: usize) -> RankedSeries {
        let total = grouped.total();

        let mut ranked = grouped.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);

        let top_total: Decimal = ranked.iter().map(|(_, value)| *value).sum();

        RankedSeries {
            entries: ranked,
            other: total - top_total,
        }
    }

    /// Splits the purchase-quantity distribution into three segments at the
    /// 1/3 and 2/3 rank positions of the ascending-sorted quantities.
    ///
    /// The boundaries are floor-division positions, not interpolated
    /// quantiles; a record lands in the lowest segment whose boundary value it
    /// does not exceed. Collections shorter than three records degenerate
    /// (some segments stay empty) without panicking.
    pub fn quantile_segments(&self, records: &[VendorRecord]) -> QuantileSegments {
        if records.is_empty() {
            return QuantileSegments::default();
        }

        let mut quantities: Vec<u64> = records
            .iter()
            .map(|r| r.total_purchase_quantity)
            .collect();
        quantities.sort_unstable();

        let q1 = quantities[quantities.len() / 3];
        let q2 = quantities[quantities.len() * 2 / 3];

        let mut segments = QuantileSegments::default();
        for record in records {
            let quantity = record.total_purchase_quantity;
            if quantity <= q1 {
                segments.small += 1;
            } else if quantity <= q2 {
                segments.medium += 1;
            } else {
                segments.large += 1;
            }
        }

        segments
    }

    /// Bins values into `bin_count` equal-width bins spanning `[min, max]`.
    ///
    /// A value's bin is `floor((v - min) / width)`. Values whose index reaches
    /// `bin_count` — exactly the maximum — fall outside every bin and are
    /// dropped, matching the upstream dashboard's binning. When the range is
    /// degenerate (`max == min`) a single bin holds every value instead of
    /// dividing by zero.
    pub fn histogram(&self, values: &[Decimal], bin_count: usize) -> Histogram {
        if values.is_empty() || bin_count == 0 {
            return Histogram::default();
        }

        let min = *values.iter().min().unwrap_or(&Decimal::ZERO);
        let max = *values.iter().max().unwrap_or(&Decimal::ZERO);

        if min == max {
            warn!(%min, "Degenerate histogram range, collapsing to a single bin");
            return Histogram {
                labels: vec![format!("{min:.1}")],
                counts: vec![values.len()],
            };
        }

        let width = (max - min) / Decimal::from(bin_count as u64);

        let labels = (0..bin_count)
            .map(|i| format!("{:.1}", min + Decimal::from(i as u64) * width))
            .collect();

        let mut counts = vec![0usize; bin_count];
        for value in values {
            let index = ((value - min) / width).floor();
            if let Some(index) = index.to_usize() {
                if index < bin_count {
                    counts[index] += 1;
                }
            }
        }

        Histogram { labels, counts }
    }

    /// Projects each record onto a (total sales, profit margin) point, input
    /// order preserved.
    pub fn scatter_pairs(&self, records: &[VendorRecord]) -> ScatterSeries {
        ScatterSeries {
            points: records
                .iter()
                .map(|r| (r.total_sales_dollars, r.profit_margin))
                .collect(),
        }
    }

    /// Averages the profit margin of the high-sales and low-sales cohorts.
    ///
    /// Total sales is computed once; a record is "high" when its sales exceed
    /// `high_share` of the total and "low" when they fall below `low_share` of
    /// the total. A cohort nobody qualifies for reports `None` rather than a
    /// zero-division artifact.
    pub fn threshold_cohort_average(
        &self,
        records: &[VendorRecord],
        high_share: Decimal,
        low_share: Decimal,
    ) -> CohortComparison {
        let total_sales: Decimal = records.iter().map(|r| r.total_sales_dollars).sum();
        let high_cut = total_sales * high_share;
        let low_cut = total_sales * low_share;

        let mut high = (Decimal::ZERO, 0u64);
        let mut low = (Decimal::ZERO, 0u64);

        for record in records {
            if record.total_sales_dollars > high_cut {
                high.0 += record.profit_margin;
                high.1 += 1;
            }
            if record.total_sales_dollars < low_cut {
                low.0 += record.profit_margin;
                low.1 += 1;
            }
        }

        CohortComparison {
            high_avg_margin: (high.1 > 0).then(|| high.0 / Decimal::from(high.1)),
            low_avg_margin: (low.1 > 0).then(|| low.0 / Decimal::from(low.1)),
        }
    }

    /// Derives the headline cards: distinct vendor count, dollar totals and
    /// the mean profit margin (zero when the collection is empty).
    pub fn summary(&self, records: &[VendorRecord]) -> SummaryStats {
        let total_vendors = records
            .iter()
            .map(|r| r.vendor_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let total_sales: Decimal = records.iter().map(|r| r.total_sales_dollars).sum();
        let total_gross_profit: Decimal = records.iter().map(|r| r.gross_profit).sum();

        let avg_profit_margin = if records.is_empty() {
            Decimal::ZERO
        } else {
            records.iter().map(|r| r.profit_margin).sum::<Decimal>()
                / Decimal::from(records.len() as u64)
        };

        SummaryStats {
            total_vendors,
            total_sales,
            total_gross_profit,
            avg_profit_margin,
        }
    }
}
