use analytics::AggregationEngine;
use configuration::ChartSettings;
use core_types::VendorRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Test data fixtures
// ---------------------------------------------------------------------------

fn row(
    vendor: &str,
    brand: &str,
    sales: Decimal,
    quantity: u64,
    margin: Decimal,
) -> VendorRecord {
    VendorRecord {
        vendor_name: vendor.to_string(),
        description: brand.to_string(),
        total_sales_dollars: sales,
        total_purchase_dollars: sales / dec!(2),
        total_purchase_quantity: quantity,
        gross_profit: sales / dec!(2),
        profit_margin: margin,
    }
}

/// A small but realistic cut of the published dataset: one dominant vendor
/// with two brands, a mid-field, and a long tail of sub-1%-share rows.
/// Total sales come to exactly 10,000 so the cohort cuts land on round numbers.
fn sample_records() -> Vec<VendorRecord> {
    vec![
        row("DIAGEO NORTH AMERICA INC", "Smirnoff 80 Proof", dec!(5000), 1200, dec!(30)),
        row("DIAGEO NORTH AMERICA INC", "Captain Morgan Spiced", dec!(3000), 900, dec!(25)),
        row("BACARDI USA INC", "Bacardi Superior", dec!(1500), 500, dec!(20)),
        row("JIM BEAM BRANDS COMPANY", "Jim Beam Bourbon", dec!(400), 300, dec!(15)),
        row("MOET HENNESSY USA", "Hennessy VS", dec!(60), 40, dec!(35)),
        row("SAZERAC CO INC", "Fireball Cinnamon", dec!(30), 25, dec!(-5)),
        row("BROWN-FORMAN CORP", "Jack Daniels Old No 7", dec!(9), 10, dec!(10)),
        row("PERNOD RICARD USA", "Absolut 80", dec!(1), 5, dec!(-20)),
    ]
}

fn settings() -> ChartSettings {
    ChartSettings {
        top_n: 3,
        histogram_bins: 5,
        ..ChartSettings::default()
    }
}

// ---------------------------------------------------------------------------
// Composed report
// ---------------------------------------------------------------------------

#[test]
fn report_summary_covers_the_headline_cards() {
    let report = AggregationEngine::new().build_dashboard(&sample_records(), &settings());

    assert_eq!(report.summary.total_vendors, 7);
    assert_eq!(report.summary.total_sales, dec!(10000));
    assert_eq!(report.summary.total_gross_profit, dec!(5000));
    // Mean of the eight margins: 110 / 8.
    assert_eq!(report.summary.avg_profit_margin, dec!(13.75));
}

#[test]
fn report_ranks_vendors_with_the_tail_folded_into_other() {
    let report = AggregationEngine::new().build_dashboard(&sample_records(), &settings());

    let ranked = &report.top_vendors_by_sales;
    assert_eq!(
        ranked.entries,
        vec![
            ("DIAGEO NORTH AMERICA INC".to_string(), dec!(8000)),
            ("BACARDI USA INC".to_string(), dec!(1500)),
            ("JIM BEAM BRANDS COMPANY".to_string(), dec!(400)),
        ]
    );
    // 60 + 30 + 9 + 1 of long-tail sales.
    assert_eq!(ranked.other, dec!(100));
    assert_eq!(ranked.total(), report.summary.total_sales);
}

#[test]
fn report_ranks_brands_independently_of_vendors() {
    let report = AggregationEngine::new().build_dashboard(&sample_records(), &settings());

    let ranked = &report.top_brands_by_sales;
    assert_eq!(ranked.entries[0].0, "Smirnoff 80 Proof");
    assert_eq!(ranked.entries[1].0, "Captain Morgan Spiced");
    assert_eq!(ranked.entries[2].0, "Bacardi Superior");
    assert_eq!(ranked.total(), dec!(10000));
}

#[test]
fn report_contribution_series_uses_purchase_dollars() {
    let report = AggregationEngine::new().build_dashboard(&sample_records(), &settings());

    // Purchases are half of sales row by row, so the ranking matches the
    // vendor sales ranking at half the value.
    let ranked = &report.vendor_purchase_contribution;
    assert_eq!(
        ranked.entries[0],
        ("DIAGEO NORTH AMERICA INC".to_string(), dec!(4000))
    );
    assert_eq!(ranked.other, dec!(50));
}

#[test]
fn report_splits_purchase_sizes_at_the_rank_boundaries() {
    let report = AggregationEngine::new().build_dashboard(&sample_records(), &settings());

    // Quantities sorted: 5, 10, 25, 40, 300, 500, 900, 1200.
    // Boundaries at positions 8/3 = 2 (25) and 8*2/3 = 5 (500).
    let segments = report.purchase_size_segments;
    assert_eq!(segments.small, 3);
    assert_eq!(segments.medium, 3);
    assert_eq!(segments.large, 2);
}

#[test]
fn report_scatter_keeps_one_point_per_record_in_input_order() {
    let records = sample_records();
    let report = AggregationEngine::new().build_dashboard(&records, &settings());

    assert_eq!(report.sales_vs_margin.points.len(), records.len());
    assert_eq!(report.sales_vs_margin.points[0], (dec!(5000), dec!(30)));
    assert_eq!(report.sales_vs_margin.points[7], (dec!(1), dec!(-20)));
}

#[test]
fn report_histogram_spans_the_margin_range_and_drops_the_maximum() {
    let report = AggregationEngine::new().build_dashboard(&sample_records(), &settings());

    // Margins span [-20, 35] over 5 bins of width 11. The single row at the
    // maximum (35) falls outside the last bin.
    let histogram = &report.profit_margin_distribution;
    assert_eq!(histogram.counts, vec![1, 1, 1, 2, 2]);
    assert_eq!(histogram.total_count(), 7);
    assert_eq!(histogram.labels.len(), 5);
    assert_eq!(histogram.labels[0], "-20.0");
}

#[test]
fn report_cohorts_average_margins_above_and_below_the_cuts() {
    let report = AggregationEngine::new().build_dashboard(&sample_records(), &settings());

    // High cut: sales > 500 (5% of 10,000) -> margins 30, 25, 20.
    // Low cut: sales < 100 (1% of 10,000) -> margins 35, -5, 10, -20.
    let cohorts = report.cohort_margin_comparison;
    assert_eq!(cohorts.high_avg_margin, Some(dec!(25)));
    assert_eq!(cohorts.low_avg_margin, Some(dec!(5)));
}

#[test]
fn rebuilding_the_report_is_deterministic() {
    let engine = AggregationEngine::new();
    let records = sample_records();

    let first = engine.build_dashboard(&records, &settings());
    let second = engine.build_dashboard(&records, &settings());

    // Everything except the generation stamp must match exactly.
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.top_vendors_by_sales, second.top_vendors_by_sales);
    assert_eq!(first.top_brands_by_sales, second.top_brands_by_sales);
    assert_eq!(
        first.profit_margin_distribution,
        second.profit_margin_distribution
    );
    assert_eq!(
        first.cohort_margin_comparison,
        second.cohort_margin_comparison
    );
}
