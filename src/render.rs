use analytics::{CohortComparison, DashboardReport, Histogram, QuantileSegments, RankedSeries, ScatterSeries, SummaryStats};
use comfy_table::Table;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Prints the full dashboard: summary cards first, then the seven charts as
/// terminal tables.
pub fn print_report(report: &DashboardReport) {
    println!(
        "Vendor Performance Dashboard — generated {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    print_summary(&report.summary);
    print_ranked("Top Vendors by Sales", &report.top_vendors_by_sales, false);
    print_ranked("Top Brands by Sales", &report.top_brands_by_sales, false);
    print_ranked(
        "Vendor Purchase Contribution",
        &report.vendor_purchase_contribution,
        true,
    );
    print_segments(&report.purchase_size_segments);
    print_scatter(&report.sales_vs_margin);
    print_histogram(&report.profit_margin_distribution);
    print_cohorts(&report.cohort_margin_comparison);
}

pub fn print_summary(summary: &SummaryStats) {
    let mut table = Table::new();
    table.set_header(vec!["Vendors", "Total Sales", "Gross Profit", "Avg Margin"]);
    table.add_row(vec![
        summary.total_vendors.to_string(),
        format_currency(summary.total_sales),
        format_currency(summary.total_gross_profit),
        format!("{:.1}%", summary.avg_profit_margin),
    ]);
    println!("{table}\n");
}

fn print_ranked(title: &str, ranked: &RankedSeries, with_other: bool) {
    let mut table = Table::new();
    table.set_header(vec![title, "Dollars"]);
    for (label, value) in &ranked.entries {
        table.add_row(vec![label.clone(), format_currency(*value)]);
    }
    if with_other {
        table.add_row(vec!["Other".to_string(), format_currency(ranked.other)]);
    }
    println!("{table}\n");
}

fn print_segments(segments: &QuantileSegments) {
    let mut table = Table::new();
    table.set_header(vec!["Order Size", "Orders"]);
    table.add_row(vec!["Small".to_string(), segments.small.to_string()]);
    table.add_row(vec!["Medium".to_string(), segments.medium.to_string()]);
    table.add_row(vec!["Large".to_string(), segments.large.to_string()]);
    println!("{table}\n");
}

fn print_scatter(scatter: &ScatterSeries) {
    let mut table = Table::new();
    table.set_header(vec!["Total Sales", "Profit Margin"]);
    for (sales, margin) in &scatter.points {
        table.add_row(vec![format_currency(*sales), format!("{margin:.1}%")]);
    }
    println!("{table}\n");
}

fn print_histogram(histogram: &Histogram) {
    let mut table = Table::new();
    table.set_header(vec!["Margin Bin Start", "Frequency"]);
    for (label, count) in histogram.labels.iter().zip(&histogram.counts) {
        table.add_row(vec![label.clone(), count.to_string()]);
    }
    println!("{table}\n");
}

fn print_cohorts(cohorts: &CohortComparison) {
    let mut table = Table::new();
    table.set_header(vec!["Cohort", "Average Profit Margin"]);
    table.add_row(vec!["Top Vendors".to_string(), margin_cell(cohorts.high_avg_margin)]);
    table.add_row(vec!["Low Vendors".to_string(), margin_cell(cohorts.low_avg_margin)]);
    println!("{table}\n");
}

fn margin_cell(margin: Option<Decimal>) -> String {
    match margin {
        Some(value) => format!("{value:.1}%"),
        None => "no data".to_string(),
    }
}

/// Abbreviates a dollar amount the way the dashboard cards do: $1.2M above a
/// million, $3.4K above a thousand, whole dollars below that.
pub fn format_currency(value: Decimal) -> String {
    let abs = value.abs();
    if abs >= dec!(1000000) {
        format!("${:.1}M", value / dec!(1000000))
    } else if abs >= dec!(1000) {
        format!("${:.1}K", value / dec!(1000))
    } else {
        format!("${value:.0}")
    }
}
