//! # Vantage Aggregation Engine
//!
//! This crate transforms the flat vendor-sales record collection into the
//! derived series the dashboard displays.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` and the chart settings.
//! - **Stateless Calculation:** The `AggregationEngine` is a stateless
//!   calculator. Every operation re-scans the read-only record collection and
//!   returns an independent derived value, which makes the engine re-entrant
//!   and easy to test.
//! - **Total Functions:** No operation can fail. Degenerate inputs (empty
//!   collection, zero-range histogram, empty cohort) produce defined outputs
//!   (zero counts, empty series, `None` sentinels) instead of errors or NaN.
//!
//! ## Public API
//!
//! - `AggregationEngine`: the struct that contains the aggregation logic.
//! - `DashboardReport` and the per-series value types in `report`.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AggregationEngine;
pub use report::{
    CohortComparison, DashboardReport, GroupedSeries, Histogram, QuantileSegments, RankedSeries,
    ScatterSeries, SummaryStats,
};
