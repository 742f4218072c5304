//! Demand forecasting
//!
//! Diagnosis requests are grouped into fixed-width day buckets counted back
//! from the anchor day. Recent buckets weigh more: with depth `N` the newest
//! bucket has weight `N` and the oldest `1`, and the forecast is the weighted
//! sum divided by `1 + 2 + .. + N`.
//!
//! Submodules:
//! - [`buckets`]: bucket layout and weighting
//! - [`demand`]: request volume, doctor demand and per-label counts
//! - [`intervals`]: interval grids and age groups for series
//! - [`series`]: per-label forecast series

pub mod buckets;
pub mod demand;
pub mod intervals;
pub mod series;

pub use buckets::{DemandBucket, buckets, weight_denominator, weighted_average};
pub use demand::DemandForecaster;
pub use intervals::{AgeGroup, interval_dates, interval_lengths, round_two_decimals};
pub use series::{ForecastSeries, series_horizons};
