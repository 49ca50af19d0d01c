//! Statistical reductions over latency samples
//!
//! Pure functions only: each reduction owns its input slice for the duration
//! of the call and retains nothing afterwards. Percentiles use the
//! linear-interpolation method, smoothing uses an O(1)-update sliding
//! window, and trend fitting is ordinary least squares over the sample
//! index.

mod histogram;
mod percentile;
mod summary;
mod trend;
mod window;

pub use histogram::{histogram, Histogram};
pub use percentile::{percentiles, percentiles_f64, Percentile, DEFAULT_PERCENTILES};
pub use summary::{summarize, summarize_f64, SummaryStats};
pub use trend::{linear_trend, Trend};
pub use window::{moving_average, SlidingWindow};
