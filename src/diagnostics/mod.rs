//! Run diagnostics attached to sweep reports.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};
