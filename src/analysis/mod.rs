pub mod stats;

pub use stats::HeartRateSummary;
