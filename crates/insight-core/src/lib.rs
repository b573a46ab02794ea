pub mod error;
pub mod format;
pub mod math;
pub mod report;
pub mod store;
pub mod types;

#[cfg(feature = "ratios")]
pub mod metrics;

#[cfg(feature = "flags")]
pub mod flags;

#[cfg(feature = "charts")]
pub mod charts;

#[cfg(feature = "context")]
pub mod context;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::InsightError;
pub use types::*;

/// Standard result type for all insight operations
pub type InsightResult<T> = Result<T, InsightError>;
