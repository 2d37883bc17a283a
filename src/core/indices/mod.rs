//! Drought index calculations. One file per index family.
pub mod anomaly;
pub mod band_math;
pub mod condition;
pub mod health;

// Re-export indices
pub use anomaly::avi;
pub use band_math::{SAVI_SOIL_FACTOR, ndvi, savi};
pub use condition::{tci, vci};
pub use health::vhi;
