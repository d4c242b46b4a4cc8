//! Data models for extracted dialog fields and configuration.

pub mod config;
pub mod fields;

pub use config::{CommandConfig, ExtractionConfig, NormalizerConfig, StarcallConfig};
pub use fields::{ExtractedFields, StarSize, SENTINEL_ERR, SENTINEL_TIME};
