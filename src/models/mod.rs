// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod indicator_set;

pub use indicator_set::{IndicatorCategory, IndicatorCounts, IndicatorSet};
