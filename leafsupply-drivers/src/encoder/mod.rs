//! Rotary encoder drivers

mod edge;

pub use edge::EdgeSampledEncoder;
