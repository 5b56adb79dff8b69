//! Projection of a selected pair into the canonical analytics document

pub mod normalizer;

pub use normalizer::{buy_pressure_ratio, normalize};
