//! # Config Crate
//!
//! Centralized configuration constants for the Mobius ring mesh pipeline.
//! Default parameter values, tolerances and safety limits live here so the
//! geometry core, the parameter record and the WASM boundary agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_SIDES, EPSILON, MIN_SIDES};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! assert!(approx_zero(value));
//!
//! // Default cross-section is always a valid polygon
//! assert!(DEFAULT_SIDES >= MIN_SIDES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
