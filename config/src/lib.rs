//! # Config Crate
//!
//! Centralized configuration constants for the LazyTools mesh pipeline.
//! All magic numbers and tunable defaults are defined here to ensure
//! consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_MERGE_TOLERANCE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Use the merge tolerance when welding generated geometry
//! assert!(DEFAULT_MERGE_TOLERANCE > EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
