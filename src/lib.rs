#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and unit conversions.
pub mod constants;
/// Shared scalar aliases and complex helpers.
pub mod math;
/// Line parameter sets and their validation.
pub mod params;
/// The lossy RLGC line model.
pub mod line;
/// ABCD two-port representation of line sections.
pub mod twoport;
/// Frequency sweep builders and post-processing helpers.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
