//! Convenience re-exports for line calculations.

pub use crate::constants::*;
pub use crate::errors::{TlError, TlResult};
pub use crate::line::{Rlgc, RlgcLine};
pub use crate::math::{CScalar, J, Scalar, principal_sqrt, reflection_coefficient};
pub use crate::params::LineParams;
pub use crate::sweep::{LinePoint, linspace, logspace_hz, mag_db, phase_deg, sweep_line, sweep_map};
pub use crate::twoport::TwoPort;
