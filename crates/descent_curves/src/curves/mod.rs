//! Auction curve abstractions for time-based price calculations.
//!
//! This module provides:
//! - [`PriceCurve`]: Generic trait for elapsed-time price calculations
//! - [`LinearCurve`]: Affine price law
//! - [`ExponentialCurve`]: Exponential decay price law
//! - [`DiscretizedCurve`]: Time-quantising wrapper over any price curve
//! - [`CurveEnum`]: Static dispatch enum wrapping the concrete laws

mod curve_enum;
mod discrete;
mod exponential;
mod linear;
mod traits;

pub use curve_enum::CurveEnum;
pub use discrete::DiscretizedCurve;
pub use exponential::ExponentialCurve;
pub use linear::LinearCurve;
pub use traits::PriceCurve;
