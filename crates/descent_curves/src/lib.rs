//! # descent_curves: Decaying-Price Auction Curve Laws
//!
//! ## Layer 2 (Pricing) Role
//!
//! descent_curves sits on top of the descent_core fixed-point foundation,
//! providing:
//! - The pricing capability: `PriceCurve` (`curves::traits`)
//! - Concrete laws: `LinearCurve`, `ExponentialCurve` (`curves::linear`,
//!   `curves::exponential`)
//! - Time quantisation: `DiscretizedCurve` (`curves::discrete`)
//! - Static dispatch over the closed set of laws: `CurveEnum`
//!   (`curves::curve_enum`)
//! - Error types: `CurveError` (`error`)
//!
//! ## Model
//!
//! A curve is a pure function from elapsed time to price. All parameters are
//! fixed at construction; every query is read-only, so one instance can serve
//! arbitrarily many concurrent callers with no coordination. The caller is
//! solely responsible for supplying the elapsed time on each call - no
//! auction progress is tracked here.
//!
//! ## Usage Examples
//!
//! ```rust
//! use descent_core::math::Fixed;
//! use descent_curves::curves::{DiscretizedCurve, ExponentialCurve, PriceCurve};
//!
//! // 0.1% decay per unit of time, starting at 100.0.
//! let curve = ExponentialCurve::new(
//!     Fixed::from_int(100),
//!     Fixed::from_raw(1_000_000_000_000_000), // 0.001
//! ).unwrap();
//!
//! // The price at t = 0 is the initial price.
//! assert_eq!(curve.price_at(Fixed::ZERO).unwrap(), Fixed::from_int(100));
//!
//! // Quantise updates to ticks of 60 time units.
//! let stepped = DiscretizedCurve::new(Fixed::from_int(60), curve);
//! let p = stepped.price_at(Fixed::from_int(90)).unwrap();
//! assert_eq!(p, stepped.price_at(Fixed::from_int(60)).unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curves;
pub mod error;
