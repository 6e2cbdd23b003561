//! # descent_core: Fixed-Point Foundation for Auction Curve Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! descent_core serves as the bottom layer of the 2-layer architecture, providing:
//! - Signed 18-decimal fixed-point scalar: `Fixed` (`math::fixed`)
//! - Natural logarithm and exponential in pure integer arithmetic (`math::transcendental`)
//! - Error types: `FixedPointError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other descent_* crates, with minimal external dependencies:
//! - num-traits: Checked-arithmetic and identity traits
//! - uint: 256-bit intermediate for the widening multiply
//! - thiserror: Structured error types
//! - serde: Serialisation of the scalar type
//!
//! ## Determinism
//!
//! Every operation is a pure integer computation: no floating point is used
//! anywhere, so results are bit-identical across platforms and runs. All
//! fallible arithmetic is checked; nothing wraps silently.
//!
//! ## Usage Examples
//!
//! ```rust
//! use descent_core::math::Fixed;
//!
//! // 2.5 * 4.0 == 10.0, exactly
//! let a = Fixed::from_raw(2_500_000_000_000_000_000);
//! let b = Fixed::from_int(4);
//! assert_eq!(a.checked_mul(b), Some(Fixed::from_int(10)));
//!
//! // exp(0) == 1, exactly
//! assert_eq!(Fixed::ZERO.exp().unwrap(), Fixed::ONE);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
