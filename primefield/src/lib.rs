//! # primefield - arithmetic over prime-order finite fields
//!
//! The building block under elliptic-curve point arithmetic: a
//! [`FieldElement`] is a residue class modulo a prime `p`, carried together
//! with `p`. Values are arbitrary precision ([`num_bigint::BigUint`]), so
//! 256-bit curve primes work the same as toy fields.
//!
//! ```rust
//! use primefield::{FieldElement, FieldError};
//!
//! let a = FieldElement::from_u64(95, 97)?;
//! let b = FieldElement::from_u64(45, 97)?;
//! let c = FieldElement::from_u64(31, 97)?;
//! assert_eq!(a.mul(&b)?.mul(&c)?, FieldElement::from_u64(23, 97)?);
//!
//! // elements of different fields never combine
//! let d = FieldElement::from_u64(5, 13)?;
//! assert!(matches!(a.add(&d), Err(FieldError::MismatchedPrime { .. })));
//! # Ok::<(), FieldError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`field`] - field elements, field contexts and parameter sets
//! - [`error`] - the [`FieldError`] taxonomy

// Library code reports failures as FieldError; tests may unwrap.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(missing_docs)]

mod arith;
pub mod error;
pub mod field;

pub use error::{FieldError, FieldResult};
pub use field::{Curve25519, FieldConfig, FieldElement, Mersenne61, PrimeField, Secp256k1, P256};
