//! Prime field implementation
//!
//! - [`FieldElement`]: an element of F_p, carrying its modulus
//! - [`PrimeField`]: a validated modulus acting as a factory for elements
//! - [`FieldConfig`]: compile-time parameter sets for well-known primes

pub mod config;
pub mod element;
pub mod prime;

pub use config::{Curve25519, FieldConfig, Mersenne61, Secp256k1, P256};
pub use element::FieldElement;
pub use prime::PrimeField;
