//! Error types for field arithmetic.
//!
//! Every failure is a plain value returned to the direct caller. No operation
//! mutates its operands before detecting a failure.

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type FieldResult<T> = Result<T, FieldError>;

/// Failures of field construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The value is not a canonical representative: negative, or `>= prime`.
    #[error("value {value} is out of range for field of order {prime}")]
    OutOfRange {
        /// The rejected value.
        value: BigInt,
        /// The modulus it was checked against.
        prime: BigUint,
    },

    /// A binary operation was given elements of two different fields.
    #[error("cannot combine elements of F_{left} and F_{right}")]
    MismatchedPrime {
        /// Modulus of the left operand.
        left: BigUint,
        /// Modulus of the right operand.
        right: BigUint,
    },

    /// Zero has no multiplicative inverse.
    #[error("zero has no multiplicative inverse in F_{prime}")]
    ZeroInversion {
        /// Modulus of the field the inversion was attempted in.
        prime: BigUint,
    },

    /// The element shares a factor with a composite modulus, so it has no
    /// multiplicative inverse.
    #[error("{value} has no multiplicative inverse modulo {prime}")]
    NotInvertible {
        /// The element's value.
        value: BigUint,
        /// The modulus it was inverted against.
        prime: BigUint,
    },

    /// The modulus cannot define a field.
    #[error("invalid modulus {prime}: a field modulus must be at least 2")]
    InvalidModulus {
        /// The rejected modulus.
        prime: BigUint,
    },
}
