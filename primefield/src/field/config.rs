//! Field configuration trait
//!
//! Defines the `FieldConfig` trait used to name field parameters at compile
//! time, plus the parameter sets of the prime fields underlying common curves.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

/// Compile-time parameter set of a prime field.
///
/// Implementors are zero-sized marker types. The modulus is a `'static`
/// reference so every [`PrimeField`](super::PrimeField) built from the same
/// config shares one computation of it.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use once_cell::sync::Lazy;
/// use primefield::{FieldConfig, PrimeField};
///
/// struct F97;
///
/// static F97_MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from(97u32));
///
/// impl FieldConfig for F97 {
///     const NAME: &'static str = "F97";
///     fn modulus() -> &'static BigUint {
///         &F97_MODULUS
///     }
/// }
///
/// let field = PrimeField::of::<F97>().unwrap();
/// assert_eq!(field.prime(), &BigUint::from(97u32));
/// ```
pub trait FieldConfig: 'static {
    /// Human-readable name of the field.
    const NAME: &'static str;

    /// The prime modulus `p`.
    fn modulus() -> &'static BigUint;
}

/// `2^a`
fn pow2(a: u32) -> BigUint {
    BigUint::one() << a
}

static SECP256K1_P: Lazy<BigUint> = Lazy::new(|| pow2(256) - pow2(32) - 977u32);

static P256_P: Lazy<BigUint> =
    Lazy::new(|| pow2(256) - pow2(224) + pow2(192) + pow2(96) - 1u32);

static CURVE25519_P: Lazy<BigUint> = Lazy::new(|| pow2(255) - 19u32);

static MERSENNE61_P: Lazy<BigUint> = Lazy::new(|| pow2(61) - 1u32);

/// Base field of secp256k1: `p = 2^256 - 2^32 - 977`.
#[derive(Debug, Clone, Copy)]
pub struct Secp256k1;

impl FieldConfig for Secp256k1 {
    const NAME: &'static str = "secp256k1";
    fn modulus() -> &'static BigUint {
        &SECP256K1_P
    }
}

/// Base field of NIST P-256: `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.
#[derive(Debug, Clone, Copy)]
pub struct P256;

impl FieldConfig for P256 {
    const NAME: &'static str = "P-256";
    fn modulus() -> &'static BigUint {
        &P256_P
    }
}

/// Base field of Curve25519: `p = 2^255 - 19`.
#[derive(Debug, Clone, Copy)]
pub struct Curve25519;

impl FieldConfig for Curve25519 {
    const NAME: &'static str = "Curve25519";
    fn modulus() -> &'static BigUint {
        &CURVE25519_P
    }
}

/// Mersenne prime field: `p = 2^61 - 1`.
#[derive(Debug, Clone, Copy)]
pub struct Mersenne61;

impl FieldConfig for Mersenne61 {
    const NAME: &'static str = "Mersenne61";
    fn modulus() -> &'static BigUint {
        &MERSENNE61_P
    }
}
