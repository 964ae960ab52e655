//! Prime field F_p context
//!
//! `PrimeField` owns a validated modulus and hands out elements of that field.

use super::config::FieldConfig;
use super::element::{check_modulus, FieldElement};
use crate::arith::floor_mod;
use crate::error::{FieldError, FieldResult};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::fmt;

/// The field F_p for one prime `p`.
///
/// The modulus is checked to be at least 2 but is not required to be prime.
/// Over a composite modulus the ring operations stay exact, and values
/// sharing a factor with `p` fail to invert with `NotInvertible`.
///
/// # Example
/// ```
/// use primefield::PrimeField;
///
/// let f57 = PrimeField::new(57u32).unwrap();
/// let a = f57.element(9u32).unwrap();
/// let b = f57.reduce(-29);
/// assert_eq!(a.add(&b).unwrap(), f57.element(37u32).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    prime: BigUint,
}

impl PrimeField {
    /// Creates the field of order `prime`.
    ///
    /// # Errors
    /// `InvalidModulus` if `prime < 2`.
    pub fn new(prime: impl Into<BigUint>) -> FieldResult<Self> {
        let prime = prime.into();
        check_modulus(&prime)?;
        Ok(Self { prime })
    }

    /// Creates the field described by a [`FieldConfig`].
    pub fn of<C: FieldConfig>() -> FieldResult<Self> {
        log::trace!("building field {}", C::NAME);
        Self::new(C::modulus().clone())
    }

    /// The modulus `p`.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Validated, non-reducing constructor; see [`FieldElement::new`].
    pub fn element(&self, value: impl Into<BigUint>) -> FieldResult<FieldElement> {
        FieldElement::new(value, self.prime.clone())
    }

    /// Maps any integer onto its residue class, `value mod p` in `[0, p)`.
    /// Negative values wrap around: `-29` in F_57 is `28`.
    pub fn reduce(&self, value: impl Into<BigInt>) -> FieldElement {
        let value = floor_mod(&value.into(), &self.prime);
        FieldElement::from_reduced(value, self.prime.clone())
    }

    /// The additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::zero(), self.prime.clone())
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::one(), self.prime.clone())
    }

    /// Returns `true` if `element` belongs to this field.
    pub fn contains(&self, element: &FieldElement) -> bool {
        element.prime() == &self.prime
    }

    /// Checks that `element` belongs to this field.
    ///
    /// # Errors
    /// `MismatchedPrime` otherwise.
    pub fn check(&self, element: &FieldElement) -> FieldResult<()> {
        if self.contains(element) {
            Ok(())
        } else {
            Err(FieldError::MismatchedPrime {
                left: self.prime.clone(),
                right: element.prime().clone(),
            })
        }
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F_{}", self.prime)
    }
}
