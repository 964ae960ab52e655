//! Prime field element
//!
//! A `FieldElement` is one residue class modulo a prime, carried together
//! with that prime. Elements are immutable: every operation returns a new
//! element and leaves its operands untouched.

use crate::arith::{is_probable_prime, mod_inverse, pow_mod, reduce_exponent};
use crate::error::{FieldError, FieldResult};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::Neg;

/// Element of the prime field F_p.
///
/// Invariant: `value < prime` and `prime >= 2`. The only ways to obtain an
/// element are the validating constructors and the arithmetic below, all of
/// which uphold it.
///
/// Binary operations are fallible methods: operands from different fields
/// yield [`FieldError::MismatchedPrime`].
///
/// ```
/// use primefield::FieldElement;
///
/// let a = FieldElement::from_u64(9, 57).unwrap();
/// let b = FieldElement::from_u64(29, 57).unwrap();
/// assert_eq!(a.sub(&b).unwrap(), FieldElement::from_u64(37, 57).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    prime: BigUint,
}

#[allow(clippy::should_implement_trait)]
impl FieldElement {
    /// Creates an element from its canonical representative.
    ///
    /// The value is not reduced: `value >= prime` is rejected with
    /// [`FieldError::OutOfRange`]. Use [`PrimeField::reduce`] to map an
    /// arbitrary integer into the field.
    ///
    /// [`PrimeField::reduce`]: super::PrimeField::reduce
    ///
    /// # Errors
    /// - `InvalidModulus` if `prime < 2`
    /// - `OutOfRange` if `value >= prime`
    pub fn new(value: impl Into<BigUint>, prime: impl Into<BigUint>) -> FieldResult<Self> {
        let value = value.into();
        let prime = prime.into();
        check_modulus(&prime)?;
        if value >= prime {
            log::debug!("rejecting {} as element of F_{}", value, prime);
            return Err(FieldError::OutOfRange {
                value: BigInt::from_biguint(Sign::Plus, value),
                prime,
            });
        }
        Ok(Self { value, prime })
    }

    /// Convenience constructor for machine-word inputs.
    pub fn from_u64(value: u64, prime: u64) -> FieldResult<Self> {
        Self::new(value, prime)
    }

    /// Like [`from_u64`](Self::from_u64), but also rejects negative values
    /// with `OutOfRange` rather than reducing them.
    pub fn from_i64(value: i64, prime: u64) -> FieldResult<Self> {
        let prime = BigUint::from(prime);
        match u64::try_from(value) {
            Ok(v) => Self::new(v, prime),
            Err(_) => {
                check_modulus(&prime)?;
                log::debug!("rejecting negative {} as element of F_{}", value, prime);
                Err(FieldError::OutOfRange {
                    value: BigInt::from(value),
                    prime,
                })
            }
        }
    }

    /// Builds an element from an already reduced value. Callers guarantee
    /// `value < prime`.
    pub(crate) fn from_reduced(value: BigUint, prime: BigUint) -> Self {
        debug_assert!(value < prime);
        Self { value, prime }
    }

    /// The canonical representative, in `[0, prime)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The modulus of the field this element belongs to.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Returns `true` for the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns `true` for the multiplicative identity.
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Returns `true` if `other` belongs to the same field.
    pub fn same_field(&self, other: &Self) -> bool {
        self.prime == other.prime
    }

    fn check_same_field(&self, other: &Self) -> FieldResult<()> {
        if self.same_field(other) {
            Ok(())
        } else {
            log::debug!(
                "mismatched operands: F_{} and F_{}",
                self.prime,
                other.prime
            );
            Err(FieldError::MismatchedPrime {
                left: self.prime.clone(),
                right: other.prime.clone(),
            })
        }
    }

    /// `(self + other) mod p`
    pub fn add(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        let mut sum = &self.value + &other.value;
        if sum >= self.prime {
            sum -= &self.prime;
        }
        Ok(Self::from_reduced(sum, self.prime.clone()))
    }

    /// `(self - other) mod p`, always in `[0, p)`.
    pub fn sub(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        let diff = if self.value >= other.value {
            &self.value - &other.value
        } else {
            // the raw difference is negative: wrap by adding p once
            &self.prime - (&other.value - &self.value)
        };
        Ok(Self::from_reduced(diff, self.prime.clone()))
    }

    /// `(self * other) mod p`
    pub fn mul(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        let product = (&self.value * &other.value) % &self.prime;
        Ok(Self::from_reduced(product, self.prime.clone()))
    }

    /// `self * other^-1`
    ///
    /// # Errors
    /// `MismatchedPrime`, or `ZeroInversion` when `other` is zero.
    pub fn div(&self, other: &Self) -> FieldResult<Self> {
        self.check_same_field(other)?;
        self.mul(&other.inverse()?)
    }

    /// `self^2`
    pub fn square(&self) -> Self {
        let value = (&self.value * &self.value) % &self.prime;
        Self::from_reduced(value, self.prime.clone())
    }

    /// Additive inverse, `p - self` (zero maps to zero).
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        Self::from_reduced(&self.prime - &self.value, self.prime.clone())
    }

    /// Multiplicative inverse, by the extended Euclidean algorithm.
    ///
    /// # Errors
    /// `ZeroInversion` for the zero element, `NotInvertible` when a composite
    /// modulus shares a factor with the value.
    pub fn inverse(&self) -> FieldResult<Self> {
        if self.is_zero() {
            log::debug!("refusing to invert zero in F_{}", self.prime);
            return Err(FieldError::ZeroInversion {
                prime: self.prime.clone(),
            });
        }
        match mod_inverse(&self.value, &self.prime) {
            Some(value) => Ok(Self::from_reduced(value, self.prime.clone())),
            None => {
                log::debug!("{} is not invertible modulo {}", self.value, self.prime);
                Err(FieldError::NotInvertible {
                    value: self.value.clone(),
                    prime: self.prime.clone(),
                })
            }
        }
    }

    /// Computes `self^exponent` in the field.
    ///
    /// Any integer exponent is accepted. A negative exponent `-k` is computed
    /// as `(self^-1)^k`. An exponent of at least `p - 1` is reduced modulo
    /// `p - 1` (Fermat's little theorem) once `p` passes a Miller-Rabin test,
    /// so huge exponents cost no more than `log2(p)` squarings. For a
    /// composite modulus the exponent is used as given.
    ///
    /// # Errors
    /// `ZeroInversion` when the base is zero and `exponent <= 0`: `0^0` and
    /// `0^-k` are undefined in a field. Zero to a positive power is zero.
    /// `NotInvertible` for a negative exponent whose base has no inverse
    /// modulo a composite `p`.
    ///
    /// ```
    /// use primefield::FieldElement;
    ///
    /// let a = FieldElement::from_u64(3, 7).unwrap();
    /// let inv = a.pow(-1).unwrap();
    /// assert!(a.mul(&inv).unwrap().is_one());
    /// ```
    pub fn pow(&self, exponent: impl Into<BigInt>) -> FieldResult<Self> {
        let exponent = exponent.into();

        if self.is_zero() {
            if exponent.is_positive() {
                return Ok(self.clone());
            }
            log::debug!("refusing 0^{} in F_{}", exponent, self.prime);
            return Err(FieldError::ZeroInversion {
                prime: self.prime.clone(),
            });
        }

        let (base, magnitude) = match exponent.sign() {
            Sign::Minus => (self.inverse()?.value, exponent.magnitude().clone()),
            _ => (self.value.clone(), exponent.magnitude().clone()),
        };

        let order = &self.prime - 1u32;
        let magnitude = if magnitude >= order && is_probable_prime(&self.prime) {
            reduce_exponent(&magnitude, &order)
        } else {
            magnitude
        };

        let value = pow_mod(&base, &magnitude, &self.prime);
        Ok(Self::from_reduced(value, self.prime.clone()))
    }
}

pub(crate) fn check_modulus(prime: &BigUint) -> FieldResult<()> {
    if *prime < BigUint::from(2u32) {
        log::debug!("rejecting modulus {}", prime);
        return Err(FieldError::InvalidModulus {
            prime: prime.clone(),
        });
    }
    Ok(())
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}_{}", self.prime, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(value: u64, prime: u64) -> FieldElement {
        FieldElement::from_u64(value, prime).unwrap()
    }

    #[test]
    fn test_new_in_range() {
        let a = fe(7, 13);
        assert_eq!(a.value(), &BigUint::from(7u32));
        assert_eq!(a.prime(), &BigUint::from(13u32));
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(matches!(
            FieldElement::from_u64(14, 13),
            Err(FieldError::OutOfRange { .. })
        ));
        assert!(matches!(
            FieldElement::from_u64(13, 13),
            Err(FieldError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_i64_negative_rejected() {
        assert_eq!(
            FieldElement::from_i64(-29, 57),
            Err(FieldError::OutOfRange {
                value: BigInt::from(-29),
                prime: BigUint::from(57u32),
            })
        );
        assert_eq!(FieldElement::from_i64(29, 57).unwrap(), fe(29, 57));
    }

    #[test]
    fn test_invalid_modulus() {
        assert!(matches!(
            FieldElement::from_u64(0, 1),
            Err(FieldError::InvalidModulus { .. })
        ));
        assert!(matches!(
            FieldElement::from_u64(0, 0),
            Err(FieldError::InvalidModulus { .. })
        ));
        assert!(matches!(
            FieldElement::from_i64(-1, 0),
            Err(FieldError::InvalidModulus { .. })
        ));
    }

    #[test]
    fn test_eq() {
        assert_eq!(fe(7, 13), fe(7, 13));
        assert_ne!(fe(6, 13), fe(7, 13));
        assert_ne!(fe(7, 13), fe(7, 57));
    }

    #[test]
    fn test_add() {
        assert_eq!(fe(44, 57).add(&fe(33, 57)).unwrap(), fe(20, 57));
        assert_eq!(fe(0, 57).add(&fe(56, 57)).unwrap(), fe(56, 57));
        assert_eq!(fe(1, 57).add(&fe(56, 57)).unwrap(), fe(0, 57));
    }

    #[test]
    fn test_sub_wraps() {
        assert_eq!(fe(9, 57).sub(&fe(29, 57)).unwrap(), fe(37, 57));
        assert_eq!(fe(29, 57).sub(&fe(9, 57)).unwrap(), fe(20, 57));
        assert_eq!(fe(0, 7).sub(&fe(1, 7)).unwrap(), fe(6, 7));
    }

    #[test]
    fn test_mul() {
        let product = fe(95, 97)
            .mul(&fe(45, 97))
            .and_then(|p| p.mul(&fe(31, 97)))
            .unwrap();
        assert_eq!(product, fe(23, 97));
    }

    #[test]
    fn test_mismatched_prime() {
        let a = fe(5, 13);
        let b = fe(33, 57);
        let expected = FieldError::MismatchedPrime {
            left: BigUint::from(13u32),
            right: BigUint::from(57u32),
        };
        assert_eq!(a.add(&b), Err(expected.clone()));
        assert_eq!(a.sub(&b), Err(expected.clone()));
        assert_eq!(a.mul(&b), Err(expected.clone()));
        assert_eq!(a.div(&b), Err(expected));
    }

    #[test]
    fn test_pow() {
        let a = fe(12, 97);
        let lhs = a.pow(7).unwrap().mul(&a.pow(49).unwrap()).unwrap();
        assert_eq!(lhs, a.pow(56).unwrap());
        assert_eq!(lhs, fe(96, 97));
        // exponents past p - 1 wrap around
        assert_eq!(a.pow(56 + 96).unwrap(), fe(96, 97));
    }

    #[test]
    fn test_pow_mixed_bases() {
        // 12^7 * 77^49 ≡ 8 * 20 ≡ 63 (mod 97)
        let got = fe(12, 97)
            .pow(7)
            .unwrap()
            .mul(&fe(77, 97).pow(49).unwrap())
            .unwrap();
        assert_eq!(got, fe(63, 97));
    }

    #[test]
    fn test_pow_composite_modulus() {
        // 57 = 3 * 19: exponents are not reduced modulo 56
        let two = fe(2, 57);
        assert_eq!(two.pow(56).unwrap(), fe(4, 57));
        assert_eq!(two.pow(100).unwrap(), fe(55, 57));

        let mut acc = two.clone();
        for _ in 1..56 {
            acc = acc.mul(&two).unwrap();
        }
        assert_eq!(two.pow(56).unwrap(), acc);

        // 2 is coprime to 57, so negative powers still exist
        assert_eq!(two.inverse().unwrap(), fe(29, 57));
        assert_eq!(two.pow(-3).unwrap(), fe(50, 57));
        assert!(two.mul(&two.inverse().unwrap()).unwrap().is_one());
    }

    #[test]
    fn test_inverse_composite_modulus() {
        let three = fe(3, 57);
        let expected = FieldError::NotInvertible {
            value: BigUint::from(3u32),
            prime: BigUint::from(57u32),
        };
        assert_eq!(three.inverse(), Err(expected.clone()));
        assert_eq!(three.pow(-2), Err(expected.clone()));
        assert_eq!(fe(1, 57).div(&three), Err(expected));
        assert_eq!(three.pow(4).unwrap(), fe(81 - 57, 57));
    }

    #[test]
    fn test_pow_zero_exponent() {
        assert_eq!(fe(5, 7).pow(0).unwrap(), fe(1, 7));
    }

    #[test]
    fn test_pow_negative_exponent() {
        // 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!(fe(3, 7).pow(-1).unwrap(), fe(5, 7));
        // 17^-3 in F_31 is 29
        assert_eq!(fe(17, 31).pow(-3).unwrap(), fe(29, 31));
    }

    #[test]
    fn test_pow_zero_base() {
        let zero = fe(0, 7);
        assert_eq!(zero.pow(3).unwrap(), zero);
        // 6 is a multiple of p - 1 but the base is still zero
        assert_eq!(zero.pow(6).unwrap(), zero);
        assert_eq!(
            zero.pow(0),
            Err(FieldError::ZeroInversion {
                prime: BigUint::from(7u32)
            })
        );
        assert!(matches!(zero.pow(-2), Err(FieldError::ZeroInversion { .. })));
    }

    #[test]
    fn test_inverse_and_div() {
        assert_eq!(fe(3, 7).inverse().unwrap(), fe(5, 7));
        // 3 / 5 = 3 * 3 = 9 ≡ 2 (mod 7)
        assert_eq!(fe(3, 7).div(&fe(5, 7)).unwrap(), fe(2, 7));
        assert!(matches!(
            fe(3, 7).div(&fe(0, 7)),
            Err(FieldError::ZeroInversion { .. })
        ));
    }

    #[test]
    fn test_neg_and_square() {
        assert_eq!(-fe(3, 7), fe(4, 7));
        assert_eq!(-&fe(0, 7), fe(0, 7));
        assert_eq!(fe(5, 7).square(), fe(4, 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(fe(7, 13).to_string(), "FieldElement_13_7");
    }

    #[test]
    fn test_operands_unchanged() {
        let a = fe(44, 57);
        let b = fe(33, 57);
        let _ = a.add(&b).unwrap();
        let _ = a.pow(-5).unwrap();
        assert_eq!(a, fe(44, 57));
        assert_eq!(b, fe(33, 57));
    }
}
