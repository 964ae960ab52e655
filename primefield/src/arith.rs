//! Modular arithmetic kernels on arbitrary-precision integers.
//!
//! These work on raw integers and know nothing about fields. Every function
//! divides by `modulus`; callers pass a modulus of at least 2.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Bases for Miller-Rabin: the first twelve primes. Deterministic for
/// `n < 3.18 * 10^23`, a probable-prime test above that.
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// True (floor) modulo: the result always lies in `[0, modulus)`, also for
/// negative `value`. Rust's `%` truncates toward zero and would give `-2`
/// for `-2 % 7`; this returns `5`.
pub(crate) fn floor_mod(value: &BigInt, modulus: &BigUint) -> BigUint {
    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    // mod_floor with a positive divisor is never negative
    let (_, magnitude) = value.mod_floor(&m).into_parts();
    magnitude
}

/// Normalizes an exponent into `[0, order)`.
///
/// With `order = p - 1` and `p` prime this is Fermat's little theorem: for
/// `a != 0`, `a^e = a^(e mod (p-1))`.
pub(crate) fn reduce_exponent(exponent: &BigUint, order: &BigUint) -> BigUint {
    let reduced = exponent % order;
    log::trace!("exponent {} reduced to {} mod {}", exponent, reduced, order);
    reduced
}

/// Computes `base^exponent mod modulus` by right-to-left square-and-multiply.
///
/// Takes `O(log exponent)` multiplications. `0^0` is `1` here; rejecting the
/// zero base is the caller's job.
pub(crate) fn pow_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let mut result = BigUint::one() % modulus;
    let mut base = base % modulus;

    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
    }

    result
}

/// Inverse of `value` modulo `modulus` by the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(value, modulus) != 1`, which for a prime modulus
/// only happens for zero.
pub(crate) fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let mut r = BigInt::from(modulus.clone());
    let mut new_r = BigInt::from(value % modulus);
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();

    while !new_r.is_zero() {
        let quotient = &r / &new_r;

        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);

        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
    }

    if r.is_one() {
        Some(floor_mod(&t, modulus))
    } else {
        None
    }
}

/// Miller-Rabin primality test over [`WITNESSES`].
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    for p in WITNESSES {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_1 = n - 1u32;
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;

    'witness: for a in WITNESSES {
        let mut x = pow_mod(&BigUint::from(a), &d, n);
        if x.is_one() || x == n_minus_1 {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
