// RSA Big Integer Operations
// Modular exponentiation and modular inversion on num-bigint integers

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use super::error::{Result, RsaError};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply, walking the exponent from the low bit up.
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut acc = RsaBigInt::one();
    let mut square = base % modulus;

    for i in 0..exp.bits() {
        if exp.bit(i) {
            acc = &acc * &square % modulus;
        }
        square = &square * &square % modulus;
    }

    acc
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
///
/// Iterative, so the depth does not grow with the size of the operands.
/// For a = 0 the result is (b, 0, 1).
pub fn extended_gcd(a: &RsaBigInt, b: &RsaBigInt) -> (RsaBigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &quotient * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    // Remainders stay non-negative for non-negative inputs
    let gcd = old_r.to_biguint().unwrap_or_default();

    (gcd, old_x, old_y)
}

/// Compute modular inverse: a^(-1) mod m, normalized into [0, m)
/// Fails with `RsaError::NoInverse` when gcd(a, m) != 1
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Result<RsaBigInt> {
    if m.is_zero() {
        return Err(RsaError::NoInverse);
    }

    let (gcd, x, _) = extended_gcd(a, m);
    if !gcd.is_one() {
        return Err(RsaError::NoInverse);
    }

    let modulus = BigInt::from(m.clone());
    x.mod_floor(&modulus)
        .to_biguint()
        .ok_or(RsaError::NoInverse)
}
