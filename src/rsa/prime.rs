// RSA Prime Generation
// Miller-Rabin primality test and random prime search

use num_integer::Integer;
use num_traits::One;
use rand::RngCore;

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::error::{Result, RsaError};
use super::random::{random_bits, random_in_range};

/// Default number of Miller-Rabin rounds (false positive rate <= 4^-25)
pub const DEFAULT_ROUNDS: u32 = 25;

/// Smallest bit length that can yield an odd prime
pub const MIN_PRIME_BITS: u64 = 2;

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime<R: RngCore + ?Sized>(n: &RsaBigInt, rounds: u32, rng: &mut R) -> bool {
    if n <= &RsaBigInt::one() || n == &from_u64(4) {
        return false;
    }
    if n <= &from_u64(3) {
        return true;
    }

    // Write n-1 as d * 2^r with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    let two = from_u64(2);
    let n_minus_two = n - 2u8;

    'witness: for _ in 0..rounds {
        let a = random_in_range(rng, &two, &n_minus_two);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..r {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random probable prime of at most `bit_length` bits.
///
/// Candidates come straight from `random_bits`, so the top bit is not
/// guaranteed. There is no sieve and no attempt limit.
pub fn generate_prime<R: RngCore + ?Sized>(
    bit_length: u64,
    rounds: u32,
    rng: &mut R,
) -> Result<RsaBigInt> {
    if bit_length < MIN_PRIME_BITS {
        return Err(RsaError::InvalidBitLength {
            min: MIN_PRIME_BITS,
            actual: bit_length,
        });
    }

    loop {
        let candidate = random_bits(rng, bit_length);
        if is_probable_prime(&candidate, rounds, rng) {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn check(n: u64) -> bool {
        let mut rng = StdRng::seed_from_u64(n);
        is_probable_prime(&from_u64(n), DEFAULT_ROUNDS, &mut rng)
    }

    #[test]
    fn test_small_values() {
        assert!(!check(0));
        assert!(!check(1));
        assert!(check(2));
        assert!(check(3));
        assert!(!check(4));
        assert!(check(5));
        assert!(!check(6));
        assert!(check(7));
        assert!(!check(9));
        assert!(check(97));
        assert!(!check(91));
    }

    #[test]
    fn test_matches_trial_division() {
        fn is_prime(n: u64) -> bool {
            n >= 2 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
        }
        for n in 0..2000u64 {
            assert_eq!(check(n), is_prime(n), "n = {}", n);
        }
    }

    #[test]
    fn test_carmichael_numbers() {
        for &n in &[561u64, 1105, 1729, 2465, 2821, 6601, 8911, 41041, 825265] {
            assert!(!check(n), "{} is a Carmichael number", n);
        }
    }

    #[test]
    fn test_large_prime() {
        // 2^521 - 1 is a Mersenne prime
        let mersenne = (from_u64(1) << 521) - 1u8;
        let mut rng = StdRng::seed_from_u64(521);
        assert!(is_probable_prime(&mersenne, DEFAULT_ROUNDS, &mut rng));
    }

    #[test]
    fn test_large_composite() {
        // Fermat number F9 = 2^512 + 1 is composite
        let fermat = (from_u64(1) << 512) + 1u8;
        let mut rng = StdRng::seed_from_u64(512);
        assert!(!is_probable_prime(&fermat, DEFAULT_ROUNDS, &mut rng));

        // Product of two Mersenne primes
        let product = ((from_u64(1) << 127) - 1u8) * ((from_u64(1) << 89) - 1u8);
        assert!(!is_probable_prime(&product, DEFAULT_ROUNDS, &mut rng));
    }

    #[test]
    fn test_generate_prime() {
        let mut rng = StdRng::seed_from_u64(42);
        let prime = generate_prime(128, DEFAULT_ROUNDS, &mut rng).unwrap();
        assert!(prime.bits() <= 128);
        assert!(prime.is_odd());
        assert!(is_probable_prime(&prime, DEFAULT_ROUNDS, &mut rng));
    }

    #[test]
    fn test_generate_prime_tiny() {
        // Only odd candidates 1 and 3 exist at two bits
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(generate_prime(2, DEFAULT_ROUNDS, &mut rng).unwrap(), from_u64(3));
    }

    #[test]
    fn test_generate_prime_rejects_short_lengths() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_prime(1, DEFAULT_ROUNDS, &mut rng),
            Err(RsaError::InvalidBitLength { min: 2, actual: 1 })
        );
    }
}
