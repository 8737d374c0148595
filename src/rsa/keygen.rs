// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::bigint::{from_u64, mod_inverse, RsaBigInt};
use super::decrypt::decrypt;
use super::encrypt::{encrypt, Ciphertext};
use super::error::{Result, RsaError};
use super::prime::{generate_prime, DEFAULT_ROUNDS, MIN_PRIME_BITS};

/// Default size of each prime factor in bits
pub const DEFAULT_BIT_LENGTH: u64 = 1024;

/// Default public exponent (F4)
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: RsaBigInt,  // Public exponent
    pub n: RsaBigInt,  // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: RsaBigInt,  // Private exponent
    pub n: RsaBigInt,  // Modulus (same as public)
}

/// RSA Key Pair (both public and private keys)
///
/// The prime factors are kept so the pair can be checked after generation.
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    p: RsaBigInt,
    q: RsaBigInt,
}

/// Parameters for key pair generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Size of each prime factor in bits
    pub bit_length: u64,
    pub public_exponent: u64,
    /// Miller-Rabin rounds per candidate
    pub rounds: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl KeyGenConfig {
    pub fn with_bit_length(mut self, bit_length: u64) -> Self {
        self.bit_length = bit_length;
        self
    }

    pub fn with_public_exponent(mut self, public_exponent: u64) -> Self {
        self.public_exponent = public_exponent;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}

impl RsaPublicKey {
    /// Build a public key from stored values, checking 3 <= e < n with e odd
    pub fn new(e: RsaBigInt, n: RsaBigInt) -> Result<Self> {
        if n <= RsaBigInt::one() {
            return Err(RsaError::InvalidKey("modulus must be greater than 1"));
        }
        if e < from_u64(3) || e.is_even() {
            return Err(RsaError::InvalidKey("public exponent must be odd and at least 3"));
        }
        if e >= n {
            return Err(RsaError::InvalidKey("public exponent must be smaller than the modulus"));
        }
        Ok(Self { e, n })
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a text message using this public key
    pub fn encrypt(&self, message: &str) -> Result<Ciphertext> {
        encrypt(message, self)
    }
}

impl RsaPrivateKey {
    /// Build a private key from stored values, checking 0 < d < n
    pub fn new(d: RsaBigInt, n: RsaBigInt) -> Result<Self> {
        if n <= RsaBigInt::one() {
            return Err(RsaError::InvalidKey("modulus must be greater than 1"));
        }
        if d.is_zero() || d >= n {
            return Err(RsaError::InvalidKey("private exponent must be in (0, n)"));
        }
        Ok(Self { d, n })
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext back to text using this private key
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        decrypt(ciphertext, self)
    }
}

impl RsaKeyPair {
    /// Assemble a key pair from two primes and a public exponent.
    ///
    /// Computes n = p*q, phi = (p-1)(q-1) and d = e^-1 mod phi. Fails with
    /// `NoInverse` when e and phi share a factor; p and q are not resampled.
    pub fn from_primes(p: RsaBigInt, q: RsaBigInt, public_exponent: u64) -> Result<Self> {
        if public_exponent < 3 || public_exponent.is_even() {
            return Err(RsaError::InvalidExponent(public_exponent));
        }
        if p < from_u64(2) || q < from_u64(2) {
            return Err(RsaError::InvalidKey("prime factors must be at least 2"));
        }

        let e = from_u64(public_exponent);

        // Step 1: n = p * q
        let n = &p * &q;
        if n <= e {
            return Err(RsaError::ModulusTooSmall);
        }

        // Step 2: φ(n) = (p-1)(q-1)
        let phi_n = (&p - 1u8) * (&q - 1u8);

        // Step 3: d = e^(-1) mod φ(n)
        let d = mod_inverse(&e, &phi_n)?;

        Ok(Self {
            public_key: RsaPublicKey { e, n: n.clone() },
            private_key: RsaPrivateKey { d, n },
            p,
            q,
        })
    }

    /// The prime factors (p, q) of the modulus
    pub fn primes(&self) -> (&RsaBigInt, &RsaBigInt) {
        (&self.p, &self.q)
    }

    /// Euler's totient of the modulus
    pub fn phi(&self) -> RsaBigInt {
        (&self.p - 1u8) * (&self.q - 1u8)
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }
}

/// Generate an RSA key pair drawing randomness from the operating system
/// bit_length: size of each prime factor in bits
/// e: public exponent (65537 by default)
pub fn generate_keypair(bit_length: u64, e: u64) -> Result<RsaKeyPair> {
    let config = KeyGenConfig::default()
        .with_bit_length(bit_length)
        .with_public_exponent(e);
    generate_keypair_with(&config, &mut OsRng)
}

/// Generate an RSA key pair from the given configuration and random source
pub fn generate_keypair_with<R: RngCore + CryptoRng>(
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<RsaKeyPair> {
    if config.public_exponent < 3 || config.public_exponent.is_even() {
        return Err(RsaError::InvalidExponent(config.public_exponent));
    }
    if config.bit_length < MIN_PRIME_BITS {
        return Err(RsaError::InvalidBitLength {
            min: MIN_PRIME_BITS,
            actual: config.bit_length,
        });
    }

    // Two independent draws; p == q is not checked
    let p = generate_prime(config.bit_length, config.rounds, rng)?;
    let q = generate_prime(config.bit_length, config.rounds, rng)?;

    RsaKeyPair::from_primes(p, q, config.public_exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> KeyGenConfig {
        KeyGenConfig::default().with_bit_length(128)
    }

    /// Seeds whose primes happen to share a factor with e are skipped
    fn seeded_keypair(config: &KeyGenConfig, seed: u64) -> RsaKeyPair {
        (seed..seed + 32)
            .find_map(|s| generate_keypair_with(config, &mut StdRng::seed_from_u64(s)).ok())
            .unwrap()
    }

    #[test]
    fn test_textbook_key() {
        let keypair = RsaKeyPair::from_primes(from_u64(61), from_u64(53), 17).unwrap();
        assert_eq!(keypair.public_key.n, from_u64(3233));
        assert_eq!(keypair.private_key.d, from_u64(2753));
        assert_eq!(keypair.phi(), from_u64(3120));
    }

    #[test]
    fn test_from_primes_no_inverse() {
        // φ = 6 * 12 = 72 shares the factor 3 with e
        let result = RsaKeyPair::from_primes(from_u64(7), from_u64(13), 3);
        assert_eq!(result.unwrap_err(), RsaError::NoInverse);
    }

    #[test]
    fn test_from_primes_modulus_too_small() {
        let result = RsaKeyPair::from_primes(from_u64(11), from_u64(13), 65537);
        assert_eq!(result.unwrap_err(), RsaError::ModulusTooSmall);
    }

    #[test]
    fn test_rejects_bad_exponent() {
        let config = small_config().with_public_exponent(4);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_keypair_with(&config, &mut rng).unwrap_err(),
            RsaError::InvalidExponent(4)
        );
        assert_eq!(generate_keypair(128, 1).unwrap_err(), RsaError::InvalidExponent(1));
    }

    #[test]
    fn test_rejects_bad_bit_length() {
        assert_eq!(
            generate_keypair(1, 65537).unwrap_err(),
            RsaError::InvalidBitLength { min: 2, actual: 1 }
        );
    }

    #[test]
    fn test_key_generation() {
        let keypair = seeded_keypair(&small_config(), 50);
        assert_eq!(keypair.public_key.e, from_u64(65537));
        assert_eq!(keypair.public_key.n, keypair.private_key.n);
        assert!(keypair.public_key.e < keypair.public_key.n);
        assert!(keypair.private_key.d > from_u64(0));
        assert!(keypair.private_key.d < keypair.phi());
        assert!(keypair.bit_length() <= 256);
    }

    #[test]
    fn test_key_properties() {
        let keypair = seeded_keypair(&small_config(), 100);

        // Verify n = p * q
        let (p, q) = keypair.primes();
        assert_eq!(keypair.private_key.n, p * q);

        // Verify e * d ≡ 1 (mod φ(n))
        let product = &keypair.public_key.e * &keypair.private_key.d;
        assert_eq!(product % keypair.phi(), from_u64(1));
    }

    #[test]
    fn test_small_exponent() {
        let config = small_config().with_public_exponent(17);
        let keypair = seeded_keypair(&config, 200);
        assert_eq!(keypair.public_key.e, from_u64(17));
        let product = &keypair.public_key.e * &keypair.private_key.d;
        assert_eq!(product % keypair.phi(), from_u64(1));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = small_config().with_bit_length(64);
        let first = generate_keypair_with(&config, &mut StdRng::seed_from_u64(9));
        let second = generate_keypair_with(&config, &mut StdRng::seed_from_u64(9));
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a.public_key, b.public_key),
            (Err(a), Err(b)) => assert_eq!(a, b),
            _ => panic!("same seed produced different outcomes"),
        }
    }

    #[test]
    fn test_key_encrypt_decrypt() {
        let keypair = seeded_keypair(&small_config(), 300);
        let message = "Hello, RSA!";

        let ciphertext = keypair.public_key.encrypt(message).unwrap();
        let decrypted = keypair.private_key.decrypt(&ciphertext).unwrap();

        assert_eq!(message, decrypted);
    }

    #[test]
    fn test_public_key_validation() {
        assert!(RsaPublicKey::new(from_u64(17), from_u64(3233)).is_ok());
        assert!(RsaPublicKey::new(from_u64(17), from_u64(1)).is_err());
        assert!(RsaPublicKey::new(from_u64(2), from_u64(3233)).is_err());
        assert!(RsaPublicKey::new(from_u64(16), from_u64(3233)).is_err());
        assert!(RsaPublicKey::new(from_u64(3233), from_u64(3233)).is_err());
    }

    #[test]
    fn test_private_key_validation() {
        assert!(RsaPrivateKey::new(from_u64(2753), from_u64(3233)).is_ok());
        assert!(RsaPrivateKey::new(from_u64(0), from_u64(3233)).is_err());
        assert!(RsaPrivateKey::new(from_u64(3233), from_u64(3233)).is_err());
        assert!(RsaPrivateKey::new(from_u64(1), from_u64(0)).is_err());
    }
}
