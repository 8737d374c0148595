// RSA Error Types
// Every failure the core can report to its caller

/// Errors produced by key generation, encryption and decryption.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("modular inverse does not exist (gcd != 1)")]
    NoInverse,

    #[error("message too large: encodes to {message_bits} bits, modulus has {modulus_bits}")]
    MessageTooLarge { message_bits: u64, modulus_bits: u64 },

    #[error("ciphertext is not smaller than the modulus")]
    InvalidCiphertext,

    #[error("invalid bit length: must be at least {min}, got {actual}")]
    InvalidBitLength { min: u64, actual: u64 },

    #[error("invalid public exponent {0}: must be odd and at least 3")]
    InvalidExponent(u64),

    #[error("modulus is not larger than the public exponent")]
    ModulusTooSmall,

    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    #[error("decrypted message is not valid UTF-8")]
    InvalidUtf8,
}

pub type Result<T> = std::result::Result<T, RsaError>;
