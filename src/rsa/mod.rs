// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod prime;
pub mod random;

pub use bigint::{extended_gcd, mod_inverse, mod_pow, RsaBigInt};
pub use codec::{decode_message, encode_message, Encoding};
pub use decrypt::{decrypt, decrypt_bytes, decrypt_integer, decrypt_with};
pub use encrypt::{encrypt, encrypt_bytes, encrypt_integer, encrypt_with, Ciphertext};
pub use error::{Result, RsaError};
pub use keygen::{
    generate_keypair, generate_keypair_with, KeyGenConfig, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey, DEFAULT_BIT_LENGTH, DEFAULT_PUBLIC_EXPONENT,
};
pub use prime::{generate_prime, is_probable_prime, DEFAULT_ROUNDS};
pub use random::{random_bits, random_in_range};
