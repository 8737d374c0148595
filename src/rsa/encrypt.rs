// RSA Encryption Implementation
// Raw (unpadded) RSA: c = m^e mod n

use super::bigint::{mod_pow, RsaBigInt};
use super::codec::{encode_bytes, Encoding};
use super::error::{Result, RsaError};
use super::keygen::RsaPublicKey;

/// A ciphertext is a single integer in [0, n)
pub type Ciphertext = RsaBigInt;

/// Encrypt an already encoded message integer.
/// Returns `MessageTooLarge` if m >= n, since the result would wrap and
/// never decrypt back to m.
pub fn encrypt_integer(m: &RsaBigInt, public_key: &RsaPublicKey) -> Result<Ciphertext> {
    if m >= &public_key.n {
        return Err(RsaError::MessageTooLarge {
            message_bits: m.bits(),
            modulus_bits: public_key.bit_length(),
        });
    }

    // Compute c = m^e mod n
    Ok(mod_pow(m, &public_key.e, &public_key.n))
}

/// Encrypt text using UTF-8 packing
pub fn encrypt(message: &str, public_key: &RsaPublicKey) -> Result<Ciphertext> {
    encrypt_with(message, public_key, Encoding::Utf8)
}

/// Encrypt text using the given encoding
pub fn encrypt_with(
    message: &str,
    public_key: &RsaPublicKey,
    encoding: Encoding,
) -> Result<Ciphertext> {
    let m = encoding.encode(message);
    encrypt_integer(&m, public_key)
}

/// Encrypt raw bytes
pub fn encrypt_bytes(plaintext: &[u8], public_key: &RsaPublicKey) -> Result<Ciphertext> {
    encrypt_integer(&encode_bytes(plaintext), public_key)
}
