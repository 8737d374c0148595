// RSA Decryption Implementation
// Raw (unpadded) RSA: m = c^d mod n

use super::bigint::{mod_pow, RsaBigInt};
use super::codec::{decode_bytes, Encoding};
use super::encrypt::Ciphertext;
use super::error::{Result, RsaError};
use super::keygen::RsaPrivateKey;

/// Decrypt to the message integer.
/// A ciphertext outside [0, n) could not have come from `encrypt`.
pub fn decrypt_integer(ciphertext: &Ciphertext, private_key: &RsaPrivateKey) -> Result<RsaBigInt> {
    if ciphertext >= &private_key.n {
        return Err(RsaError::InvalidCiphertext);
    }

    Ok(mod_pow(ciphertext, &private_key.d, &private_key.n))
}

/// Decrypt to text packed as UTF-8
pub fn decrypt(ciphertext: &Ciphertext, private_key: &RsaPrivateKey) -> Result<String> {
    decrypt_with(ciphertext, private_key, Encoding::Utf8)
}

/// Decrypt to text using the given encoding
pub fn decrypt_with(
    ciphertext: &Ciphertext,
    private_key: &RsaPrivateKey,
    encoding: Encoding,
) -> Result<String> {
    let m = decrypt_integer(ciphertext, private_key)?;
    encoding.decode(&m)
}

/// Decrypt to raw bytes
pub fn decrypt_bytes(ciphertext: &Ciphertext, private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let m = decrypt_integer(ciphertext, private_key)?;
    Ok(decode_bytes(&m))
}
