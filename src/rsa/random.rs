// RSA Randomness Source
// Random bit patterns and rejection-sampled ranges over BigUint

use num_bigint::RandBigInt;
use rand::RngCore;

use super::bigint::RsaBigInt;

/// Draw `bit_length` independent random bits and force the lowest bit to 1.
///
/// The highest bit is left alone, so the result may have fewer significant
/// bits than requested.
pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u64) -> RsaBigInt {
    let mut value = rng.gen_biguint(bit_length);
    value.set_bit(0, true);
    value
}

/// Rejection-sample a value in `[min, max)`.
///
/// Each draw takes as many bits as `max - min + 1` needs, is offset by `min`
/// and is discarded unless it lands below `max`. Draws are not forced odd, so
/// every value in the range is equally likely. Requires `min < max`.
pub fn random_in_range<R: RngCore + ?Sized>(
    rng: &mut R,
    min: &RsaBigInt,
    max: &RsaBigInt,
) -> RsaBigInt {
    debug_assert!(min < max, "random_in_range needs a non-empty range");

    let span = max - min + 1u8;
    let bits = span.bits();

    loop {
        let candidate = min + rng.gen_biguint(bits);
        if &candidate < max {
            return candidate;
        }
    }
}
