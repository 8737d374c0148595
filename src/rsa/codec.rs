// Message Codec
// Packs text into a single big integer for raw RSA, and back again

use num_traits::{ToPrimitive, Zero};

use super::bigint::RsaBigInt;
use super::error::{Result, RsaError};

/// How text is turned into bytes before integer packing.
///
/// Leading zero bytes never survive a round trip: the integer 0x0041 and
/// 0x41 are the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8 bytes, big-endian
    #[default]
    Utf8,
    /// One slot per code point, decoded as Latin-1. Code points above 255
    /// spill into the neighbouring slot instead of failing.
    Legacy,
}

impl Encoding {
    pub fn encode(self, text: &str) -> RsaBigInt {
        match self {
            Encoding::Utf8 => encode_message(text),
            Encoding::Legacy => encode_code_points(text),
        }
    }

    pub fn decode(self, num: &RsaBigInt) -> Result<String> {
        match self {
            Encoding::Utf8 => decode_message(num),
            Encoding::Legacy => Ok(decode_code_points(num)),
        }
    }
}

/// Pack raw bytes big-endian into an integer
pub fn encode_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Unpack an integer into its big-endian bytes; zero yields no bytes
pub fn decode_bytes(num: &RsaBigInt) -> Vec<u8> {
    if num.is_zero() {
        return Vec::new();
    }
    num.to_bytes_be()
}

/// Encode text as its UTF-8 bytes
pub fn encode_message(text: &str) -> RsaBigInt {
    encode_bytes(text.as_bytes())
}

/// Decode an integer produced by `encode_message`
pub fn decode_message(num: &RsaBigInt) -> Result<String> {
    String::from_utf8(decode_bytes(num)).map_err(|_| RsaError::InvalidUtf8)
}

/// Shift each code point into the accumulator one byte at a time
pub fn encode_code_points(text: &str) -> RsaBigInt {
    text.chars().fold(RsaBigInt::zero(), |acc, ch| (acc << 8u32) + u32::from(ch))
}

/// Peel off the low byte until nothing is left, then restore the order
pub fn decode_code_points(num: &RsaBigInt) -> String {
    let mut num = num.clone();
    let mut chars = Vec::new();

    while !num.is_zero() {
        let low = (&num & RsaBigInt::from(0xFFu8)).to_u8().unwrap_or_default();
        chars.push(char::from(low));
        num >>= 8u32;
    }

    chars.iter().rev().collect()
}
