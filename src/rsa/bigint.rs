// RSA Big Integer Helpers
// Wrapper around num-bigint for key component encoding

use num_bigint::BigUint;
use num_traits::Zero;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
#[cfg(test)]
pub(crate) fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Big-endian bytes of a non-negative INTEGER payload.
/// A zero byte is prepended when the high bit is set so the value stays positive.
pub fn to_integer_bytes(n: &RsaBigInt) -> Vec<u8> {
    if n.is_zero() {
        return vec![0x00];
    }

    let bytes = to_bytes(n);
    if bytes[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(bytes.len() + 1);
        padded.push(0x00);
        padded.extend_from_slice(&bytes);
        padded
    } else {
        bytes
    }
}
