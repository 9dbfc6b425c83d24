//! Byte convention for unsigned big integers: big-endian, minimal length,
//! no superfluous leading zero bytes. Zero encodes to the empty sequence,
//! matching the wire format's elision of empty byte fields.

use num_bigint::BigUint;
use num_traits::Zero;

/// Parse big-endian unsigned bytes. Leading zero bytes are tolerated on
/// input; the empty sequence is zero.
pub fn from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Minimal big-endian encoding. Zero encodes to an empty vector.
pub fn to_be_bytes_minimal(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

/// Drop leading zero bytes from an already big-endian encoding.
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Bit length of a big-endian unsigned encoding. Zero has length 0.
pub fn bit_len(bytes: &[u8]) -> u64 {
    BigUint::from_bytes_be(bytes).bits()
}
