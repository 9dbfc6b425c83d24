//! Semantic validation of decoded key records.
//!
//! Validation runs at or after deserialization, never inside the codec: a
//! record that fails here was well-formed on the wire but carries an
//! unusable or inconsistent key. [`ValidationError`] is therefore a
//! separate type from [`DecodeError`](crate::wire::DecodeError), so callers
//! can tell corrupt data apart from a structurally valid but cryptographically
//! invalid key.

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

use crate::bigint;
use crate::types::{Algorithm, KeyFormat, PrivateKey, PublicKey};

/// Key-id wrapping mode of the surrounding keyset layer.
///
/// The schema itself does not carry this distinction; callers pass it in,
/// since a `custom_kid` is only legal for RAW-wrapped keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWrappingMode {
    /// The keyset layer derives the kid from the key fingerprint.
    Tink,
    /// The kid is the externally assigned `custom_kid` value, if any.
    Raw,
}

/// Size policy for accepted keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Smallest accepted modulus, in bits. Keys below this are rejected.
    pub min_modulus_size_bits: u64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_modulus_size_bits: 2048,
        }
    }
}

/// The only record version this implementation understands. Versions are
/// matched exactly, never range-checked.
pub const ACCEPTED_VERSION: u32 = 0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported key version {got}, only version 0 is accepted")]
    UnsupportedVersion { got: u32 },

    #[error("algorithm {0} is not a concrete PS algorithm")]
    UnsupportedAlgorithm(Algorithm),

    #[error("modulus is {got} bits, policy requires at least {min}")]
    ModulusTooSmall { got: u64, min: u64 },

    #[error("public exponent must be odd and at least 65537")]
    InvalidPublicExponent,

    #[error("private key is missing its embedded public key")]
    MissingPublicKey,

    #[error("private key field {0} is empty")]
    MissingPrivateField(&'static str),

    #[error("private key is inconsistent: {0}")]
    InconsistentKey(&'static str),

    #[error("custom kid is only allowed for RAW-wrapped keys")]
    CustomKidNotAllowed,
}

fn validate_version(version: u32) -> Result<(), ValidationError> {
    if version != ACCEPTED_VERSION {
        return Err(ValidationError::UnsupportedVersion { got: version });
    }
    Ok(())
}

fn validate_algorithm(algorithm: Algorithm) -> Result<(), ValidationError> {
    if !algorithm.is_concrete() {
        return Err(ValidationError::UnsupportedAlgorithm(algorithm));
    }
    Ok(())
}

fn validate_modulus_size(bits: u64, policy: &ValidationPolicy) -> Result<(), ValidationError> {
    if bits < policy.min_modulus_size_bits {
        return Err(ValidationError::ModulusTooSmall {
            got: bits,
            min: policy.min_modulus_size_bits,
        });
    }
    Ok(())
}

/// The exponent must be odd and at least F4 (65537).
fn validate_public_exponent(e: &[u8]) -> Result<(), ValidationError> {
    let e = bigint::strip_leading_zeros(e);
    let odd = e.last().is_some_and(|byte| byte & 1 == 1);
    if !odd || bigint::from_be_bytes(e) < BigUint::from(65537u32) {
        return Err(ValidationError::InvalidPublicExponent);
    }
    Ok(())
}

/// Validate a public key against the policy and the wrapping context.
pub fn validate_public_key(
    key: &PublicKey,
    mode: KeyWrappingMode,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    validate_version(key.version)?;
    validate_algorithm(key.algorithm)?;
    validate_modulus_size(key.modulus_size_in_bits(), policy)?;
    validate_public_exponent(&key.e)?;
    if key.custom_kid.is_some() && mode == KeyWrappingMode::Tink {
        return Err(ValidationError::CustomKidNotAllowed);
    }
    Ok(())
}

/// Validate a private key: the embedded public key, field presence, and the
/// RSA-CRT identities binding the private parameters to the modulus.
pub fn validate_private_key(
    key: &PrivateKey,
    mode: KeyWrappingMode,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    validate_version(key.version)?;
    let public_key = key
        .public_key
        .as_ref()
        .ok_or(ValidationError::MissingPublicKey)?;
    validate_public_key(public_key, mode, policy)?;

    let fields: [(&'static str, &[u8]); 6] = [
        ("d", &key.d),
        ("p", &key.p),
        ("q", &key.q),
        ("dp", &key.dp),
        ("dq", &key.dq),
        ("crt", &key.crt),
    ];
    for (name, bytes) in fields {
        if bytes.is_empty() {
            return Err(ValidationError::MissingPrivateField(name));
        }
    }

    check_crt_consistency(key)
}

/// Check the RSA-CRT identities as big integers. Encoded values are never
/// trusted blindly: `p·q = n`, `dp = d mod (p-1)`, `dq = d mod (q-1)`, and
/// `crt·q ≡ 1 (mod p)`.
pub fn check_crt_consistency(key: &PrivateKey) -> Result<(), ValidationError> {
    let public_key = key
        .public_key
        .as_ref()
        .ok_or(ValidationError::MissingPublicKey)?;
    let n = bigint::from_be_bytes(&public_key.n);
    let d = bigint::from_be_bytes(&key.d);
    let p = bigint::from_be_bytes(&key.p);
    let q = bigint::from_be_bytes(&key.q);
    let dp = bigint::from_be_bytes(&key.dp);
    let dq = bigint::from_be_bytes(&key.dq);
    let crt = bigint::from_be_bytes(&key.crt);
    let one = BigUint::one();

    if p <= one || q <= one {
        return Err(ValidationError::InconsistentKey(
            "prime factors must be greater than 1",
        ));
    }
    if &p * &q != n {
        return Err(ValidationError::InconsistentKey(
            "p * q does not equal the public modulus",
        ));
    }
    if &d % (&p - &one) != dp {
        return Err(ValidationError::InconsistentKey(
            "dp does not equal d mod (p - 1)",
        ));
    }
    if &d % (&q - &one) != dq {
        return Err(ValidationError::InconsistentKey(
            "dq does not equal d mod (q - 1)",
        ));
    }
    if (&crt * &q) % &p != one {
        return Err(ValidationError::InconsistentKey(
            "crt is not the inverse of q modulo p",
        ));
    }
    Ok(())
}

/// Validate a generation template the same way a generator would before
/// producing a key pair from it.
pub fn validate_key_format(
    format: &KeyFormat,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    validate_version(format.version)?;
    validate_algorithm(format.algorithm)?;
    validate_modulus_size(u64::from(format.modulus_size_in_bits), policy)?;
    validate_public_exponent(format.effective_public_exponent())
}
