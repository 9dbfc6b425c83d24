//! Key identifiers derived from public keys.

use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};

use crate::types::PublicKey;
use crate::validation::KeyWrappingMode;

fn fingerprint_digest(key: &PublicKey) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(key.encode());
    hasher.finalize().into()
}

/// SHA-256 fingerprint over the key's canonical wire encoding, as a
/// hexadecimal string prefixed with `sha256:`.
pub fn fingerprint(key: &PublicKey) -> String {
    format!("sha256:{}", hex::encode(fingerprint_digest(key)))
}

/// kid of a TINK-wrapped key: unpadded base64url of the first four
/// fingerprint bytes, mirroring the keyset layer's 32-bit key ids.
pub fn managed_kid(key: &PublicKey) -> String {
    let digest = fingerprint_digest(key);
    general_purpose::URL_SAFE_NO_PAD.encode(&digest[..4])
}

/// The kid to place in a JWT header for the given wrapping mode, if any.
///
/// RAW-wrapped keys without a `custom_kid` have no kid at all.
pub fn jwt_kid(key: &PublicKey, mode: KeyWrappingMode) -> Option<String> {
    match mode {
        KeyWrappingMode::Tink => Some(managed_kid(key)),
        KeyWrappingMode::Raw => key.custom_kid.as_ref().map(|kid| kid.value.clone()),
    }
}
