//! RFC 7517 JSON Web Key export and import for public keys.
//!
//! Mirrors the keyset layer's JWK-set conversion: verification keys only,
//! private key material is never exported. On export the kid follows the
//! wrapping mode (fingerprint-derived for TINK, `custom_kid` for RAW); on
//! import a kid becomes a `custom_kid`, since an imported key is by
//! definition externally identified.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::bigint;
use crate::error::Error;
use crate::kid;
use crate::types::{Algorithm, CustomKid, PublicKey};
use crate::validation::{KeyWrappingMode, ValidationError};

/// An RSA verification key in JWK form (RFC 7517 §4, RFC 7518 §6.3.1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Jwk {
    pub kty: String,
    pub alg: String,
    /// Modulus, base64url of the minimal big-endian bytes.
    pub n: String,
    /// Public exponent, same encoding.
    pub e: String,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_ops: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

/// A set of JSON Web Keys (RFC 7517 §5).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

fn b64(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Export a public key as a JWK under the given wrapping mode.
///
/// The algorithm must be concrete, and a `custom_kid` under TINK wrapping
/// is rejected just as in validation. Size policy is not applied here;
/// callers validate separately.
pub fn to_jwk(key: &PublicKey, mode: KeyWrappingMode) -> Result<Jwk, Error> {
    let alg = match key.algorithm.name() {
        Some(name) if key.algorithm.is_concrete() => name,
        _ => return Err(ValidationError::UnsupportedAlgorithm(key.algorithm).into()),
    };
    if mode == KeyWrappingMode::Tink && key.custom_kid.is_some() {
        return Err(ValidationError::CustomKidNotAllowed.into());
    }
    Ok(Jwk {
        kty: "RSA".to_string(),
        alg: alg.to_string(),
        n: b64(bigint::strip_leading_zeros(&key.n)),
        e: b64(bigint::strip_leading_zeros(&key.e)),
        key_use: Some("sig".to_string()),
        key_ops: Some(vec!["verify".to_string()]),
        kid: kid::jwt_kid(key, mode),
    })
}

/// Import a JWK as a public key record.
///
/// Requires `kty == "RSA"` and a concrete PS algorithm; `use` and
/// `key_ops`, when present, must mark a verification key. A kid imports as
/// `custom_kid`.
pub fn from_jwk(jwk: &Jwk) -> Result<PublicKey, Error> {
    if jwk.kty != "RSA" {
        return Err(Error::Jwk(format!("unsupported kty \"{}\"", jwk.kty)));
    }
    let algorithm = match Algorithm::from_name(&jwk.alg) {
        Some(algorithm) if algorithm.is_concrete() => algorithm,
        _ => return Err(Error::Jwk(format!("unsupported alg \"{}\"", jwk.alg))),
    };
    if let Some(key_use) = &jwk.key_use {
        if key_use != "sig" {
            return Err(Error::Jwk(format!("unsupported use \"{}\"", key_use)));
        }
    }
    if let Some(key_ops) = &jwk.key_ops {
        if !key_ops.iter().any(|op| op == "verify") {
            return Err(Error::Jwk("key_ops does not allow verify".to_string()));
        }
    }
    let n = general_purpose::URL_SAFE_NO_PAD.decode(&jwk.n)?;
    let e = general_purpose::URL_SAFE_NO_PAD.decode(&jwk.e)?;
    Ok(PublicKey {
        version: 0,
        algorithm,
        n: bigint::strip_leading_zeros(&n).to_vec(),
        e: bigint::strip_leading_zeros(&e).to_vec(),
        custom_kid: jwk.kid.as_ref().map(CustomKid::new),
        unknown_fields: Default::default(),
    })
}

/// Export several public keys as a JWK set.
pub fn to_jwk_set(keys: &[PublicKey], mode: KeyWrappingMode) -> Result<JwkSet, Error> {
    let keys = keys
        .iter()
        .map(|key| to_jwk(key, mode))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(JwkSet { keys })
}

/// Import every key of a JWK set.
pub fn from_jwk_set(set: &JwkSet) -> Result<Vec<PublicKey>, Error> {
    set.keys.iter().map(from_jwk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> PublicKey {
        PublicKey {
            version: 0,
            algorithm: Algorithm::Ps256,
            n: vec![0x28, 0xa3],
            e: vec![0x01, 0x00, 0x01],
            custom_kid: None,
            unknown_fields: Default::default(),
        }
    }

    #[test]
    fn test_export_fields() {
        let jwk = to_jwk(&test_key(), KeyWrappingMode::Raw).unwrap();
        assert_eq!(jwk.kty, "RSA");
        assert_eq!(jwk.alg, "PS256");
        assert_eq!(jwk.n, "KKM");
        assert_eq!(jwk.e, "AQAB");
        assert_eq!(jwk.key_use.as_deref(), Some("sig"));
        assert_eq!(jwk.key_ops, Some(vec!["verify".to_string()]));
        assert_eq!(jwk.kid, None);
    }

    #[test]
    fn test_import_roundtrip() {
        let key = test_key();
        let imported = from_jwk(&to_jwk(&key, KeyWrappingMode::Raw).unwrap()).unwrap();
        assert_eq!(imported, key);
    }

    #[test]
    fn test_tink_mode_kid_is_fingerprint_derived() {
        let key = test_key();
        let jwk = to_jwk(&key, KeyWrappingMode::Tink).unwrap();
        assert_eq!(jwk.kid, Some(kid::managed_kid(&key)));

        // The kid survives import, but as an external custom kid.
        let imported = from_jwk(&jwk).unwrap();
        assert_eq!(
            imported.custom_kid.map(|kid| kid.value),
            Some(kid::managed_kid(&key))
        );
    }

    #[test]
    fn test_raw_mode_custom_kid_exported() {
        let mut key = test_key();
        key.custom_kid = Some(CustomKid::new("external-id"));
        let jwk = to_jwk(&key, KeyWrappingMode::Raw).unwrap();
        assert_eq!(jwk.kid.as_deref(), Some("external-id"));
    }

    #[test]
    fn test_tink_mode_rejects_custom_kid() {
        let mut key = test_key();
        key.custom_kid = Some(CustomKid::new("external-id"));
        let result = to_jwk(&key, KeyWrappingMode::Tink);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::CustomKidNotAllowed))
        ));
    }

    #[test]
    fn test_export_requires_concrete_algorithm() {
        let mut key = test_key();
        key.algorithm = Algorithm::Unknown;
        assert!(to_jwk(&key, KeyWrappingMode::Raw).is_err());
    }

    #[test]
    fn test_import_rejects_foreign_keys() {
        let mut jwk = to_jwk(&test_key(), KeyWrappingMode::Raw).unwrap();
        jwk.kty = "EC".to_string();
        assert!(matches!(from_jwk(&jwk), Err(Error::Jwk(_))));

        let mut jwk = to_jwk(&test_key(), KeyWrappingMode::Raw).unwrap();
        jwk.alg = "RS256".to_string();
        assert!(matches!(from_jwk(&jwk), Err(Error::Jwk(_))));

        let mut jwk = to_jwk(&test_key(), KeyWrappingMode::Raw).unwrap();
        jwk.key_use = Some("enc".to_string());
        assert!(matches!(from_jwk(&jwk), Err(Error::Jwk(_))));
    }

    #[test]
    fn test_import_strips_leading_zeros() {
        let mut jwk = to_jwk(&test_key(), KeyWrappingMode::Raw).unwrap();
        jwk.n = b64(&[0x00, 0x28, 0xa3]);
        let imported = from_jwk(&jwk).unwrap();
        assert_eq!(imported.n, vec![0x28, 0xa3]);
    }

    #[test]
    fn test_jwk_set_json_roundtrip() {
        let set = to_jwk_set(&[test_key()], KeyWrappingMode::Tink).unwrap();
        let json = set.to_json().unwrap();
        assert!(json.starts_with("{\"keys\":["));
        assert!(json.contains("\"use\":\"sig\""));

        let parsed = JwkSet::from_json(&json).unwrap();
        assert_eq!(parsed, set);
        assert_eq!(from_jwk_set(&parsed).unwrap().len(), 1);
    }

    #[test]
    fn test_bad_base64_is_error() {
        let mut jwk = to_jwk(&test_key(), KeyWrappingMode::Raw).unwrap();
        jwk.n = "not base64!!".to_string();
        assert!(matches!(from_jwk(&jwk), Err(Error::Base64(_))));
    }
}
