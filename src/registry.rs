//! Type-identifier routing for serialized key material.
//!
//! A surrounding key-management layer stores key bytes next to a type URL
//! and needs to route them to the matching record shape. The routing table
//! is process-wide, built at most once on first use, and never consulted by
//! the ordinary encode/decode paths.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::Error;
use crate::types::{PrivateKey, PublicKey};
use crate::wire::DecodeError;

/// Type identifier for serialized public keys.
pub const PUBLIC_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.JwtRsaSsaPssPublicKey";

/// Type identifier for serialized private keys.
pub const PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.JwtRsaSsaPssPrivateKey";

/// A key record decoded through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRecord {
    Public(PublicKey),
    Private(PrivateKey),
}

impl KeyRecord {
    /// The type identifier this record serializes under.
    pub fn type_url(&self) -> &'static str {
        match self {
            KeyRecord::Public(_) => PUBLIC_KEY_TYPE_URL,
            KeyRecord::Private(_) => PRIVATE_KEY_TYPE_URL,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            KeyRecord::Public(key) => key.encode(),
            KeyRecord::Private(key) => key.encode(),
        }
    }
}

struct KeyTypeEntry {
    decode: fn(&[u8]) -> Result<KeyRecord, DecodeError>,
}

fn registry() -> &'static HashMap<&'static str, KeyTypeEntry> {
    static REGISTRY: OnceLock<HashMap<&'static str, KeyTypeEntry>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut entries = HashMap::new();
        entries.insert(
            PUBLIC_KEY_TYPE_URL,
            KeyTypeEntry {
                decode: |bytes| Ok(KeyRecord::Public(PublicKey::decode(bytes)?)),
            },
        );
        entries.insert(
            PRIVATE_KEY_TYPE_URL,
            KeyTypeEntry {
                decode: |bytes| Ok(KeyRecord::Private(PrivateKey::decode(bytes)?)),
            },
        );
        entries
    })
}

/// Decode serialized key material routed by its type identifier.
pub fn decode_key(type_url: &str, bytes: &[u8]) -> Result<KeyRecord, Error> {
    let entry = registry()
        .get(type_url)
        .ok_or_else(|| Error::UnsupportedKeyType(type_url.to_string()))?;
    Ok((entry.decode)(bytes)?)
}

/// Whether the registry can route the given type identifier.
pub fn is_registered(type_url: &str) -> bool {
    registry().contains_key(type_url)
}

/// All routable type identifiers, sorted.
pub fn registered_type_urls() -> Vec<&'static str> {
    let mut urls: Vec<_> = registry().keys().copied().collect();
    urls.sort_unstable();
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Algorithm;

    fn test_public_key() -> PublicKey {
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
    fn test_route_public_key() {
        let key = test_public_key();
        let record = decode_key(PUBLIC_KEY_TYPE_URL, &key.encode()).unwrap();
        assert_eq!(record, KeyRecord::Public(key));
        assert_eq!(record.type_url(), PUBLIC_KEY_TYPE_URL);
    }

    #[test]
    fn test_route_private_key() {
        let key = PrivateKey {
            version: 0,
            public_key: Some(test_public_key()),
            d: vec![0x27, 0x59],
            p: vec![0x65],
            q: vec![0x67],
            dp: vec![0x49],
            dq: vec![0x4d],
            crt: vec![0x33],
            unknown_fields: Default::default(),
        };
        let record = decode_key(PRIVATE_KEY_TYPE_URL, &key.encode()).unwrap();
        assert_eq!(record.type_url(), PRIVATE_KEY_TYPE_URL);
        assert_eq!(record.encode(), key.encode());
    }

    #[test]
    fn test_unknown_type_url_rejected() {
        let result = decode_key("type.googleapis.com/google.crypto.tink.AesGcmKey", &[]);
        assert!(matches!(result, Err(Error::UnsupportedKeyType(_))));
    }

    #[test]
    fn test_malformed_bytes_surface_decode_error() {
        let result = decode_key(PUBLIC_KEY_TYPE_URL, &[0x1a, 0x05, 0x01]);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_registered_type_urls() {
        assert!(is_registered(PUBLIC_KEY_TYPE_URL));
        assert!(is_registered(PRIVATE_KEY_TYPE_URL));
        assert!(!is_registered("type.googleapis.com/other"));
        assert_eq!(
            registered_type_urls(),
            vec![PRIVATE_KEY_TYPE_URL, PUBLIC_KEY_TYPE_URL]
        );
    }
}
