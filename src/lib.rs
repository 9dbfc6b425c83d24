//! # jwt-pss-keys
//!
//! Key material schema for RSASSA-PSS JWT signing keys.
//!
//! This crate defines the persisted/wire representation of the RSA-PSS key
//! records a key-management layer stores and exchanges: the public key, the
//! private key in CRT form (which embeds its public counterpart), and the
//! generation template. Records serialize to a length-delimited, tag-based
//! binary encoding that preserves fields written by newer schema versions,
//! so old and new readers can exchange bytes losslessly.
//!
//! ## Features
//!
//! - **Typed records**: `PublicKey`, `PrivateKey`, `KeyFormat`, and the
//!   `Algorithm` enumeration (PS256, PS384, PS512 per RFC 7518 §3.5)
//! - **Wire codec**: deterministic encode, tolerant decode, unknown-field
//!   preservation for forward compatibility
//! - **Validation**: version and algorithm checks, modulus size policy, and
//!   the RSA-CRT consistency identities, kept strictly separate from decode
//!   errors
//! - **Key routing**: type-URL registry for dispatching serialized key
//!   material to the right record shape
//! - **JWK interop**: RFC 7517 export/import for verification keys
//!
//! ## Quick Start
//!
//! ```rust
//! use jwt_pss_keys::types::{Algorithm, PublicKey};
//!
//! let key = PublicKey {
//!     version: 0,
//!     algorithm: Algorithm::Ps256,
//!     n: vec![0x80; 256], // 2048-bit modulus bytes
//!     e: vec![0x01, 0x00, 0x01],
//!     custom_kid: None,
//!     unknown_fields: Default::default(),
//! };
//!
//! let bytes = key.encode();
//! let decoded = PublicKey::decode(&bytes).unwrap();
//! assert_eq!(decoded, key);
//! ```
//!
//! ## Error Handling
//!
//! Malformed bytes surface as [`wire::DecodeError`]; well-formed records
//! with invalid or inconsistent key material surface as
//! [`validation::ValidationError`]. The two never mix: a record is either
//! fully decoded and valid, or rejected in its entirety with the reason
//! preserved. [`error::Error`] wraps both for APIs that can fail either way.
//!
//! ## Security
//!
//! This crate performs no cryptographic computation. Private key parameters
//! are redacted from `Debug` output and zeroed on drop; signing,
//! verification, and key generation belong to the surrounding system.

pub mod bigint;
pub mod error;
pub mod jwk;
pub mod kid;
pub mod registry;
pub mod types;
pub mod validation;
pub mod wire;
