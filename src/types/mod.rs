//! Key material record types.
//!
//! Four immutable value records plus the algorithm enumeration, matching the
//! `google.crypto.tink` JwtRsaSsaPss schema shapes field for field. Records
//! are created by explicit construction or by decoding wire bytes; updates
//! construct a new record rather than mutating in place.

pub mod algorithm;
pub mod key_format;
pub mod private_key;
pub mod public_key;

pub use algorithm::Algorithm;
pub use key_format::KeyFormat;
pub use private_key::PrivateKey;
pub use public_key::{CustomKid, PublicKey};
