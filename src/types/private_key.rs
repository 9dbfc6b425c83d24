//! RSASSA-PSS private key record in CRT form.

use std::fmt;

use zeroize::Zeroize;

use crate::types::public_key::PublicKey;
use crate::wire::{DecodeError, Reader, UnknownFieldSet, WireType, Writer};

/// RSASSA-PSS private key, always paired with its public counterpart.
///
/// All big-integer fields use the unsigned big-endian convention. `d` is
/// the private exponent, `p` and `q` the prime factors of the modulus,
/// `dp = d mod (p-1)`, `dq = d mod (q-1)`, and `crt` the CRT coefficient
/// `q⁻¹ mod p`. Decoded values are not trusted until
/// [`validate_private_key`](crate::validation::validate_private_key) has
/// confirmed the CRT identities.
///
/// The six private parameters are secret: `Debug` output redacts them and
/// they are zeroed when the record is dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PrivateKey {
    pub version: u32,
    pub public_key: Option<PublicKey>,
    pub d: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub dp: Vec<u8>,
    pub dq: Vec<u8>,
    pub crt: Vec<u8>,
    pub unknown_fields: UnknownFieldSet,
}

impl PrivateKey {
    const VERSION: u32 = 1;
    const PUBLIC_KEY: u32 = 2;
    const D: u32 = 3;
    const P: u32 = 4;
    const Q: u32 = 5;
    const DP: u32 = 6;
    const DQ: u32 = 7;
    const CRT: u32 = 8;

    /// Deterministic wire encoding; see [`PublicKey::encode`].
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        writer.write_uint32_field(Self::VERSION, self.version);
        if let Some(public_key) = &self.public_key {
            writer.write_message_field(Self::PUBLIC_KEY, &public_key.encode());
        }
        writer.write_bytes_field(Self::D, &self.d);
        writer.write_bytes_field(Self::P, &self.p);
        writer.write_bytes_field(Self::Q, &self.q);
        writer.write_bytes_field(Self::DP, &self.dp);
        writer.write_bytes_field(Self::DQ, &self.dq);
        writer.write_bytes_field(Self::CRT, &self.crt);
        self.unknown_fields.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Parse wire bytes; purely structural, no semantic checks.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(bytes);
        let mut record = Self::default();
        while let Some((field, wire_type)) = reader.read_key()? {
            match (field, wire_type) {
                (Self::VERSION, WireType::Varint) => {
                    record.version = reader.read_uint32()?;
                }
                (Self::PUBLIC_KEY, WireType::LengthDelimited) => {
                    record.public_key = Some(PublicKey::decode(reader.read_bytes()?)?);
                }
                (Self::D, WireType::LengthDelimited) => {
                    record.d = reader.read_bytes()?.to_vec();
                }
                (Self::P, WireType::LengthDelimited) => {
                    record.p = reader.read_bytes()?.to_vec();
                }
                (Self::Q, WireType::LengthDelimited) => {
                    record.q = reader.read_bytes()?.to_vec();
                }
                (Self::DP, WireType::LengthDelimited) => {
                    record.dp = reader.read_bytes()?.to_vec();
                }
                (Self::DQ, WireType::LengthDelimited) => {
                    record.dq = reader.read_bytes()?.to_vec();
                }
                (Self::CRT, WireType::LengthDelimited) => {
                    record.crt = reader.read_bytes()?.to_vec();
                }
                (1..=8, other) => {
                    return Err(DecodeError::WireTypeMismatch {
                        field,
                        wire_type: other.raw(),
                    });
                }
                _ => record
                    .unknown_fields
                    .push(reader.read_unknown(field, wire_type)?),
            }
        }
        Ok(record)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.crt.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("version", &self.version)
            .field("public_key", &self.public_key)
            .field("d", &format_args!("<{} secret bytes>", self.d.len()))
            .field("p", &format_args!("<{} secret bytes>", self.p.len()))
            .field("q", &format_args!("<{} secret bytes>", self.q.len()))
            .field("dp", &format_args!("<{} secret bytes>", self.dp.len()))
            .field("dq", &format_args!("<{} secret bytes>", self.dq.len()))
            .field("crt", &format_args!("<{} secret bytes>", self.crt.len()))
            .field("unknown_fields", &self.unknown_fields)
            .finish()
    }
}
