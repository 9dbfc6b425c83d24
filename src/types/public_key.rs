//! RSASSA-PSS public key record and its optional custom key-id sub-record.

use crate::bigint;
use crate::types::algorithm::Algorithm;
use crate::wire::{DecodeError, Reader, UnknownFieldSet, WireType, Writer};

/// Externally assigned kid header value, honored for RAW-wrapped keys only.
///
/// Presence is what matters: an empty `value` is valid, and a record with
/// an empty sub-record present is distinct from one with no sub-record.
/// TINK-wrapped keys with this set are rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomKid {
    pub value: String,
    pub unknown_fields: UnknownFieldSet,
}

impl CustomKid {
    const VALUE: u32 = 1;

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unknown_fields: UnknownFieldSet::new(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    fn write_to(&self, writer: &mut Writer) {
        writer.write_string_field(Self::VALUE, &self.value);
        self.unknown_fields.write_to(writer);
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(bytes);
        let mut record = Self::default();
        while let Some((field, wire_type)) = reader.read_key()? {
            match (field, wire_type) {
                (Self::VALUE, WireType::LengthDelimited) => {
                    record.value = reader.read_string(field)?;
                }
                (Self::VALUE, other) => {
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

/// RSASSA-PSS public key.
///
/// `n` (modulus) and `e` (public exponent) are unsigned big integers in
/// big-endian representation with no superfluous leading zero bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicKey {
    pub version: u32,
    pub algorithm: Algorithm,
    pub n: Vec<u8>,
    pub e: Vec<u8>,
    pub custom_kid: Option<CustomKid>,
    pub unknown_fields: UnknownFieldSet,
}

impl PublicKey {
    const VERSION: u32 = 1;
    const ALGORITHM: u32 = 2;
    const N: u32 = 3;
    const E: u32 = 4;
    const CUSTOM_KID: u32 = 5;

    /// Bit length of the modulus.
    pub fn modulus_size_in_bits(&self) -> u64 {
        bigint::bit_len(&self.n)
    }

    /// Deterministic wire encoding: fields in ascending field-number order,
    /// zero values skipped, preserved unknown fields last.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    fn write_to(&self, writer: &mut Writer) {
        writer.write_uint32_field(Self::VERSION, self.version);
        writer.write_uint32_field(Self::ALGORITHM, self.algorithm.to_raw());
        writer.write_bytes_field(Self::N, &self.n);
        writer.write_bytes_field(Self::E, &self.e);
        if let Some(custom_kid) = &self.custom_kid {
            writer.write_message_field(Self::CUSTOM_KID, &custom_kid.encode());
        }
        self.unknown_fields.write_to(writer);
    }

    /// Parse wire bytes. Missing fields decode to their zero values, the
    /// absent sub-record decodes to `None`, and unknown fields are captured
    /// for re-encoding. No semantic checks happen here; see
    /// [`validate_public_key`](crate::validation::validate_public_key).
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(bytes);
        let mut record = Self::default();
        while let Some((field, wire_type)) = reader.read_key()? {
            match (field, wire_type) {
                (Self::VERSION, WireType::Varint) => {
                    record.version = reader.read_uint32()?;
                }
                (Self::ALGORITHM, WireType::Varint) => {
                    record.algorithm = Algorithm::from_raw(reader.read_uint32()?);
                }
                (Self::N, WireType::LengthDelimited) => {
                    record.n = reader.read_bytes()?.to_vec();
                }
                (Self::E, WireType::LengthDelimited) => {
                    record.e = reader.read_bytes()?.to_vec();
                }
                (Self::CUSTOM_KID, WireType::LengthDelimited) => {
                    record.custom_kid = Some(CustomKid::decode(reader.read_bytes()?)?);
                }
                (
                    Self::VERSION | Self::ALGORITHM | Self::N | Self::E | Self::CUSTOM_KID,
                    other,
                ) => {
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
