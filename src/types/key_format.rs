//! Generation template for new RSASSA-PSS key pairs.

use crate::types::algorithm::Algorithm;
use crate::wire::{DecodeError, Reader, UnknownFieldSet, WireType, Writer};

/// Parameters for generating a new key pair. Not itself a key, and never
/// serialized alongside one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFormat {
    pub version: u32,
    pub algorithm: Algorithm,
    pub modulus_size_in_bits: u32,
    /// Unsigned big-endian exponent; empty means the 65537 default.
    pub public_exponent: Vec<u8>,
    pub unknown_fields: UnknownFieldSet,
}

impl KeyFormat {
    const VERSION: u32 = 1;
    const ALGORITHM: u32 = 2;
    const MODULUS_SIZE_IN_BITS: u32 = 3;
    const PUBLIC_EXPONENT: u32 = 4;

    /// F4, the exponent a generator uses when none is specified.
    pub const DEFAULT_PUBLIC_EXPONENT: &'static [u8] = &[0x01, 0x00, 0x01];

    /// The exponent a generator should use, applying the 65537 default.
    pub fn effective_public_exponent(&self) -> &[u8] {
        if self.public_exponent.is_empty() {
            Self::DEFAULT_PUBLIC_EXPONENT
        } else {
            &self.public_exponent
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        writer.write_uint32_field(Self::VERSION, self.version);
        writer.write_uint32_field(Self::ALGORITHM, self.algorithm.to_raw());
        writer.write_uint32_field(Self::MODULUS_SIZE_IN_BITS, self.modulus_size_in_bits);
        writer.write_bytes_field(Self::PUBLIC_EXPONENT, &self.public_exponent);
        self.unknown_fields.write_to(&mut writer);
        writer.into_bytes()
    }

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
                (Self::MODULUS_SIZE_IN_BITS, WireType::Varint) => {
                    record.modulus_size_in_bits = reader.read_uint32()?;
                }
                (Self::PUBLIC_EXPONENT, WireType::LengthDelimited) => {
                    record.public_exponent = reader.read_bytes()?.to_vec();
                }
                (1..=4, other) => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let format = KeyFormat {
            version: 0,
            algorithm: Algorithm::Ps384,
            modulus_size_in_bits: 3072,
            public_exponent: vec![0x01, 0x00, 0x01],
            unknown_fields: UnknownFieldSet::new(),
        };
        let decoded = KeyFormat::decode(&format.encode()).unwrap();
        assert_eq!(decoded, format);
        assert_eq!(decoded.modulus_size_in_bits, 3072);
    }

    #[test]
    fn test_decode_empty_yields_defaults() {
        let decoded = KeyFormat::decode(&[]).unwrap();
        assert_eq!(decoded, KeyFormat::default());
        assert_eq!(decoded.modulus_size_in_bits, 0);
        assert!(decoded.public_exponent.is_empty());
    }

    #[test]
    fn test_effective_public_exponent_defaults_to_f4() {
        let format = KeyFormat::default();
        assert_eq!(
            format.effective_public_exponent(),
            KeyFormat::DEFAULT_PUBLIC_EXPONENT
        );

        let format = KeyFormat {
            public_exponent: vec![0x03],
            ..Default::default()
        };
        assert_eq!(format.effective_public_exponent(), &[0x03]);
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let format = KeyFormat {
            algorithm: Algorithm::Ps256,
            modulus_size_in_bits: 2048,
            ..Default::default()
        };
        let mut bytes = format.encode();
        bytes.extend_from_slice(&[0x78, 0x01]);

        let decoded = KeyFormat::decode(&bytes).unwrap();
        assert_eq!(decoded.unknown_fields.len(), 1);
        assert_eq!(decoded.encode(), bytes);
    }
}
