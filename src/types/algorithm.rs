//! RSASSA-PSS signature algorithm identifiers per RFC 7518 §3.5.

use std::fmt;

/// Signature algorithm of an RSASSA-PSS JWT key.
///
/// `Unknown` (wire value 0) is the default and is rejected by validation.
/// Wire values outside the named set decode as `Unrecognized` and re-encode
/// to the same raw integer, so records written by a newer schema version
/// survive a round trip through this one.
///
/// Selecting the hash/MGF pair for a value (SHA-256 with MGF1-SHA256 for
/// `Ps256`, and so on) is the signing component's job, not this schema's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Placeholder default, never valid in a usable key.
    Unknown,
    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256.
    Ps256,
    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384.
    Ps384,
    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512.
    Ps512,
    /// A wire value outside the named set, preserved for re-encoding.
    Unrecognized(u32),
}

impl Algorithm {
    /// Map a wire value to an algorithm. Never fails: out-of-range values
    /// become [`Algorithm::Unrecognized`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Algorithm::Unknown,
            1 => Algorithm::Ps256,
            2 => Algorithm::Ps384,
            3 => Algorithm::Ps512,
            other => Algorithm::Unrecognized(other),
        }
    }

    /// The wire value for this algorithm.
    pub fn to_raw(self) -> u32 {
        match self {
            Algorithm::Unknown => 0,
            Algorithm::Ps256 => 1,
            Algorithm::Ps384 => 2,
            Algorithm::Ps512 => 3,
            Algorithm::Unrecognized(raw) => raw,
        }
    }

    /// Canonical name of a named value; `None` for unrecognized ones.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Algorithm::Unknown => Some("PS_UNKNOWN"),
            Algorithm::Ps256 => Some("PS256"),
            Algorithm::Ps384 => Some("PS384"),
            Algorithm::Ps512 => Some("PS512"),
            Algorithm::Unrecognized(_) => None,
        }
    }

    /// Inverse of [`Algorithm::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PS_UNKNOWN" => Some(Algorithm::Unknown),
            "PS256" => Some(Algorithm::Ps256),
            "PS384" => Some(Algorithm::Ps384),
            "PS512" => Some(Algorithm::Ps512),
            _ => None,
        }
    }

    /// Whether this is one of the three concrete signing algorithms.
    pub fn is_concrete(self) -> bool {
        matches!(self, Algorithm::Ps256 | Algorithm::Ps384 | Algorithm::Ps512)
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Unknown
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNRECOGNIZED({})", self.to_raw()),
        }
    }
}
