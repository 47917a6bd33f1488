use std::{fmt, str::FromStr};

use bech32::{FromBase32, ToBase32, Variant};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Human-readable prefix of account addresses on supported chains.
pub const ACCOUNT_PREFIX: &str = "cosmos";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error thrown when parsing or constructing an [`AccAddress`]
pub enum AddressError {
    /// The string is not valid bech32
    #[error("invalid bech32: {0}")]
    InvalidBech32(String),

    /// Valid bech32 with an unexpected human-readable prefix
    #[error("unexpected address prefix {0:?}")]
    UnexpectedPrefix(String),

    /// The decoded payload is not an account-sized byte string
    #[error("invalid address payload length {0}")]
    InvalidLength(usize),
}

/// A validated bech32 account address.
///
/// Parsing checks the encoding, the chain's account prefix and the payload
/// length, so holding an `AccAddress` is proof the identifier is
/// well-formed. The canonical form is lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccAddress(String);

impl AccAddress {
    /// Encodes raw key-hash bytes as an account address.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != 20 && bytes.len() != 32 {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        let encoded = bech32::encode(ACCOUNT_PREFIX, bytes.to_base32(), Variant::Bech32)
            .map_err(|e| AddressError::InvalidBech32(e.to_string()))?;
        Ok(AccAddress(encoded))
    }

    /// The address in its canonical textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data, variant) =
            bech32::decode(s).map_err(|e| AddressError::InvalidBech32(e.to_string()))?;
        if variant != Variant::Bech32 {
            return Err(AddressError::InvalidBech32("bech32m variant".to_string()));
        }
        if hrp != ACCOUNT_PREFIX {
            return Err(AddressError::UnexpectedPrefix(hrp));
        }
        let payload = Vec::<u8>::from_base32(&data)
            .map_err(|e| AddressError::InvalidBech32(e.to_string()))?;
        if payload.len() != 20 && payload.len() != 32 {
            return Err(AddressError::InvalidLength(payload.len()));
        }
        Ok(AccAddress(s.to_lowercase()))
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AccAddress> for String {
    fn from(address: AccAddress) -> Self {
        address.0
    }
}

impl Serialize for AccAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
