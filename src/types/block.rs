use std::fmt;
use std::str::FromStr;

use alloy_primitives::B256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Block reference accepted by every block-scoped call.
///
/// Serializes the way nodes expect it on the wire: a tag string, a
/// `0x`-prefixed hex quantity, or a `0x`-prefixed 32-byte hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlockIdentifier {
    #[default]
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
    Number(u64),
    Hash(B256),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid block identifier: {0:?}")]
pub struct InvalidBlockIdentifier(pub String);

impl fmt::Display for BlockIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Earliest => f.write_str("earliest"),
            Self::Pending => f.write_str("pending"),
            Self::Safe => f.write_str("safe"),
            Self::Finalized => f.write_str("finalized"),
            Self::Number(number) => write!(f, "0x{:x}", number),
            Self::Hash(hash) => write!(f, "0x{}", hex::encode(hash)),
        }
    }
}

/// Parse a block parameter.
/// Handles the tags, `0x`/`0X` hex quantities, plain decimal numbers and 32-byte hashes.
/// Exactly 64 hex digits always parse as a block hash, never as a zero-padded number.
impl FromStr for BlockIdentifier {
    type Err = InvalidBlockIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidBlockIdentifier(s.to_string());
        match s {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            "pending" => Ok(Self::Pending),
            "safe" => Ok(Self::Safe),
            "finalized" => Ok(Self::Finalized),
            other => {
                if let Some(stripped) = other
                    .strip_prefix("0x")
                    .or_else(|| other.strip_prefix("0X"))
                {
                    if stripped.len() == 64 {
                        let bytes = hex::decode(stripped).map_err(|_| invalid())?;
                        return Ok(Self::Hash(B256::from_slice(&bytes)));
                    }
                    if stripped.is_empty() {
                        return Err(invalid());
                    }
                    u64::from_str_radix(stripped, 16)
                        .map(Self::Number)
                        .map_err(|_| invalid())
                } else {
                    other.parse::<u64>().map(Self::Number).map_err(|_| invalid())
                }
            }
        }
    }
}

impl From<u64> for BlockIdentifier {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<B256> for BlockIdentifier {
    fn from(hash: B256) -> Self {
        Self::Hash(hash)
    }
}

impl Serialize for BlockIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => s.parse().map_err(de::Error::custom),
            Value::Number(n) => n
                .as_u64()
                .map(Self::Number)
                .ok_or_else(|| de::Error::custom(format!("invalid block number: {n}"))),
            other => Err(de::Error::custom(format!(
                "expected block tag, number or hash, got {other}"
            ))),
        }
    }
}
