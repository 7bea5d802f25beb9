//! Types for deploy definitions.
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::PublicKey;

/// Fields of a deploy covered by the deployer's signature.
///
/// Every field is required; a JSON document missing a field or
/// holding a non-numeric value for a numeric field is rejected
/// when it is deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployFields {
    /// Rholang source code.
    pub term: String,
    /// Creation time in milliseconds.
    pub timestamp: i64,
    /// Price of a unit of phlo.
    pub phlo_price: i64,
    /// Maximum phlo the deploy may consume.
    pub phlo_limit: i64,
    /// Block number after which the deploy is valid.
    pub valid_after_block_number: i64,
}

impl DeployFields {
    /// Create deploy fields.
    pub fn new(
        term: impl Into<String>,
        timestamp: i64,
        phlo_price: i64,
        phlo_limit: i64,
        valid_after_block_number: i64,
    ) -> Self {
        Self {
            term: term.into(),
            timestamp,
            phlo_price,
            phlo_limit,
            valid_after_block_number,
        }
    }
}

/// Deploy with the deployer's public key and signature.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySigned {
    /// The signed fields.
    #[serde(flatten)]
    pub fields: DeployFields,
    /// Public key of the claimed signer.
    #[serde_as(as = "DisplayFromStr")]
    pub deployer: PublicKey,
    /// Signature bytes, `r || s`.
    #[serde(
        serialize_with = "hex::serde::serialize",
        deserialize_with = "hex::serde::deserialize"
    )]
    pub sig: Vec<u8>,
}
