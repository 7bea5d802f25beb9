//! Command implementations for the command line tool.
use k256::ecdsa::SigningKey;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::path::{Path, PathBuf};
use web3_address::ethereum::Address;

use rnode_eth_sign_core::{
    decode_hex, hash_personal_message, recover_public_key_hex, sign_deploy,
    verify_deploy, DeployFields, DeploySerializer, DeploySigned,
    ProtobufSerializer, PublicKey,
};

use crate::{Error, Result};

/// Environment variable holding the hex encoded signing key.
pub const SIGNING_KEY_ENV: &str = "RNODE_ETH_SIGN_KEY";

/// Hash of a personal message.
#[derive(Debug, Serialize, Deserialize)]
pub struct HashOutput {
    /// Keccak-256 of the framed message.
    #[serde(
        serialize_with = "hex::serde::serialize",
        deserialize_with = "hex::serde::deserialize"
    )]
    pub hash: Vec<u8>,
}

/// Signer recovered from a personal message signature.
#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverOutput {
    /// Uncompressed public key of the signer.
    #[serde_as(as = "DisplayFromStr")]
    pub public_key: PublicKey,
    /// Address of the signer.
    pub address: Address,
}

/// Canonical bytes of a deploy.
#[derive(Debug, Serialize, Deserialize)]
pub struct SerializeOutput {
    #[serde(
        serialize_with = "hex::serde::serialize",
        deserialize_with = "hex::serde::deserialize"
    )]
    pub bytes: Vec<u8>,
}

/// Result of verifying a deploy.
#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyOutput {
    /// Whether the signature matches the deployer.
    pub valid: bool,
    /// The claimed deployer.
    #[serde_as(as = "DisplayFromStr")]
    pub deployer: PublicKey,
}

/// Convert message text to bytes, decoding hex when requested.
pub fn message_bytes(message: &str, is_hex: bool) -> Result<Vec<u8>> {
    if is_hex {
        Ok(decode_hex(message)?)
    } else {
        Ok(message.as_bytes().to_vec())
    }
}

/// Hash a personal message.
pub fn hash(message: &str, is_hex: bool) -> Result<HashOutput> {
    let data = message_bytes(message, is_hex)?;
    Ok(HashOutput {
        hash: hash_personal_message(&data).to_vec(),
    })
}

/// Recover the signer of a personal message.
pub fn recover(
    message: &str,
    is_hex: bool,
    signature: &str,
) -> Result<RecoverOutput> {
    let data = message_bytes(message, is_hex)?;
    let public_key = recover_public_key_hex(&data, signature)?;
    let address = public_key.address()?;
    Ok(RecoverOutput {
        public_key,
        address,
    })
}

/// Read a JSON document describing a deploy.
pub async fn read_deploy<T: DeserializeOwned>(file: &Path) -> Result<T> {
    if !file.is_file() {
        return Err(Error::NotFile(file.to_path_buf()));
    }
    let buffer = tokio::fs::read(file).await?;
    Ok(serde_json::from_slice(&buffer)?)
}

/// Canonical bytes for the deploy fields in a file.
pub async fn serialize(file: PathBuf) -> Result<SerializeOutput> {
    let fields: DeployFields = read_deploy(&file).await?;
    Ok(SerializeOutput {
        bytes: ProtobufSerializer.serialize(&fields),
    })
}

/// Parse a hex encoded signing key.
pub fn parse_signing_key(key: &SecretString) -> Result<SigningKey> {
    let bytes = decode_hex(key.expose_secret())?;
    if bytes.len() != 32 {
        return Err(Error::SigningKey);
    }
    SigningKey::from_bytes(&bytes).map_err(|_| Error::SigningKey)
}

/// Sign the deploy fields in a file.
pub async fn sign(
    key: Option<SecretString>,
    file: PathBuf,
) -> Result<DeploySigned> {
    let key = key.ok_or(Error::NoSigningKey(SIGNING_KEY_ENV))?;
    let signing_key = parse_signing_key(&key)?;
    let fields: DeployFields = read_deploy(&file).await?;
    Ok(sign_deploy(&signing_key, fields)?)
}

/// Verify the signed deploy in a file.
pub async fn verify(file: PathBuf) -> Result<VerifyOutput> {
    let deploy: DeploySigned = read_deploy(&file).await?;
    let valid = verify_deploy(&deploy)?;
    Ok(VerifyOutput {
        valid,
        deployer: deploy.deployer,
    })
}
