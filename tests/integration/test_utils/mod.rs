use anyhow::Result;
use k256::ecdsa::SigningKey;
use std::path::PathBuf;
use tempfile::TempDir;

use rnode_eth_sign_core::{sign_deploy, DeployFields, DeploySigned};

/// Uncompressed public key for private key 1, the generator point.
pub const GENERATOR: &str = "0x0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// Address for private key 1.
pub const GENERATOR_ADDRESS: &str =
    "7e5f4552091a69125d5dfcb7b8c2659029395bdf";

/// Personal signature of `Some data` produced by a web3 wallet.
pub const WALLET_MESSAGE: &[u8] = b"Some data";
pub const WALLET_SIGNATURE: &str = "0xb91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd6007e74cd82e037b800186422fc2da167c747ef045e5d18a5f5d4300f8e1a0291c";
pub const WALLET_PUBLIC_KEY: &str = "0x044e3b81af9c2234cad09d679ce6035ed1392347ce64ce405f5dcd36228a25de6e47fd35c4215d1edf53e6f83de344615ce719bdb0fd878f6ed76f06dd277956de";
pub const WALLET_ADDRESS: &str =
    "2c7536e3605d9c16a7a3d7b1898e529396a65c23";

pub fn new_signing_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

pub fn private_key_one() -> Result<SigningKey> {
    let mut bytes = [0u8; 32];
    bytes[31] = 1;
    Ok(SigningKey::from_bytes(&bytes)?)
}

pub fn mock_fields() -> DeployFields {
    DeployFields::new(
        r#"new rl(`rho:registry:lookup`), out in { out!("ok") }"#,
        1_600_000_000_000,
        1,
        500_000,
        12,
    )
}

pub fn mock_deploy(signing_key: &SigningKey) -> Result<DeploySigned> {
    Ok(sign_deploy(signing_key, mock_fields())?)
}

/// Write a JSON document to a file in a temporary directory.
pub fn write_json<T: serde::Serialize>(
    dir: &TempDir,
    name: &str,
    value: &T,
) -> Result<PathBuf> {
    let file = dir.path().join(name);
    std::fs::write(&file, serde_json::to_vec_pretty(value)?)?;
    Ok(file)
}
