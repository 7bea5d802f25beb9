//! Ethereum compatible signatures for RNode deploys.
//!
//! Recovers the signer of a personal message and verifies that a
//! deploy was signed by its declared deployer.
mod curve;
mod deploy;
mod error;
mod hash;
mod key;
mod recover;
mod serialize;
mod sign;
mod verify;


pub use curve::{CurveEngine, Secp256k1};
pub use deploy::{DeployFields, DeploySigned};
pub use error::Error;
pub use hash::{
    hash_personal_message, keccak256, personal_message_digest,
    personal_message_prefix, PERSONAL_MESSAGE_PREFIX,
};
pub use key::{
    decode_hex, PublicKey, RpcSignature, PUBLIC_KEY_LEN, RPC_SIGNATURE_LEN,
    SIGNATURE_LEN, UNPREFIXED_PUBLIC_KEY_LEN,
};
pub use recover::{
    recover_public_key, recover_public_key_hex, PublicKeyRecoverer,
};
pub use serialize::{DeploySerializer, ProtobufSerializer};
pub use sign::{sign_deploy, sign_deploy_with, sign_personal_message};
pub use verify::{verify_deploy, DeployVerifier};

pub type Result<T> = std::result::Result<T, error::Error>;
