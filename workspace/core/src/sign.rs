//! Signing personal messages and deploys with a secp256k1 key.
use k256::ecdsa::{recoverable, signature::Signer, SigningKey};

use crate::{
    hash::personal_message_prefix,
    serialize::{DeploySerializer, ProtobufSerializer},
    DeployFields, DeploySigned, PublicKey, Result, RpcSignature,
};

/// Sign a message with personal message framing.
///
/// Signatures are deterministic (RFC 6979) and use the low `s`
/// form.
pub fn sign_personal_message(
    signing_key: &SigningKey,
    data: &[u8],
) -> Result<RpcSignature> {
    let mut message = personal_message_prefix(data.len());
    message.extend_from_slice(data);

    // Hashes the framed message with Keccak-256.
    let signature: recoverable::Signature = signing_key.sign(&message);
    let bytes: &[u8] = signature.as_ref();
    RpcSignature::new(&bytes[..64], bytes[64])
}

/// Sign deploy fields using the protobuf encoding.
pub fn sign_deploy(
    signing_key: &SigningKey,
    fields: DeployFields,
) -> Result<DeploySigned> {
    sign_deploy_with(&ProtobufSerializer, signing_key, fields)
}

/// Sign deploy fields using the given serializer.
pub fn sign_deploy_with<S: DeploySerializer>(
    serializer: &S,
    signing_key: &SigningKey,
    fields: DeployFields,
) -> Result<DeploySigned> {
    let bytes = serializer.serialize(&fields);
    let signature = sign_personal_message(signing_key, &bytes)?;
    let deployer = PublicKey::from(signing_key);

    tracing::debug!(
        deployer = %deployer,
        len = bytes.len(),
        "sign deploy"
    );

    Ok(DeploySigned {
        fields,
        deployer,
        sig: signature.to_rs().to_vec(),
    })
}
