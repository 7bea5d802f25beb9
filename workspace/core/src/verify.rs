//! Verification of deploys signed with personal message framing.
use crate::{
    curve::{CurveEngine, Secp256k1},
    hash::personal_message_digest,
    key::SIGNATURE_LEN,
    serialize::{DeploySerializer, ProtobufSerializer},
    DeploySigned, Error, Result,
};

/// Verifies that a deploy was signed by its declared deployer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeployVerifier<C = Secp256k1, S = ProtobufSerializer> {
    engine: C,
    serializer: S,
}

impl<C: CurveEngine, S: DeploySerializer> DeployVerifier<C, S> {
    /// Create a verifier from a curve engine and deploy serializer.
    pub fn new(engine: C, serializer: S) -> Self {
        Self { engine, serializer }
    }

    /// Verify the deploy signature.
    ///
    /// A signature that does not match is `Ok(false)`; an error is
    /// only returned for malformed input such as a signature that is
    /// not 64 bytes or a deployer key that is not a curve point.
    pub fn verify(&self, deploy: &DeploySigned) -> Result<bool> {
        let signature: &[u8; SIGNATURE_LEN] = deploy
            .sig
            .as_slice()
            .try_into()
            .map_err(|_| Error::SignatureLength {
                expected: SIGNATURE_LEN,
                actual: deploy.sig.len(),
            })?;

        let bytes = self.serializer.serialize(&deploy.fields);
        let valid = self.engine.verify(
            personal_message_digest(&bytes),
            signature,
            &deploy.deployer,
        )?;

        tracing::debug!(
            deployer = %deploy.deployer,
            len = bytes.len(),
            valid = valid,
            "verify deploy"
        );

        Ok(valid)
    }
}

/// Verify a deploy using secp256k1 and the protobuf encoding.
pub fn verify_deploy(deploy: &DeploySigned) -> Result<bool> {
    DeployVerifier::<Secp256k1, ProtobufSerializer>::default().verify(deploy)
}
