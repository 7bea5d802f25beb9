//! Elliptic curve operations behind a trait so callers pass the
//! curve context explicitly.
use k256::ecdsa::{
    recoverable, signature::DigestVerifier, Signature, VerifyingKey,
};
use sha3::Keccak256;

use crate::{Error, PublicKey, Result, RpcSignature};

/// Curve operations needed to recover and verify signatures.
///
/// Both operations take the Keccak-256 hasher state of the message
/// that was signed.
pub trait CurveEngine {
    /// Recover the signer's public key.
    fn recover(
        &self,
        digest: Keccak256,
        signature: &RpcSignature,
    ) -> Result<PublicKey>;

    /// Verify an `r || s` signature against a public key.
    ///
    /// Returns `Ok(false)` for a signature that does not verify and
    /// an error when the public key cannot be loaded.
    fn verify(
        &self,
        digest: Keccak256,
        signature: &[u8; 64],
        public_key: &PublicKey,
    ) -> Result<bool>;
}

/// The secp256k1 curve.
///
/// Signatures are never normalized. Verification only accepts low
/// `s` values so a high `s` signature verifies as `false`. Recovery
/// accepts either form and a high `s` signature recovers the signer
/// when paired with the opposite recovery id.
#[derive(Debug, Default, Clone, Copy)]
pub struct Secp256k1;

impl Secp256k1 {
    /// Load a public key as a point on the curve.
    pub fn load_key(&self, public_key: &PublicKey) -> Result<VerifyingKey> {
        VerifyingKey::from_sec1_bytes(public_key.as_bytes())
            .map_err(|_| Error::InvalidPublicKey)
    }
}

impl CurveEngine for Secp256k1 {
    fn recover(
        &self,
        digest: Keccak256,
        signature: &RpcSignature,
    ) -> Result<PublicKey> {
        let rs = Signature::try_from(signature.to_rs().as_slice())
            .map_err(|_| Error::RecoveryFailed(None))?;
        let id = recoverable::Id::new(signature.recovery_id())
            .map_err(|_| Error::RecoveryId(signature.recovery_id()))?;
        let recoverable = recoverable::Signature::new(&rs, id)
            .map_err(|_| Error::RecoveryFailed(None))?;
        let verifying_key = recoverable
            .recover_verifying_key_from_digest(digest)
            .map_err(|_| Error::RecoveryFailed(None))?;
        Ok(PublicKey::from(&verifying_key))
    }

    fn verify(
        &self,
        digest: Keccak256,
        signature: &[u8; 64],
        public_key: &PublicKey,
    ) -> Result<bool> {
        let verifying_key = self.load_key(public_key)?;

        // Zero or out of range scalars can never verify.
        let signature = match Signature::try_from(signature.as_slice()) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };

        Ok(verifying_key.verify_digest(digest, &signature).is_ok())
    }
}
