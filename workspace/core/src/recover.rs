//! Public key recovery from personal message signatures.
use crate::{
    curve::{CurveEngine, Secp256k1},
    hash::personal_message_digest,
    key::decode_hex,
    Error, PublicKey, Result, RpcSignature,
};

/// Recovers the signer of a personal message.
#[derive(Debug, Default, Clone, Copy)]
pub struct PublicKeyRecoverer<C = Secp256k1> {
    engine: C,
}

impl<C: CurveEngine> PublicKeyRecoverer<C> {
    /// Create a recoverer using the given curve engine.
    pub fn with_engine(engine: C) -> Self {
        Self { engine }
    }

    /// Recover the uncompressed public key that signed `data`.
    ///
    /// The message is framed with the personal message prefix before
    /// hashing so `data` must be the raw message, not a hash. Any
    /// failure, including a signature that cannot be decoded, is
    /// reported as a recovery failure.
    pub fn recover(
        &self,
        data: &[u8],
        signature: &[u8],
    ) -> Result<PublicKey> {
        let signature = RpcSignature::from_slice(signature)
            .map_err(Error::into_recovery_failure)?;
        self.recover_signature(data, &signature)
    }

    /// Recover from an already decoded signature.
    pub fn recover_signature(
        &self,
        data: &[u8],
        signature: &RpcSignature,
    ) -> Result<PublicKey> {
        tracing::debug!(
            len = data.len(),
            recovery_id = signature.recovery_id(),
            "recover public key"
        );
        self.engine
            .recover(personal_message_digest(data), signature)
            .map_err(Error::into_recovery_failure)
    }
}

/// Recover the public key that signed `data` using secp256k1.
///
/// `signature` is the 65 byte `r || s || v` RPC encoding.
pub fn recover_public_key(
    data: &[u8],
    signature: &[u8],
) -> Result<PublicKey> {
    PublicKeyRecoverer::<Secp256k1>::default().recover(data, signature)
}

/// Recover a public key from a hex encoded signature.
pub fn recover_public_key_hex(
    data: &[u8],
    signature: &str,
) -> Result<PublicKey> {
    let signature =
        decode_hex(signature).map_err(Error::into_recovery_failure)?;
    recover_public_key(data, &signature)
}
