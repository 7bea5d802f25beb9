use thiserror::Error;

/// Errors generated by the signature core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("signature must be {expected} bytes, got {actual}")]
    SignatureLength { expected: usize, actual: usize },

    #[error("recovery id {0} is not one of 0, 1, 27 or 28")]
    RecoveryId(u8),

    #[error("public key must be 64 or 65 bytes, got {0}")]
    PublicKeyLength(usize),

    #[error("uncompressed public key prefix must be 0x04, got {0:#04x}")]
    PublicKeyPrefix(u8),

    #[error("public key is not a point on secp256k1")]
    InvalidPublicKey,

    /// No curve point satisfies the signature equation, or the
    /// signature could not be decoded for recovery.
    #[error("signature recovery failed")]
    RecoveryFailed(#[source] Option<Box<Error>>),

    #[error("address derivation failed")]
    Address,

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    /// Determine if this error was caused by structurally malformed
    /// input rather than by the curve math.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::SignatureLength { .. }
                | Self::RecoveryId(_)
                | Self::PublicKeyLength(_)
                | Self::PublicKeyPrefix(_)
                | Self::InvalidPublicKey
                | Self::Hex(_)
        )
    }

    /// Determine if this error is a public key recovery failure.
    pub fn is_recovery_failure(&self) -> bool {
        matches!(self, Self::RecoveryFailed(_))
    }

    /// Wrap this error as the cause of a recovery failure.
    pub(crate) fn into_recovery_failure(self) -> Self {
        match self {
            Self::RecoveryFailed(_) => self,
            _ => Self::RecoveryFailed(Some(Box::new(self))),
        }
    }
}
