//! Encodings for public keys and signatures.
use k256::{
    ecdsa::{SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use std::{fmt, str::FromStr};
use web3_address::ethereum::Address;

use crate::{Error, Result};

/// Length of an uncompressed SEC1 public key.
pub const PUBLIC_KEY_LEN: usize = 65;

/// Length of a public key without the SEC1 tag byte.
pub const UNPREFIXED_PUBLIC_KEY_LEN: usize = 64;

/// Length of an `r || s` signature.
pub const SIGNATURE_LEN: usize = 64;

/// Length of an `r || s || v` signature.
pub const RPC_SIGNATURE_LEN: usize = 65;

/// Tag byte for an uncompressed SEC1 point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Offset applied to the recovery id by the RPC encoding.
const RPC_V_OFFSET: u8 = 27;

/// Decode hex text with an optional `0x` prefix.
pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    Ok(hex::decode(value)?)
}

/// Uncompressed secp256k1 public key, `0x04 || X || Y`.
///
/// Only the encoding is checked on construction; whether the
/// coordinates are a point on the curve is checked when a curve
/// engine loads the key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    /// Create a public key from either the 64 byte unprefixed form
    /// or the 65 byte uncompressed form.
    ///
    /// The unprefixed form is normalized by prepending the `0x04`
    /// tag so every key held by this type has the same encoding.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut key = [0u8; PUBLIC_KEY_LEN];
        match bytes.len() {
            UNPREFIXED_PUBLIC_KEY_LEN => {
                key[0] = UNCOMPRESSED_TAG;
                key[1..].copy_from_slice(bytes);
            }
            PUBLIC_KEY_LEN => {
                if bytes[0] != UNCOMPRESSED_TAG {
                    return Err(Error::PublicKeyPrefix(bytes[0]));
                }
                key.copy_from_slice(bytes);
            }
            len => return Err(Error::PublicKeyLength(len)),
        }
        Ok(Self(key))
    }

    /// Uncompressed encoding including the tag byte.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Coordinates without the tag byte.
    pub fn unprefixed(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Ethereum address for this public key.
    pub fn address(&self) -> Result<Address> {
        let verifying_key = VerifyingKey::from_sec1_bytes(&self.0)
            .map_err(|_| Error::InvalidPublicKey)?;
        let compressed: [u8; 33] = verifying_key
            .to_bytes()
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidPublicKey)?;
        let address: Address =
            (&compressed).try_into().map_err(|_| Error::Address)?;
        Ok(address)
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(value: &VerifyingKey) -> Self {
        let point = value.to_encoded_point(false);
        let mut key = [0u8; PUBLIC_KEY_LEN];
        key.copy_from_slice(point.as_bytes());
        Self(key)
    }
}

impl From<&SigningKey> for PublicKey {
    fn from(value: &SigningKey) -> Self {
        let point = value.verifying_key().to_encoded_point(false);
        let mut key = [0u8; PUBLIC_KEY_LEN];
        key.copy_from_slice(point.as_bytes());
        Self(key)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_string()).finish()
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(&decode_hex(s)?)
    }
}

/// Signature in the RPC encoding used by wallets for personal
/// messages: `r || s || v`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RpcSignature {
    r: [u8; 32],
    s: [u8; 32],
    recovery_id: u8,
}

impl RpcSignature {
    /// Decode a 65 byte `r || s || v` signature.
    ///
    /// `v` may be either 27/28 or the raw recovery id 0/1.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RPC_SIGNATURE_LEN {
            return Err(Error::SignatureLength {
                expected: RPC_SIGNATURE_LEN,
                actual: bytes.len(),
            });
        }

        let v = bytes[64];
        let lifted = if v < RPC_V_OFFSET {
            v.checked_add(RPC_V_OFFSET)
        } else {
            Some(v)
        };
        let recovery_id = match lifted {
            Some(27) => 0,
            Some(28) => 1,
            _ => return Err(Error::RecoveryId(v)),
        };

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, recovery_id })
    }

    /// Create a signature from `r || s` and a raw recovery id.
    pub fn new(rs: &[u8], recovery_id: u8) -> Result<Self> {
        if rs.len() != SIGNATURE_LEN {
            return Err(Error::SignatureLength {
                expected: SIGNATURE_LEN,
                actual: rs.len(),
            });
        }
        if recovery_id > 1 {
            return Err(Error::RecoveryId(recovery_id));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&rs[0..32]);
        s.copy_from_slice(&rs[32..64]);
        Ok(Self { r, s, recovery_id })
    }

    /// The `r` scalar.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// The `s` scalar.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Recovery id in the range `0..=1`.
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// The `r || s` bytes.
    pub fn to_rs(&self) -> [u8; SIGNATURE_LEN] {
        let mut rs = [0u8; SIGNATURE_LEN];
        rs[..32].copy_from_slice(self.r());
        rs[32..].copy_from_slice(self.s());
        rs
    }

    /// Encode as `r || s || v` with `v` offset by 27.
    pub fn to_bytes(&self) -> [u8; RPC_SIGNATURE_LEN] {
        let mut bytes = [0u8; RPC_SIGNATURE_LEN];
        bytes[..SIGNATURE_LEN].copy_from_slice(&self.to_rs());
        bytes[64] = self.recovery_id + RPC_V_OFFSET;
        bytes
    }
}

impl fmt::Display for RpcSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for RpcSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RpcSignature").field(&self.to_string()).finish()
    }
}

impl FromStr for RpcSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(&decode_hex(s)?)
    }
}
