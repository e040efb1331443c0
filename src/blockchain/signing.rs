// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction signing for the Radix ledger.
//!
//! The wallet only ever signs the digest the gateway handed back from the
//! build step. This module defines the [`Signer`] capability and a local
//! secp256k1 implementation backed by PEM-encoded keys.

use std::fmt;

use bech32::{ToBase32, Variant};
use k256::{
    ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey},
    SecretKey,
};

use super::types::{RADIX_MAINNET, RADIX_STOKENET};

/// Length in bytes of a signing digest.
pub const DIGEST_LEN: usize = 32;

/// Version byte prefixed to the public key in account addresses.
const ACCOUNT_ADDRESS_VERSION: u8 = 0x04;

/// Signing capability keyed by account index.
///
/// Implementations must be deterministic: the same index always maps to the
/// same key for the lifetime of the signer.
pub trait Signer: Send + Sync {
    /// Sign a hex-encoded digest, returning the DER signature as hex.
    fn sign(&self, digest_hex: &str, index: u32) -> Result<String, SignerError>;

    /// Compressed public key (hex) for an account index.
    fn public_key(&self, index: u32) -> Result<String, SignerError>;

    /// Account address for an account index on mainnet or another network.
    fn address(&self, index: u32, mainnet: bool) -> Result<String, SignerError>;
}

/// Errors raised by a [`Signer`].
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("No key configured for account index {0}")]
    UnknownAccountIndex(u32),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Address encoding failed: {0}")]
    Address(String),
}

/// Signer holding secp256k1 keys in memory, one per account index.
pub struct LocalSigner {
    keys: Vec<SigningKey>,
}

impl fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner")
            .field("accounts", &self.keys.len())
            .finish()
    }
}

impl LocalSigner {
    /// Create a signer; the key at position `i` serves account index `i`.
    pub fn new(keys: Vec<SigningKey>) -> Result<Self, SignerError> {
        if keys.is_empty() {
            return Err(SignerError::InvalidKey("no signing keys provided".to_string()));
        }
        Ok(Self { keys })
    }

    /// Load every key of a PEM bundle, in order.
    ///
    /// # Arguments
    /// * `pem_bytes` - Concatenated SEC1 or PKCS#8 private key blocks
    ///
    /// # Returns
    /// * `Ok(LocalSigner)` - The first block serves account index 0
    /// * `Err(SignerError::InvalidKey)` - If the bundle is empty or a block fails to parse
    pub fn from_pem_bundle(pem_bytes: &[u8]) -> Result<Self, SignerError> {
        Self::new(signing_keys_from_pem(pem_bytes)?)
    }

    /// Build a signer from hex-encoded raw private keys (64 hex characters each).
    #[cfg(test)]
    pub(crate) fn from_hex_keys(keys: &[&str]) -> Result<Self, SignerError> {
        let keys = keys
            .iter()
            .map(|hex_key| {
                let bytes = hex::decode(hex_key.trim_start_matches("0x"))
                    .map_err(|e| SignerError::InvalidKey(format!("Invalid hex: {e}")))?;
                SigningKey::from_slice(&bytes)
                    .map_err(|e| SignerError::InvalidKey(format!("Invalid key bytes: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(keys)
    }

    pub fn account_count(&self) -> usize {
        self.keys.len()
    }

    fn key(&self, index: u32) -> Result<&SigningKey, SignerError> {
        self.keys
            .get(index as usize)
            .ok_or(SignerError::UnknownAccountIndex(index))
    }

    fn compressed_public_key(&self, index: u32) -> Result<Vec<u8>, SignerError> {
        let point = self.key(index)?.verifying_key().to_encoded_point(true);
        Ok(point.as_bytes().to_vec())
    }
}

impl Signer for LocalSigner {
    fn sign(&self, digest_hex: &str, index: u32) -> Result<String, SignerError> {
        let digest = hex::decode(digest_hex)
            .map_err(|e| SignerError::InvalidDigest(format!("not hex: {e}")))?;
        if digest.len() != DIGEST_LEN {
            return Err(SignerError::InvalidDigest(format!(
                "expected {DIGEST_LEN} bytes, got {}",
                digest.len()
            )));
        }

        // RFC 6979 deterministic nonces.
        let signature: Signature = self
            .key(index)?
            .sign_prehash(&digest)
            .map_err(|e| SignerError::Signing(e.to_string()))?;

        Ok(hex::encode(signature.to_der().as_bytes()))
    }

    fn public_key(&self, index: u32) -> Result<String, SignerError> {
        Ok(hex::encode(self.compressed_public_key(index)?))
    }

    fn address(&self, index: u32, mainnet: bool) -> Result<String, SignerError> {
        let hrp = if mainnet {
            RADIX_MAINNET.address_hrp
        } else {
            RADIX_STOKENET.address_hrp
        };

        let mut data = vec![ACCOUNT_ADDRESS_VERSION];
        data.extend_from_slice(&self.compressed_public_key(index)?);

        bech32::encode(hrp, data.to_base32(), Variant::Bech32)
            .map_err(|e| SignerError::Address(e.to_string()))
    }
}

/// Parse every private key of a PEM bundle.
///
/// Each block may be SEC1 (`EC PRIVATE KEY`) or PKCS#8 (`PRIVATE KEY`).
pub fn signing_keys_from_pem(pem_bytes: &[u8]) -> Result<Vec<SigningKey>, SignerError> {
    let blocks = pem::parse_many(pem_bytes)
        .map_err(|e| SignerError::InvalidKey(format!("Invalid PEM: {e}")))?;

    if blocks.is_empty() {
        return Err(SignerError::InvalidKey("PEM contains no keys".to_string()));
    }

    blocks
        .iter()
        .map(|block| {
            let secret_key = SecretKey::from_sec1_der(block.contents())
                .or_else(|_| parse_pkcs8_to_secret_key(block.contents()))
                .map_err(|e| SignerError::InvalidKey(format!("Invalid key format: {e}")))?;
            Ok(SigningKey::from(secret_key))
        })
        .collect()
}

fn parse_pkcs8_to_secret_key(der: &[u8]) -> Result<SecretKey, String> {
    use k256::pkcs8::DecodePrivateKey;
    SecretKey::from_pkcs8_der(der).map_err(|e| e.to_string())
}
