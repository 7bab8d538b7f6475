// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Entity secret encryption.
//!
//! Every mutating Circle request carries `entitySecretCiphertext`: the
//! entity secret encrypted with RSA-OAEP under the entity public key that
//! Circle publishes at `/config/entity/publicKey`. SHA-256 is used both as
//! the OAEP hash and as the MGF1 mask hash; Circle rejects anything else.

use base64ct::{Base64, Encoding};
use rand::rngs::OsRng;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;

use crate::config::EntitySecret;

/// PEM label of an X.509 SubjectPublicKeyInfo document.
const SPKI_PEM_LABEL: &str = "PUBLIC KEY";

/// PEM label of a PKCS#1 RSAPublicKey document.
const PKCS1_PEM_LABEL: &str = "RSA PUBLIC KEY";

#[derive(Debug, thiserror::Error)]
pub enum EncryptionError {
    #[error("Invalid PEM: {0}")]
    InvalidPem(String),

    #[error("Unsupported PEM label: {0}")]
    UnsupportedPemLabel(String),

    #[error("Invalid RSA public key: {0}")]
    InvalidKey(String),

    #[error("RSA-OAEP encryption failed: {0}")]
    Encrypt(String),
}

/// Parse Circle's entity public key.
///
/// Accepts SPKI (`PUBLIC KEY`) and PKCS#1 (`RSA PUBLIC KEY`) PEM documents.
pub fn parse_public_key(public_key_pem: &str) -> Result<RsaPublicKey, EncryptionError> {
    let pem = pem::parse(public_key_pem.trim())
        .map_err(|e| EncryptionError::InvalidPem(e.to_string()))?;

    match pem.tag() {
        SPKI_PEM_LABEL => RsaPublicKey::from_public_key_der(pem.contents())
            .map_err(|e| EncryptionError::InvalidKey(e.to_string())),
        PKCS1_PEM_LABEL => RsaPublicKey::from_pkcs1_der(pem.contents())
            .map_err(|e| EncryptionError::InvalidKey(e.to_string())),
        other => Err(EncryptionError::UnsupportedPemLabel(other.to_string())),
    }
}

/// Encrypt the entity secret for a single request.
///
/// OAEP padding is randomized, so every call produces a different
/// ciphertext. The result is base64-encoded as Circle expects.
///
/// # Arguments
/// * `public_key_pem` - Circle's entity public key
/// * `entity_secret` - The decoded 32-byte entity secret
pub fn encrypt_entity_secret(
    public_key_pem: &str,
    entity_secret: &EntitySecret,
) -> Result<String, EncryptionError> {
    let public_key = parse_public_key(public_key_pem)?;
    let ciphertext = public_key
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), entity_secret.as_bytes())
        .map_err(|e| EncryptionError::Encrypt(e.to_string()))?;
    Ok(Base64::encode_string(&ciphertext))
}
