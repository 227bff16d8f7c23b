//! Sealed-box encryption of Actions secret values.
//!
//! GitHub stores secrets encrypted against a per-repository X25519 public
//! key. Values are sealed anonymously: an ephemeral keypair is generated for
//! every call, so sealing the same value twice yields different ciphertext.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use crypto_box::aead::OsRng;
use crypto_box::PublicKey;
use tracing::trace;

use crate::error::{CryptoError, Result};

/// Length of a raw X25519 public key.
pub const KEY_LEN: usize = 32;

/// Parse a base64 repository public key.
///
/// # Errors
///
/// Returns `CryptoError::InvalidBase64` or `CryptoError::InvalidKeyLength`.
pub fn parse_public_key(key_base64: &str) -> Result<PublicKey> {
    let bytes = BASE64.decode(key_base64.trim()).map_err(CryptoError::from)?;
    let bytes: [u8; KEY_LEN] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))?;
    Ok(PublicKey::from(bytes))
}

/// Seal `plaintext` for the holder of `key_base64`'s private key.
///
/// # Returns
///
/// Base64 ciphertext, ready for the `encrypted_value` field.
///
/// # Errors
///
/// Returns `CryptoError` if the key is malformed or sealing fails.
pub fn seal(plaintext: &str, key_base64: &str) -> Result<String> {
    let public_key = parse_public_key(key_base64)?;

    trace!(plaintext_len = plaintext.len(), "sealing");

    let sealed = public_key
        .seal(&mut OsRng, plaintext.as_bytes())
        .map_err(|_| CryptoError::SealFailed)?;

    trace!(ciphertext_len = sealed.len(), "sealed");

    Ok(BASE64.encode(sealed))
}
