//! Agrovista Cipher — AES-256-GCM encryption of individual record
//! fields.
//!
//! A [`FieldCipher`] is constructed once at startup from the configured
//! key and handed to whichever component persists sensitive fields.
//! Ciphertexts are `base64(nonce || ciphertext || tag)` with a random
//! 96-bit nonce per call. Decryption fails closed: a wrong key or a
//! malformed ciphertext is an error, never silently wrong data.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    Encrypt(String),

    #[error("decryption failed: {0}")]
    Decrypt(String),
}

/// Symmetric cipher applied to string fields before persistence.
#[derive(Clone)]
pub struct FieldCipher {
    cipher: Aes256Gcm,
}

impl FieldCipher {
    /// Build a cipher from a 256-bit key.
    pub fn new(key: &[u8; 32]) -> Self {
        Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key)),
        }
    }

    /// Encrypt a field value. Returns `base64(nonce || ciphertext || tag)`.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let mut nonce_bytes = [0u8; 12];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| CipherError::Encrypt(format!("AES-GCM encrypt: {e}")))?;

        let mut combined = nonce_bytes.to_vec();
        combined.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(combined))
    }

    /// Decrypt a field value produced by [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, encoded: &str) -> Result<String, CipherError> {
        let combined = STANDARD
            .decode(encoded)
            .map_err(|e| CipherError::Decrypt(format!("base64 decode: {e}")))?;

        if combined.len() < 13 {
            return Err(CipherError::Decrypt("ciphertext too short".into()));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(12);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| CipherError::Decrypt(format!("AES-GCM decrypt: {e}")))?;

        String::from_utf8(plaintext)
            .map_err(|e| CipherError::Decrypt(format!("invalid UTF-8: {e}")))
    }
}

impl std::fmt::Debug for FieldCipher {
    // Key material stays out of debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCipher").finish_non_exhaustive()
    }
}
