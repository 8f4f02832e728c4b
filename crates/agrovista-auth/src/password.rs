//! Password hashing using Argon2id.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};

use crate::error::AuthError;

/// Hash a password with Argon2id using OWASP-recommended parameters.
///
/// If `pepper` is provided it is prepended to the password before
/// hashing. The salt is randomly generated for each call.
pub fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, AuthError> {
    // OWASP ASVS recommended: m=19456 (19 MiB), t=2, p=1
    let params = argon2::Params::new(19456, 2, 1, None)
        .map_err(|e| AuthError::Crypto(format!("argon2 params error: {e}")))?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let peppered: String;
    let input = match pepper {
        Some(p) => {
            peppered = format!("{p}{password}");
            peppered.as_bytes()
        }
        None => password.as_bytes(),
    };

    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    let hash = argon2
        .hash_password(input, &salt)
        .map_err(|e| AuthError::Crypto(format!("password hash error: {e}")))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordVerifier;

    /// Helper: verify a plaintext password against a PHC-format hash.
    fn verify(password: &str, hash: &str, pepper: Option<&str>) -> bool {
        let peppered: String;
        let input = match pepper {
            Some(p) => {
                peppered = format!("{p}{password}");
                peppered.as_bytes()
            }
            None => password.as_bytes(),
        };
        let parsed = argon2::PasswordHash::new(hash).expect("hash should parse");
        Argon2::default().verify_password(input, &parsed).is_ok()
    }

    #[test]
    fn hash_matches_original_password() {
        let hash = hash_password("hunter2", None).unwrap();
        assert!(verify("hunter2", &hash, None));
        assert!(!verify("wrong", &hash, None));
    }

    #[test]
    fn hash_is_phc_argon2id() {
        let hash = hash_password("hunter2", None).unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn salt_differs_per_call() {
        let h1 = hash_password("hunter2", None).unwrap();
        let h2 = hash_password("hunter2", None).unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn pepper_is_applied() {
        let hash = hash_password("hunter2", Some("pepper!")).unwrap();
        assert!(verify("hunter2", &hash, Some("pepper!")));
        assert!(!verify("hunter2", &hash, None));
    }
}
