//! Argon2id password hashing

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::Argon2;
use etc_domain::repository::PasswordHasher;
use etc_types::{Error, Result};

/// Hashes passwords into PHC strings (`$argon2id$v=19$...`)
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a plaintext password against a stored PHC string
    pub fn verify(&self, password: &str, phc: &str) -> Result<bool> {
        let parsed = PasswordHash::new(phc).map_err(|e| Error::PasswordHash(e.to_string()))?;
        Ok(self.argon2.verify_password(password.as_bytes(), &parsed).is_ok())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
            .map_err(|e| Error::PasswordHash(e.to_string()))?;
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::PasswordHash(e.to_string()))?;
        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let phc = hasher.hash("s3cret!pw").unwrap();
        assert!(phc.starts_with("$argon2id$"));
        assert!(hasher.verify("s3cret!pw", &phc).unwrap());
        assert!(!hasher.verify("wrong!pw1", &phc).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = Argon2Hasher::new();
        assert_ne!(hasher.hash("same!pw1").unwrap(), hasher.hash("same!pw1").unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(Argon2Hasher::new().verify("x", "not-a-phc").is_err());
    }
}
