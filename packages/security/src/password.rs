// ABOUTME: Password hashing using Argon2id with per-user random salts
// ABOUTME: Hashes and salts are stored base64 encoded and compared in constant time

use argon2::{Algorithm, Argon2, ParamsBuilder, Version};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ring::rand::{SecureRandom, SystemRandom};
use subtle::ConstantTimeEq;

use crate::error::{AuthError, AuthResult};

const SALT_LEN: usize = 32;
const HASH_LEN: usize = 32;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl HashingParams {
    /// 64 MB, 3 iterations, 4 lanes
    pub const fn recommended() -> Self {
        Self {
            memory_kib: 65536,
            iterations: 3,
            parallelism: 4,
        }
    }

    /// Cheap parameters for tests and local development
    pub const fn fast() -> Self {
        Self {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }
}

impl Default for HashingParams {
    fn default() -> Self {
        Self::recommended()
    }
}

/// Base64 hash and salt as persisted in the users table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPassword {
    pub hash: String,
    pub salt: String,
}

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: HashingParams,
    rng: SystemRandom,
}

impl PasswordHasher {
    pub fn new(params: HashingParams) -> Self {
        Self {
            params,
            rng: SystemRandom::new(),
        }
    }

    pub fn params(&self) -> HashingParams {
        self.params
    }

    /// Hash `password` under a freshly generated salt
    pub fn hash(&self, password: &str) -> AuthResult<StoredPassword> {
        let mut salt = [0u8; SALT_LEN];
        self.rng
            .fill(&mut salt)
            .map_err(|_| AuthError::Hashing("Failed to generate salt".to_string()))?;

        let hash = self.derive(password, &salt)?;

        Ok(StoredPassword {
            hash: BASE64.encode(hash),
            salt: BASE64.encode(salt),
        })
    }

    /// Check `password` against a stored hash
    pub fn verify(&self, password: &str, stored: &StoredPassword) -> AuthResult<bool> {
        let salt = BASE64
            .decode(&stored.salt)
            .map_err(|e| AuthError::Hashing(format!("Stored salt is not valid base64: {}", e)))?;
        let expected = BASE64
            .decode(&stored.hash)
            .map_err(|e| AuthError::Hashing(format!("Stored hash is not valid base64: {}", e)))?;

        let computed = self.derive(password, &salt)?;
        Ok(computed.ct_eq(&expected).unwrap_u8() == 1)
    }

    fn derive(&self, password: &str, salt: &[u8]) -> AuthResult<Vec<u8>> {
        let params = ParamsBuilder::new()
            .m_cost(self.params.memory_kib)
            .t_cost(self.params.iterations)
            .p_cost(self.params.parallelism)
            .output_len(HASH_LEN)
            .build()
            .map_err(|e| AuthError::Hashing(format!("Invalid Argon2 params: {}", e)))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut output = vec![0u8; HASH_LEN];
        argon2
            .hash_password_into(password.as_bytes(), salt, &mut output)
            .map_err(|e| AuthError::Hashing(format!("Argon2 derivation failed: {}", e)))?;

        Ok(output)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(HashingParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(HashingParams::fast())
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        let stored = hasher.hash("correct horse").unwrap();

        assert!(hasher.verify("correct horse", &stored).unwrap());
        assert!(!hasher.verify("wrong horse", &stored).unwrap());
    }

    #[test]
    fn test_salts_are_unique() {
        let hasher = hasher();
        let a = hasher.hash("same password").unwrap();
        let b = hasher.hash("same password").unwrap();

        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
        assert_eq!(BASE64.decode(&a.salt).unwrap().len(), SALT_LEN);
    }

    #[test]
    fn test_corrupt_stored_hash_is_an_error() {
        let hasher = hasher();
        let stored = StoredPassword {
            hash: "not base64!".to_string(),
            salt: BASE64.encode([0u8; SALT_LEN]),
        };

        assert!(matches!(
            hasher.verify("anything", &stored),
            Err(AuthError::Hashing(_))
        ));
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let hasher = PasswordHasher::new(HashingParams {
            memory_kib: 1,
            iterations: 1,
            parallelism: 1,
        });

        assert!(matches!(hasher.hash("password"), Err(AuthError::Hashing(_))));
    }
}
