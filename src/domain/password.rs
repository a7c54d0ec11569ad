//! Password value object and the credential hasher.
//!
//! A `Password` only ever holds a PHC-formatted digest. Plain text enters
//! through `CredentialHasher::hash` and never leaves it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::{DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM};
use crate::errors::{AppError, AppResult};

/// Hashed password as stored in the database.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Wrap an existing digest (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// The digest carries its own parameters, so hashes produced under an
    /// older work factor still verify. Malformed digests never match.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password digest is malformed: {}", e);
                false
            }
        }
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

/// Argon2id work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashCost {
    /// Cheapest parameters Argon2 accepts. Only suitable for tests.
    pub fn minimal() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }
}

/// One-way password hashing with an adaptive cost.
pub trait CredentialHasher: Send + Sync {
    /// Produce a salted digest for `plain_text`.
    fn hash(&self, plain_text: &str) -> AppResult<Password>;

    /// Check a candidate against a stored digest.
    fn verify(&self, plain_text: &str, password: &Password) -> bool {
        password.verify(plain_text)
    }

    /// Digest checked when no account matches, so lookups by unknown email
    /// cost the same as a wrong password.
    fn decoy(&self) -> &Password;
}

/// Argon2id hasher with configurable cost.
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
    decoy: Password,
}

impl Argon2Hasher {
    /// Build a hasher for the given work factor.
    ///
    /// # Errors
    /// Returns an internal error if Argon2 rejects the parameters.
    pub fn new(cost: HashCost) -> AppResult<Self> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| AppError::internal(format!("Invalid hash parameters: {}", e)))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let decoy = Self::digest(&argon2, "decoy-password-never-matches")?;

        Ok(Self {
            argon2,
            decoy: Password::from_hash(decoy),
        })
    }

    fn digest(argon2: &Argon2<'static>, plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> AppResult<Password> {
        Self::digest(&self.argon2, plain_text).map(Password::from_hash)
    }

    fn decoy(&self) -> &Password {
        &self.decoy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Argon2Hasher {
        Argon2Hasher::new(HashCost::minimal()).unwrap()
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hasher = hasher();
        let password = hasher.hash("pw123").unwrap();

        assert!(hasher.verify("pw123", &password));
        assert!(!hasher.verify("pw124", &password));
        assert_ne!(password.as_str(), "pw123");
    }

    #[test]
    fn test_password_from_hash() {
        let hasher = hasher();
        let hash = hasher.hash("TestPassword123").unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("TestPassword123"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = hasher();
        let pass1 = hasher.hash("SamePassword123").unwrap();
        let pass2 = hasher.hash("SamePassword123").unwrap();

        assert_ne!(pass1, pass2);
        assert!(pass1.verify("SamePassword123"));
        assert!(pass2.verify("SamePassword123"));
    }

    #[test]
    fn test_digest_records_configured_cost() {
        let hasher = Argon2Hasher::new(HashCost {
            memory_kib: 16,
            iterations: 3,
            parallelism: 1,
        })
        .unwrap();
        let password = hasher.hash("secret").unwrap();

        assert!(password.as_str().starts_with("$argon2id$"));
        assert!(password.as_str().contains("m=16,t=3,p=1"));
    }

    #[test]
    fn test_old_cost_still_verifies() {
        let old = hasher().hash("secret").unwrap();
        let newer = Argon2Hasher::new(HashCost {
            memory_kib: 32,
            iterations: 2,
            parallelism: 1,
        })
        .unwrap();

        assert!(newer.verify("secret", &old));
    }

    #[test]
    fn test_decoy_rejects_everything() {
        let hasher = hasher();
        assert!(!hasher.verify("", hasher.decoy()));
        assert!(!hasher.verify("pw123", hasher.decoy()));
    }

    #[test]
    fn test_malformed_digest_does_not_verify() {
        let password = Password::from_hash("plaintext-by-mistake".to_string());
        assert!(!password.verify("plaintext-by-mistake"));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let result = Argon2Hasher::new(HashCost {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = hasher().hash("secret").unwrap();
        assert!(!format!("{:?}", password).contains("argon2"));
    }
}
