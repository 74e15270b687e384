//! CredentialStore - persisted admin credentials

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use shared::{DataPaths, Result};

/// Username seeded when no credential file exists yet
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Password seeded when no credential file exists yet. Known weak default;
/// the seed logs a warning so deployments replace it.
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

/// SHA-256 hex digest of a password
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// A stored admin credential.
///
/// The `password` field holds a SHA-256 hex digest, never the plaintext. The
/// on-disk field names stay as the prior tooling wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredential {
    #[serde(rename = "usuario")]
    pub username: String,

    #[serde(rename = "password")]
    pub password_hash: String,
}

impl AdminCredential {
    /// Create a credential from a plaintext password, digesting it
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_hash: hash_password(password),
        }
    }

    /// Exact match on username plus digest match on password
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password_hash == hash_password(password)
    }
}

/// File-backed admin credential list
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store over the given credential file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store over the standard location in a data directory
    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.admins_file())
    }

    /// Seed the credential file with the default admin if it does not exist.
    /// Idempotent: an existing file is left untouched.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let seed = vec![AdminCredential::new(
            DEFAULT_ADMIN_USER,
            DEFAULT_ADMIN_PASSWORD,
        )];
        fs::write(&self.path, serde_json::to_string_pretty(&seed)?)?;

        tracing::warn!(
            user = DEFAULT_ADMIN_USER,
            "seeded default admin credential; change it before any real deployment"
        );
        Ok(())
    }

    /// Load the credential list, seeding it first if absent.
    pub fn load(&self) -> Result<Vec<AdminCredential>> {
        self.ensure_initialized()?;
        let content = fs::read_to_string(&self.path)?;
        let credentials: Vec<AdminCredential> = serde_json::from_str(&content)?;
        Ok(credentials)
    }

    /// True iff some stored credential matches the pair exactly.
    ///
    /// Equality comparison only: no lockout, no rate limiting.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let credentials = self.load()?;
        Ok(credentials.iter().any(|c| c.matches(username, password)))
    }
}
