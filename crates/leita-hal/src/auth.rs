//! Credential handling for remote backends.
//!
//! Two sources are supported, checked in order:
//!
//! 1. The `LEITA_IBM_TOKEN` environment variable.
//! 2. A JSON token file under the user config directory, written once via
//!    the `save-token` binary and reused on every later run.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Environment variable consulted for the hardware credential.
pub const TOKEN_ENV_VAR: &str = "LEITA_IBM_TOKEN";

/// Provider of an API credential for a remote backend.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Get a credential token for API calls.
    async fn get_token(&self) -> HalResult<String>;

    /// Whether a credential is currently available without user action.
    fn has_token(&self) -> bool;
}

/// Token provider backed by an environment variable.
pub struct EnvTokenProvider {
    env_var: String,
}

impl EnvTokenProvider {
    /// Create a provider reading the given environment variable.
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new(TOKEN_ENV_VAR)
    }
}

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn get_token(&self) -> HalResult<String> {
        std::env::var(&self.env_var).map_err(|_| {
            HalError::AuthenticationFailed(format!(
                "environment variable {} is not set",
                self.env_var
            ))
        })
    }

    fn has_token(&self) -> bool {
        std::env::var(&self.env_var).is_ok()
    }
}

/// Token record persisted by the `save-token` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    /// The credential itself.
    pub token: String,
    /// When the token was saved.
    pub saved_at: DateTime<Utc>,
}

/// Token provider backed by a JSON file on disk.
pub struct StoredTokenProvider {
    path: PathBuf,
}

impl StoredTokenProvider {
    /// Create a provider reading from the default token path.
    pub fn new() -> HalResult<Self> {
        Ok(Self {
            path: default_token_path()?,
        })
    }

    /// Create a provider reading from an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token, creating parent directories as needed.
    pub fn save(&self, token: &str) -> HalResult<()> {
        let record = StoredToken {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HalError::Configuration(format!(
                    "cannot create token directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, json).map_err(|e| {
            HalError::Configuration(format!("cannot write {}: {e}", self.path.display()))
        })?;
        tracing::info!("saved credential token to {}", self.path.display());
        Ok(())
    }

    /// Load the stored token record, if present.
    pub fn load(&self) -> Option<StoredToken> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Remove the stored token file.
    pub fn forget(&self) -> HalResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HalError::Configuration(format!(
                "cannot remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}

#[async_trait]
impl TokenProvider for StoredTokenProvider {
    async fn get_token(&self) -> HalResult<String> {
        self.load().map(|record| record.token).ok_or_else(|| {
            HalError::AuthenticationFailed(format!(
                "no saved token at {} (run save-token first)",
                self.path.display()
            ))
        })
    }

    fn has_token(&self) -> bool {
        self.load().is_some()
    }
}

/// Default location of the stored token file.
pub fn default_token_path() -> HalResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("leita").join("token.json"))
        .ok_or_else(|| HalError::Configuration("no user config directory available".into()))
}

/// Resolve a credential: environment variable first, then the stored file.
pub async fn resolve_token() -> HalResult<String> {
    let env = EnvTokenProvider::default();
    if env.has_token() {
        return env.get_token().await;
    }
    StoredTokenProvider::new()?.get_token().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_env_provider_missing() {
        let provider = EnvTokenProvider::new("LEITA_TEST_TOKEN_DOES_NOT_EXIST");
        assert!(!provider.has_token());
        assert!(matches!(
            provider.get_token().await,
            Err(HalError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_stored_provider_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let provider = StoredTokenProvider::with_path(dir.path().join("token.json"));

        assert!(!provider.has_token());
        provider.save("abc123").unwrap();
        assert!(provider.has_token());
        assert_eq!(provider.get_token().await.unwrap(), "abc123");

        let record = provider.load().unwrap();
        assert_eq!(record.token, "abc123");

        provider.forget().unwrap();
        assert!(!provider.has_token());
        // Forgetting twice is not an error
        provider.forget().unwrap();
    }

    #[tokio::test]
    async fn test_stored_provider_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = StoredTokenProvider::with_path(dir.path().join("absent.json"));
        assert!(matches!(
            provider.get_token().await,
            Err(HalError::AuthenticationFailed(_))
        ));
    }
}
