//! # Session Credentials
//!
//! The gateway never captures a token at construction time. It asks a
//! [`CredentialProvider`] for the bearer token on every request, so a login
//! or logout that happens after the gateway was built is picked up by the
//! very next call.
//!
//! [`TokenStore`] is the persisted provider: a single file holding the token
//! string. [`StaticToken`] is a fixed in-memory provider for tests and
//! one-off tooling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of the bearer credential attached to outgoing requests.
pub trait CredentialProvider: Send + Sync {
    /// The current token, or `None` when no session exists.
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed credential.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// File-backed session token.
///
/// The file holds the raw token; surrounding whitespace is ignored and an
/// empty file counts as "no session".
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored token.
    pub fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persists `token`, creating the parent directory if needed.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)?;
        debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    /// Removes the stored token. Clearing an absent session is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub fn has_token(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }
}

impl CredentialProvider for TokenStore {
    fn bearer_token(&self) -> Option<String> {
        match self.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Token file unreadable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("admin-framework-{}-{}", std::process::id(), nanos))
            .join(name)
    }

    #[test]
    fn test_missing_file_means_no_session() {
        let store = TokenStore::new(scratch_path("token"));
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.bearer_token(), None);
        assert!(!store.has_token());
    }

    #[test]
    fn test_save_then_clear() {
        let store = TokenStore::new(scratch_path("token"));
        store.save("abc123").unwrap();
        assert_eq!(store.bearer_token().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert_eq!(store.bearer_token(), None);
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_file_is_no_session() {
        let store = TokenStore::new(scratch_path("token"));
        store.save("  \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
