//! Session credential for authenticated downloads.
//!
//! Log in to the puzzle site in a browser and copy the value of the cookie
//! named `session`. It is a long hexadecimal token.

use crate::ProviderError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default location of the session token file, relative to the working directory.
pub const DEFAULT_SESSION_PATH: &str = "config/session_id.txt";

/// Environment variable checked by [`Session::from_env`].
pub const SESSION_ENV_VAR: &str = "AOC_SESSION";

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into().trim().to_string(),
        }
    }

    /// Read the token from `path`, or from [`DEFAULT_SESSION_PATH`] when `None`.
    pub fn from_file(path: Option<&Path>) -> Result<Self, ProviderError> {
        let path = path.map_or_else(|| PathBuf::from(DEFAULT_SESSION_PATH), Path::to_path_buf);
        let session = Self::new(std::fs::read_to_string(&path)?);
        if session.id.is_empty() {
            return Err(ProviderError::EmptySession(path));
        }
        log::debug!("Loaded session from {}", path.display());
        Ok(session)
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        std::env::var(SESSION_ENV_VAR)
            .ok()
            .map(Self::new)
            .filter(|session| !session.id.is_empty())
            .ok_or(ProviderError::MissingSession(SESSION_ENV_VAR))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value for the `Cookie` request header.
    pub fn cookie(&self) -> String {
        format!("session={}", self.id)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("id", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id.txt");
        std::fs::write(&path, "  53616c7465645f5f\n").unwrap();

        let session = Session::from_file(Some(path.as_path())).unwrap();
        assert_eq!(session.id(), "53616c7465645f5f");
        assert_eq!(session.cookie(), "session=53616c7465645f5f");
    }

    #[test]
    fn test_from_file_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id.txt");
        std::fs::write(&path, "\n").unwrap();

        match Session::from_file(Some(path.as_path())) {
            Err(ProviderError::EmptySession(p)) => assert_eq!(p, path),
            other => panic!("Expected EmptySession, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Session::from_file(Some(dir.path().join("nope.txt").as_path()));
        assert!(matches!(result, Err(ProviderError::IoError(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("secret-token");
        let rendered = format!("{:?}", session);
        assert!(!rendered.contains("secret-token"));
    }
}
