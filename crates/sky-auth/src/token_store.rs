//! Persistent storage for the two session credentials.
//!
//! Exactly two string values are persisted under fixed names: the access
//! token and the refresh token. Storage tiers: OS keychain, then an
//! environment variable (read-only, for CI), then a file under
//! `~/.skylark/` (0600).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "skylark-cli";

/// Which of the two persisted credentials to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    const fn keyring_user(self) -> &'static str {
        match self {
            Self::Access => "access-token",
            Self::Refresh => "refresh-token",
        }
    }

    const fn file_name(self) -> &'static str {
        match self {
            Self::Access => "access_token",
            Self::Refresh => "refresh_token",
        }
    }

    const fn env_var(self) -> &'static str {
        match self {
            Self::Access => "SKYLARK_AUTH__TOKEN",
            Self::Refresh => "SKYLARK_AUTH__REFRESH_TOKEN",
        }
    }
}

/// Returns the keyring service name.
///
/// Defaults to `"skylark-cli"`. Override via `SKYLARK_KEYRING_SERVICE` for
/// testing to avoid touching production credentials.
fn keyring_service() -> String {
    std::env::var("SKYLARK_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a token in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if both keyring and file storage fail.
pub fn store(kind: TokenKind, value: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(&keyring_service(), kind.keyring_user()) {
        Ok(entry) => match entry.set_password(value) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(kind, value)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(kind, value)
        }
    }
}

/// Load a token. Priority: keyring → env var → file.
#[must_use]
pub fn load(kind: TokenKind) -> Option<String> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), kind.keyring_user())
        && let Ok(token) = entry.get_password()
        && !token.is_empty()
    {
        return Some(token);
    }

    // 2. Environment variable
    if let Ok(token) = std::env::var(kind.env_var()) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    // 3. File fallback
    load_file(kind)
}

/// Delete both stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if a credentials file cannot be removed.
pub fn delete_all() -> Result<(), AuthError> {
    for kind in [TokenKind::Access, TokenKind::Refresh] {
        // Keyring delete is best-effort; the entry may not exist
        if let Ok(entry) = keyring::Entry::new(&keyring_service(), kind.keyring_user()) {
            let _ = entry.delete_credential();
        }

        let path = credentials_dir()?.join(kind.file_name());
        delete_file_at(&path)?;
    }

    Ok(())
}

/// Detect which tier the access token came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), TokenKind::Access.keyring_user())
        && entry.get_password().is_ok_and(|t| !t.is_empty())
    {
        return Some("keyring".into());
    }
    if std::env::var(TokenKind::Access.env_var()).is_ok_and(|t| !t.is_empty()) {
        return Some("env".into());
    }
    if load_file(TokenKind::Access).is_some() {
        return Some("file".into());
    }
    None
}

// --- Private file helpers ---

fn credentials_dir() -> Result<PathBuf, AuthError> {
    if let Ok(dir) = std::env::var("SKYLARK_CREDENTIALS_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::home_dir().map(|h| h.join(".skylark")).ok_or_else(|| {
        AuthError::TokenStore("home directory not found — cannot store credentials".into())
    })
}

fn store_file(kind: TokenKind, value: &str) -> Result<(), AuthError> {
    store_file_in(&credentials_dir()?, kind, value)
}

fn store_file_in(dir: &Path, kind: TokenKind, value: &str) -> Result<(), AuthError> {
    fs::create_dir_all(dir)
        .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", dir.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {e}", dir.display());
        }
    }

    let path = dir.join(kind.file_name());
    fs::write(&path, value)
        .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file(kind: TokenKind) -> Option<String> {
    let dir = credentials_dir().ok()?;
    load_file_in(&dir, kind)
}

fn load_file_in(dir: &Path, kind: TokenKind) -> Option<String> {
    fs::read_to_string(dir.join(kind.file_name()))
        .ok()
        .filter(|s| !s.trim().is_empty())
}

fn delete_file_at(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");

        store_file_in(tmp.path(), TokenKind::Access, "access_abc").expect("store access");
        store_file_in(tmp.path(), TokenKind::Refresh, "refresh_xyz").expect("store refresh");

        assert_eq!(
            load_file_in(tmp.path(), TokenKind::Access).as_deref(),
            Some("access_abc")
        );
        assert_eq!(
            load_file_in(tmp.path(), TokenKind::Refresh).as_deref(),
            Some("refresh_xyz")
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(tmp.path().join("access_token"))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials files should be 0600");
        }

        delete_file_at(&tmp.path().join(TokenKind::Access.file_name())).expect("delete access");
        delete_file_at(&tmp.path().join(TokenKind::Refresh.file_name())).expect("delete refresh");
        assert_eq!(load_file_in(tmp.path(), TokenKind::Access), None);
        assert_eq!(load_file_in(tmp.path(), TokenKind::Refresh), None);
    }

    #[test]
    fn delete_missing_file_is_a_no_op() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        delete_file_at(&tmp.path().join("access_token")).expect("delete should succeed");
    }

    #[test]
    fn load_file_ignores_empty_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join("access_token"), "   \n  ").expect("write");
        assert_eq!(load_file_in(tmp.path(), TokenKind::Access), None);
    }

    #[test]
    fn slots_use_distinct_fixed_names() {
        assert_eq!(TokenKind::Access.file_name(), "access_token");
        assert_eq!(TokenKind::Refresh.file_name(), "refresh_token");
        assert!(TokenKind::Access.keyring_user() != TokenKind::Refresh.keyring_user());
    }
}
