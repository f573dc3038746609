//! Session lifecycle.
//!
//! A [`Session`] is an explicitly scoped value owned by the CLI's app
//! context, not a module-level singleton. It holds the identity decoded
//! from the persisted access token, plus a `ready` flag the gates consult.

use sky_core::Identity;

use crate::claims;
use crate::error::AuthError;
use crate::token_store::{self, TokenKind};

/// Current session state: the decoded identity (if any) and whether
/// initialization has completed.
#[derive(Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
    ready: bool,
}

impl Session {
    /// A session that has not been initialized yet. Gates evaluate to
    /// pending against it.
    #[must_use]
    pub fn unready() -> Self {
        Self::default()
    }

    /// Restore the session from persisted state.
    ///
    /// Reads the stored access token; on decode success the identity is
    /// set, on decode failure both persisted tokens are purged and the
    /// identity stays unset. Either way the session ends up ready.
    #[must_use]
    pub fn initialize() -> Self {
        let mut session = Self::unready();
        if let Some(token) = token_store::load(TokenKind::Access) {
            if let Err(error) = session.apply(&token) {
                tracing::warn!(%error, "stored session token failed to decode; clearing session");
                if let Err(error) = token_store::delete_all() {
                    tracing::warn!(%error, "failed to purge stored tokens");
                }
            }
        }
        session.ready = true;
        session
    }

    /// Persist a freshly issued token pair and adopt the decoded identity.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and decode failures to the caller; on a
    /// decode failure the tokens have already been persisted, matching the
    /// persist-then-decode order of the session contract.
    pub fn set_from_token(
        &mut self,
        token: &str,
        refresh_token: Option<&str>,
    ) -> Result<Identity, AuthError> {
        token_store::store(TokenKind::Access, token)?;
        if let Some(refresh) = refresh_token {
            token_store::store(TokenKind::Refresh, refresh)?;
        }
        self.apply(token)
    }

    /// Drop the identity and purge both persisted tokens.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a credentials file cannot be removed; the
    /// in-memory identity is cleared regardless.
    pub fn clear(&mut self) -> Result<(), AuthError> {
        self.identity = None;
        token_store::delete_all()
    }

    /// A ready session with no identity, as initialize() leaves it when no
    /// token is stored.
    #[cfg(test)]
    pub(crate) fn ready_anonymous() -> Self {
        Self {
            identity: None,
            ready: true,
        }
    }

    /// Decode a token and adopt its identity without touching storage.
    pub(crate) fn apply(&mut self, token: &str) -> Result<Identity, AuthError> {
        let identity = claims::decode_identity(token)?;
        self.identity = Some(identity.clone());
        self.ready = true;
        Ok(identity)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(Identity::is_admin)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sky_core::enums::Role;

    use super::*;
    use crate::claims::make_token;

    #[test]
    fn unready_session_has_no_identity() {
        let session = Session::unready();
        assert!(!session.is_ready());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn apply_adopts_decoded_identity_and_marks_ready() {
        let mut session = Session::unready();
        let identity = session
            .apply(&make_token(r#"{"sub": "ada@example.com", "role": "USER"}"#))
            .expect("token should decode");

        assert!(session.is_ready());
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(session.identity().map(|i| i.role), Some(Role::User));
    }

    #[test]
    fn apply_rejects_malformed_token_and_leaves_identity_unset() {
        let mut session = Session::unready();
        let error = session.apply("not-a-token").expect_err("should fail");
        assert!(matches!(error, AuthError::MalformedToken(_)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn admin_token_grants_admin_session() {
        let mut session = Session::unready();
        session
            .apply(&make_token(r#"{"sub": "root@example.com", "role": "ADMIN"}"#))
            .expect("token should decode");
        assert!(session.is_admin());
    }
}
