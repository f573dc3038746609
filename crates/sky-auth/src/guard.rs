//! Command gates.
//!
//! Two polymorphic variants over the same capability: gate a navigation
//! target on session state. Evaluation is a three-state machine:
//!
//! ```text
//! pending → allowed            (ready, condition holds)
//!         → denied(fallback)   (ready, condition fails)
//! ```
//!
//! Denied and allowed are terminal per dispatch; every command dispatch
//! re-evaluates its gate against the current session.

use crate::session::Session;

/// Where a denied gate sends the user. The unauthenticated fallback is
/// distinct from the authenticated-but-not-admin one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Login,
    Dashboard,
}

/// The two gate variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Authenticated,
    Admin,
}

/// Outcome of evaluating a gate against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Pending,
    Allowed,
    Denied(Fallback),
}

impl Gate {
    /// Evaluate this gate against the current session state.
    #[must_use]
    pub fn evaluate(self, session: &Session) -> GateState {
        if !session.is_ready() {
            return GateState::Pending;
        }
        if !session.is_authenticated() {
            return GateState::Denied(Fallback::Login);
        }
        match self {
            Self::Authenticated => GateState::Allowed,
            Self::Admin if session.is_admin() => GateState::Allowed,
            Self::Admin => GateState::Denied(Fallback::Dashboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::claims::make_token;

    fn session_with(payload: &str) -> Session {
        let mut session = Session::unready();
        session.apply(&make_token(payload)).expect("token should decode");
        session
    }

    #[test]
    fn gates_are_pending_until_session_is_ready() {
        let session = Session::unready();
        assert_eq!(Gate::Authenticated.evaluate(&session), GateState::Pending);
        assert_eq!(Gate::Admin.evaluate(&session), GateState::Pending);
    }

    #[test]
    fn admin_gate_denies_user_role_toward_dashboard() {
        let session = session_with(r#"{"sub": "ada@example.com", "role": "USER"}"#);
        assert_eq!(
            Gate::Admin.evaluate(&session),
            GateState::Denied(Fallback::Dashboard)
        );
    }

    #[test]
    fn admin_gate_allows_admin_role() {
        let session = session_with(r#"{"sub": "root@example.com", "role": "ADMIN"}"#);
        assert_eq!(Gate::Admin.evaluate(&session), GateState::Allowed);
    }

    #[test]
    fn both_gates_deny_anonymous_toward_login() {
        let session = Session::ready_anonymous();
        assert_eq!(
            Gate::Authenticated.evaluate(&session),
            GateState::Denied(Fallback::Login)
        );
        assert_eq!(
            Gate::Admin.evaluate(&session),
            GateState::Denied(Fallback::Login)
        );
    }

    #[test]
    fn login_scenario_user_reaches_dashboard_but_not_admin() {
        // Token pair comes back from POST /auth/login with role USER.
        let session = session_with(r#"{"sub": "ada@example.com", "role": "USER", "id": 9}"#);
        assert!(session.is_authenticated());
        assert_eq!(Gate::Authenticated.evaluate(&session), GateState::Allowed);
        assert_eq!(
            Gate::Admin.evaluate(&session),
            GateState::Denied(Fallback::Dashboard)
        );
    }
}
