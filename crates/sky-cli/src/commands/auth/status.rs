use serde::Serialize;
use sky_auth::token_store::{self, TokenKind};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    name: Option<String>,
    role: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match ctx.session.identity() {
        Some(identity) => {
            // Expiry is informational only; an expired token is still
            // presented until the service rejects it.
            let expires_at = token_store::load(TokenKind::Access)
                .and_then(|token| sky_auth::claims::decode_expiry(&token).ok())
                .map(|at| at.to_rfc3339());

            AuthStatusResponse {
                authenticated: true,
                email: Some(identity.email.clone()),
                name: Some(identity.name.clone()),
                role: Some(identity.role.to_string()),
                expires_at,
                token_source: token_store::detect_token_source(),
                note: None,
            }
        }
        None => AuthStatusResponse {
            authenticated: false,
            email: None,
            name: None,
            role: None,
            expires_at: None,
            token_source: None,
            note: Some("no session — run `sky auth login`".into()),
        },
    };

    output(&status, flags.format)
}
