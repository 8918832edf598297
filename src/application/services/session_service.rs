//! Signed session cookie issuance and verification.

use axum::http::{HeaderMap, header::COOKIE};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Service that signs and verifies the client-held session token.
///
/// The server keeps no session store. A token is
/// `base64url(username).hex(mac)` where the MAC is HMAC-SHA256 over the
/// base64 payload, keyed by the signing secret. Possession of a validly
/// signed cookie IS the authenticated state; changing the secret
/// invalidates every outstanding session.
pub struct SessionService {
    signing_secret: String,
}

impl SessionService {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key; must match across requests for
    ///   sessions to survive, and across restarts for sessions to outlive
    ///   the process
    pub fn new(signing_secret: String) -> Self {
        Self { signing_secret }
    }

    fn mac(&self, payload: &[u8]) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload);
        mac
    }

    /// Issues a signed session token for the given username.
    pub fn issue(&self, username: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(username.as_bytes());
        let tag = hex::encode(self.mac(payload.as_bytes()).finalize().into_bytes());
        format!("{payload}.{tag}")
    }

    /// Verifies a session token and returns the embedded username.
    ///
    /// Returns `None` for any malformed, truncated, or re-signed token.
    /// MAC comparison is constant-time via [`Mac::verify_slice`].
    pub fn verify(&self, token: &str) -> Option<String> {
        let (payload, tag) = token.rsplit_once('.')?;
        let tag = hex::decode(tag).ok()?;
        self.mac(payload.as_bytes()).verify_slice(&tag).ok()?;

        let username = URL_SAFE_NO_PAD.decode(payload).ok()?;
        String::from_utf8(username).ok()
    }

    /// Extracts and verifies the session cookie from request headers.
    ///
    /// Handles multiple cookies in the `Cookie` header by splitting on
    /// semicolons and picking the `session` key; anything that fails
    /// verification reads as anonymous.
    pub fn authenticated_user(&self, headers: &HeaderMap) -> Option<String> {
        let token = headers
            .get(COOKIE)
            .and_then(|cookie_header| cookie_header.to_str().ok())
            .and_then(|cookie_str| {
                cookie_str.split(';').find_map(|cookie| {
                    let mut parts = cookie.trim().splitn(2, '=');
                    match (parts.next(), parts.next()) {
                        (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                        _ => None,
                    }
                })
            })?;

        self.verify(&token)
    }

    /// `Set-Cookie` value that marks the client as authenticated.
    pub fn login_cookie(&self, username: &str) -> String {
        format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.issue(username)
        )
    }

    /// `Set-Cookie` value that clears the session on the client.
    pub fn logout_cookie(&self) -> String {
        format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}
