//! Best-effort decoding of bearer-token claims.
//!
//! The payload is read without verifying the signature. Claims drive UI
//! affordances only (show/hide admin controls); anything that selects which
//! data set is fetched must use the server-reported role instead.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use cinerent_api_models::Role;
use serde::Deserialize;

/// Untrusted claims carried in a token payload.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ClaimSet {
    /// Subject (the account email for this API).
    #[serde(default)]
    pub sub: Option<String>,
    /// Single role claim, e.g. `"ADMIN"`.
    #[serde(default)]
    pub role: Option<String>,
    /// Role list claim used by some issuers.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl ClaimSet {
    /// Whether the claims name the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        let admin = Role::Admin.as_str();
        self.role.as_deref() == Some(admin) || self.roles.iter().any(|role| role == admin)
    }

    /// Role implied by the claims.
    #[must_use]
    pub fn role(&self) -> Role {
        if self.is_admin() {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// Decode the payload segment of a three-part token.
///
/// Returns `None` for any structural, encoding, or parse failure.
#[must_use]
pub fn decode(token: &str) -> Option<ClaimSet> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };
    let payload = payload.trim_end_matches('=');
    if payload.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Role for UI affordances: administrator only when the claims say so.
#[must_use]
pub fn affordance_role(claims: Option<&ClaimSet>) -> Role {
    claims.map_or(Role::User, ClaimSet::role)
}

#[cfg(test)]
pub(crate) fn encode_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_role_claim() {
        let token = encode_token(r#"{"sub":"a@b.com","role":"ADMIN","exp":1700000000}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
        assert!(claims.is_admin());
        assert_eq!(claims.exp, Some(1_700_000_000));
    }

    #[test]
    fn roles_list_grants_admin() {
        let token = encode_token(r#"{"roles":["USER","ADMIN"]}"#);
        assert_eq!(decode(&token).unwrap().role(), Role::Admin);
    }

    #[test]
    fn user_role_is_not_admin() {
        let token = encode_token(r#"{"role":"USER"}"#);
        assert_eq!(affordance_role(decode(&token).as_ref()), Role::User);
    }

    #[test]
    fn accepts_padded_standard_alphabet() {
        let body = STANDARD_NO_PAD.encode(br#"{"role":"ADMIN","n":"??>"}"#);
        let token = format!("h.{body}==.s");
        assert!(decode(&token).unwrap().is_admin());
    }

    #[test]
    fn malformed_tokens_yield_none() {
        let valid_body = URL_SAFE_NO_PAD.encode(br#"{"role":"ADMIN"}"#);
        let not_json = URL_SAFE_NO_PAD.encode(b"not json");
        let array = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        let cases = [
            String::new(),
            "opaque".to_string(),
            format!("h.{valid_body}"),
            format!("h.{valid_body}.s.extra"),
            "h..s".to_string(),
            "h.!!!.s".to_string(),
            format!("h.{not_json}.s"),
            format!("h.{array}.s"),
        ];
        for token in cases {
            assert_eq!(decode(&token), None, "token {token:?} should not decode");
        }
    }

    #[test]
    fn missing_claims_default_to_user() {
        assert_eq!(affordance_role(None), Role::User);
    }
}
