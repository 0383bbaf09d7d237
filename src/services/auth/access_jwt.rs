use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Extract the token part of `Authorization: Bearer <token>`.
///
/// The scheme match is exact ("Bearer " with a single space, case-sensitive).
/// Anything else is treated as an anonymous request, not an error.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Caller role carried in the `role` claim.
///
/// Closed set: comparing enum variants instead of raw strings keeps a typo'd
/// claim from ever reading as admin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    // Exact match only. "ADMIN"/"Admin" do not grant anything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// Access token (JWT) claims.
///
/// Produced only by successful verification; never built from an unverified
/// token. `sub` is the caller's email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub aud: String,

    pub sub: String,
    pub exp: u64,

    #[serde(default)]
    pub iat: Option<u64>,
    #[serde(default)]
    pub jti: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}

impl AccessTokenClaims {
    /// Role carried by this token. An absent or unknown `role` claim falls
    /// back to the unprivileged role.
    pub fn role(&self) -> Role {
        self.role
            .as_deref()
            .and_then(|r| r.parse().ok())
            .unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}

/// HS256 access-token verifier.
///
/// Pure and read-only: validity is a function of the token, the configured
/// secret, and the clock at call time. No storage lookups.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &str, issuer: &str, audience: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify and decode an access token.
    ///
    /// `jsonwebtoken::Validation` checks signature, `exp` (with leeway),
    /// `iss` and `aud`.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Total validity check: fails closed.
    ///
    /// Every decode/signature/expiry fault collapses to `false` here; nothing
    /// propagates past this boundary.
    pub fn validate(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }

    /// Best-effort subject extraction for the identity-attachment path.
    ///
    /// Returns `None` rather than an error on any failure, so that path can
    /// never fault the request pipeline. Only verified claims are read; there
    /// is no unverified-parse shortcut.
    pub fn extract_subject(&self, token: &str) -> Option<String> {
        self.verify(token).ok().map(|claims| claims.sub)
    }
}
