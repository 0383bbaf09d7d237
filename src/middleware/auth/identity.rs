//! Identity-attachment stage: bearer token → AuthCtx in request extensions.
//!
//! Runs once per inbound request, before any handler. This stage never
//! rejects: a missing header, a non-Bearer scheme, an invalid token, or a
//! failed subject extraction all leave the request anonymous and let it
//! proceed. Rejection decisions belong to the authorization checks further
//! down the pipeline.
//!
//! The attached principal carries an empty role set. Admin authorization
//! re-verifies the raw header on its own, so nothing here grants elevation.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::services::auth::{AuthService, bearer_token};
use crate::state::AppState;

/// `/api/v1/*` に identity attachment を掛けるための middleware を適用する。
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, identity_middleware))
}

async fn identity_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    attach_identity(&state.auth, &mut req);
    next.run(req).await
}

/// Attach the verified subject as the request principal.
///
/// Mutates only this request's extensions. Idempotent: when a principal is
/// already attached, a second pass is a no-op.
fn attach_identity(auth: &AuthService, req: &mut Request<Body>) {
    let Some(token) = bearer_token(req.headers()) else {
        return;
    };

    if !auth.validate(token) {
        tracing::debug!("discarding invalid bearer token");
        return;
    }

    let Some(subject) = auth.extract_subject(token) else {
        return;
    };

    if req.extensions().get::<AuthCtx>().is_none() {
        req.extensions_mut().insert(AuthCtx::new(subject));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};

    const SECRET: &str = "test-secret-0123456789-0123456789-ok";
    const ISSUER: &str = "https://auth.test";
    const AUDIENCE: &str = "rideshare-api";

    fn service() -> AuthService {
        AuthService::new(SECRET, ISSUER, AUDIENCE, 0)
    }

    fn mint(sub: &str) -> String {
        let claims = serde_json::json!({
            "iss": ISSUER,
            "aud": AUDIENCE,
            "sub": sub,
            "exp": (chrono::Utc::now().timestamp() + 600) as u64,
        });
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encode test token")
    }

    fn request_with_auth(value: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/v1/me")
            .header("authorization", value)
            .body(Body::empty())
            .expect("build test request")
    }

    #[test]
    fn test_attaches_principal_for_valid_token() {
        let auth = service();
        let mut req = request_with_auth(&format!("Bearer {}", mint("rider@example.com")));

        attach_identity(&auth, &mut req);

        let ctx = req.extensions().get::<AuthCtx>().expect("principal");
        assert_eq!(ctx.subject, "rider@example.com");
        assert!(ctx.roles.is_empty());
    }

    #[test]
    fn test_second_pass_is_a_noop() {
        let auth = service();
        let mut req = request_with_auth(&format!("Bearer {}", mint("rider@example.com")));

        attach_identity(&auth, &mut req);
        attach_identity(&auth, &mut req);

        assert_eq!(
            req.extensions().get::<AuthCtx>().expect("principal").subject,
            "rider@example.com"
        );
    }

    #[test]
    fn test_existing_principal_is_preserved() {
        let auth = service();
        let mut req = request_with_auth(&format!("Bearer {}", mint("rider@example.com")));
        req.extensions_mut().insert(AuthCtx::new("already@example.com"));

        attach_identity(&auth, &mut req);

        assert_eq!(
            req.extensions().get::<AuthCtx>().expect("principal").subject,
            "already@example.com"
        );
    }

    #[test]
    fn test_anonymous_paths_attach_nothing() {
        let auth = service();

        let mut no_header = Request::builder()
            .uri("/api/v1/me")
            .body(Body::empty())
            .expect("build test request");
        attach_identity(&auth, &mut no_header);
        assert!(no_header.extensions().get::<AuthCtx>().is_none());

        let mut wrong_scheme = request_with_auth("Basic abc");
        attach_identity(&auth, &mut wrong_scheme);
        assert!(wrong_scheme.extensions().get::<AuthCtx>().is_none());

        let mut invalid_token = request_with_auth("Bearer not-a-jwt");
        attach_identity(&auth, &mut invalid_token);
        assert!(invalid_token.extensions().get::<AuthCtx>().is_none());
    }
}
