//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register-user", post(handlers::register_user::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::{Credential, User};
    use crate::domain::value_object::{email::Email, user_password::UserPassword};
    use crate::error::{AuthError, AuthResult};
    use crate::infra::memory::InMemoryUserRepository;
    use kernel::id::UserId;
    use crate::presentation::middleware::{AuthMiddlewareState, CurrentUser, require_auth};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use axum::routing::get;
    use axum::{Json, middleware};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn config() -> AuthConfig {
        AuthConfig::new("router-test-secret").unwrap().with_cookie_secure(false)
    }

    /// Auth routes plus one protected route echoing the current user
    fn app(repo: InMemoryUserRepository) -> Router {
        let auth = AuthMiddlewareState::new(repo.clone(), config());

        let protected = Router::new()
            .route(
                "/me",
                get(|CurrentUser(user): CurrentUser| async move {
                    Json(json!({ "email": user.email.as_str() }))
                }),
            )
            .route_layer(middleware::from_fn_with_state(
                auth,
                require_auth::<InMemoryUserRepository>,
            ));

        auth_router_generic(repo, config()).merge(protected)
    }

    fn register(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/register-user")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn me(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn session_cookie(response: &Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_login_and_wrong_password() {
        let app = app(InMemoryUserRepository::new());
        let body = json!({ "name": "Al", "email": "A@x.com", "password": "secret1" });

        let response = app.clone().oneshot(register(body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("jwt="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Strict"));
        assert!(set_cookie.contains("Max-Age=604800"));
        assert!(!set_cookie.contains("Secure"));

        let json = json_body(response).await;
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["name"], "al");
        assert_eq!(json["role"], "customer");
        assert_eq!(json["message"], "User registered successfully.");
        assert!(json["_id"].is_string());
        assert!(json.get("password").is_none());

        let response = app.clone().oneshot(register(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["message"], "User already exists. Logged in successfully.");
        assert!(json.get("password").is_none());

        let wrong = json!({ "name": "Al", "email": "a@x.com", "password": "wrong1" });
        let response = app.oneshot(register(wrong)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["message"],
            "Invalid credentials. Incorrect password."
        );
    }

    #[tokio::test]
    async fn test_register_validation() {
        let app = app(InMemoryUserRepository::new());

        let cases = [
            (
                json!({ "email": "a@x.com", "password": "secret1" }),
                "All fields are required!",
            ),
            (
                json!({ "name": "", "email": "a@x.com", "password": "secret1" }),
                "All fields are required!",
            ),
            (
                json!({ "name": "Al", "email": "a@x.com", "password": "12345" }),
                "Password must contain at least 6 characters!",
            ),
            (
                json!({ "name": "Al", "email": "a@x.com", "password": "secret1", "role": "root" }),
                "Invalid role",
            ),
        ];

        for (body, message) in cases {
            let response = app.clone().oneshot(register(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(json_body(response).await["message"], message);
        }

        // Wrong JSON type is still a 400 with a message body
        let response = app
            .clone()
            .oneshot(register(json!({ "name": "Al", "email": "a@x.com", "password": 123456 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["message"].is_string());

        // No body at all
        let request = Request::builder()
            .method("POST")
            .uri("/register-user")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "All fields are required!");
    }

    #[tokio::test]
    async fn test_admin_registration() {
        let app = app(InMemoryUserRepository::new());
        let body = json!({ "name": "Root", "email": "root@x.com", "password": "secret1", "role": "admin" });

        let response = app.oneshot(register(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await["role"], "admin");
    }

    #[tokio::test]
    async fn test_protected_route() {
        let repo = InMemoryUserRepository::new();
        let app = app(repo.clone());

        let response = app.clone().oneshot(me(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await["message"],
            "Unauthorized - No token provided"
        );

        let response = app.clone().oneshot(me(Some("jwt="))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.clone().oneshot(me(Some("jwt=forged.123.abc"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await["message"],
            "Unauthorized - Invalid token provided"
        );

        let body = json!({ "name": "Al", "email": "a@x.com", "password": "secret1" });
        let response = app.clone().oneshot(register(body)).await.unwrap();
        let cookie = session_cookie(&response);
        let user_id = json_body(response).await["_id"].as_str().unwrap().to_string();

        let response = app.clone().oneshot(me(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["email"], "a@x.com");

        repo.remove(&UserId::parse(&user_id).unwrap()).await;
        let response = app.oneshot(me(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["message"], "User not found");
    }

    /// Lookup never sees the existing row, as when another request inserts
    /// the same email between lookup and insert
    #[derive(Clone)]
    struct LostRaceRepository(InMemoryUserRepository);

    impl UserRepository for LostRaceRepository {
        async fn create(&self, user: &User, password: &UserPassword) -> AuthResult<()> {
            self.0.create(user, password).await
        }

        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            self.0.find_by_id(user_id).await
        }

        async fn find_credential_by_email(&self, _email: &Email) -> AuthResult<Option<Credential>> {
            Ok(None)
        }
    }

    /// Store that is reachable for writes but fails every id lookup
    #[derive(Clone)]
    struct BrokenLookupRepository(InMemoryUserRepository);

    impl UserRepository for BrokenLookupRepository {
        async fn create(&self, user: &User, password: &UserPassword) -> AuthResult<()> {
            self.0.create(user, password).await
        }

        async fn find_by_id(&self, _user_id: &UserId) -> AuthResult<Option<User>> {
            Err(AuthError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find_credential_by_email(&self, email: &Email) -> AuthResult<Option<Credential>> {
            self.0.find_credential_by_email(email).await
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_race_is_internal_error() {
        let repo = InMemoryUserRepository::new();
        let body = json!({ "name": "Al", "email": "a@x.com", "password": "secret1" });

        let response = app(repo.clone()).oneshot(register(body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let racing = auth_router_generic(LostRaceRepository(repo), config());
        let response = racing.oneshot(register(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(
            json_body(response).await,
            json!({ "message": "Internal server error!" })
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_in_middleware_is_internal_error() {
        let repo = InMemoryUserRepository::new();
        let body = json!({ "name": "Al", "email": "a@x.com", "password": "secret1" });
        let response = app(repo.clone()).oneshot(register(body)).await.unwrap();
        let cookie = session_cookie(&response);

        let broken = BrokenLookupRepository(repo);
        let protected = Router::new()
            .route("/me", get(|CurrentUser(_): CurrentUser| async { "unreachable" }))
            .route_layer(middleware::from_fn_with_state(
                AuthMiddlewareState::new(broken, config()),
                require_auth::<BrokenLookupRepository>,
            ));

        let response = protected.oneshot(me(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "message": "Internal server error!" })
        );
    }
}
