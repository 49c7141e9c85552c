//! Catalog Router

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;

use auth::{AuthMiddlewareState, PgUserRepository, UserRepository, require_auth};

use crate::domain::repository::ProductRepository;
use crate::infra::postgres::PgProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repositories
pub fn catalog_router(
    repo: PgProductRepository,
    auth: AuthMiddlewareState<PgUserRepository>,
) -> Router {
    catalog_router_generic(repo, auth)
}

/// Create a generic Catalog router for any repository implementation
///
/// Every route requires a session.
pub fn catalog_router_generic<R, U>(repo: R, auth: AuthMiddlewareState<U>) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/products", get(handlers::list_products::<R>))
        .route("/add-product", post(handlers::add_product::<R>))
        .route("/update-product/{id}", patch(handlers::update_product::<R>))
        .route("/delete-product/{id}", delete(handlers::delete_product::<R>))
        .route_layer(middleware::from_fn_with_state(auth, require_auth::<U>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryProductRepository;
    use auth::domain::value_object::{
        email::Email,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };
    use auth::{AuthConfig, InMemoryUserRepository, TokenIssuer, User, UserRole};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        admin_cookie: String,
        customer_cookie: String,
    }

    async fn seed_user(repo: &InMemoryUserRepository, email: &str, role: UserRole) -> User {
        let user = User::new(UserName::new("tester").unwrap(), Email::new(email).unwrap(), role);
        let hash = UserPassword::hash(RawPassword::new("secret1".to_string()).unwrap(), None)
            .await
            .unwrap();
        repo.create(&user, &hash).await.unwrap();
        user
    }

    async fn test_app() -> TestApp {
        let config = AuthConfig::new("catalog-test-secret").unwrap();
        let users = InMemoryUserRepository::new();
        let admin = seed_user(&users, "admin@x.com", UserRole::Admin).await;
        let customer = seed_user(&users, "customer@x.com", UserRole::Customer).await;

        let tokens = TokenIssuer::new(Arc::new(config.clone()));
        let cookie = |user: &User| format!("jwt={}", tokens.issue(&user.user_id).token);

        TestApp {
            admin_cookie: cookie(&admin),
            customer_cookie: cookie(&customer),
            router: catalog_router_generic(
                InMemoryProductRepository::new(),
                AuthMiddlewareState::new(users, config),
            ),
        }
    }

    fn request(method: &str, uri: &str, cookie: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, cookie);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_requires_session() {
        let app = test_app().await;
        let request = Request::builder().uri("/products").body(Body::empty()).unwrap();

        let response = app.router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await["message"],
            "Unauthorized - No token provided"
        );
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let app = test_app().await;
        let admin = app.admin_cookie.as_str();

        let response = app
            .router
            .clone()
            .oneshot(request(
                "POST",
                "/add-product",
                admin,
                Some(json!({ "name": "Tea", "price": 3.5, "category": "drinks" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["name"], "Tea");
        assert_eq!(created["stock"], 0);
        assert!(created["description"].is_null());
        assert!(created["createdAt"].is_string());
        let id = created["_id"].as_str().unwrap().to_string();

        let response = app
            .router
            .clone()
            .oneshot(request(
                "PATCH",
                &format!("/update-product/{id}"),
                admin,
                Some(json!({ "price": 4.0, "stock": 10 })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = json_body(response).await;
        assert_eq!(updated["price"], 4.0);
        assert_eq!(updated["stock"], 10);
        assert_eq!(updated["name"], "Tea");

        let response = app
            .router
            .clone()
            .oneshot(request("GET", "/products", &app.customer_cookie, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let list = json_body(response).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["_id"], id.as_str());

        let response = app
            .router
            .clone()
            .oneshot(request("DELETE", &format!("/delete-product/{id}"), admin, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["message"],
            "Product deleted successfully"
        );

        let response = app
            .router
            .oneshot(request("DELETE", &format!("/delete-product/{id}"), admin, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_non_admin_denied_regardless_of_payload() {
        let app = test_app().await;
        let customer = app.customer_cookie.as_str();

        let requests = [
            request("POST", "/add-product", customer, Some(json!({ "name": "Tea", "price": 1 }))),
            request("POST", "/add-product", customer, Some(json!({ "price": "free" }))),
            request("PATCH", "/update-product/not-a-uuid", customer, Some(json!({}))),
            request("DELETE", "/delete-product/not-a-uuid", customer, None),
        ];

        for req in requests {
            let response = app.router.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(json_body(response).await["message"], "Access denied!");
        }
    }

    #[tokio::test]
    async fn test_admin_validation() {
        let app = test_app().await;
        let admin = app.admin_cookie.as_str();

        let cases = [
            (
                request("POST", "/add-product", admin, Some(json!({ "name": "Tea" }))),
                "Name and price are required",
            ),
            (
                request("POST", "/add-product", admin, Some(json!({ "name": "", "price": 1 }))),
                "Name and price are required",
            ),
            (
                request("POST", "/add-product", admin, Some(json!({ "name": "Tea", "price": -1 }))),
                "Price must be a non-negative number",
            ),
            (
                request(
                    "POST",
                    "/add-product",
                    admin,
                    Some(json!({ "name": "Tea", "price": 1, "stock": -3 })),
                ),
                "Stock must be a non-negative integer",
            ),
            (
                request("PATCH", "/update-product/not-a-uuid", admin, Some(json!({}))),
                "Invalid product id",
            ),
            (
                request("DELETE", "/delete-product/42", admin, None),
                "Invalid product id",
            ),
        ];

        for (req, message) in cases {
            let response = app.router.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(json_body(response).await["message"], message);
        }

        let missing = kernel::id::ProductId::new();
        let response = app
            .router
            .oneshot(request(
                "PATCH",
                &format!("/update-product/{missing}"),
                admin,
                Some(json!({ "price": 2 })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_price_zero_allowed() {
        let app = test_app().await;
        let response = app
            .router
            .oneshot(request(
                "POST",
                "/add-product",
                &app.admin_cookie,
                Some(json!({ "name": "Sample", "price": 0 })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
