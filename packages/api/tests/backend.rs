//! Runs the real `ApiClient` against an in-process axum stand-in for the backend.

use std::collections::HashMap;

use api::models::{MarketPriceEntry, UserUpdate};
use api::{ApiClient, ApiError, SessionManager, SignupOutcome, SignupRequest};
use axum::extract::{Multipart, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{KeyValueStore, MemoryStore, Role, Session, SessionStore, User};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn farmer_json() -> Value {
    json!({"id": 7, "name": "Farah", "email": "farah@example.com", "role": "user",
           "phone": null, "location": "Multan", "farm_size": "12 acres",
           "status": "active", "created_at": "2025-01-02T10:00:00", "last_login": null})
}

fn admin_json() -> Value {
    json!({"id": 1, "name": "Root", "email": "admin@example.com", "role": "admin"})
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("farah@example.com"), Some("secret")) => (
            StatusCode::OK,
            Json(json!({"token": "farmer-token", "user": farmer_json()})),
        ),
        (Some("admin@example.com"), Some("secret")) => (
            StatusCode::OK,
            Json(json!({"token": "admin-token", "user": admin_json()})),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid credentials"})),
        ),
    }
}

async fn verify(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers) {
        Some("farmer-token") => (
            StatusCode::OK,
            Json(json!({"valid": true, "user": farmer_json()})),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Token is invalid!"})),
        ),
    }
}

async fn signup(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Email already exists"})),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({"message": "User created successfully",
                    "user": {"id": 9, "name": body["name"], "email": body["email"], "role": "user"}})),
    )
}

fn auth_app() -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify", get(verify))
        .route("/api/auth/signup", post(signup))
}

fn manager(base: &str) -> SessionManager<MemoryStore> {
    SessionManager::new(ApiClient::new(base), SessionStore::new(MemoryStore::new()))
}

#[tokio::test]
async fn login_stores_token_and_user() {
    let base = serve(auth_app()).await;
    let manager = manager(&base);

    let session = manager.login("farah@example.com", "secret").await.unwrap();
    assert_eq!(session.token, "farmer-token");
    assert_eq!(manager.store().token().as_deref(), Some("farmer-token"));
    assert_eq!(manager.current().unwrap().user.email, "farah@example.com");
    assert_eq!(manager.authorized_client().token(), Some("farmer-token"));
}

#[tokio::test]
async fn failed_login_leaves_state_unchanged() {
    let base = serve(auth_app()).await;
    let manager = manager(&base);
    manager.login("farah@example.com", "secret").await.unwrap();

    let err = manager.login("farah@example.com", "wrong").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(manager.store().token().as_deref(), Some("farmer-token"));
}

#[tokio::test]
async fn invalid_token_logs_out_on_restore() {
    let base = serve(auth_app()).await;
    let manager = manager(&base);
    manager
        .store()
        .save_session(&Session {
            user: User {
                id: "7".into(),
                name: "Farah".into(),
                email: "farah@example.com".into(),
                ..Default::default()
            },
            token: "expired-token".into(),
        })
        .unwrap();

    assert!(manager.restore().await.is_none());
    assert!(manager.current().is_none());
    assert!(manager.store().inner().get("user").is_none());
}

#[tokio::test]
async fn valid_token_refreshes_user_on_restore() {
    let base = serve(auth_app()).await;
    let manager = manager(&base);
    manager.store().inner().set("token", "farmer-token").unwrap();

    let session = manager.restore().await.unwrap();
    assert_eq!(session.user.location.as_deref(), Some("Multan"));
    assert_eq!(manager.current(), Some(session));
}

#[tokio::test]
async fn admin_console_rejects_farmers() {
    let base = serve(auth_app()).await;
    let manager = manager(&base);

    let err = manager
        .login_admin("farah@example.com", "secret")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid admin credentials. Please try again.");
    assert!(manager.current().is_none());

    let session = manager.login_admin("admin@example.com", "secret").await.unwrap();
    assert_eq!(session.user.role, Role::Admin);
}

#[tokio::test]
async fn signup_without_token_asks_to_log_in() {
    let base = serve(auth_app()).await;
    let manager = manager(&base);

    let outcome = manager
        .signup(SignupRequest {
            name: "Bilal".into(),
            email: "bilal@example.com".into(),
            password: "pw".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        outcome,
        SignupOutcome::Created {
            message: "User created successfully".into()
        }
    );
    assert!(manager.current().is_none());

    let err = manager
        .signup(SignupRequest {
            name: "Dup".into(),
            email: "taken@example.com".into(),
            password: "pw".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message(), "Email already exists");
}

async fn list_users() -> Json<Value> {
    Json(json!([farmer_json(), admin_json()]))
}

async fn search_users(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let q = params.get("q").map(String::as_str).unwrap_or_default();
    if "farah@example.com".contains(q) {
        // The backend's exact-match search answers with a single object.
        (StatusCode::OK, Json(farmer_json()))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"message": "User not found"})))
    }
}

async fn update_user(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    let mut user = farmer_json();
    user["id"] = json!(id.parse::<i64>().unwrap_or(0));
    if let Some(status) = body.get("status") {
        user["status"] = status.clone();
    }
    Json(user)
}

#[tokio::test]
async fn user_search_shapes() {
    let base = serve(
        Router::new()
            .route("/api/users/", get(list_users))
            .route("/api/users/search", get(search_users))
            .route("/api/users/{id}", put(update_user)),
    )
    .await;
    let client = ApiClient::new(base).with_token(Some("admin-token".into()));

    // Blank query reloads the unfiltered list.
    assert_eq!(client.search_users("   ").await.unwrap().len(), 2);

    let found = client.search_users("farah").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "7");

    assert!(client.search_users("nobody").await.unwrap().is_empty());

    let updated = client
        .update_user("7", &UserUpdate::status("inactive"))
        .await
        .unwrap();
    assert_eq!(updated.status.as_deref(), Some("inactive"));
}

fn prices_json() -> Value {
    json!([
        {"crop": "Wheat", "price": 3900, "change": 1.0, "trend": "up"},
        {"crop": "Rice", "price": "5200", "change": "+9%", "trend": "up"},
        {"crop": "Cotton", "price": 8100, "change": 2.0, "trend": "up"},
        {"crop": "Maize", "price": 2600, "change": 5.0, "trend": "up"}
    ])
}

async fn search_market(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    match params.get("q").map(String::as_str) {
        Some("rice") => (StatusCode::OK, Json(prices_json()[1].clone())),
        Some("a") => (StatusCode::OK, Json(json!([prices_json()[1], prices_json()[3]]))),
        _ => (StatusCode::NOT_FOUND, Json(json!({"message": "No crops found"}))),
    }
}

#[tokio::test]
async fn market_search_shapes() {
    let base = serve(
        Router::new()
            .route("/api/market/prices", get(|| async { Json(prices_json()) }))
            .route("/api/market/search", get(search_market)),
    )
    .await;
    let client = ApiClient::new(base);

    let all = client.search_market("  ").await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[1].price, 5200.0);

    let one = client.search_market("rice").await.unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].crop, "Rice");

    let many: Vec<String> = client
        .search_market("a")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.crop)
        .collect();
    assert_eq!(many, vec!["Rice", "Maize"]);

    assert!(client.search_market("barley").await.unwrap().is_empty());
}

#[tokio::test]
async fn top_gainers_falls_back() {
    let fallback: Vec<MarketPriceEntry> = serde_json::from_value(prices_json()).unwrap();

    let base = serve(Router::new().route("/api/market/top-gainers", get(|| async { Json(json!([])) })))
        .await;
    let crops = |list: Vec<MarketPriceEntry>| list.into_iter().map(|p| p.crop).collect::<Vec<_>>();

    let empty_answer = ApiClient::new(base).top_gainers(3, &fallback).await;
    assert_eq!(crops(empty_answer), vec!["Wheat", "Rice", "Cotton"]);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let unreachable = ApiClient::new(format!("http://{addr}")).top_gainers(3, &fallback).await;
    assert_eq!(crops(unreachable), vec!["Wheat", "Rice", "Cotton"]);

    let base = serve(Router::new().route(
        "/api/market/top-gainers",
        get(|| async { Json(json!([prices_json()[1], prices_json()[3], prices_json()[2], prices_json()[0]])) }),
    ))
    .await;
    let ranked = ApiClient::new(base).top_gainers(2, &fallback).await;
    assert_eq!(crops(ranked), vec!["Rice", "Maize"]);
}

#[tokio::test]
async fn weather_failure_is_an_error_not_a_panic() {
    let base = serve(Router::new().route(
        "/api/weather/all",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "provider down"}))) }),
    ))
    .await;
    let err = ApiClient::new(base).weather_all("Islamabad").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Error 500");

    let base = serve(Router::new().route(
        "/api/weather/all",
        get(|| async { (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>") }),
    ))
    .await;
    let err = ApiClient::new(base).weather_all("Islamabad").await.unwrap_err();
    assert_eq!(err.user_message(), "API Error");
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let base = serve(Router::new().route(
        "/api/notifications/",
        get(|headers: HeaderMap| async move {
            match bearer(&headers) {
                Some("farmer-token") => (
                    StatusCode::OK,
                    Json(json!([{"id": 1, "title": "Frost", "message": "Cover seedlings",
                                 "type": "warning", "is_read": false}])),
                ),
                _ => (StatusCode::UNAUTHORIZED, Json(json!({"message": "Token is missing!"}))),
            }
        }),
    ))
    .await;

    let anonymous = ApiClient::new(base.clone());
    assert!(anonymous.notifications().await.unwrap_err().is_unauthorized());

    let client = anonymous.with_token(Some("farmer-token".into()));
    let items = client.notifications().await.unwrap();
    assert_eq!(api::models::unread_count(&items), 1);
}

#[tokio::test]
async fn pest_image_is_sent_as_multipart() {
    let base = serve(Router::new().route(
        "/api/detect/pest",
        post(|mut multipart: Multipart| async move {
            let mut size = 0;
            while let Some(field) = multipart.next_field().await.unwrap() {
                if field.name() == Some("image") {
                    size = field.bytes().await.unwrap().len();
                }
            }
            Json(json!({"detected": size > 0, "pest_name": "Aphids", "confidence": 87.0,
                        "severity": "Medium", "recommendations": ["Neem oil"],
                        "preventiveMeasures": ["Sticky traps"]}))
        }),
    ))
    .await;
    let client = ApiClient::new(base);

    let result = client
        .detect_pest("leaf.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0])
        .await
        .unwrap();
    assert!(result.detected);
    assert_eq!(result.pest_name, "Aphids");

    assert!(matches!(
        client.detect_pest("empty.jpg", Vec::new()).await,
        Err(ApiError::Invalid(_))
    ));
}

#[tokio::test]
async fn dashboard_overview_degrades_per_section() {
    let base = serve(
        Router::new()
            .route("/api/dashboard/stats", get(|| async { Json(json!({"farms": 2, "predictions": 3})) }))
            .route(
                "/api/dashboard/alerts",
                get(|| async {
                    Json(json!([{"id": "sys-1", "type": "info", "severity": "low",
                                 "title": "System Advisory", "message": "Stable", "timestamp": "Just Now"}]))
                }),
            )
            .route(
                "/api/dashboard/yield-trends",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
            )
            .route(
                "/api/market/prices",
                get(|| async { Json(json!([{"crop": "Wheat", "price": 2150, "change": "+5%", "trend": "up"}])) }),
            )
            .route(
                "/api/predict/history",
                get(|| async { Json(json!([{"id": 1, "prediction_type": "yield"}, {"id": 2, "prediction_type": "yield"}])) }),
            ),
    )
    .await;
    let client = ApiClient::new(base).with_token(Some("t".into()));

    let overview = client.dashboard_overview().await.unwrap();
    assert_eq!(overview.stats.farms, 2);
    assert_eq!(overview.alerts.len(), 1);
    assert!(overview.yield_trends.is_empty());
    // No route at all for predicted yields: 404 empties the section.
    assert!(overview.predicted_yields.is_empty());
    assert_eq!(overview.headline_price().unwrap().crop, "Wheat");
    assert_eq!(api::history_counts(&overview.history), vec![("Yield".to_string(), 2)]);
}

#[tokio::test]
async fn dashboard_overview_surfaces_unauthorized() {
    let base = serve(Router::new().route(
        "/api/dashboard/stats",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"message": "Token has expired!"}))) }),
    ))
    .await;
    let client = ApiClient::new(base).with_token(Some("old".into()));

    let err = client.dashboard_overview().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn dashboard_overview_fails_when_backend_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ApiClient::new(format!("http://{addr}")).with_token(Some("tok".into()));

    let err = client.dashboard_overview().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message(), "Network error. Please try again.");
}

#[tokio::test]
async fn logs_query_is_forwarded() {
    let base = serve(Router::new().route(
        "/api/admin/logs",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let all = vec!["INFO started", "ERROR db timeout", "WARNING slow request"];
            let logs: Vec<&str> = match params.get("q") {
                Some(q) => all.into_iter().filter(|l| l.contains(q.as_str())).collect(),
                None => all,
            };
            Json(json!({ "logs": logs }))
        }),
    ))
    .await;
    let client = ApiClient::new(base);

    assert_eq!(client.system_logs("").await.unwrap().len(), 3);
    assert_eq!(client.system_logs("ERROR").await.unwrap(), vec!["ERROR db timeout"]);
}
