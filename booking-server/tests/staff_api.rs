//! Staff API 集成测试
//!
//! 通过完整的 axum router（含认证中间件）验证对外行为：
//! 状态码、响应信封和错误码。

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use booking_server::db::repository::staff::StaffCreate;
use booking_server::db::repository::{opening_hour, staff, store};
use booking_server::{Config, ServerState, api};
use shared::models::{Staff, Weekday};

const PASSWORD: &str = "correct-horse-battery";

async fn setup() -> (TempDir, ServerState, Router) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await;
    let app = api::build_app(&state).with_state(state.clone());
    (tmp, state, app)
}

/// Store with Monday 09:00-18:00 opening hours + one staff member
async fn seed(state: &ServerState) -> Staff {
    let store = store::create(&state.pool, "Downtown Salon", "12 Rose Street")
        .await
        .unwrap();
    opening_hour::upsert(
        &state.pool,
        store.id,
        Weekday::Monday,
        "09:00:00",
        "18:00:00",
    )
    .await
    .unwrap();

    staff::create(
        &state.pool,
        StaffCreate {
            store_id: store.id,
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            password: PASSWORD.to_string(),
        },
    )
    .await
    .unwrap()
}

fn token_for(state: &ServerState, staff: &Staff) -> String {
    state
        .get_jwt_service()
        .generate_token(staff)
        .expect("Failed to generate token")
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("Request failed");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response is not JSON")
    };
    (status, json)
}

fn tiny_png(color: [u8; 3]) -> String {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb(color));
    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
    base64::engine::general_purpose::STANDARD.encode(&buf)
}

#[tokio::test]
async fn login_returns_token_and_profile() {
    let (_tmp, state, app) = setup().await;
    seed(&state).await;

    let (status, body) = call(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "jane@example.com", "password": PASSWORD})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "E0000");
    let token = body["data"]["token"].as_str().expect("token in response");
    assert_eq!(body["data"]["staff"]["email"], "jane@example.com");

    // The issued token grants access to protected routes
    let (status, body) = call(&app, request("GET", "/api/staff/profile", Some(token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Jane");

    let (status, body) = call(&app, request("GET", "/api/auth/me", Some(token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "jane@example.com");
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let (_tmp, state, app) = setup().await;
    seed(&state).await;

    let (status, body) = call(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "jane@example.com", "password": "nope-nope"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let (_tmp, state, app) = setup().await;
    seed(&state).await;

    let (status, _) = call(&app, request("GET", "/api/staff/profile", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(
        &app,
        request("GET", "/api/staff/profile", Some("not-a-jwt"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_returns_expected_fields() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    let (status, body) = call(
        &app,
        request("GET", "/api/staff/profile", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["id"], jane.id);
    assert_eq!(data["email"], "jane@example.com");
    assert_eq!(data["name"], "Jane");
    assert_eq!(data["store_id"], jane.store_id);
    assert!(data.get("hash_pass").is_none(), "hash must never serialize");
}

#[tokio::test]
async fn profile_update_with_wrong_password_changes_nothing() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    let (status, _) = call(
        &app,
        request(
            "PUT",
            "/api/staff/profile",
            Some(&token),
            Some(json!({
                "name": "Janet",
                "current_password": "wrong-password",
                "new_password": "a-brand-new-password"
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let fresh = staff::find_by_id(&state.pool, jane.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fresh.name, "Jane");
    assert_eq!(fresh.hash_pass, jane.hash_pass, "hash must stay unchanged");
    assert!(fresh.verify_password(PASSWORD).unwrap());
}

#[tokio::test]
async fn profile_update_applies_fields_and_rotates_password() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    let (status, body) = call(
        &app,
        request(
            "PUT",
            "/api/staff/profile",
            Some(&token),
            Some(json!({
                "name": "Janet",
                "address": "1 New Street",
                "phone": "600123123",
                "current_password": PASSWORD,
                "new_password": "a-brand-new-password"
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Janet");
    assert_eq!(body["data"]["address"], "1 New Street");

    let fresh = staff::find_by_id(&state.pool, jane.id)
        .await
        .unwrap()
        .unwrap();
    assert!(fresh.verify_password("a-brand-new-password").unwrap());
    assert!(!fresh.verify_password(PASSWORD).unwrap());
    // Untouched field kept its value
    assert_eq!(fresh.email, "jane@example.com");
}

#[tokio::test]
async fn profile_image_is_stored_and_replaced() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    let (status, body) = call(
        &app,
        request(
            "PUT",
            "/api/staff/profile",
            Some(&token),
            Some(json!({
                "current_password": PASSWORD,
                "image": tiny_png([255, 0, 0])
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let first_image = body["data"]["image"].as_str().unwrap().to_string();
    assert!(first_image.starts_with("uploads/images/"));
    let first_path = state.image_storage().image_path(&first_image).unwrap();
    assert!(first_path.exists());

    // Replacing the image disposes of the old file
    let (status, body) = call(
        &app,
        request(
            "PUT",
            "/api/staff/profile",
            Some(&token),
            Some(json!({
                "current_password": PASSWORD,
                "image": tiny_png([0, 0, 255])
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let second_image = body["data"]["image"].as_str().unwrap().to_string();
    assert_ne!(second_image, first_image);
    assert!(
        state
            .image_storage()
            .image_path(&second_image)
            .unwrap()
            .exists()
    );
    assert!(!first_path.exists(), "replaced image must be disposed");
}

#[tokio::test]
async fn schedule_endpoints_follow_spec_status_codes() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    // Nothing submitted yet
    let (status, _) = call(
        &app,
        request("GET", "/api/staff/schedule", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Outside opening hours: 404 with the business-rule code
    let (status, body) = call(
        &app,
        request(
            "POST",
            "/api/staff/schedule",
            Some(&token),
            Some(json!({"schedules": [
                {"day": "monday", "start_time": "08:00:00", "end_time": "17:00:00"}
            ]})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0005");

    // Day without configured hours: 404 with the not-found code
    let (status, body) = call(
        &app,
        request(
            "POST",
            "/api/staff/schedule",
            Some(&token),
            Some(json!({"schedules": [
                {"day": "tuesday", "start_time": "09:00:00", "end_time": "17:00:00"}
            ]})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    // Valid submission: 201 with the saved entries
    let (status, body) = call(
        &app,
        request(
            "POST",
            "/api/staff/schedule",
            Some(&token),
            Some(json!({"schedules": [
                {"day": "monday", "start_time": "09:00:00", "end_time": "17:00:00"}
            ]})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"][0]["day"], "monday");
    assert_eq!(body["data"][0]["is_valid"], true);

    // Listing now succeeds, joined with the store
    let (status, body) = call(
        &app,
        request("GET", "/api/staff/schedule", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["store_name"], "Downtown Salon");
    assert_eq!(body["data"][0]["store_address"], "12 Rose Street");
    assert_eq!(body["data"][0]["error"], Value::Null);
}

#[tokio::test]
async fn empty_schedule_batch_is_a_validation_error() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    let (status, body) = call(
        &app,
        request(
            "POST",
            "/api/staff/schedule",
            Some(&token),
            Some(json!({"schedules": []})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn bookings_listing_includes_store_info() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    // No bookings yet
    let (status, _) = call(
        &app,
        request("GET", "/api/staff/bookings", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Bookings are written by the customer flow; seed one directly
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO booking (user_id, day, time, status, created_at, updated_at) \
         VALUES (?1, '2026-08-10', '10:30:00', 'confirmed', ?2, ?2)",
    )
    .bind(jane.id)
    .bind(now)
    .execute(&state.pool)
    .await
    .unwrap();

    let (status, body) = call(
        &app,
        request("GET", "/api/staff/bookings", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let item = &body["data"][0];
    assert_eq!(item["day"], "2026-08-10");
    assert_eq!(item["time"], "10:30:00");
    assert_eq!(item["status"], "confirmed");
    assert_eq!(item["store_name"], "Downtown Salon");
    assert_eq!(item["store_address"], "12 Rose Street");
}

#[tokio::test]
async fn store_hours_listing_and_missing_hours() {
    let (_tmp, state, app) = setup().await;
    let jane = seed(&state).await;
    let token = token_for(&state, &jane);

    let (status, body) = call(
        &app,
        request("GET", "/api/staff/store-hours", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["store_name"], "Downtown Salon");
    assert_eq!(body["data"]["data"][0]["day"], "monday");
    assert_eq!(body["data"]["data"][0]["opening_time"], "09:00:00");

    // A staff member of a store with no configured hours gets 404
    let bare_store = store::create(&state.pool, "Annex", "2 Side Street")
        .await
        .unwrap();
    let other = staff::create(
        &state.pool,
        StaffCreate {
            store_id: bare_store.id,
            email: "omar@example.com".to_string(),
            name: "Omar".to_string(),
            password: PASSWORD.to_string(),
        },
    )
    .await
    .unwrap();
    let other_token = token_for(&state, &other);

    let (status, _) = call(
        &app,
        request("GET", "/api/staff/store-hours", Some(&other_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
