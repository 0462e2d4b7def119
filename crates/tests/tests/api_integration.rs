use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use guide_core::phrases::GREETING_REPLIES;
use guide_tests::{test_app, TEST_API_KEY};
use serde_json::{json, Value};
use tower::ServiceExt;

const KIVACH_PATH: &str = "%D0%92%D0%BE%D0%B4%D0%BE%D0%BF%D0%B0%D0%B4%20%D0%9A%D0%B8%D0%B2%D0%B0%D1%87";
const KIZHI_PATH: &str =
    "%D0%9A%D0%B8%D0%B6%D1%81%D0%BA%D0%B8%D0%B9%20%D0%BF%D0%BE%D0%B3%D0%BE%D1%81%D1%82";

fn authed(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", TEST_API_KEY);

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, parsed)
}

fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app().expect("app should build");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["catalog_points"], 24);
}

#[tokio::test]
async fn chat_requires_api_key() {
    let app = test_app().expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "text": "Хочу природу" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("x-request-id"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn greeting_returns_canned_reply_without_actions() {
    let app = test_app().expect("app should build");

    let (status, body) = send(
        &app,
        authed("POST", "/v1/chat", Some(json!({ "text": "Привет!" }))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "greeting");
    assert!(GREETING_REPLIES.contains(&body["reply_text"].as_str().unwrap()));
    assert!(body["suggested_actions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn itinerary_request_returns_days_and_actions() {
    let app = test_app().expect("app should build");

    let (status, body) = send(
        &app,
        authed(
            "POST",
            "/v1/chat",
            Some(json!({ "text": "Нужна архитектура и музеи на 2 дня" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "itinerary_request");
    assert_eq!(body["criteria"]["days"], 2);
    assert_eq!(body["criteria"]["categories"], json!(["architecture", "museum"]));

    let reply_text = body["reply_text"].as_str().unwrap();
    assert!(reply_text.starts_with("Отлично! Я подготовил маршрут на 2 дня. "));
    assert!(reply_text.contains("Учитывая ваши интересы (Архитектура, Музеи), рекомендую посетить:"));
    assert!(reply_text.contains("День 1:"));
    assert!(reply_text.contains("День 2:"));

    let sections = body["itinerary"]["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["entries"].as_array().unwrap().len(), 3);
    assert_eq!(sections[1]["entries"][0]["name"], "Национальный музей Республики Карелия");

    let actions = body["suggested_actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["action_type"], "show_on_map");
    assert_eq!(actions[1]["action_type"], "add_to_favorites");
    assert_eq!(
        names(&actions[0]["payload"]["names"]),
        vec![
            "Кижский погост",
            "Успенская церковь в Кондопоге",
            "Часовня Петра и Павла в Челмужах",
            "Национальный музей Республики Карелия",
            "Музей изобразительных искусств Республики Карелия",
            "Музей «Марциальные воды»",
        ]
    );
}

#[tokio::test]
async fn blank_message_is_bad_request() {
    let app = test_app().expect("app should build");

    let (status, body) = send(
        &app,
        authed("POST", "/v1/chat", Some(json!({ "text": "   " }))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty_message");
}

#[tokio::test]
async fn points_are_paged_and_filtered() {
    let app = test_app().expect("app should build");

    let (status, first) = send(&app, authed("GET", "/v1/points", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["total"], 24);
    assert_eq!(first["items"].as_array().unwrap().len(), 15);
    assert_eq!(first["has_more"], true);

    let (_, second) = send(&app, authed("GET", "/v1/points?page=1", None)).await;
    assert_eq!(second["items"].as_array().unwrap().len(), 9);
    assert_eq!(second["has_more"], false);

    let (_, nature) = send(&app, authed("GET", "/v1/points?category=nature", None)).await;
    assert_eq!(nature["total"], 4);
    assert_eq!(nature["items"][0]["name"], "Водопад Кивач");

    let (status, body) = send(&app, authed("GET", "/v1/points?category=beach", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_category");
}

#[tokio::test]
async fn point_details_include_travel_time() {
    let app = test_app().expect("app should build");

    let (status, body) = send(&app, authed("GET", &format!("/v1/points/{KIZHI_PATH}"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["point"]["name"], "Кижский погост");
    assert_eq!(body["travel_time_label"], "2-3 часа");
    assert_eq!(body["rating_label"], "Пока нет оценок (0 отзывов)");
    assert_eq!(body["is_favorite"], false);
    assert_eq!(body["base_rating"], "4.7");
    assert!(body["extended_description"]
        .as_str()
        .unwrap()
        .starts_with("Кижский погост — уникальный архитектурный ансамбль"));

    let (status, body) = send(&app, authed("GET", "/v1/points/nowhere", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn map_resolves_known_names_only() {
    let app = test_app().expect("app should build");

    let (status, body) = send(
        &app,
        authed(
            "POST",
            "/v1/map",
            Some(json!({ "names": ["Площадь Кирова", "Нет такого места", "Водопад Кивач"] })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Показал 2 объектов на карте!");
    assert_eq!(body["points"][0]["name"], "Водопад Кивач");
    assert_eq!(body["focus"]["latitude"], 62.27);
}

#[tokio::test]
async fn favorites_add_list_and_remove() {
    let app = test_app().expect("app should build");

    let (status, body) = send(
        &app,
        authed(
            "POST",
            "/v1/favorites",
            Some(json!({ "names": ["Водопад Кивач", "Кижский погост"] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Добавил 2 объектов в избранное! ❤️");
    assert_eq!(body["newly_added"], 2);

    let (_, listed) = send(&app, authed("GET", "/v1/favorites", None)).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "Кижский погост");

    let (status, removed) = send(
        &app,
        authed("DELETE", &format!("/v1/favorites/{KIVACH_PATH}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["removed"], true);

    let (_, listed) = send(&app, authed("GET", "/v1/favorites", None)).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn ratings_validate_stars_and_names() {
    let app = test_app().expect("app should build");

    let (status, body) = send(
        &app,
        authed(
            "POST",
            "/v1/ratings",
            Some(json!({ "name": "Кижский погост", "stars": 0 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_rating");

    let (status, _) = send(
        &app,
        authed(
            "POST",
            "/v1/ratings",
            Some(json!({ "name": "Нет такого места", "stars": 4 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for stars in [5, 4] {
        let (status, _) = send(
            &app,
            authed(
                "POST",
                "/v1/ratings",
                Some(json!({ "name": "Кижский погост", "stars": stars })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, details) = send(&app, authed("GET", &format!("/v1/points/{KIZHI_PATH}"), None)).await;
    assert_eq!(details["rating_label"], "4.5 (2 отзыва)");
    assert_eq!(details["rating"]["user_rating"], 4);
}
