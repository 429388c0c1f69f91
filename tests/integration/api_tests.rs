//! HTTP-level tests driven through the router

use axum::{body::Body, http::Request};
use serde_json::json;

use crate::common::{send, send_request, test_app, ADMIN_AUTH, BAD_PASSWORD_AUTH, USER_AUTH};

fn vova() -> serde_json::Value {
    json!({
        "name": "Vova",
        "gender": "male",
        "birthdate": "16.05.2000",
        "films": ["Harry Potter"]
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_requests_without_credentials_are_rejected() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/actors", None, None).await;
    assert_eq!(status, 401);
    assert_eq!(body["code"], 2);

    let (status, _) = send(&app, "POST", "/films", None, Some(json!({}))).await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/films", Some(BAD_PASSWORD_AUTH), None).await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn test_user_can_read_but_not_write() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/actors", Some(USER_AUTH), None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, "POST", "/actors", Some(USER_AUTH), Some(vova())).await;
    assert_eq!(status, 401);

    let (status, _) = send(&app, "DELETE", "/actors/1", Some(USER_AUTH), None).await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn test_authorization_precedes_body_validation() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/films",
        Some(USER_AUTH),
        Some(json!({"title": "", "rating": 99, "releaseDate": "nope"})),
    )
    .await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn test_actor_lifecycle() {
    let app = test_app().await;

    let (status, created) = send(&app, "POST", "/actors", Some(ADMIN_AUTH), Some(vova())).await;
    assert_eq!(status, 201);
    assert_eq!(created["name"], "Vova");
    assert_eq!(created["films"], json!(["Harry Potter"]));
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/actors/{}", id), Some(USER_AUTH), None).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/actors/{}", id),
        Some(ADMIN_AUTH),
        Some(json!({
            "name": "Vova",
            "gender": "male",
            "birthdate": "17.05.2000",
            "films": []
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(updated["birthdate"], "17.05.2000");
    assert_eq!(updated["films"], json!([]));

    let (status, body) = send(&app, "DELETE", &format!("/actors/{}", id), Some(ADMIN_AUTH), None).await;
    assert_eq!(status, 204);
    assert!(body.is_null());

    let (status, body) = send(&app, "GET", &format!("/actors/{}", id), Some(ADMIN_AUTH), None).await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], 4);

    // the film created implicitly outlives the actor
    let (status, films) = send(&app, "GET", "/films", Some(ADMIN_AUTH), None).await;
    assert_eq!(status, 200);
    assert_eq!(films[0]["title"], "Harry Potter");
    assert_eq!(films[0]["releaseDate"], "");
}

#[tokio::test]
async fn test_film_lifecycle() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/films",
        Some(ADMIN_AUTH),
        Some(json!({
            "title": "Harry Potter",
            "description": "A boy wizard",
            "rating": 8,
            "releaseDate": "16.11.2001",
            "actors": ["Vova", "Lisa"]
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["actors"], json!(["Vova", "Lisa"]));
    let id = created["id"].as_i64().unwrap();

    let (status, actors) = send(&app, "GET", "/actors", Some(USER_AUTH), None).await;
    assert_eq!(status, 200);
    assert_eq!(actors.as_array().unwrap().len(), 2);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/films/{}", id),
        Some(ADMIN_AUTH),
        Some(json!({
            "title": "Harry Potter",
            "rating": 9,
            "releaseDate": "16.11.2001",
            "actors": ["Lisa"]
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(updated["rating"], 9);
    assert_eq!(updated["description"], "");
    assert_eq!(updated["actors"], json!(["Lisa"]));

    let (status, _) = send(&app, "DELETE", &format!("/films/{}", id), Some(ADMIN_AUTH), None).await;
    assert_eq!(status, 204);

    let (status, _) = send(&app, "DELETE", &format!("/films/{}", id), Some(ADMIN_AUTH), None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_invalid_payloads_are_rejected() {
    let app = test_app().await;

    let cases = [
        ("/films", json!({"title": "Matrix", "rating": 11, "releaseDate": "31.03.1999"})),
        ("/films", json!({"title": "", "rating": 5, "releaseDate": "31.03.1999"})),
        ("/films", json!({"title": "Matrix", "rating": 5, "releaseDate": "1999-03-31"})),
        ("/actors", json!({"name": "Vova", "gender": "other", "birthdate": "16.05.2000"})),
        ("/actors", json!({"name": "Vova", "gender": "male", "birthdate": "2000-05-16"})),
        ("/actors", json!({"name": "Vova", "gender": "male"})),
        ("/actors", json!({"name": "Vova", "gender": "male", "birthdate": "1.5.2000"})),
        ("/actors", json!({"name": "Vova", "gender": "male", "birthdate": " 16.05.2000"})),
        ("/actors", json!({"name": "Vova", "gender": "male", "birthdate": "16.05.200"})),
        ("/films", json!({"title": "Matrix", "rating": 5, "releaseDate": "31.3.1999"})),
    ];

    for (uri, body) in cases {
        let (status, response) = send(&app, "POST", uri, Some(ADMIN_AUTH), Some(body.clone())).await;
        assert_eq!(status, 400, "{} {}", uri, body);
        assert_eq!(response["code"], 5);
    }

    // nothing was written
    let (_, films) = send(&app, "GET", "/films", Some(ADMIN_AUTH), None).await;
    assert_eq!(films, json!([]));
}

#[tokio::test]
async fn test_malformed_requests() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/actors")
        .header("Authorization", ADMIN_AUTH)
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send_request(&app, request).await;
    assert_eq!(status, 400);

    let (status, _) = send(&app, "GET", "/films/abc", Some(ADMIN_AUTH), None).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_update_missing_actor() {
    let app = test_app().await;

    let (status, _) = send(&app, "PUT", "/actors/77", Some(ADMIN_AUTH), Some(vova())).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_vova_and_lisa() {
    let app = test_app().await;

    let (status, vova) = send(&app, "POST", "/actors", Some(ADMIN_AUTH), Some(vova())).await;
    assert_eq!(status, 201);

    let lisa_body = |birthdate: &str| {
        json!({
            "name": "Lisa",
            "gender": "female",
            "birthdate": birthdate,
            "films": ["Harry Potter", "Fast and furious"]
        })
    };
    let (status, lisa) = send(&app, "POST", "/actors", Some(ADMIN_AUTH), Some(lisa_body("13.03.2001"))).await;
    assert_eq!(status, 201);
    let lisa_uri = format!("/actors/{}", lisa["id"].as_i64().unwrap());

    let (status, actors) = send(&app, "GET", "/actors", Some(USER_AUTH), None).await;
    assert_eq!(status, 200);
    assert_eq!(actors, json!([vova, lisa]));

    let (status, fetched) = send(&app, "GET", &lisa_uri, Some(USER_AUTH), None).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["films"], json!(["Harry Potter", "Fast and furious"]));

    let (status, updated) = send(&app, "PUT", &lisa_uri, Some(ADMIN_AUTH), Some(lisa_body("14.03.2001"))).await;
    assert_eq!(status, 201);
    assert_eq!(updated["birthdate"], "14.03.2001");
    assert_eq!(updated["films"], json!(["Harry Potter", "Fast and furious"]));

    let (_, fetched) = send(&app, "GET", &lisa_uri, Some(USER_AUTH), None).await;
    assert_eq!(fetched, updated);

    let (status, _) = send(&app, "DELETE", &lisa_uri, Some(ADMIN_AUTH), None).await;
    assert_eq!(status, 204);

    let (status, _) = send(&app, "GET", &lisa_uri, Some(USER_AUTH), None).await;
    assert_eq!(status, 404);

    // Vova and both films are untouched
    let (_, actors) = send(&app, "GET", "/actors", Some(USER_AUTH), None).await;
    assert_eq!(actors, json!([vova]));
    let (_, films) = send(&app, "GET", "/films", Some(USER_AUTH), None).await;
    assert_eq!(films.as_array().unwrap().len(), 2);
    assert_eq!(films[0]["actors"], json!(["Vova"]));
    assert!(films[1]["actors"].as_array().unwrap().is_empty());
}
