use axum::Router;

use crate::features::{events, leaderboard, participations, students, submissions};
use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub fn router(state: AppState, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest("/leaderboard", leaderboard::routes::routes())
        .nest("/events", events::routes::routes(api_keys.clone()))
        .nest("/students", students::routes::routes(api_keys.clone()))
        .nest("/participations", participations::routes::routes())
        .nest("/submissions", submissions::routes::routes(api_keys));

    Router::new().nest("/api", api).with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use storage::{Seed, Store};
    use tower::ServiceExt;

    use super::*;
    use crate::middleware::auth::STUDENT_ID_HEADER;

    const ADMIN_KEY: &str = "test-admin-key";

    fn app() -> Router {
        router(
            AppState::new(Store::from_seed(Seed::campus())),
            ApiKeys::from_comma_separated(ADMIN_KEY),
        )
    }

    enum Caller<'a> {
        Anonymous,
        Student(&'a str),
        Admin,
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        caller: Caller<'_>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        builder = match caller {
            Caller::Anonymous => builder,
            Caller::Student(id) => builder.header(STUDENT_ID_HEADER, id),
            Caller::Admin => builder.header(header::AUTHORIZATION, format!("Bearer {ADMIN_KEY}")),
        };
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_leaderboard_is_public_and_paginated() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/leaderboard?page=1&page_size=3",
            Caller::Anonymous,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][0]["rank"], 1);
        assert_eq!(body["data"][0]["student"]["id"], "s3");
        assert_eq!(body["data"][0]["student"]["totalPoints"], 520);
        assert_eq!(body["pagination"]["total_items"], 8);
        assert_eq!(body["pagination"]["total_pages"], 3);
    }

    #[tokio::test]
    async fn test_leaderboard_rejects_bad_page_size() {
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/leaderboard?page_size=500",
            Caller::Anonymous,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "page_size must be between 1 and 100");
    }

    #[tokio::test]
    async fn test_event_lookup() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/api/events", Caller::Anonymous, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);

        let (status, body) =
            send(&app, Method::GET, "/api/events/e1", Caller::Anonymous, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["winningPoints"], 150);
        assert_eq!(body["category"], "hackathon");

        let (status, _) =
            send(&app, Method::GET, "/api/events/e42", Caller::Anonymous, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_event_requires_admin_key() {
        let app = app();
        let payload = json!({
            "name": "Robotics Expo",
            "description": "Build and demo a robot",
            "participationPoints": 20,
            "winningPoints": 90,
            "category": "competition"
        });

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/events",
            Caller::Student("s1"),
            Some(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) =
            send(&app, Method::POST, "/api/events", Caller::Admin, Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "e7");
        assert_eq!(body["name"], "Robotics Expo");
    }

    #[tokio::test]
    async fn test_create_event_validation() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/events",
            Caller::Admin,
            Some(json!({
                "name": "",
                "description": "No name given",
                "category": "sports"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
    }

    #[tokio::test]
    async fn test_student_routes_need_identity() {
        let app = app();

        let (status, _) =
            send(&app, Method::GET, "/api/students/me", Caller::Anonymous, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) =
            send(&app, Method::GET, "/api/students/me", Caller::Student("s1"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rank"], 3);
        assert_eq!(body["eventsJoined"], 3);

        let (status, _) =
            send(&app, Method::GET, "/api/students/me", Caller::Student("s99"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_student_list_is_admin_only() {
        let app = app();

        let (status, _) =
            send(&app, Method::GET, "/api/students", Caller::Student("s1"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, Method::GET, "/api/students", Caller::Admin, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_participate_submit_and_approve() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/participations",
            Caller::Student("s4"),
            Some(json!({ "eventId": "e1" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "participated");
        assert_eq!(body["pointsCollected"], false);

        let (status, submission) = send(
            &app,
            Method::POST,
            "/api/submissions",
            Caller::Student("s4"),
            Some(json!({ "eventId": "e1", "claimType": "won", "proofFile": "trophy.jpg" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(submission["status"], "pending");
        assert_eq!(submission["eventName"], "Spring Hackathon 2026");
        let id = submission["id"].as_str().unwrap().to_string();

        let (status, found) = send(
            &app,
            Method::GET,
            &format!("/api/submissions/{id}"),
            Caller::Admin,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["proofFile"], "trophy.jpg");

        let (status, pending) = send(
            &app,
            Method::GET,
            "/api/submissions/pending",
            Caller::Admin,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(pending[0]["id"], id.as_str());

        let (status, approval) = send(
            &app,
            Method::POST,
            &format!("/api/submissions/{id}/approve"),
            Caller::Admin,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(approval["pointsCredited"], 150);
        assert_eq!(approval["submission"]["status"], "approved");

        let (_, standing) =
            send(&app, Method::GET, "/api/students/me", Caller::Student("s4"), None).await;
        assert_eq!(standing["student"]["totalPoints"], 440);

        let (_, history) = send(
            &app,
            Method::GET,
            "/api/students/me/history",
            Caller::Student("s4"),
            None,
        )
        .await;
        assert_eq!(history[0]["status"], "won");
        assert_eq!(history[0]["pointsCollected"], true);
        assert_eq!(history[0]["points"], 150);

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/submissions/{id}/reject"),
            Caller::Admin,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_submit_for_unknown_event() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/submissions",
            Caller::Student("s1"),
            Some(json!({ "eventId": "e42", "claimType": "participated", "proofFile": "a.pdf" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, pending) = send(
            &app,
            Method::GET,
            "/api/submissions/pending",
            Caller::Admin,
            None,
        )
        .await;
        assert!(pending.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_review_requires_admin_and_existing_submission() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/submissions/sub-missing/approve",
            Caller::Student("s1"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/submissions/sub-missing/reject",
            Caller::Admin,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Submission 'sub-missing' not found");
    }
}
