use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::{livez, readyz},
        patients::{create_patient, list_patients},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        .route("/patients", get(list_patients).post(create_patient))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, time::Duration};

    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use medicare_core::{
        patient::{NewPatient, Patient},
        storage::{PatientRepository, RepositoryError, Result as RepoResult},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// Repository whose store is never reachable.
    struct UnavailableRepository;

    #[async_trait]
    impl PatientRepository for UnavailableRepository {
        async fn list_patients(&self) -> RepoResult<Vec<Patient>> {
            Err(RepositoryError::ConnectionFailed("connection refused".to_string()))
        }

        async fn create_patient(&self, _patient: &NewPatient) -> RepoResult<Patient> {
            Err(RepositoryError::ConnectionFailed("connection refused".to_string()))
        }

        async fn ping(&self) -> RepoResult<()> {
            Err(RepositoryError::ConnectionFailed("connection refused".to_string()))
        }
    }

    fn unavailable_state() -> AppState {
        AppState::new(Arc::new(UnavailableRepository), Duration::from_secs(10))
    }

    async fn get_patients(app: &Router) -> Response<Body> {
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/patients")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn post_patient(app: &Router, body: impl Into<Body>) -> Response<Body> {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/patients")
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_patients_empty() {
        let app = create_app(AppState::in_memory().await);

        let response = get_patients(&app).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_patient_on_fresh_store() {
        let app = create_app(AppState::in_memory().await);

        let response = post_patient(
            &app,
            r#"{"name":"Alice","age":30,"condition":"stable"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"id":1,"name":"Alice","age":30,"condition":"stable"}"#
        );
    }

    #[tokio::test]
    async fn test_create_then_list_includes_record() {
        let app = create_app(AppState::in_memory().await);

        let created = body_json(
            post_patient(&app, json!({"name": "Eve", "age": 64, "condition": "critical"}).to_string())
                .await,
        )
        .await;

        let listed = body_json(get_patients(&app).await).await;

        assert_eq!(listed, json!([created.clone()]));
        assert_eq!(created["name"], "Eve");
        assert_eq!(created["age"], 64);
        assert_eq!(created["condition"], "critical");
        assert!(created["id"].is_i64());
    }

    #[tokio::test]
    async fn test_sequential_creates_get_sequential_ids_in_stable_order() {
        let app = create_app(AppState::in_memory().await);

        let a = body_json(post_patient(&app, r#"{"name":"A","age":1,"condition":"x"}"#).await).await;
        let b = body_json(post_patient(&app, r#"{"name":"B","age":2,"condition":"y"}"#).await).await;

        assert_eq!(a["id"], 1);
        assert_eq!(b["id"], 2);

        let expected = json!([
            {"id": 1, "name": "A", "age": 1, "condition": "x"},
            {"id": 2, "name": "B", "age": 2, "condition": "y"},
        ]);
        assert_eq!(body_json(get_patients(&app).await).await, expected);
        assert_eq!(body_json(get_patients(&app).await).await, expected);
    }

    #[tokio::test]
    async fn test_n_creates_yield_distinct_ids() {
        let app = create_app(AppState::in_memory().await);

        for i in 0..10 {
            let body = json!({"name": format!("patient-{i}"), "age": i, "condition": "ok"});
            let response = post_patient(&app, body.to_string()).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let listed = body_json(get_patients(&app).await).await;
        let ids: HashSet<i64> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();

        assert_eq!(ids.len(), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_yield_distinct_ids() {
        let app = create_app(AppState::in_memory().await);

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    let body = json!({"name": format!("patient-{i}"), "age": i, "condition": "ok"});
                    let response = post_patient(&app, body.to_string()).await;
                    assert_eq!(response.status(), StatusCode::CREATED);
                    body_json(response).await["id"].as_i64().unwrap()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 50);

        let listed = body_json(get_patients(&app).await).await;
        let listed_ids: HashSet<i64> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(listed_ids, ids);
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected_without_creating() {
        let app = create_app(AppState::in_memory().await);
        post_patient(&app, r#"{"name":"A","age":1,"condition":"x"}"#).await;

        let response = post_patient(&app, r#"{"age":30,"condition":"stable"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Missing required field 'name'"
        );

        let listed = body_json(get_patients(&app).await).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_wrong_typed_age_is_rejected() {
        let app = create_app(AppState::in_memory().await);

        let response =
            post_patient(&app, r#"{"name":"Alice","age":"thirty","condition":"stable"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Field 'age' must be an integer"
        );
    }

    #[tokio::test]
    async fn test_empty_condition_is_rejected() {
        let app = create_app(AppState::in_memory().await);

        let response = post_patient(&app, r#"{"name":"Alice","age":30,"condition":""}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(get_patients(&app).await).await, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let app = create_app(AppState::in_memory().await);

        let response = post_patient(&app, r#"{"name":"Alice","#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await["error"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(error.starts_with("Malformed JSON body"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let app = create_app(AppState::in_memory().await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/patients")
                    .body(Body::from(r#"{"name":"Alice","age":30,"condition":"stable"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_unavailable_on_list_is_internal_error() {
        let app = create_app(unavailable_state());

        let response = get_patients(&app).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Connection failed: connection refused"
        );
    }

    #[tokio::test]
    async fn test_store_unavailable_on_create_is_internal_error() {
        let app = create_app(unavailable_state());

        let response =
            post_patient(&app, r#"{"name":"Alice","age":30,"condition":"stable"}"#).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_validation_runs_before_store_call() {
        let app = create_app(unavailable_state());

        let response = post_patient(&app, r#"{"age":30,"condition":"stable"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(unavailable_state());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_healthy() {
        let app = create_app(AppState::in_memory().await);

        let response = app
            .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"healthy": true}));
    }

    #[tokio::test]
    async fn test_readyz_store_unavailable() {
        let app = create_app(unavailable_state());

        let response = app
            .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["healthy"], false);
    }
}
