use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SITE CONTENT (read-only)
        // ========================================
        .route("/api/content/jobs", get(handlers::content::list_jobs))
        .route("/api/content/jobs/facets", get(handlers::content::job_facets))
        .route("/api/content/jobs/:id", get(handlers::content::get_job))
        .route("/api/content/stores", get(handlers::content::list_stores))
        .route(
            "/api/content/stores/facets",
            get(handlers::content::store_facets),
        )
        .route("/api/content/stores/:id", get(handlers::content::get_store))
        .route("/api/content/offices", get(handlers::content::list_offices))
        .route(
            "/api/content/offices/facets",
            get(handlers::content::office_facets),
        )
        .route("/api/content/news", get(handlers::content::list_news))
        .route("/api/content/news/:id", get(handlers::content::get_news))
        .route(
            "/api/content/divisions",
            get(handlers::content::list_divisions),
        )
        .route("/api/content/partners", get(handlers::content::list_partners))
        .route("/api/content/stats", get(handlers::content::list_stats))
        // ========================================
        // FORMS
        // ========================================
        .route(
            "/api/forms/job-application",
            post(handlers::forms::submit_job_application)
                .get(handlers::forms::list_job_applications),
        )
        .route(
            "/api/forms/contact",
            post(handlers::forms::submit_contact).get(handlers::forms::list_contact_requests),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::domain::a001_job::aggregate::Job;
    use contracts::domain::a004_news::aggregate::NewsArticle;
    use contracts::usecases::common::{UseCaseError, UseCaseMetadata};
    use contracts::usecases::u501_job_application::SubmitJobApplication;
    use contracts::usecases::u502_contact_request::SubmitContactRequest;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = configure_routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_jobs_filtered_by_department() {
        let (status, body) = get_json("/api/content/jobs?department=Catering").await;
        assert_eq!(status, StatusCode::OK);
        let jobs: Vec<Job> = serde_json::from_slice(&body).unwrap();
        assert!(!jobs.is_empty());
        assert!(jobs.iter().all(|j| j.department == "Catering"));
    }

    #[tokio::test]
    async fn test_jobs_query_matches_title_case_insensitively() {
        let (_, body) = get_json("/api/content/jobs?query=%20chef%20").await;
        let jobs: Vec<Job> = serde_json::from_slice(&body).unwrap();
        assert!(!jobs.is_empty());
        assert!(jobs.iter().all(|j| j.title.to_lowercase().contains("chef")));
    }

    #[tokio::test]
    async fn test_job_facets_and_detail() {
        let (status, body) = get_json("/api/content/jobs/facets").await;
        assert_eq!(status, StatusCode::OK);
        let facets: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(facets["department"].as_array().is_some_and(|v| !v.is_empty()));

        let (_, body) = get_json("/api/content/jobs").await;
        let jobs: Vec<Job> = serde_json::from_slice(&body).unwrap();
        let first = &jobs[0];
        let (status, body) = get_json(&format!("/api/content/jobs/{}", first.id.value())).await;
        assert_eq!(status, StatusCode::OK);
        let job: Job = serde_json::from_slice(&body).unwrap();
        assert_eq!(&job, first);
    }

    #[tokio::test]
    async fn test_unknown_record_is_404() {
        let (status, _) = get_json("/api/content/jobs/job-999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get_json("/api/content/stores/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_record_id_is_400() {
        let (status, _) = get_json("/api/content/jobs/JOB%201").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get_json("/api/content/news/news_1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_news_newest_first() {
        let (_, body) = get_json("/api/content/news").await;
        let news: Vec<NewsArticle> = serde_json::from_slice(&body).unwrap();
        assert!(news.windows(2).all(|w| w[0].published_at >= w[1].published_at));
    }

    #[tokio::test]
    async fn test_contact_validation_is_422_with_field_errors() {
        let (status, body) = post_json(
            &SubmitContactRequest::api_path(),
            serde_json::json!({
                "fullName": "A",
                "email": "nope",
                "phone": "",
                "message": "short"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let err: UseCaseError = serde_json::from_slice(&body).unwrap();
        assert!(err.is_validation());
        for key in ["fullName", "email", "phone", "message"] {
            assert!(err.errors.contains_key(key), "missing {}", key);
        }
    }

    #[tokio::test]
    async fn test_application_for_unknown_job_is_404() {
        let (status, body) = post_json(
            &SubmitJobApplication::api_path(),
            serde_json::json!({
                "jobId": "job-999",
                "fullName": "Omar Haddad",
                "email": "omar@example.com",
                "phone": "+966 50 000 0000",
                "coverLetter": "Ten years in hospitality management.",
                "resume": {
                    "fileName": "cv.pdf",
                    "mimeType": "application/pdf",
                    "sizeBytes": 3,
                    "contentBase64": "YWJj"
                }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let err: UseCaseError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, UseCaseError::NOT_FOUND);
    }
}
