//! HTTP route handlers for the portfolio site.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::resume::{self, ResumeEmailRequest, ResumeError};
use crate::site::{ContactInfo, Route};

use super::state::AppState;

/// Create the router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let pages = ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/resume/download", get(download_resume))
        .route("/api/resume/send", post(send_resume))
        .route("/api/contact", get(contact_card))
        .route("/api/navigation", get(navigation))
        .fallback_service(pages)
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "portfolio-site",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl IntoResponse for ResumeError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MissingEmail | Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::Read(_) | Self::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Serve the resume PDF as an attachment.
async fn download_resume(State(state): State<Arc<AppState>>) -> Result<Response, ResumeError> {
    let config = &state.config.resume;
    let bytes = resume::load_resume(config).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, config.content_disposition()),
            (header::CACHE_CONTROL, config.cache_control()),
        ],
        bytes,
    )
        .into_response())
}

/// Resume-by-email response.
#[derive(Debug, Serialize)]
pub struct EmailResumeResponse {
    /// Whether the request was accepted.
    pub success: bool,
    /// Failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Accept a resume-by-email request.
async fn send_resume(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResumeEmailRequest>,
) -> (StatusCode, Json<EmailResumeResponse>) {
    match resume::request_resume(state.delivery.as_ref(), request).await {
        Ok(()) => (
            StatusCode::OK,
            Json(EmailResumeResponse {
                success: true,
                error: None,
            }),
        ),
        Err(err) => {
            let status = if err.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                tracing::error!("Resume email failed: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(EmailResumeResponse {
                    success: false,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}

/// Contact card response.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Raw contact details.
    #[serde(flatten)]
    pub info: ContactInfo,
    /// `mailto:` link.
    pub mailto: String,
    /// `tel:` link.
    pub tel: String,
}

/// Serve the contact card.
async fn contact_card(State(state): State<Arc<AppState>>) -> Json<ContactResponse> {
    let info = state.config.contact.clone();
    Json(ContactResponse {
        mailto: info.mailto(),
        tel: info.tel(),
        info,
    })
}

/// Navigation menu entry.
#[derive(Debug, Serialize)]
pub struct NavLink {
    /// Page path.
    pub href: &'static str,
    /// Menu label.
    pub label: &'static str,
}

/// Serve the navigation menu.
async fn navigation() -> Json<Vec<NavLink>> {
    Json(
        Route::ALL
            .into_iter()
            .map(|route| NavLink {
                href: route.path(),
                label: route.label(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::resume::{OutboxDelivery, ResumeConfig};
    use crate::site::SiteConfig;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_email(email: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/resume/send")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::json!({ "email": email }).to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(AppState::new(SiteConfig::default()));
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_download_resume_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Jalaj_Sharma_Resume.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        let config = SiteConfig::default().with_resume(ResumeConfig::at(&path));
        let app = create_router(AppState::new(config));
        let response = app.oneshot(get("/api/resume/download")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jalaj_Sharma_Resume.pdf\""
        );
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_download_missing_resume() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            SiteConfig::default().with_resume(ResumeConfig::at(dir.path().join("gone.pdf")));
        let app = create_router(AppState::new(config));
        let response = app.oneshot(get("/api/resume/download")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "Resume file not found. Please contact the administrator."
        );
    }

    #[tokio::test]
    async fn test_download_unreadable_resume() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::default().with_resume(ResumeConfig::at(dir.path()));
        let app = create_router(AppState::new(config));
        let response = app.oneshot(get("/api/resume/download")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Failed to download resume. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_send_resume() {
        let outbox = Arc::new(OutboxDelivery::new());
        let state = AppState::with_delivery(SiteConfig::default(), outbox.clone());
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(post_email("recruiter@example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["success"], true);

        let response = app.clone().oneshot(post_email("recruiter")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Please enter a valid email address");

        let response = app.oneshot(post_email(" ")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Please enter your email address"
        );

        assert_eq!(outbox.queued().len(), 1);
    }

    #[tokio::test]
    async fn test_send_resume_without_email_field() {
        let outbox = Arc::new(OutboxDelivery::new());
        let app = create_router(AppState::with_delivery(SiteConfig::default(), outbox.clone()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/resume/send")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Please enter your email address");
        assert!(outbox.queued().is_empty());
    }

    #[tokio::test]
    async fn test_contact_and_navigation() {
        let app = create_router(AppState::new(SiteConfig::default()));

        let body = body_json(app.clone().oneshot(get("/api/contact")).await.unwrap()).await;
        assert_eq!(body["email"], "jalaj.ka.sharma@gmail.com");
        assert_eq!(body["mailto"], "mailto:jalaj.ka.sharma@gmail.com");

        let body = body_json(app.oneshot(get("/api/navigation")).await.unwrap()).await;
        let hrefs: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|link| link["href"].as_str().unwrap())
            .collect();
        assert!(hrefs.contains(&"/contact"));
        assert!(hrefs.contains(&"/resume"));
        assert!(hrefs.contains(&"/projects"));
    }

    #[tokio::test]
    async fn test_static_pages_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Hi</h1>").unwrap();
        let app = create_router(AppState::new(
            SiteConfig::default().with_static_dir(dir.path()),
        ));

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Hi</h1>");
    }
}
