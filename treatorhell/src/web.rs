use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{
        Path, State,
        rejection::{FormRejection, JsonRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use memory::{ResponseStore, Submission};
use persona::{Gateway, GatewayError, Persona};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResponseStore>,
    pub gateway: Arc<Gateway>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Error answered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

const QUESTIONS_PAGE: &str = include_str!("../static/questions.html");
const SUBMITTED_PAGE: &str = include_str!("../static/submitted.html");

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "TreatOrHell API",
        "endpoints": [
            "/questions",
            "/submit-questions",
            "/chat/nicholas",
            "/chat/angel",
            "/chat/devil",
        ],
    }))
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn questions_form() -> Html<&'static str> {
    Html(QUESTIONS_PAGE)
}

pub async fn submit_questions(
    State(state): State<AppState>,
    form: Result<Form<Submission>, FormRejection>,
) -> Result<Html<&'static str>, ApiError> {
    let Form(submission) = form?;
    let missing = submission.missing();
    if !missing.is_empty() {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("missing answers: {}", missing.join(", ")),
        ));
    }
    state.store.write(&submission).await.map_err(|e| {
        error!(error = %e, "could not save responses");
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error saving responses: {e}"),
        )
    })?;
    info!("self-assessment recorded");
    Ok(Html(SUBMITTED_PAGE))
}

pub async fn chat(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let persona = Persona::from_str(&name).map_err(|_| ApiError::not_found())?;
    let Json(req) = body?;
    if req.message.is_empty() {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "message must not be empty",
        ));
    }
    let reply = state.gateway.converse(persona, &req.message).await?;
    Ok(Json(ChatReply { reply }))
}

/// Build the application router with the provided state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
        .route("/questions", get(questions_form))
        .route("/submit-questions", post(submit_questions))
        .route("/chat/{persona}", post(chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
