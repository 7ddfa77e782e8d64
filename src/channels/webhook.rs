//! Inbound HTTP surface — SMS webhook, session reset, and the
//! recommendation endpoint.
//!
//! The webhook accepts either a JSON body `{"message", "phone"}` or the
//! form fields `Body`/`From`; both land in the same handler. Form clients
//! (Twilio-style) get the reply wrapped in a minimal XML envelope and the
//! transport delivers it; JSON clients get a JSON reply and delivery is
//! attempted on the outbound channel after the session is committed.

use std::sync::Arc;

use axum::extract::{FromRequest, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::catalog::explain::ExplanationGenerator;
use crate::catalog::{Catalog, StudentProfile, recommend};
use crate::channels::SmsSender;
use crate::dialog::DialogManager;
use crate::error::{CatalogError, Error};

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub dialog: Arc<DialogManager>,
    pub catalog: Arc<Catalog>,
    pub explainer: Arc<dyn ExplanationGenerator>,
    pub sender: Arc<dyn SmsSender>,
}

// ── Inbound payloads ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct JsonInbound {
    message: String,
    phone: String,
}

#[derive(Debug, Deserialize)]
struct FormInbound {
    #[serde(rename = "Body")]
    body: String,
    #[serde(rename = "From")]
    from: String,
}

/// One inbound SMS, whichever wire shape it arrived in.
struct InboundSms {
    message: String,
    phone: String,
    /// Form clients expect the XML reply envelope.
    wants_twiml: bool,
}

impl<S> FromRequest<S> for InboundSms
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(payload): Json<JsonInbound> = Json::from_request(req, state)
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
            Ok(Self {
                message: payload.message,
                phone: payload.phone,
                wants_twiml: false,
            })
        } else {
            let Form(payload): Form<FormInbound> = Form::from_request(req, state)
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
            Ok(Self {
                message: payload.body,
                phone: payload.from,
                wants_twiml: true,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonReset {
    phone: String,
}

#[derive(Debug, Deserialize)]
struct FormReset {
    #[serde(rename = "From")]
    from: String,
}

/// Phone number to reset, JSON or form shaped.
struct ResetRequest {
    phone: String,
}

impl<S> FromRequest<S> for ResetRequest
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(payload): Json<JsonReset> = Json::from_request(req, state)
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
            Ok(Self {
                phone: payload.phone,
            })
        } else {
            let Form(payload): Form<FormReset> = Form::from_request(req, state)
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
            Ok(Self {
                phone: payload.from,
            })
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /sms/webhook
async fn sms_webhook(State(state): State<AppState>, inbound: InboundSms) -> Response {
    let reply = match state.dialog.handle(&inbound.phone, &inbound.message).await {
        Ok(reply) => reply,
        Err(e) => return dialog_error(e),
    };

    if inbound.wants_twiml {
        // The webhook transport itself delivers the reply.
        return (
            [(header::CONTENT_TYPE, "application/xml")],
            twiml_envelope(&reply),
        )
            .into_response();
    }

    // Session state is committed; a delivery failure must not affect it.
    if let Err(e) = state.sender.send(&inbound.phone, &reply).await {
        warn!(phone = %inbound.phone, error = %e, "outbound send failed");
    }

    Json(serde_json::json!({ "status": "success", "reply": reply })).into_response()
}

/// POST /sms/reset
async fn sms_reset(State(state): State<AppState>, request: ResetRequest) -> Response {
    match state.dialog.reset(&request.phone).await {
        Ok(()) => Json(serde_json::json!({ "status": "reset" })).into_response(),
        Err(e) => dialog_error(e),
    }
}

/// POST /recommend
async fn recommend_handler(
    State(state): State<AppState>,
    Json(student): Json<StudentProfile>,
) -> Response {
    match recommend(&student, &state.catalog, state.explainer.as_ref()) {
        Ok(recommendations) => Json(recommendations).into_response(),
        Err(e @ CatalogError::InvalidDeadline { .. }) => {
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// GET /healthz
async fn healthz(State(state): State<AppState>) -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "catalog_size": state.catalog.len(),
    }))
    .into_response()
}

fn dialog_error(e: Error) -> Response {
    let status = match e {
        // Store failures are retryable; nothing was committed.
        Error::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(error = %e, "dialog turn failed");
    (status, e.to_string()).into_response()
}

// ── Reply envelope ──────────────────────────────────────────────────

/// Wrap a reply in the minimal XML envelope form transports expect.
pub fn twiml_envelope(reply: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n    <Message>{}</Message>\n</Response>",
        xml_escape(reply)
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build the HTTP router.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/sms/webhook", post(sms_webhook))
        .route("/sms/reset", post(sms_reset))
        .route("/recommend", post(recommend_handler))
        .route("/healthz", get(healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
