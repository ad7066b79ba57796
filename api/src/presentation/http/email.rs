use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::email::send_report::{
    ReportRequest, SendLearningReport, SendReportError,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SendEmailRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub learning_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendEmailResponse {
    fn failed(error: String) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error),
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/", post(send_email)).with_state(ctx)
}

#[utoipa::path(post, path = "/api/email", tag = "Email", request_body = SendEmailRequest, responses(
    (status = 200, body = SendEmailResponse),
    (status = 400, body = SendEmailResponse),
    (status = 500, body = SendEmailResponse)
))]
pub async fn send_email(
    State(ctx): State<AppContext>,
    payload: Result<JsonBody<SendEmailRequest>, ApiError>,
) -> (StatusCode, Json<SendEmailResponse>) {
    let req = match payload {
        Ok(JsonBody(req)) => req,
        Err(rejection) => {
            return (
                rejection.status(),
                Json(SendEmailResponse::failed(rejection.to_string())),
            );
        }
    };
    let sender = ctx.email_sender();
    let catalog = ctx.catalog();
    let uc = SendLearningReport {
        sender: sender.as_ref(),
        catalog: catalog.as_ref(),
    };
    let dto = ReportRequest {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        learning_type: req.learning_type.unwrap_or_default(),
    };
    match uc.execute(&dto).await {
        Ok(sent) => {
            tracing::info!(to = %sent.to, "learning_report_sent");
            (
                StatusCode::OK,
                Json(SendEmailResponse {
                    success: true,
                    message: Some("Email sent successfully!".into()),
                    error: None,
                }),
            )
        }
        Err(e @ SendReportError::MissingFields) => (
            StatusCode::BAD_REQUEST,
            Json(SendEmailResponse::failed(e.to_string())),
        ),
        Err(SendReportError::Transport(e)) => {
            tracing::error!(error = ?e, "Error sending email");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendEmailResponse::failed(e.to_string())),
            )
        }
    }
}
