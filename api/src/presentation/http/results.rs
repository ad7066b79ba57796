use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::results::LearningResultDto;
use crate::application::ports::result_repository::ResultRow;
use crate::application::use_cases::results::calculate_result::{
    CalculateResult, CalculateResultError,
};
use crate::application::use_cases::results::list_results::ListResults;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::{ApiError, parse_uuid};
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResultRequest {
    pub user_id: Option<String>,
    /// Learning type of each chosen option.
    pub answers: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub learning_type: String,
    pub badge_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearningResultResponse {
    #[serde(flatten)]
    pub result: ResultItem,
    pub speciality: String,
    pub suggestions: BTreeMap<String, String>,
}

impl From<ResultRow> for ResultItem {
    fn from(r: ResultRow) -> Self {
        ResultItem {
            id: r.id,
            user_id: r.user_id,
            learning_type: r.learning_type.to_string(),
            badge_url: r.badge_url,
            created_at: r.created_at,
        }
    }
}

impl From<LearningResultDto> for LearningResultResponse {
    fn from(d: LearningResultDto) -> Self {
        LearningResultResponse {
            result: d.result.into(),
            speciality: d.speciality,
            suggestions: d.suggestions,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", post(calculate_result))
        .route("/:user_id", get(list_user_results))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/results", tag = "Results", request_body = CalculateResultRequest, responses(
    (status = 200, body = LearningResultResponse),
    (status = 400, body = crate::presentation::http::error::ErrorBody),
    (status = 404, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn calculate_result(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<CalculateResultRequest>,
) -> Result<Json<LearningResultResponse>, ApiError> {
    let raw_id = req
        .user_id
        .ok_or_else(|| ApiError::BadRequest("userId and answers are required".into()))?;
    let user_id = parse_uuid(&raw_id, "userId")?;
    let answers = req.answers.unwrap_or_default();

    let repo = ctx.result_repo();
    let catalog = ctx.catalog();
    let uc = CalculateResult {
        repo: repo.as_ref(),
        catalog: catalog.as_ref(),
    };
    match uc.execute(user_id, &answers).await {
        Ok(dto) => {
            tracing::info!(%user_id, learning_type = %dto.result.learning_type, "result_calculated");
            Ok(Json(dto.into()))
        }
        Err(e @ (CalculateResultError::NoAnswers | CalculateResultError::UnknownType(_))) => {
            Err(ApiError::BadRequest(e.to_string()))
        }
        Err(e @ CalculateResultError::UnknownUser(_)) => Err(ApiError::NotFound(e.to_string())),
        Err(e) => Err(ApiError::internal("Error calculating result", e)),
    }
}

#[utoipa::path(get, path = "/api/results/{user_id}", tag = "Results",
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses((status = 200, body = [ResultItem])))]
pub async fn list_user_results(
    State(ctx): State<AppContext>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ResultItem>>, ApiError> {
    let user_id = parse_uuid(&user_id, "userId")?;
    let repo = ctx.result_repo();
    let uc = ListResults {
        repo: repo.as_ref(),
    };
    let rows = uc
        .execute(user_id)
        .await
        .map_err(|e| ApiError::internal("Error fetching results", e))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
