use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::referral_repository::ReferralRow;
use crate::application::use_cases::referrals::create_referral::{
    CreateReferral, CreateReferralError,
};
use crate::application::use_cases::referrals::list_referrals::ListReferrals;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReferralRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReferralRow> for ReferralResponse {
    fn from(r: ReferralRow) -> Self {
        ReferralResponse {
            id: r.id,
            name: r.name,
            phone: r.phone,
            created_at: r.created_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(list_referrals).post(create_referral))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/referrals", tag = "Referrals", request_body = CreateReferralRequest, responses(
    (status = 201, body = ReferralResponse),
    (status = 400, body = crate::presentation::http::error::ErrorBody),
    (status = 409, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn create_referral(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<CreateReferralRequest>,
) -> Result<(StatusCode, Json<ReferralResponse>), ApiError> {
    let repo = ctx.referral_repo();
    let uc = CreateReferral {
        repo: repo.as_ref(),
    };
    let name = req.name.unwrap_or_default();
    let phone = req.phone.unwrap_or_default();
    match uc.execute(&name, &phone).await {
        Ok(row) => Ok((StatusCode::CREATED, Json(row.into()))),
        Err(e @ CreateReferralError::MissingFields) => Err(ApiError::BadRequest(e.to_string())),
        Err(e @ CreateReferralError::DuplicatePhone) => Err(ApiError::Conflict(e.to_string())),
        Err(CreateReferralError::Persist(e)) => Err(ApiError::internal("Internal Server Error", e)),
    }
}

#[utoipa::path(get, path = "/api/referrals", tag = "Referrals", responses(
    (status = 200, body = [ReferralResponse])
))]
pub async fn list_referrals(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ReferralResponse>>, ApiError> {
    let repo = ctx.referral_repo();
    let uc = ListReferrals {
        repo: repo.as_ref(),
    };
    let rows = uc
        .execute()
        .await
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
