use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::user_repository::UserRow;
use crate::application::use_cases::users::create_user::{
    CreateUser, CreateUserError, CreateUserRequest as CreateUserDto,
};
use crate::application::use_cases::users::get_user::GetUser;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::{ApiError, parse_uuid};
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub class: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub class: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        UserResponse {
            id: row.id,
            name: row.name,
            email: row.email,
            class: row.class,
            phone: row.phone,
            created_at: row.created_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/:user_id", get(get_user))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/users", tag = "Users", request_body = CreateUserRequest, responses(
    (status = 200, body = UserResponse),
    (status = 400, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = CreateUser {
        repo: repo.as_ref(),
    };
    let dto = CreateUserDto {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        class: req.class,
        phone: req.phone,
    };
    match uc.execute(dto).await {
        Ok(user) => Ok(Json(user.into())),
        Err(e @ CreateUserError::MissingFields) => Err(ApiError::BadRequest(e.to_string())),
        Err(CreateUserError::Persist(e)) => Err(ApiError::internal("Error creating user", e)),
    }
}

#[utoipa::path(get, path = "/api/users/{user_id}", tag = "Users",
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, body = UserResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn get_user(
    State(ctx): State<AppContext>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_uuid(&user_id, "userId")?;
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(id)
        .await
        .map_err(|e| ApiError::internal("Error fetching user", e))?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(user.into()))
}
