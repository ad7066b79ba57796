use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::question_repository::QuestionRow;
use crate::application::use_cases::quiz::create_question::{
    CreateQuestion, CreateQuestionError, OptionDraft, QuestionDraft,
};
use crate::application::use_cases::quiz::list_questions::ListQuestions;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OptionInput {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub learning_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub question_text: Option<String>,
    pub options: Option<Vec<OptionInput>>,
}

/// Option as stored, including its learning type.
#[derive(Debug, Serialize, ToSchema)]
pub struct OptionDetail {
    pub id: Uuid,
    pub text: String,
    #[serde(rename = "type")]
    pub learning_type: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<OptionDetail>,
}

/// Option as shown to quiz takers; the learning type stays hidden.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicOption {
    pub id: Uuid,
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PublicQuestion {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<PublicOption>,
}

impl From<QuestionRow> for QuestionDetail {
    fn from(q: QuestionRow) -> Self {
        QuestionDetail {
            id: q.id,
            text: q.text,
            options: q
                .options
                .into_iter()
                .map(|o| OptionDetail {
                    id: o.id,
                    text: o.text,
                    learning_type: o.learning_type.to_string(),
                })
                .collect(),
        }
    }
}

impl From<QuestionRow> for PublicQuestion {
    fn from(q: QuestionRow) -> Self {
        PublicQuestion {
            id: q.id,
            text: q.text,
            options: q
                .options
                .into_iter()
                .map(|o| PublicOption {
                    id: o.id,
                    text: o.text,
                })
                .collect(),
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(list_questions).post(create_question))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/quiz", tag = "Quiz", request_body = CreateQuestionRequest, responses(
    (status = 200, body = QuestionDetail),
    (status = 400, body = crate::presentation::http::error::ErrorBody)
))]
pub async fn create_question(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<Json<QuestionDetail>, ApiError> {
    let repo = ctx.question_repo();
    let uc = CreateQuestion {
        repo: repo.as_ref(),
    };
    let draft = QuestionDraft {
        text: req.question_text.unwrap_or_default(),
        options: req
            .options
            .unwrap_or_default()
            .into_iter()
            .map(|o| OptionDraft {
                text: o.text.unwrap_or_default(),
                learning_type: o.learning_type.unwrap_or_default(),
            })
            .collect(),
    };
    match uc.execute(draft).await {
        Ok(q) => Ok(Json(q.into())),
        Err(CreateQuestionError::Persist(e)) => {
            Err(ApiError::internal("Error creating question", e))
        }
        Err(e) => Err(ApiError::BadRequest(e.to_string())),
    }
}

#[utoipa::path(get, path = "/api/quiz", tag = "Quiz", responses(
    (status = 200, body = [PublicQuestion])
))]
pub async fn list_questions(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<PublicQuestion>>, ApiError> {
    let repo = ctx.question_repo();
    let uc = ListQuestions {
        repo: repo.as_ref(),
    };
    let rows = uc
        .execute()
        .await
        .map_err(|e| ApiError::internal("Error fetching questions", e))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
