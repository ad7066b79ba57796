//! In-memory port implementations shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::Utc;
use tower::ServiceExt;
use uuid::Uuid;

use crate::application::ports::email_sender::{EmailSender, OutgoingEmail};
use crate::application::ports::question_repository::{
    NewOption, OptionRow, QuestionRepository, QuestionRow,
};
use crate::application::ports::referral_repository::{
    ReferralInsertError, ReferralRepository, ReferralRow,
};
use crate::application::ports::result_repository::{
    ResultInsertError, ResultRepository, ResultRow,
};
use crate::application::ports::user_repository::{NewUser, UserRepository, UserRow};
use crate::bootstrap::app_context::{AppContext, AppServices};
use crate::bootstrap::config::Config;
use crate::domain::learning::catalog::LearningCatalog;
use crate::domain::learning::learning_type::LearningType;

#[derive(Default)]
pub struct MemoryUsers {
    pub rows: Mutex<Vec<UserRow>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create_user(&self, user: &NewUser) -> anyhow::Result<UserRow> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter().find(|r| r.email == user.email) {
            return Ok(existing.clone());
        }
        let row = UserRow {
            id: Uuid::new_v4(),
            name: user.name.clone(),
            email: user.email.clone(),
            class: user.class.clone(),
            phone: user.phone.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }
}

#[derive(Default)]
pub struct MemoryQuestions {
    pub rows: Mutex<Vec<QuestionRow>>,
}

#[async_trait]
impl QuestionRepository for MemoryQuestions {
    async fn create_question(
        &self,
        text: &str,
        options: &[NewOption],
    ) -> anyhow::Result<QuestionRow> {
        let row = QuestionRow {
            id: Uuid::new_v4(),
            text: text.to_string(),
            created_at: Utc::now(),
            options: options
                .iter()
                .map(|o| OptionRow {
                    id: Uuid::new_v4(),
                    text: o.text.clone(),
                    learning_type: o.learning_type,
                })
                .collect(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_questions(&self) -> anyhow::Result<Vec<QuestionRow>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

pub struct MemoryResults {
    pub users: Arc<MemoryUsers>,
    pub rows: Mutex<Vec<ResultRow>>,
}

impl MemoryResults {
    pub fn new(users: Arc<MemoryUsers>) -> Self {
        Self {
            users,
            rows: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ResultRepository for MemoryResults {
    async fn create_result(
        &self,
        user_id: Uuid,
        learning_type: LearningType,
        badge_url: &str,
    ) -> Result<ResultRow, ResultInsertError> {
        let known = self
            .users
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id == user_id);
        if !known {
            return Err(ResultInsertError::UnknownUser(user_id));
        }
        let row = ResultRow {
            id: Uuid::new_v4(),
            user_id,
            learning_type,
            badge_url: badge_url.to_string(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<ResultRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryReferrals {
    pub rows: Mutex<Vec<ReferralRow>>,
}

#[async_trait]
impl ReferralRepository for MemoryReferrals {
    async fn create_referral(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<ReferralRow, ReferralInsertError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.phone == phone) {
            return Err(ReferralInsertError::DuplicatePhone);
        }
        let row = ReferralRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: phone.to_string(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_referrals(&self) -> anyhow::Result<Vec<ReferralRow>> {
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }
}

/// Records every message; fails every send when `fail_with` is set.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail_with: Option<String>,
}

impl RecordingSender {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        if let Some(msg) = &self.fail_with {
            anyhow::bail!("{msg}");
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub fn config() -> Config {
    Config {
        api_port: 0,
        frontend_url: None,
        database_url: "postgres://unused".into(),
        database_max_connections: 1,
        body_limit_bytes: 1024 * 1024,
        email_api_base_url: None,
        email_api_token: None,
        email_sender: "quiz@example.com".into(),
        email_timeout_ms: 1_000,
        is_production: false,
    }
}

pub fn catalog() -> LearningCatalog {
    LearningCatalog::builtin().unwrap()
}

/// Handles onto the in-memory stores behind a test [`AppContext`].
pub struct TestHarness {
    pub ctx: AppContext,
    pub users: Arc<MemoryUsers>,
    pub questions: Arc<MemoryQuestions>,
    pub results: Arc<MemoryResults>,
    pub referrals: Arc<MemoryReferrals>,
    pub sender: Arc<RecordingSender>,
}

pub fn harness() -> TestHarness {
    harness_with_sender(RecordingSender::default())
}

pub fn harness_with_sender(sender: RecordingSender) -> TestHarness {
    let users = Arc::new(MemoryUsers::default());
    let questions = Arc::new(MemoryQuestions::default());
    let results = Arc::new(MemoryResults::new(users.clone()));
    let referrals = Arc::new(MemoryReferrals::default());
    let sender = Arc::new(sender);
    let services = AppServices::new(
        users.clone(),
        questions.clone(),
        results.clone(),
        referrals.clone(),
        sender.clone(),
        Arc::new(catalog()),
    );
    TestHarness {
        ctx: AppContext::new(config(), services),
        users,
        questions,
        results,
        referrals,
        sender,
    }
}

/// Sends one request through `router` and decodes the JSON reply.
///
/// `json` is sent with an `application/json` content type; `None` sends an
/// empty body without one. A non-JSON reply decodes to `Value::Null`.
pub async fn call(
    router: Router,
    method: Method,
    uri: &str,
    json: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match json {
        Some(raw) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}
