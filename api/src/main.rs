use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::extract::MatchedPath;
use axum::{Router, routing::get};
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use quiz_api::application::ports::email_sender::EmailSender;
use quiz_api::bootstrap::app_context::{AppContext, AppServices};
use quiz_api::bootstrap::config::Config;
use quiz_api::domain::learning::catalog::LearningCatalog;
use quiz_api::infrastructure::db::repositories::{
    question_repository_sqlx::SqlxQuestionRepository,
    referral_repository_sqlx::SqlxReferralRepository,
    result_repository_sqlx::SqlxResultRepository, user_repository_sqlx::SqlxUserRepository,
};
use quiz_api::infrastructure::mail::{HttpEmailSender, LogEmailSender};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            quiz_api::presentation::http::users::create_user,
            quiz_api::presentation::http::users::get_user,
            quiz_api::presentation::http::quiz::create_question,
            quiz_api::presentation::http::quiz::list_questions,
            quiz_api::presentation::http::results::calculate_result,
            quiz_api::presentation::http::results::list_user_results,
            quiz_api::presentation::http::referrals::create_referral,
            quiz_api::presentation::http::referrals::list_referrals,
            quiz_api::presentation::http::email::send_email,
            quiz_api::presentation::http::health::health,
        ),
        components(schemas(
            quiz_api::presentation::http::error::ErrorBody,
            quiz_api::presentation::http::users::CreateUserRequest,
            quiz_api::presentation::http::users::UserResponse,
            quiz_api::presentation::http::quiz::OptionInput,
            quiz_api::presentation::http::quiz::CreateQuestionRequest,
            quiz_api::presentation::http::quiz::OptionDetail,
            quiz_api::presentation::http::quiz::QuestionDetail,
            quiz_api::presentation::http::quiz::PublicOption,
            quiz_api::presentation::http::quiz::PublicQuestion,
            quiz_api::presentation::http::results::CalculateResultRequest,
            quiz_api::presentation::http::results::ResultItem,
            quiz_api::presentation::http::results::LearningResultResponse,
            quiz_api::presentation::http::referrals::CreateReferralRequest,
            quiz_api::presentation::http::referrals::ReferralResponse,
            quiz_api::presentation::http::email::SendEmailRequest,
            quiz_api::presentation::http::email::SendEmailResponse,
            quiz_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Users", description = "Quiz takers"),
            (name = "Quiz", description = "Questions and options"),
            (name = "Results", description = "Learning-type results"),
            (name = "Referrals", description = "Friend referrals"),
            (name = "Email", description = "Learning-type report emails"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn build_cors(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin).allow_credentials(true),
        // Production requires FRONTEND_URL, so this only matters if it failed to parse
        _ if cfg.is_production => base.allow_origin(AllowOrigin::exact(
            HeaderValue::from_static("http://invalid"),
        )),
        // Development convenience
        _ => base
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true),
    }
}

fn build_email_sender(cfg: &Config) -> anyhow::Result<Arc<dyn EmailSender>> {
    match (&cfg.email_api_base_url, &cfg.email_api_token) {
        (Some(base_url), Some(token)) => {
            info!(%base_url, "email_transport_http");
            Ok(Arc::new(HttpEmailSender::new(
                base_url,
                &cfg.email_sender,
                token,
                Duration::from_millis(cfg.email_timeout_ms),
            )?))
        }
        _ => {
            tracing::warn!("email_transport_not_configured_using_log_sender");
            Ok(Arc::new(LogEmailSender))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "quiz_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(api_port = cfg.api_port, is_production = cfg.is_production, "Starting quiz backend");

    // Database
    let pool =
        quiz_api::infrastructure::db::connect_pool(&cfg.database_url, cfg.database_max_connections)
            .await?;
    quiz_api::infrastructure::db::migrate(&pool).await?;

    let catalog = Arc::new(LearningCatalog::builtin()?);
    let email_sender = build_email_sender(&cfg)?;

    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxQuestionRepository::new(pool.clone())),
        Arc::new(SqlxResultRepository::new(pool.clone())),
        Arc::new(SqlxReferralRepository::new(pool.clone())),
        email_sender,
        catalog,
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = Router::new()
        .route("/", get(quiz_api::presentation::http::health::root))
        .nest("/api", quiz_api::presentation::http::health::routes(pool.clone()))
        .nest(
            "/api/users",
            quiz_api::presentation::http::users::routes(ctx.clone()),
        )
        .nest(
            "/api/quiz",
            quiz_api::presentation::http::quiz::routes(ctx.clone()),
        )
        .nest(
            "/api/results",
            quiz_api::presentation::http::results::routes(ctx.clone()),
        )
        .nest(
            "/api/referrals",
            quiz_api::presentation::http::referrals::routes(ctx.clone()),
        )
        .nest(
            "/api/email",
            quiz_api::presentation::http::email::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(build_cors(&cfg))
        .layer(DefaultBodyLimit::max(cfg.body_limit_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
