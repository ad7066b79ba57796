use std::sync::Arc;

use crate::application::ports::email_sender::EmailSender;
use crate::application::ports::question_repository::QuestionRepository;
use crate::application::ports::referral_repository::ReferralRepository;
use crate::application::ports::result_repository::ResultRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;
use crate::domain::learning::catalog::LearningCatalog;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    question_repo: Arc<dyn QuestionRepository>,
    result_repo: Arc<dyn ResultRepository>,
    referral_repo: Arc<dyn ReferralRepository>,
    email_sender: Arc<dyn EmailSender>,
    catalog: Arc<LearningCatalog>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        question_repo: Arc<dyn QuestionRepository>,
        result_repo: Arc<dyn ResultRepository>,
        referral_repo: Arc<dyn ReferralRepository>,
        email_sender: Arc<dyn EmailSender>,
        catalog: Arc<LearningCatalog>,
    ) -> Self {
        Self {
            user_repo,
            question_repo,
            result_repo,
            referral_repo,
            email_sender,
            catalog,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn question_repo(&self) -> Arc<dyn QuestionRepository> {
        self.services.question_repo.clone()
    }

    pub fn result_repo(&self) -> Arc<dyn ResultRepository> {
        self.services.result_repo.clone()
    }

    pub fn referral_repo(&self) -> Arc<dyn ReferralRepository> {
        self.services.referral_repo.clone()
    }

    pub fn email_sender(&self) -> Arc<dyn EmailSender> {
        self.services.email_sender.clone()
    }

    pub fn catalog(&self) -> Arc<LearningCatalog> {
        self.services.catalog.clone()
    }
}
