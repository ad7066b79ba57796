use uuid::Uuid;

use crate::application::dto::results::LearningResultDto;
use crate::application::ports::result_repository::{ResultInsertError, ResultRepository};
use crate::domain::learning::catalog::LearningCatalog;
use crate::domain::learning::learning_type::LearningType;
use crate::domain::learning::tally::dominant_type;

#[derive(thiserror::Error, Debug)]
pub enum CalculateResultError {
    #[error("Answers are required")]
    NoAnswers,
    #[error("Unknown learning type `{0}`")]
    UnknownType(String),
    #[error("User not found")]
    UnknownUser(Uuid),
    #[error("no catalog entry for `{0}`")]
    MissingProfile(LearningType),
    #[error("failed to persist result")]
    Persist(#[source] anyhow::Error),
}

pub struct CalculateResult<'a, R: ResultRepository + ?Sized> {
    pub repo: &'a R,
    pub catalog: &'a LearningCatalog,
}

impl<'a, R: ResultRepository + ?Sized> CalculateResult<'a, R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        answers: &[String],
    ) -> Result<LearningResultDto, CalculateResultError> {
        let parsed = answers
            .iter()
            .map(|a| {
                a.parse::<LearningType>()
                    .map_err(|_| CalculateResultError::UnknownType(a.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let dominant = dominant_type(&parsed).ok_or(CalculateResultError::NoAnswers)?;
        let profile = self
            .catalog
            .profile(dominant)
            .ok_or(CalculateResultError::MissingProfile(dominant))?;

        let result = self
            .repo
            .create_result(user_id, dominant, &profile.badge_url)
            .await
            .map_err(|e| match e {
                ResultInsertError::UnknownUser(id) => CalculateResultError::UnknownUser(id),
                ResultInsertError::Other(e) => CalculateResultError::Persist(e),
            })?;

        Ok(LearningResultDto {
            result,
            speciality: profile.speciality.clone(),
            suggestions: profile.suggestions.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::ports::user_repository::{NewUser, UserRepository};
    use crate::testing::{MemoryResults, MemoryUsers, catalog};
    use pretty_assertions::assert_eq;

    async fn seeded() -> (MemoryResults, Uuid) {
        let users = Arc::new(MemoryUsers::default());
        let user = users
            .create_user(&NewUser {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                class: None,
                phone: None,
            })
            .await
            .unwrap();
        (MemoryResults::new(users), user.id)
    }

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn persists_dominant_type_with_catalog_details() {
        let (repo, user_id) = seeded().await;
        let catalog = catalog();
        let uc = CalculateResult {
            repo: &repo,
            catalog: &catalog,
        };
        let out = uc
            .execute(
                user_id,
                &answers(&["Kinesthetic", "Reading/Writing", "Reading/Writing"]),
            )
            .await
            .unwrap();
        assert_eq!(out.result.learning_type, LearningType::ReadingWriting);
        assert_eq!(out.result.badge_url, "/badges/reading.png");
        assert_eq!(out.result.user_id, user_id);
        assert_eq!(out.suggestions.len(), 3);
        assert!(out.speciality.contains("written words"));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn tie_resolves_to_latest_first_seen_type() {
        let (repo, user_id) = seeded().await;
        let catalog = catalog();
        let uc = CalculateResult {
            repo: &repo,
            catalog: &catalog,
        };
        let out = uc
            .execute(user_id, &answers(&["Visual", "Auditory"]))
            .await
            .unwrap();
        assert_eq!(out.result.learning_type, LearningType::Auditory);
    }

    #[tokio::test]
    async fn rejects_empty_or_unknown_answers() {
        let (repo, user_id) = seeded().await;
        let catalog = catalog();
        let uc = CalculateResult {
            repo: &repo,
            catalog: &catalog,
        };
        let err = uc.execute(user_id, &[]).await.unwrap_err();
        assert!(matches!(err, CalculateResultError::NoAnswers));

        let err = uc
            .execute(user_id, &answers(&["Visual", "Musical"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CalculateResultError::UnknownType(t) if t == "Musical"));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        let (repo, _) = seeded().await;
        let catalog = catalog();
        let uc = CalculateResult {
            repo: &repo,
            catalog: &catalog,
        };
        let stranger = Uuid::new_v4();
        let err = uc
            .execute(stranger, &answers(&["Visual"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CalculateResultError::UnknownUser(id) if id == stranger));
    }
}
