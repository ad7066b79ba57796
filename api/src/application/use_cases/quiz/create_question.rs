use crate::application::ports::question_repository::{NewOption, QuestionRepository, QuestionRow};
use crate::domain::learning::learning_type::LearningType;

pub const MIN_OPTIONS: usize = 2;

#[derive(thiserror::Error, Debug)]
pub enum CreateQuestionError {
    #[error("Invalid input: Provide question text and at least 2 options.")]
    InvalidShape,
    #[error("Invalid input: option {0} has no text.")]
    BlankOption(usize),
    #[error("Invalid input: option {index} has unknown type `{value}`.")]
    UnknownType { index: usize, value: String },
    #[error("failed to persist question")]
    Persist(#[source] anyhow::Error),
}

#[derive(Debug, Clone, Default)]
pub struct OptionDraft {
    pub text: String,
    pub learning_type: String,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<OptionDraft>,
}

pub struct CreateQuestion<'a, R: QuestionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: QuestionRepository + ?Sized> CreateQuestion<'a, R> {
    pub async fn execute(&self, draft: QuestionDraft) -> Result<QuestionRow, CreateQuestionError> {
        let text = draft.text.trim();
        if text.is_empty() || draft.options.len() < MIN_OPTIONS {
            return Err(CreateQuestionError::InvalidShape);
        }

        let mut options = Vec::with_capacity(draft.options.len());
        for (i, opt) in draft.options.into_iter().enumerate() {
            let index = i + 1;
            let option_text = opt.text.trim();
            if option_text.is_empty() {
                return Err(CreateQuestionError::BlankOption(index));
            }
            let learning_type = opt.learning_type.parse::<LearningType>().map_err(|_| {
                CreateQuestionError::UnknownType {
                    index,
                    value: opt.learning_type.clone(),
                }
            })?;
            options.push(NewOption {
                text: option_text.to_string(),
                learning_type,
            });
        }

        self.repo
            .create_question(text, &options)
            .await
            .map_err(CreateQuestionError::Persist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryQuestions;
    use pretty_assertions::assert_eq;

    fn option(text: &str, t: &str) -> OptionDraft {
        OptionDraft {
            text: text.into(),
            learning_type: t.into(),
        }
    }

    #[tokio::test]
    async fn stores_question_with_ordered_options() {
        let repo = MemoryQuestions::default();
        let uc = CreateQuestion { repo: &repo };
        let q = uc
            .execute(QuestionDraft {
                text: "How do you prefer to take notes?".into(),
                options: vec![
                    option("Drawing mind maps", "Visual"),
                    option("Recording audio notes", "Auditory"),
                    option("Writing summaries", "Reading/Writing"),
                ],
            })
            .await
            .unwrap();
        let types: Vec<_> = q.options.iter().map(|o| o.learning_type).collect();
        assert_eq!(
            types,
            vec![
                LearningType::Visual,
                LearningType::Auditory,
                LearningType::ReadingWriting
            ]
        );
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn requires_text_and_two_options() {
        let repo = MemoryQuestions::default();
        let uc = CreateQuestion { repo: &repo };
        let one_option = QuestionDraft {
            text: "Q".into(),
            options: vec![option("A", "Visual")],
        };
        let no_text = QuestionDraft {
            text: "  ".into(),
            options: vec![option("A", "Visual"), option("B", "Auditory")],
        };
        for draft in [one_option, no_text] {
            let err = uc.execute(draft).await.unwrap_err();
            assert!(matches!(err, CreateQuestionError::InvalidShape));
        }
    }

    #[tokio::test]
    async fn reports_offending_option() {
        let repo = MemoryQuestions::default();
        let uc = CreateQuestion { repo: &repo };
        let err = uc
            .execute(QuestionDraft {
                text: "Q".into(),
                options: vec![option("A", "Visual"), option("B", "Musical")],
            })
            .await
            .unwrap_err();
        match err {
            CreateQuestionError::UnknownType { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, "Musical");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = uc
            .execute(QuestionDraft {
                text: "Q".into(),
                options: vec![option("", "Visual"), option("B", "Auditory")],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CreateQuestionError::BlankOption(1)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
