use crate::application::ports::question_repository::{QuestionRepository, QuestionRow};

pub struct ListQuestions<'a, R: QuestionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: QuestionRepository + ?Sized> ListQuestions<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<QuestionRow>> {
        self.repo.list_questions().await
    }
}
