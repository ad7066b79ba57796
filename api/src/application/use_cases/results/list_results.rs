use uuid::Uuid;

use crate::application::ports::result_repository::{ResultRepository, ResultRow};

pub struct ListResults<'a, R: ResultRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ResultRepository + ?Sized> ListResults<'a, R> {
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<Vec<ResultRow>> {
        self.repo.list_for_user(user_id).await
    }
}
