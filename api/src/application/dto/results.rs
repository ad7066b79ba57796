use std::collections::BTreeMap;

use crate::application::ports::result_repository::ResultRow;

/// Persisted result enriched with the catalog entry for its type.
#[derive(Debug, Clone)]
pub struct LearningResultDto {
    pub result: ResultRow,
    pub speciality: String,
    pub suggestions: BTreeMap<String, String>,
}
