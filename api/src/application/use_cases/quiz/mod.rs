pub mod create_question;
pub mod list_questions;
