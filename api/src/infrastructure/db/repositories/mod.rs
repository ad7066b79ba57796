pub mod question_repository_sqlx;
pub mod referral_repository_sqlx;
pub mod result_repository_sqlx;
pub mod user_repository_sqlx;
