pub mod email_sender;
pub mod question_repository;
pub mod referral_repository;
pub mod result_repository;
pub mod user_repository;
