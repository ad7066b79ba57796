pub mod email;
pub mod error;
pub mod extract;
pub mod health;
pub mod quiz;
pub mod referrals;
pub mod results;
pub mod users;
