pub mod email;
pub mod quiz;
pub mod referrals;
pub mod results;
pub mod users;
