pub mod create_referral;
pub mod list_referrals;
