use crate::application::ports::referral_repository::{ReferralRepository, ReferralRow};

pub struct ListReferrals<'a, R: ReferralRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ReferralRepository + ?Sized> ListReferrals<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<ReferralRow>> {
        self.repo.list_referrals().await
    }
}
