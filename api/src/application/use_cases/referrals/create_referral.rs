use crate::application::ports::referral_repository::{
    ReferralInsertError, ReferralRepository, ReferralRow,
};

#[derive(thiserror::Error, Debug)]
pub enum CreateReferralError {
    #[error("Name and phone are required")]
    MissingFields,
    #[error("This phone number is already referred.")]
    DuplicatePhone,
    #[error("failed to persist referral")]
    Persist(#[source] anyhow::Error),
}

pub struct CreateReferral<'a, R: ReferralRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ReferralRepository + ?Sized> CreateReferral<'a, R> {
    pub async fn execute(&self, name: &str, phone: &str) -> Result<ReferralRow, CreateReferralError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(CreateReferralError::MissingFields);
        }
        self.repo
            .create_referral(name, phone)
            .await
            .map_err(|e| match e {
                ReferralInsertError::DuplicatePhone => CreateReferralError::DuplicatePhone,
                ReferralInsertError::Other(e) => CreateReferralError::Persist(e),
            })
    }
}
