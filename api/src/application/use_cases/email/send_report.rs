use crate::application::ports::email_sender::{EmailSender, OutgoingEmail};
use crate::domain::learning::catalog::{LearningCatalog, LearningProfile};
use crate::domain::learning::learning_type::LearningType;

pub const REPORT_SUBJECT: &str = "Your Learning Type Report";

#[derive(thiserror::Error, Debug)]
pub enum SendReportError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("{0}")]
    Transport(#[source] anyhow::Error),
}

#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub name: String,
    pub email: String,
    pub learning_type: String,
}

pub struct SendLearningReport<'a, S: EmailSender + ?Sized> {
    pub sender: &'a S,
    pub catalog: &'a LearningCatalog,
}

impl<'a, S: EmailSender + ?Sized> SendLearningReport<'a, S> {
    pub async fn execute(&self, req: &ReportRequest) -> Result<OutgoingEmail, SendReportError> {
        let name = req.name.trim();
        let to = req.email.trim();
        let label = req.learning_type.trim();
        if name.is_empty() || to.is_empty() || label.is_empty() {
            return Err(SendReportError::MissingFields);
        }

        let profile = label
            .parse::<LearningType>()
            .ok()
            .and_then(|t| self.catalog.profile(t));
        let email = OutgoingEmail {
            to: to.to_string(),
            subject: REPORT_SUBJECT.to_string(),
            text_body: compose_report(name, label, profile),
        };

        tracing::debug!(to = %email.to, learning_type = %label, "sending_learning_report");
        self.sender
            .send(&email)
            .await
            .map_err(SendReportError::Transport)?;
        Ok(email)
    }
}

/// Plain-text body; recommendations are left out when the type has no catalog entry.
pub fn compose_report(name: &str, learning_type: &str, profile: Option<&LearningProfile>) -> String {
    let mut body = format!(
        "Hello {name},\n\nBased on your quiz results, you are a {learning_type} learner!\n\n"
    );
    if let Some(profile) = profile {
        body.push_str(&profile.speciality);
        body.push_str("\n\n");
        body.push_str("Here's how you can improve:\n\n");
        for (key, suggestion) in &profile.suggestions {
            body.push_str(&format!("{key}. {suggestion}\n"));
        }
        body.push('\n');
    }
    body.push_str("Best regards,\nYour Team");
    body
}
