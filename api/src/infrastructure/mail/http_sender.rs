use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::email_sender::{EmailSender, OutgoingEmail};

const TOKEN_HEADER: &str = "X-Postmark-Server-Token";

/// Delivers mail through a Postmark-style JSON HTTP API.
pub struct HttpEmailSender {
    client: reqwest::Client,
    base_url: String,
    sender: String,
    token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

impl HttpEmailSender {
    pub fn new(
        base_url: &str,
        sender: &str,
        token: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            sender: sender.to_string(),
            token: token.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/email", self.base_url)
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        let body = SendEmailRequest {
            from: &self.sender,
            to: &email.to,
            subject: &email.subject,
            text_body: &email.text_body,
        };
        let resp = self
            .client
            .post(self.endpoint())
            .header(TOKEN_HEADER, &self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("mail request failed: {e}"))?;
        if !resp.status().is_success() {
            anyhow::bail!("mail API returned status {}", resp.status());
        }
        Ok(())
    }
}
