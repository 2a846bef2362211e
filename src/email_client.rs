use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Identifier the mail provider assigns to an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct OutgoingMessage<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub html: &'a str,
    pub text: &'a str,
}

/// Thin client over the Mailgun "send message" endpoint.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl EmailClient {
    pub fn new(http_client: Client, base_url: String, api_key: Secret<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    #[tracing::instrument(
        name = "Sending an email through Mailgun",
        skip(self, message),
        fields(recipient = %message.to, subject = %message.subject)
    )]
    pub async fn send_email(
        &self,
        domain: &str,
        message: &OutgoingMessage<'_>,
    ) -> Result<MessageId, reqwest::Error> {
        let url = format!("{}/v3/{}/messages", self.base_url, domain);
        let request_body = SendMessageRequest {
            from: message.from,
            to: message.to,
            subject: message.subject,
            html: message.html,
            text: message.text,
        };
        let response = self
            .http_client
            .post(&url)
            .basic_auth("api", Some(self.api_key.expose_secret()))
            .form(&request_body)
            .send()
            .await?
            .error_for_status()?
            .json::<SendMessageResponse>()
            .await?;
        Ok(response.id)
    }
}

#[derive(serde::Serialize)]
struct SendMessageRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(serde::Deserialize)]
struct SendMessageResponse {
    id: MessageId,
}
