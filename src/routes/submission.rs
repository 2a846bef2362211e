use crate::configuration::{EmailClientSettings, MailSettingsSource};
use crate::domain::{Submission, SubmissionRequest};
use crate::email_client::{EmailClient, MessageId, OutgoingMessage};
use crate::routes::error_chain_fmt;
use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use anyhow::Context;
use std::fmt::Formatter;

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Missing Mailgun API Key or Email To address")]
    MissingCredentials,
    #[error("Missing MAILGUN_DOMAIN")]
    MissingDomain,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmissionError::MissingCredentials
            | SubmissionError::MissingDomain
            | SubmissionError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SubmissionError::MethodNotAllowed => HttpResponse::MethodNotAllowed()
                .insert_header((header::ALLOW, "POST"))
                .content_type(ContentType::plaintext())
                .body("Method Not Allowed"),
            // Each configuration failure keeps its own body shape.
            SubmissionError::MissingCredentials => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Server configuration error",
                    "details": self.to_string(),
                }))
            }
            SubmissionError::MissingDomain => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Server config error: {}", self),
                }))
            }
            SubmissionError::UnexpectedError(e) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Failed to process submission",
                    "details": format!("{:#}", e),
                }))
            }
        }
    }
}

/// What happened to the acknowledgment email. It never fails the request.
#[derive(Debug, PartialEq)]
pub enum AcknowledgmentOutcome {
    Sent(MessageId),
    Skipped(String),
}

/// Turns one form submission into an admin notification and a best-effort
/// acknowledgment to the submitter.
pub struct SubmissionRouter {
    settings_source: MailSettingsSource,
    client_settings: EmailClientSettings,
    http_client: reqwest::Client,
}

impl SubmissionRouter {
    pub fn new(
        settings_source: MailSettingsSource,
        client_settings: EmailClientSettings,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            settings_source,
            client_settings,
            http_client,
        }
    }

    #[tracing::instrument(
        name = "Handling a form submission",
        skip(self, raw_body),
        fields(submission_type = tracing::field::Empty)
    )]
    pub async fn handle(
        &self,
        method: &Method,
        raw_body: &[u8],
    ) -> Result<HttpResponse, SubmissionError> {
        if method != Method::POST {
            return Err(SubmissionError::MethodNotAllowed);
        }

        let request: SubmissionRequest =
            serde_json::from_slice(raw_body).context("Failed to parse the submission body")?;
        tracing::Span::current().record(
            "submission_type",
            &tracing::field::display(request.type_label()),
        );
        tracing::info!(
            kind = %request.kind(),
            data = %serde_json::Value::Object(request.data.clone()),
            "Received a form submission"
        );

        let settings = self
            .settings_source
            .load()
            .context("Failed to load the mail settings")?;
        let (api_key, recipient) = match (settings.api_key, settings.recipient) {
            (Some(api_key), Some(recipient)) => (api_key, recipient),
            _ => return Err(SubmissionError::MissingCredentials),
        };
        let email_client = EmailClient::new(
            self.http_client.clone(),
            settings
                .base_url
                .unwrap_or_else(|| self.client_settings.base_url.clone()),
            api_key,
        );
        let domain = settings.domain.ok_or(SubmissionError::MissingDomain)?;
        let sender = settings.sender.unwrap_or_else(|| {
            format!("{} <mailgun@{}>", self.client_settings.sender_name, domain)
        });

        let submission =
            Submission::parse(&request).context("Failed to read the submission data")?;

        let admin_email = submission.admin_email();
        let message_id = email_client
            .send_email(
                &domain,
                &OutgoingMessage {
                    from: &sender,
                    to: &recipient,
                    subject: &admin_email.subject,
                    html: &admin_email.html,
                    text: &admin_email.text,
                },
            )
            .await
            .context("Failed to send the admin notification")?;
        tracing::info!(%message_id, "Admin notification sent");

        match send_acknowledgment(&email_client, &domain, &sender, &submission).await {
            AcknowledgmentOutcome::Sent(message_id) => {
                tracing::info!(%message_id, "Acknowledgment sent to the submitter")
            }
            AcknowledgmentOutcome::Skipped(reason) => {
                tracing::warn!(%reason, "Acknowledgment was not sent")
            }
        }

        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!("{} submission received successfully!", request.type_label()),
        })))
    }
}

#[tracing::instrument(
    name = "Acknowledging a form submission",
    skip(email_client, sender, submission)
)]
pub async fn send_acknowledgment(
    email_client: &EmailClient,
    domain: &str,
    sender: &str,
    submission: &Submission,
) -> AcknowledgmentOutcome {
    let recipient = match submission.reply_address() {
        Some(recipient) => recipient,
        None => return AcknowledgmentOutcome::Skipped("no email address was submitted".into()),
    };
    let email = submission.acknowledgment_email();
    let message = OutgoingMessage {
        from: sender,
        to: recipient,
        subject: &email.subject,
        html: &email.html,
        text: &email.text,
    };
    match email_client.send_email(domain, &message).await {
        Ok(message_id) => AcknowledgmentOutcome::Sent(message_id),
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send the acknowledgment email"
            );
            AcknowledgmentOutcome::Skipped(e.to_string())
        }
    }
}

pub async fn submit(
    request: HttpRequest,
    body: web::Bytes,
    router: web::Data<SubmissionRouter>,
) -> Result<HttpResponse, SubmissionError> {
    router.handle(request.method(), &body).await
}
