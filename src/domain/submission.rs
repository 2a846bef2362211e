use crate::domain::{
    ContactMessage, EventRegistration, FantasyLeagueSignup, Field, ListingRequest,
    RenderedEmail, SubmissionKind,
};
use serde_json::{Map, Value};

/// The JSON body posted by a form.
#[derive(Debug, serde::Deserialize)]
pub struct SubmissionRequest {
    /// `None` when the key is missing, `Some(Value::Null)` for an explicit `null`.
    #[serde(rename = "type", default, deserialize_with = "present")]
    pub submission_type: Option<Value>,
    pub data: Map<String, Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Value as serde::Deserialize>::deserialize(deserializer).map(Some)
}

impl SubmissionRequest {
    /// Only string types can name a kind; anything else is an event registration.
    pub fn kind(&self) -> SubmissionKind {
        SubmissionKind::from_type(self.submission_type.as_ref().and_then(Value::as_str))
    }

    /// The type exactly as the client sent it, rendered as text.
    pub fn type_label(&self) -> String {
        match &self.submission_type {
            None => "undefined".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum Submission {
    Contact(ContactMessage),
    FantasyLeague(FantasyLeagueSignup),
    ListingRequest(ListingRequest),
    EventRegistration(EventRegistration),
}

impl Submission {
    pub fn parse(request: &SubmissionRequest) -> Result<Submission, serde_json::Error> {
        let data = Value::Object(request.data.clone());
        let submission = match request.kind() {
            SubmissionKind::Contact => Submission::Contact(serde_json::from_value(data)?),
            SubmissionKind::FantasyLeague => {
                Submission::FantasyLeague(serde_json::from_value(data)?)
            }
            SubmissionKind::ListingRequest => {
                Submission::ListingRequest(serde_json::from_value(data)?)
            }
            SubmissionKind::EventRegistration => {
                Submission::EventRegistration(serde_json::from_value(data)?)
            }
        };
        Ok(submission)
    }

    pub fn kind(&self) -> SubmissionKind {
        match self {
            Submission::Contact(_) => SubmissionKind::Contact,
            Submission::FantasyLeague(_) => SubmissionKind::FantasyLeague,
            Submission::ListingRequest(_) => SubmissionKind::ListingRequest,
            Submission::EventRegistration(_) => SubmissionKind::EventRegistration,
        }
    }

    pub fn name(&self) -> &Field {
        match self {
            Submission::Contact(s) => &s.name,
            Submission::FantasyLeague(s) => &s.name,
            Submission::ListingRequest(s) => &s.name,
            Submission::EventRegistration(s) => &s.name,
        }
    }

    /// Where the acknowledgment goes, if the submitter left an address.
    pub fn reply_address(&self) -> Option<&str> {
        let email = match self {
            Submission::Contact(s) => &s.email,
            Submission::FantasyLeague(s) => &s.email,
            Submission::ListingRequest(s) => &s.email,
            Submission::EventRegistration(s) => &s.email,
        };
        email.as_str().map(str::trim).filter(|email| !email.is_empty())
    }

    pub fn admin_email(&self) -> RenderedEmail {
        match self {
            Submission::Contact(s) => s.admin_email(),
            Submission::FantasyLeague(s) => s.admin_email(),
            Submission::ListingRequest(s) => s.admin_email(),
            Submission::EventRegistration(s) => s.admin_email(),
        }
    }

    pub fn acknowledgment_email(&self) -> RenderedEmail {
        match self {
            Submission::Contact(s) => s.acknowledgment_email(),
            Submission::FantasyLeague(s) => s.acknowledgment_email(),
            Submission::ListingRequest(s) => s.acknowledgment_email(),
            Submission::EventRegistration(s) => s.acknowledgment_email(),
        }
    }
}
