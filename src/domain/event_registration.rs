use crate::domain::rendered_email::{detail, layout};
use crate::domain::{Field, RenderedEmail};

/// Also the fallback record for any submission whose type is not recognised.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventRegistration {
    pub name: Field,
    pub email: Field,
    pub phone: Field,
    pub event_name: Field,
    pub event_date: Field,
    pub attendees: Field,
    pub comments: Field,
}

impl EventRegistration {
    pub fn admin_email(&self) -> RenderedEmail {
        let mut body = String::new();
        body.push_str(&detail("Name", &self.name));
        body.push_str(&detail("Email", &self.email));
        body.push_str(&detail("Phone", &self.phone));
        body.push_str(&detail("Event", &self.event_name));
        body.push_str(&detail("Date", &self.event_date));
        body.push_str(&detail("Attendees", &self.attendees));
        if self.comments.is_truthy() {
            body.push_str(&format!(
                "  <p><strong>Comments:</strong></p>\n  <p style=\"white-space: pre-wrap;\">{}</p>\n",
                self.comments.raw_html()
            ));
        }

        RenderedEmail::admin_notification(
            format!("New Event Registration: {}", self.name),
            layout("New Event Registration", &body),
            &self.name,
        )
    }

    pub fn acknowledgment_email(&self) -> RenderedEmail {
        let body = format!(
            "  <p>Hi {name},</p>\n  <p>You are registered for <strong>{event}</strong>. We look forward to seeing you there.</p>\n",
            name = self.name.raw_html(),
            event = self.event_name.raw_html()
        );

        RenderedEmail::acknowledgment(
            "Your event registration is confirmed".to_string(),
            layout("Registration confirmed", &body),
            &self.name,
        )
    }
}
