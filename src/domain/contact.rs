use crate::domain::rendered_email::{detail, layout};
use crate::domain::{Field, RenderedEmail};

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: Field,
    pub email: Field,
    pub phone: Field,
    pub subject: Field,
    pub message: Field,
}

impl ContactMessage {
    pub fn admin_email(&self) -> RenderedEmail {
        let mut body = String::new();
        body.push_str(&detail("Name", &self.name));
        body.push_str(&detail("Email", &self.email));
        body.push_str(&detail("Phone", &self.phone));
        body.push_str(&detail("Subject", &self.subject));
        body.push_str(&format!(
            "  <p><strong>Message:</strong></p>\n  <p style=\"white-space: pre-wrap;\">{}</p>\n",
            self.message.raw_html()
        ));

        RenderedEmail::admin_notification(
            format!("New Contact Form Submission from {}", self.name),
            layout("New Contact Message", &body),
            &self.name,
        )
    }

    pub fn acknowledgment_email(&self) -> RenderedEmail {
        let body = format!(
            "  <p>Hi {name},</p>\n  <p>Thanks for reaching out. We have received your message and will get back to you as soon as possible.</p>\n  <p style=\"color: #777;\">Your message:</p>\n  <blockquote style=\"border-left: 3px solid #e5e5e5; padding-left: 12px;\">{message}</blockquote>\n",
            name = self.name.raw_html(),
            message = self.message.raw_html()
        );

        RenderedEmail::acknowledgment(
            "Thanks for contacting us!".to_string(),
            layout("We got your message", &body),
            &self.name,
        )
    }
}
