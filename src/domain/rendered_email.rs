use crate::domain::Field;

/// Subject, HTML body and plain-text fallback for one recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl RenderedEmail {
    pub fn admin_notification(subject: String, html: String, name: &Field) -> RenderedEmail {
        RenderedEmail {
            subject,
            html,
            text: format!("New submission from {}.", name),
        }
    }

    pub fn acknowledgment(subject: String, html: String, name: &Field) -> RenderedEmail {
        RenderedEmail {
            subject,
            html,
            text: format!(
                "Hi {}, thank you for your submission. We will be in touch shortly.",
                name
            ),
        }
    }
}

/// Wraps a rendered body in the shared email chrome.
pub(crate) fn layout(heading: &str, body: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; color: #333;">
  <h2 style="color: #1a1a1a; border-bottom: 2px solid #e5e5e5; padding-bottom: 8px;">{heading}</h2>
{body}
</div>"#,
        heading = heading,
        body = body
    )
}

/// One `<p><strong>Label:</strong> value</p>` line of a details table.
pub(crate) fn detail(label: &str, value: &Field) -> String {
    format!(
        "  <p><strong>{}:</strong> {}</p>\n",
        label,
        value.raw_html()
    )
}
