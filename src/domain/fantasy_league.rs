use crate::domain::rendered_email::{detail, layout};
use crate::domain::{Field, RenderedEmail};

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FantasyLeagueSignup {
    pub name: Field,
    pub email: Field,
    pub phone: Field,
    pub team_name: Field,
    pub league_name: Field,
    pub experience: Field,
    pub message: Field,
}

impl FantasyLeagueSignup {
    pub fn admin_email(&self) -> RenderedEmail {
        let mut body = String::new();
        body.push_str(&detail("Name", &self.name));
        body.push_str(&detail("Email", &self.email));
        body.push_str(&detail("Phone", &self.phone));
        body.push_str(&detail("Team Name", &self.team_name));
        body.push_str(&detail("League", &self.league_name));
        body.push_str(&detail("Experience", &self.experience));
        body.push_str(&detail("Message", &self.message));

        RenderedEmail::admin_notification(
            format!("New Fantasy League Signup: {}", self.name),
            layout("New Fantasy League Signup", &body),
            &self.name,
        )
    }

    pub fn acknowledgment_email(&self) -> RenderedEmail {
        let body = format!(
            "  <p>Hi {name},</p>\n  <p>You're signed up! We have reserved a spot for <strong>{team}</strong> and will send league details before the draft.</p>\n",
            name = self.name.raw_html(),
            team = self.team_name.raw_html()
        );

        RenderedEmail::acknowledgment(
            "Welcome to the Fantasy League!".to_string(),
            layout("Welcome to the league", &body),
            &self.name,
        )
    }
}
