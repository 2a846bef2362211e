use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::convert::{TryFrom, TryInto};
use std::ffi::OsString;

pub const DEFAULT_MAILGUN_BASE_URL: &str = "https://api.mailgun.net";

/// Environment variables the submission handler reads on every request.
pub const MAIL_ENVIRONMENT_VARIABLES: [&str; 5] = [
    "MAILGUN_API_KEY",
    "MAILGUN_DOMAIN",
    "EMAIL_TO",
    "MAILGUN_BASE_URL",
    "EMAIL_FROM",
];

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct EmailClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub sender_name: String,
}

fn default_base_url() -> String {
    DEFAULT_MAILGUN_BASE_URL.to_string()
}

/// Mail provider settings. Every field is optional here; the submission
/// handler decides which absences are fatal.
#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct MailSettings {
    #[serde(rename = "mailgun_api_key")]
    pub api_key: Option<Secret<String>>,
    #[serde(rename = "mailgun_domain")]
    pub domain: Option<String>,
    #[serde(rename = "email_to")]
    pub recipient: Option<String>,
    #[serde(rename = "mailgun_base_url")]
    pub base_url: Option<String>,
    #[serde(rename = "email_from")]
    pub sender: Option<String>,
}

impl MailSettings {
    /// Reads the mail variables from the process environment.
    pub fn from_env() -> Result<MailSettings, config::ConfigError> {
        MailSettings::from_variables(mail_variables(std::env::vars_os()))
    }

    /// Empty values are treated as unset.
    pub fn from_variables(
        variables: config::Map<String, String>,
    ) -> Result<MailSettings, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .ignore_empty(true)
                    .source(Some(variables)),
            )
            .build()?
            .try_deserialize()
    }
}

/// Keeps the mail variables, skipping any entry that is not valid UTF-8.
fn mail_variables(
    variables: impl Iterator<Item = (OsString, OsString)>,
) -> config::Map<String, String> {
    variables
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .filter(|(key, _)| MAIL_ENVIRONMENT_VARIABLES.contains(&key.as_str()))
        .collect()
}

/// Where the submission handler gets its mail settings from.
#[derive(Clone, Debug)]
pub enum MailSettingsSource {
    /// Re-read the process environment on every request.
    Environment,
    Fixed(MailSettings),
}

impl MailSettingsSource {
    pub fn load(&self) -> Result<MailSettings, config::ConfigError> {
        match self {
            MailSettingsSource::Environment => MailSettings::from_env(),
            MailSettingsSource::Fixed(settings) => Ok(settings.clone()),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base")).required(true))
        .add_source(
            config::File::from(configuration_directory.join(environment.as_str())).required(true),
        )
        // E.g. `APP_APPLICATION__PORT=5001` would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
