use form_relay::configuration::{get_configuration, MailSettingsSource};
use form_relay::startup::run;
use form_relay::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("form_relay".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read configuration.");
    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;
    tracing::info!(
        address = %listener.local_addr()?,
        mail_base_url = %config.email_client.base_url,
        "Starting the form relay"
    );

    run(listener, MailSettingsSource::Environment, config.email_client)?.await
}
