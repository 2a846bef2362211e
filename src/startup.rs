use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::{EmailClientSettings, MailSettingsSource};
use crate::routes::{health_check, submit, SubmissionRouter};

pub fn run(
    listener: TcpListener,
    mail_settings: MailSettingsSource,
    email_client: EmailClientSettings,
) -> Result<Server, std::io::Error> {
    let router = Data::new(SubmissionRouter::new(
        mail_settings,
        email_client,
        reqwest::Client::new(),
    ));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            // Every method reaches the handler so it can answer 405 itself.
            .route("/submit", web::route().to(submit))
            .app_data(router.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
