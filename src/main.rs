use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use wtm_site::config::AppConfig;
use wtm_site::content::SiteContent;
use wtm_site::{errors, handlers, mail};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    // Bad fixtures stop the server before it binds
    let content = SiteContent::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let content = web::Data::new(content);

    let mailer = web::Data::from(mail::from_config(&config));
    let secret_key = config.session_key();
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(config.cookie_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(content.clone())
            .app_data(config.clone())
            .app_data(mailer.clone())
            .service(actix_files::Files::new("/assets", &config.assets_dir))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async { errors::not_found() }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
