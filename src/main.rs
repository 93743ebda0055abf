mod web;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use pouch_site::common::{init_tracing, SiteConfig, SiteError};

#[actix_web::main]
async fn main() -> Result<(), SiteError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = SiteConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        "starting Pouch site"
    );

    let bind_addr = config.bind_addr;
    let static_dir = config.static_dir.clone();
    let state = Data::new(web::AppState { config });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::handlers::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .configure(web::handlers::configure_fallback)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
