pub mod public;

use actix_web::web;

/// Configure all routes EXCEPT the 404 fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
}

/// Configure the fallback for unmatched paths. This MUST be called last.
pub fn configure_fallback(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(public::not_found));
}
