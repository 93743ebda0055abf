use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use pouch_site::frontend::pages::{HomePage, NotFound};
use pouch_site::frontend::render_page;

use crate::web::helpers::html;
use crate::web::state::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    tracing::debug!("rendering home page");
    html(StatusCode::OK, render_page(&state.config.site_title, HomePage))
}

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("ok")
}

pub async fn not_found(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    tracing::warn!(path = %req.path(), "no route matched");
    let title = format!("Page not found | {}", state.config.site_title);
    html(StatusCode::NOT_FOUND, render_page(&title, NotFound))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(healthz);
}
