pub mod admin;
pub mod auth;
pub mod files;
pub mod intake;

use actix_web::http::header;
use actix_web::{web, HttpResponse, HttpResponseBuilder};
use serde_json::json;

use crate::state::AppState;
use crate::views;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn main(state: web::Data<AppState>) -> HttpResponse {
    html(HttpResponse::Ok(), views::landing::render(&state.config.site))
}

pub(crate) fn html(mut builder: HttpResponseBuilder, body: String) -> HttpResponse {
    builder.content_type("text/html; charset=utf-8").body(body)
}

pub(crate) fn see_other(location: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location.to_string()));
    builder
}
