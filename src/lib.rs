//! Loan application intake site and admin dashboard, served over a remote
//! loan backend.
//!
//! The public side renders a landing page and an application form, validates
//! submissions, reshapes the structured address into a single string and
//! posts the result to the backend. The admin side keeps a per-session view
//! of the backend's applications that can be filtered, inspected, exported
//! as PDF and deleted.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notice;
pub mod services;
pub mod session;
pub mod state;
pub mod views;

use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::main))
        .route("/health", web::get().to(handlers::health_check))

        .route("/loan-form", web::get().to(handlers::intake::show_form))
        .route("/loan-form", web::post().to(handlers::intake::submit_form))
        .route("/thank-you", web::get().to(handlers::intake::thank_you))
        .route("/api/application", web::post().to(handlers::intake::submit_json))
        .route("/api/application/validate", web::post().to(handlers::intake::validate_json))

        .route("/admin/login", web::get().to(handlers::auth::login_page))
        .route("/admin/login", web::post().to(handlers::auth::login))
        .route("/admin/logout", web::post().to(handlers::auth::logout))

        .route("/admin", web::get().to(handlers::admin::dashboard))
        .route("/admin/applications/{id}", web::get().to(handlers::admin::view_application))
        .route("/admin/applications/{id}/close", web::post().to(handlers::admin::close_application))
        .route("/admin/applications/{id}/delete", web::get().to(handlers::admin::confirm_delete))
        .route("/admin/applications/{id}/delete", web::post().to(handlers::admin::delete_application))
        .route("/admin/applications/{id}/pdf", web::get().to(handlers::files::download_pdf));
}
