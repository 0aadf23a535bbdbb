#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::cookie::Cookie;
use actix_web::dev::{ServerHandle, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use loan_desk::config::Config;
use loan_desk::session::SESSION_COOKIE;
use loan_desk::state::AppState;

pub const GOOD_TOKEN: &str = "good-token";
pub const PDF_BYTES: &[u8] = b"%PDF-1.4 stub document";

/// In-process stand-in for the remote loan backend.
#[derive(Clone, Default)]
pub struct Backend {
    pub submissions: Arc<Mutex<Vec<Value>>>,
    pub applications: Arc<Mutex<Vec<Value>>>,
    pub deleted: Arc<Mutex<Vec<String>>>,
    pub list_calls: Arc<Mutex<usize>>,
}

impl Backend {
    pub fn with_applications(applications: Vec<Value>) -> Self {
        let backend = Self::default();
        *backend.applications.lock().unwrap() = applications;
        backend
    }

    pub fn submissions(&self) -> Vec<Value> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

pub fn sample_applications() -> Vec<Value> {
    vec![
        json!({"_id": "1", "name": "Ramesh", "phoneNumber": "9876543210", "loanCategory": "personal", "submittedAt": "2025-11-05T10:15:00.000Z"}),
        json!({"_id": "2", "name": "RAMESH K", "phoneNumber": "9876543211", "loanCategory": "housing", "address": "Village: Hebbal, District: Bangalore Urban, State: Karnataka, Pincode: 560024", "submittedAt": "2025-11-06T10:15:00.000Z"}),
        json!({"_id": "3", "name": "Sita", "phoneNumber": "9876543212", "loanCategory": "personal"}),
        json!({"_id": "locked", "name": "Locked Larry", "phoneNumber": "9876543213", "loanCategory": "business"}),
        json!({"_id": "missing-pdf", "name": "Paperless Priya", "phoneNumber": "9876543214", "loanCategory": "Education Loan"}),
    ]
}

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some("Bearer good-token")
}

async fn submit(body: web::Json<Value>, backend: web::Data<Backend>) -> HttpResponse {
    match body.get("name").and_then(Value::as_str) {
        Some("Reject Me") => HttpResponse::BadRequest().json(json!({"message": "Phone number already registered"})),
        Some("Silent Reject") => HttpResponse::BadRequest().json(json!({})),
        Some("Broken Backend") => HttpResponse::InternalServerError()
            .content_type("text/html")
            .body("<html>oops</html>"),
        _ => {
            backend.submissions.lock().unwrap().push(body.into_inner());
            HttpResponse::Created().json(json!({
                "message": "Application submitted",
                "application": {"_id": "new-1", "submittedAt": "2025-11-07T09:00:00.000Z"}
            }))
        }
    }
}

async fn list(req: HttpRequest, backend: web::Data<Backend>) -> HttpResponse {
    *backend.list_calls.lock().unwrap() += 1;
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Invalid token"}));
    }
    let applications = backend.applications.lock().unwrap().clone();
    HttpResponse::Ok().json(applications)
}

async fn delete(req: HttpRequest, path: web::Path<String>, backend: web::Data<Backend>) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    let id = path.into_inner();
    if id == "locked" {
        return HttpResponse::InternalServerError().json(json!({"message": "cannot delete"}));
    }
    backend
        .applications
        .lock()
        .unwrap()
        .retain(|app| app["_id"] != id.as_str());
    backend.deleted.lock().unwrap().push(id);
    HttpResponse::Ok().json(json!({"message": "deleted"}))
}

async fn pdf(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    if path.as_str() == "missing-pdf" {
        return HttpResponse::NotFound().json(json!({"message": "not found"}));
    }
    HttpResponse::Ok().content_type("application/pdf").body(PDF_BYTES)
}

/// Serves `backend` on an ephemeral port and returns its base url.
pub fn spawn_backend(backend: Backend) -> String {
    spawn_stoppable_backend(backend).0
}

/// Like [`spawn_backend`], also returning a handle that shuts the server down.
pub fn spawn_stoppable_backend(backend: Backend) -> (String, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub backend");
    let port = listener.local_addr().unwrap().port();
    let data = web::Data::new(backend);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/application/formsubmit", web::post().to(submit))
            .route("/api/applications", web::get().to(list))
            .route("/api/applications/{id}", web::delete().to(delete))
            .route("/api/applications/{id}/pdf", web::get().to(pdf))
    })
    .workers(1)
    .listen(listener)
    .expect("listen stub backend")
    .disable_signals()
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://127.0.0.1:{port}"), handle)
}

/// A base url nothing listens on.
pub fn unreachable_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn state(backend_url: &str) -> web::Data<AppState> {
    web::Data::new(AppState::new(Config::with_backend(backend_url)))
}

/// App state whose admin sessions expire as soon as they are opened.
pub fn expiring_state(backend_url: &str) -> web::Data<AppState> {
    let mut config = Config::with_backend(backend_url);
    config.session_ttl_minutes = 0;
    web::Data::new(AppState::new(config))
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

/// Every field of a valid application form, with `overrides` applied.
pub fn form_fields(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, String)> {
    let mut fields: Vec<(&'static str, String)> = [
        ("name", "Ramesh Kumar"),
        ("phoneNumber", "9876543210"),
        ("primaryContactNumber", "9123456780"),
        ("dateOfBirth", "1990-04-12"),
        ("gender", "male"),
        ("loanCategory", "housing"),
        ("loanCategoryOther", ""),
        ("doorNo", "14"),
        ("houseName", "Lakshmi Nilaya"),
        ("village", "Hebbal"),
        ("district", "Bangalore Urban"),
        ("state", "Karnataka"),
        ("pincode", "560024"),
        ("referralName1", "Suresh"),
        ("referralPhone1", "9000000001"),
        ("referralName2", "Meena"),
        ("referralPhone2", "9000000002"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect();

    for (key, value) in overrides {
        match fields.iter().position(|(k, _)| k == key) {
            Some(index) => fields[index].1 = value.to_string(),
            None => fields.push((*key, value.to_string())),
        }
    }
    fields
}
