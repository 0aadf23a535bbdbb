use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;

use super::{html, see_other};
use crate::notice::Notice;
use crate::session::{self, BearerToken};
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub logged_out: bool,
}

pub async fn login_page(query: web::Query<LoginQuery>, state: web::Data<AppState>) -> HttpResponse {
    let notice = query.logged_out.then(Notice::logged_out);
    let body = views::admin::render_login(&state.config.site.name, notice.as_ref(), None);
    html(HttpResponse::Ok(), body)
}

/// Opens a session around the supplied token. The token is checked by the
/// backend on the first list fetch, not here.
pub async fn login(
    req: HttpRequest,
    data: web::Form<LoginForm>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let token = data.into_inner().token.trim().to_string();
    if token.is_empty() {
        let body = views::admin::render_login(&state.config.site.name, None, Some("Access token is required"));
        return html(HttpResponse::UnprocessableEntity(), body);
    }

    if let Some(previous) = session::current(&req, &state.sessions) {
        state.sessions.close(&previous);
    }

    let id = state.sessions.open(BearerToken::new(token));
    info!("admin session opened");

    see_other("/admin").cookie(session::cookie(&id)).finish()
}

pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if let Some(id) = session::current(&req, &state.sessions) {
        state.sessions.close(&id);
        info!("admin session closed");
    }

    see_other("/admin/login?logged_out=true")
        .cookie(session::expired_cookie())
        .finish()
}
