use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{html, see_other};
use crate::error::BackendError;
use crate::notice::Notice;
use crate::session::{self, SessionId};
use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub refresh: bool,
}

/// Answer of the delete confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Yes,
    No,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    pub confirm: Confirmation,
}

pub(crate) fn to_login() -> HttpResponse {
    see_other("/admin/login").finish()
}

pub(crate) fn to_dashboard() -> HttpResponse {
    see_other("/admin").finish()
}

/// Ends a session the backend no longer accepts.
pub(crate) fn expire(state: &AppState, id: &SessionId) -> HttpResponse {
    state.sessions.close(id);
    info!("admin session expired");
    see_other("/admin/login")
        .cookie(session::expired_cookie())
        .finish()
}

pub async fn dashboard(
    req: HttpRequest,
    query: web::Query<DashboardQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Some(id) = session::current(&req, &state.sessions) else {
        return to_login();
    };
    let query = query.into_inner();

    let Some((token, loaded)) = state
        .sessions
        .with(&id, |s| (s.token.clone(), s.dashboard.is_loaded()))
    else {
        return to_login();
    };

    if query.refresh || !loaded {
        match state.admin.list(&token).await {
            Ok(applications) => {
                state.sessions.with(&id, |s| s.dashboard.replace(applications));
            }
            Err(BackendError::Unauthorized) => return expire(&state, &id),
            Err(err) => {
                warn!(error = %err, "failed to load applications");
                state.sessions.with(&id, |s| s.flash(Notice::load_failed()));
            }
        }
    }

    let brand = &state.config.site.name;
    let rendered = state.sessions.with(&id, |s| {
        s.dashboard.set_filters(query.search, query.category);
        debug!(
            search = %s.dashboard.search_term,
            category = %s.dashboard.filter_category,
            "rendering dashboard"
        );
        let notice = s.take_flash();
        views::admin::render_dashboard(brand, &s.dashboard, notice.as_ref())
    });

    match rendered {
        Some(body) => html(HttpResponse::Ok(), body),
        None => to_login(),
    }
}

pub async fn view_application(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Some(id) = session::current(&req, &state.sessions) else {
        return to_login();
    };
    let application_id = path.into_inner();
    state.sessions.with(&id, |s| s.dashboard.view(&application_id));
    to_dashboard()
}

pub async fn close_application(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let Some(id) = session::current(&req, &state.sessions) else {
        return to_login();
    };
    state.sessions.with(&id, |s| s.dashboard.close());
    to_dashboard()
}

pub async fn confirm_delete(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Some(id) = session::current(&req, &state.sessions) else {
        return to_login();
    };
    let application_id = path.into_inner();
    let brand = &state.config.site.name;

    let page = state
        .sessions
        .with(&id, |s| {
            s.dashboard
                .find(&application_id)
                .map(|app| views::admin::render_confirm_delete(brand, app))
        })
        .flatten();

    match page {
        Some(body) => html(HttpResponse::Ok(), body),
        None => to_dashboard(),
    }
}

pub async fn delete_application(
    req: HttpRequest,
    path: web::Path<String>,
    data: web::Form<ConfirmForm>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Some(id) = session::current(&req, &state.sessions) else {
        return to_login();
    };
    if data.confirm != Confirmation::Yes {
        return to_dashboard();
    }

    let application_id = path.into_inner();
    let Some(token) = state
        .sessions
        .with(&id, |s| {
            s.dashboard
                .find(&application_id)
                .map(|_| s.token.clone())
        })
        .flatten()
    else {
        return to_dashboard();
    };

    match state.admin.delete(&token, &application_id).await {
        Ok(()) => {
            state.sessions.with(&id, |s| {
                s.dashboard.remove(&application_id);
                s.flash(Notice::deleted());
            });
        }
        Err(err) => {
            warn!(error = %err, %application_id, "failed to delete application");
            state
                .sessions
                .with(&id, |s| s.flash(Notice::delete_failed(&err)));
        }
    }
    to_dashboard()
}
