use actix_web::{web, HttpRequest, HttpResponse};
use tracing::warn;

use super::admin::{to_dashboard, to_login};
use crate::notice::Notice;
use crate::session;
use crate::state::AppState;

pub async fn download_pdf(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Some(id) = session::current(&req, &state.sessions) else {
        return to_login();
    };
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

    match state.admin.fetch_pdf(&token, &application_id).await {
        Ok(pdf) => HttpResponse::Ok()
            .append_header(("Content-Type", "application/pdf"))
            .append_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", pdf.filename),
            ))
            .body(pdf.bytes),
        Err(err) => {
            warn!(error = %err, %application_id, "failed to download pdf");
            state.sessions.with(&id, |s| s.flash(Notice::download_failed()));
            to_dashboard()
        }
    }
}
