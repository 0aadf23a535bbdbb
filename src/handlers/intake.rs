use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::{html, see_other};
use crate::error::AppError;
use crate::models::{ApplicationForm, ApplicationPayload, FieldErrors};
use crate::notice::Notice;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct ThankYouQuery {
    #[serde(default)]
    pub submitted: bool,
}

pub async fn show_form(state: web::Data<AppState>) -> HttpResponse {
    let body = views::intake::render_form(
        &state.config.site,
        &ApplicationForm::default(),
        &FieldErrors::default(),
        None,
    );
    html(HttpResponse::Ok(), body)
}

pub async fn submit_form(
    data: web::Form<ApplicationForm>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let form = data.into_inner();
    let site = &state.config.site;

    let validated = match form.validate_into() {
        Ok(validated) => validated,
        Err(errors) => {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "application form invalid");
            let body = views::intake::render_form(site, &form, &errors, None);
            return html(HttpResponse::UnprocessableEntity(), body);
        }
    };

    let payload = ApplicationPayload::from(validated);
    match state.intake.submit(&payload).await {
        Ok(_) => see_other("/thank-you?submitted=true").finish(),
        Err(err) => {
            warn!(error = %err, "application submission failed");
            // Keep what the applicant typed so they can correct and resubmit.
            let notice = Notice::submission_failed(&err);
            let body = views::intake::render_form(site, &form, &FieldErrors::default(), Some(&notice));
            html(HttpResponse::Ok(), body)
        }
    }
}

pub async fn thank_you(query: web::Query<ThankYouQuery>, state: web::Data<AppState>) -> HttpResponse {
    let notice = query.submitted.then(Notice::submitted);
    html(
        HttpResponse::Ok(),
        views::intake::render_thank_you(&state.config.site, notice.as_ref()),
    )
}

/// Interactive validation: run the schema against a partial form.
pub async fn validate_json(data: web::Json<ApplicationForm>) -> HttpResponse {
    match data.check() {
        Ok(()) => HttpResponse::Ok().json(json!({ "valid": true })),
        Err(errors) => HttpResponse::UnprocessableEntity().json(json!({
            "valid": false,
            "errors": errors,
        })),
    }
}

pub async fn submit_json(
    data: web::Json<ApplicationForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let validated = data.validate_into().map_err(AppError::Validation)?;
    let payload = ApplicationPayload::from(validated);
    let body = state.intake.submit(&payload).await?;
    Ok(HttpResponse::Created().json(body))
}
