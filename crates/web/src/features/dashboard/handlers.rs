use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        recipient::{RecipientActualsRequest, RecipientResponse, RecipientSummary},
        volunteer::{AssignmentRequest, VolunteerDetailResponse, VolunteerResponse},
    },
};
use uuid::Uuid;
use validator::Validate;

use super::{export, handout, services};
use crate::error::WebResult;

fn attachment(content_type: &'static str, filename: &str, body: impl IntoResponse) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/dashboard/volunteers",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "All volunteer groups", body = Vec<VolunteerResponse>),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Staff only")
    ),
    tag = "dashboard"
)]
pub async fn list_volunteers(State(db): State<Database>) -> WebResult<Response> {
    let volunteers = services::list_volunteers(db.pool()).await?;

    Ok(Json(volunteers).into_response())
}

#[utoipa::path(
    get,
    path = "/api/dashboard/volunteers/{id}",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Volunteer group with its assignment", body = VolunteerDetailResponse),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "dashboard"
)]
pub async fn get_volunteer(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let volunteer = services::get_volunteer(db.pool(), id).await?;

    Ok(Json(volunteer).into_response())
}

#[utoipa::path(
    put,
    path = "/api/dashboard/volunteers/{id}/assignment",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    request_body = AssignmentRequest,
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Assignment updated", body = VolunteerResponse),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Volunteer not found"),
        (status = 409, description = "Recipient does not exist")
    ),
    tag = "dashboard"
)]
pub async fn assign_volunteer(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignmentRequest>,
) -> WebResult<Response> {
    let volunteer = services::assign_volunteer(db.pool(), id, &req).await?;

    Ok(Json(VolunteerResponse::from(volunteer)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/dashboard/recipients",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "All recipients with assignment totals", body = Vec<RecipientSummary>),
        (status = 403, description = "Staff only")
    ),
    tag = "dashboard"
)]
pub async fn list_recipients(State(db): State<Database>) -> WebResult<Response> {
    let recipients = services::list_recipients(db.pool()).await?;

    Ok(Json(recipients).into_response())
}

#[utoipa::path(
    put,
    path = "/api/dashboard/recipients/{id}/actuals",
    params(
        ("id" = Uuid, Path, description = "Recipient ID")
    ),
    request_body = RecipientActualsRequest,
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Actuals recorded", body = RecipientResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Recipient not found")
    ),
    tag = "dashboard"
)]
pub async fn record_actuals(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecipientActualsRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let recipient = services::record_actuals(db.pool(), id, &req).await?;

    Ok(Json(RecipientResponse::from(recipient)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/dashboard/volunteers/{id}/handout",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Printable handout", content_type = "text/html"),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "dashboard"
)]
pub async fn volunteer_handout(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let (volunteer, recipient) = services::roster_entry(db.pool(), id).await?;

    let section = handout::render_handout(&volunteer, recipient.as_ref());
    let document = handout::render_document(&[section]);

    Ok(attachment(
        "text/html; charset=utf-8",
        "rake_up_handout.html",
        document,
    ))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/handouts",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Every handout, one per page", content_type = "text/html"),
        (status = 403, description = "Staff only")
    ),
    tag = "dashboard"
)]
pub async fn all_handouts(State(db): State<Database>) -> WebResult<Response> {
    let roster = services::roster(db.pool()).await?;

    let sections: Vec<String> = roster
        .iter()
        .map(|(volunteer, recipient)| handout::render_handout(volunteer, recipient.as_ref()))
        .collect();

    let unassigned = roster.iter().filter(|(v, _)| !v.is_assigned()).count();
    tracing::info!(count = sections.len(), unassigned, "Rendered handouts");

    Ok(attachment(
        "text/html; charset=utf-8",
        "handouts.html",
        handout::render_document(&sections),
    ))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/export.csv",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Volunteer roster", content_type = "text/csv"),
        (status = 403, description = "Staff only")
    ),
    tag = "dashboard"
)]
pub async fn export_csv(State(db): State<Database>) -> WebResult<Response> {
    let roster = services::roster(db.pool()).await?;
    let body = export::roster_csv(&roster)?;

    Ok(attachment("text/csv", "export.csv", body))
}
