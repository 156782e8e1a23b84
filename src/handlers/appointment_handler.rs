use actix_web::{web, HttpResponse};
use chrono::Local;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::appointments::{
    appointments_for_user, delete_appointment, find_appointment, insert_appointment,
};
use crate::db::helpers::{db_result, require_record, validated};
use crate::handlers::claimed_user_id;
use crate::middleware::auth::Claims;
use crate::models::appointment::AppointmentForm;
use crate::models::common::ApiResponse;
use crate::or_respond;
use crate::tracking::dashboards::appointment_dashboard;
use crate::tracking::validation::TrackingValidator;

#[tracing::instrument(
    name = "Get appointment dashboard",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_appointment_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let appointments = or_respond!(db_result(appointments_for_user(&pool, user_id).await));

    let dashboard = appointment_dashboard(appointments, Local::now().naive_local());
    HttpResponse::Ok().json(ApiResponse::success("Appointment dashboard", dashboard))
}

#[tracing::instrument(
    name = "Create appointment",
    skip(pool, claims, form),
    fields(username = %claims.username)
)]
pub async fn create_appointment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<AppointmentForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    or_respond!(validated(TrackingValidator::new().validate_appointment(&form)));

    let appointment = or_respond!(db_result(insert_appointment(&pool, user_id, &form).await));
    tracing::info!("Appointment created: {}", appointment.id);
    HttpResponse::Created().json(ApiResponse::success("Appointment created", appointment))
}

#[tracing::instrument(
    name = "Get appointment",
    skip(pool, claims),
    fields(username = %claims.username, appointment_id = %appointment_id)
)]
pub async fn get_appointment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    appointment_id: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));

    let appointment = or_respond!(require_record(
        find_appointment(&pool, user_id, *appointment_id).await,
        "Appointment not found"
    ));
    HttpResponse::Ok().json(ApiResponse::success("Appointment", appointment))
}

#[tracing::instrument(
    name = "Delete appointment",
    skip(pool, claims),
    fields(username = %claims.username, appointment_id = %appointment_id)
)]
pub async fn remove_appointment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    appointment_id: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));

    let deleted = or_respond!(db_result(delete_appointment(&pool, user_id, *appointment_id).await));
    if !deleted {
        return HttpResponse::NotFound().json(ApiResponse::<()>::error("Appointment not found"));
    }

    tracing::info!("Appointment deleted");
    HttpResponse::Ok().json(ApiResponse::<()>::success_message("Appointment deleted"))
}
