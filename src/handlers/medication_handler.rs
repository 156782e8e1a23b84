use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{db_result, require_record, store_result, validated};
use crate::db::medications::{
    add_dose_time, insert_medication, schedules_for_user, update_log_status, update_medication,
    PgMedicationStore,
};
use crate::handlers::{claimed_user_id, local_today};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::medication::{DoseTimeForm, LogStatusUpdate, MedicationForm};
use crate::or_respond;
use crate::tracking::adherence::roll_up;
use crate::tracking::dashboards::medication_dashboard;
use crate::tracking::validation::TrackingValidator;

/// Creates today's missing dose logs and returns the adherence tallies.
#[tracing::instrument(
    name = "Get medication dashboard",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_medication_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let today = local_today();

    let schedules = or_respond!(db_result(schedules_for_user(&pool, user_id).await));
    let store = PgMedicationStore::new(&pool);
    let rollup = or_respond!(store_result(roll_up(&store, user_id, &schedules, today).await));

    let dashboard = medication_dashboard(schedules, today, rollup);
    HttpResponse::Ok().json(ApiResponse::success("Medication dashboard", dashboard))
}

#[tracing::instrument(
    name = "Create medication",
    skip(pool, claims, form),
    fields(username = %claims.username)
)]
pub async fn create_medication(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<MedicationForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    or_respond!(validated(TrackingValidator::new().validate_medication(&form)));

    let schedule = or_respond!(db_result(insert_medication(&pool, user_id, &form).await));
    tracing::info!(
        "Medication created: {} with {} dose times",
        schedule.medication.id,
        schedule.dose_times.len()
    );
    HttpResponse::Created().json(ApiResponse::success("Medication created", schedule))
}

#[tracing::instrument(
    name = "Update medication",
    skip(pool, claims, form),
    fields(username = %claims.username, medication_id = %medication_id)
)]
pub async fn edit_medication(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    medication_id: web::Path<Uuid>,
    form: web::Json<MedicationForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    or_respond!(validated(TrackingValidator::new().validate_medication(&form)));

    let schedule = or_respond!(require_record(
        update_medication(&pool, user_id, *medication_id, &form).await,
        "Medication not found"
    ));
    HttpResponse::Ok().json(ApiResponse::success("Medication updated", schedule))
}

#[tracing::instrument(
    name = "Add dose time",
    skip(pool, claims, form),
    fields(username = %claims.username, medication_id = %medication_id)
)]
pub async fn create_dose_time(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    medication_id: web::Path<Uuid>,
    form: web::Json<DoseTimeForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    or_respond!(validated(TrackingValidator::new().validate_recurring_days(&form.recurring_days)));

    let dose_time = or_respond!(require_record(
        add_dose_time(&pool, user_id, *medication_id, &form).await,
        "Medication not found"
    ));
    HttpResponse::Created().json(ApiResponse::success("Dose time added", dose_time))
}

#[tracing::instrument(
    name = "Update medication log",
    skip(pool, claims, update),
    fields(username = %claims.username, log_id = %log_id)
)]
pub async fn edit_medication_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    log_id: web::Path<Uuid>,
    update: web::Json<LogStatusUpdate>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let status = or_respond!(validated(TrackingValidator::new().parse_log_status(&update.status)));

    let log = or_respond!(require_record(
        update_log_status(&pool, user_id, *log_id, status).await,
        "Medication log not found"
    ));
    HttpResponse::Ok().json(ApiResponse::success("Medication log updated", log))
}
