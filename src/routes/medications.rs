use actix_web::{get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::medication_handler::{
    create_dose_time, create_medication, edit_medication, edit_medication_log,
    get_medication_dashboard,
};
use crate::middleware::auth::Claims;
use crate::models::medication::{DoseTimeForm, LogStatusUpdate, MedicationForm};

#[get("/dashboard")]
async fn medication_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    get_medication_dashboard(pool, claims).await
}

#[post("")]
async fn add_medication(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<MedicationForm>,
) -> HttpResponse {
    create_medication(pool, claims, form).await
}

#[put("/logs/{log_id}")]
async fn update_medication_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    log_id: web::Path<Uuid>,
    update: web::Json<LogStatusUpdate>,
) -> HttpResponse {
    edit_medication_log(pool, claims, log_id, update).await
}

#[put("/{medication_id}")]
async fn update_medication(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    medication_id: web::Path<Uuid>,
    form: web::Json<MedicationForm>,
) -> HttpResponse {
    edit_medication(pool, claims, medication_id, form).await
}

#[post("/{medication_id}/dose_times")]
async fn add_dose_time(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    medication_id: web::Path<Uuid>,
    form: web::Json<DoseTimeForm>,
) -> HttpResponse {
    create_dose_time(pool, claims, medication_id, form).await
}
