use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::helpers::{db_result, validated};
use crate::db::sleep_records::{insert_sleep_record, sleep_records_for_user};
use crate::handlers::claimed_user_id;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::sleep::SleepRecordForm;
use crate::or_respond;
use crate::tracking::dashboards::sleep_dashboard;
use crate::tracking::validation::TrackingValidator;

#[tracing::instrument(
    name = "Get sleep dashboard",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_sleep_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let records = or_respond!(db_result(sleep_records_for_user(&pool, user_id).await));

    HttpResponse::Ok().json(ApiResponse::success("Sleep dashboard", sleep_dashboard(records)))
}

#[tracing::instrument(
    name = "Create sleep record",
    skip(pool, claims, form),
    fields(username = %claims.username, date = %form.date)
)]
pub async fn create_sleep_record(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<SleepRecordForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    or_respond!(validated(TrackingValidator::new().validate_sleep_record(&form)));

    let record = or_respond!(db_result(insert_sleep_record(&pool, user_id, &form).await));
    tracing::info!("Sleep record created: {}", record.id);
    HttpResponse::Created().json(ApiResponse::success("Sleep record created", record))
}
