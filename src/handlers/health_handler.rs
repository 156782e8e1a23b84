use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::health_metrics::{
    health_metric_on, health_metrics_for_user, insert_health_metric, update_health_metric,
};
use crate::db::helpers::{db_result, require_record, validated};
use crate::handlers::{claimed_user_id, local_today};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::health_metric::{HealthDashboardQuery, HealthMetricForm};
use crate::or_respond;
use crate::tracking::dashboards::health_dashboard;
use crate::tracking::validation::TrackingValidator;
use crate::tracking::windows::{DateRange, DATE_FORMAT};

fn parse_entry_date(raw: &str) -> Result<NaiveDate, HttpResponse> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        tracing::info!("Rejected entry date: {}", raw);
        HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid date format. Use YYYY-MM-DD"))
    })
}

#[tracing::instrument(
    name = "Get health dashboard",
    skip(pool, claims, query),
    fields(username = %claims.username)
)]
pub async fn get_health_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<HealthDashboardQuery>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let range = DateRange::from_query(query.start_date.as_deref(), query.end_date.as_deref());
    if range.is_none() && (query.start_date.is_some() || query.end_date.is_some()) {
        tracing::debug!("Ignoring incomplete or invalid date range");
    }

    let metrics = or_respond!(db_result(health_metrics_for_user(&pool, user_id).await));
    tracing::info!("Building health dashboard from {} entries", metrics.len());

    let dashboard = health_dashboard(metrics, range, local_today());
    HttpResponse::Ok().json(ApiResponse::success("Health dashboard", dashboard))
}

#[tracing::instrument(
    name = "Create health entry",
    skip(pool, claims, form),
    fields(username = %claims.username, date = %form.date)
)]
pub async fn create_health_entry(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<HealthMetricForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let entry = or_respond!(validated(TrackingValidator::new().validate_health_metric(&form)));

    let metric = or_respond!(db_result(insert_health_metric(&pool, user_id, &entry).await));
    tracing::info!("Health entry created: {}", metric.id);
    HttpResponse::Created().json(ApiResponse::success("Health entry created", metric))
}

#[tracing::instrument(
    name = "Get health entry",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_health_entry(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    date: web::Path<String>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let date = or_respond!(parse_entry_date(&date));

    let metric = or_respond!(require_record(
        health_metric_on(&pool, user_id, date).await,
        "No health entry for this date"
    ));
    HttpResponse::Ok().json(ApiResponse::success("Health entry", metric))
}

/// Replaces the entry stored for the date in the path. The form may move it
/// to another date.
#[tracing::instrument(
    name = "Update health entry",
    skip(pool, claims, form),
    fields(username = %claims.username)
)]
pub async fn update_health_entry(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    date: web::Path<String>,
    form: web::Json<HealthMetricForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let date = or_respond!(parse_entry_date(&date));
    let entry = or_respond!(validated(TrackingValidator::new().validate_health_metric(&form)));

    let existing = or_respond!(require_record(
        health_metric_on(&pool, user_id, date).await,
        "No health entry for this date"
    ));
    let metric = or_respond!(require_record(
        update_health_metric(&pool, user_id, existing.id, &entry).await,
        "No health entry for this date"
    ));

    tracing::info!("Health entry updated: {}", metric.id);
    HttpResponse::Ok().json(ApiResponse::success("Health entry updated", metric))
}
