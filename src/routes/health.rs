use actix_web::{get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::health_handler::{
    create_health_entry, get_health_dashboard, get_health_entry, update_health_entry,
};
use crate::middleware::auth::Claims;
use crate::models::health_metric::{HealthDashboardQuery, HealthMetricForm};

#[get("/dashboard")]
async fn health_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<HealthDashboardQuery>,
) -> HttpResponse {
    get_health_dashboard(pool, claims, query).await
}

#[post("/entries")]
async fn add_health_entry(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<HealthMetricForm>,
) -> HttpResponse {
    create_health_entry(pool, claims, form).await
}

#[get("/entries/{date}")]
async fn health_entry(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    date: web::Path<String>,
) -> HttpResponse {
    get_health_entry(pool, claims, date).await
}

#[put("/entries/{date}")]
async fn edit_health_entry(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    date: web::Path<String>,
    form: web::Json<HealthMetricForm>,
) -> HttpResponse {
    update_health_entry(pool, claims, date, form).await
}
