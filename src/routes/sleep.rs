use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::sleep_handler::{create_sleep_record, get_sleep_dashboard};
use crate::middleware::auth::Claims;
use crate::models::sleep::SleepRecordForm;

#[get("/dashboard")]
async fn sleep_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    get_sleep_dashboard(pool, claims).await
}

#[post("/records")]
async fn add_sleep_record(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<SleepRecordForm>,
) -> HttpResponse {
    create_sleep_record(pool, claims, form).await
}
