use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::config::settings::DashboardSettings;
use crate::handlers::report_handler::get_report_dashboard;
use crate::middleware::auth::Claims;

#[get("/dashboard")]
async fn report_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    settings: web::Data<DashboardSettings>,
) -> HttpResponse {
    get_report_dashboard(pool, claims, settings).await
}
