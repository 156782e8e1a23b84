use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::settings::DashboardSettings;
use crate::db::health_metrics::health_metrics_in_range;
use crate::db::helpers::db_result;
use crate::db::sleep_records::sleep_records_in_range;
use crate::handlers::{claimed_user_id, local_today};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::or_respond;
use crate::tracking::dashboards::report_dashboard;
use crate::tracking::windows::TrailingWindow;

#[tracing::instrument(
    name = "Get report dashboard",
    skip(pool, claims, settings),
    fields(username = %claims.username)
)]
pub async fn get_report_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    settings: web::Data<DashboardSettings>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let window = TrailingWindow::new(settings.report_window_days).ending_on(local_today());

    let metrics = or_respond!(db_result(health_metrics_in_range(&pool, user_id, window).await));
    let sleep = or_respond!(db_result(sleep_records_in_range(&pool, user_id, window).await));

    let dashboard = report_dashboard(settings.report_window_days, &metrics, &sleep);
    HttpResponse::Ok().json(ApiResponse::success("Report dashboard", dashboard))
}
