use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::DashboardSettings;
use crate::db::goals::{goals_for_user, insert_goal, update_goal};
use crate::db::health_metrics::health_metrics_for_user;
use crate::db::helpers::{db_result, require_record, validated};
use crate::db::sleep_records::sleep_records_in_range;
use crate::handlers::{claimed_user_id, local_today};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::goal::GoalForm;
use crate::or_respond;
use crate::tracking::dashboards::goal_dashboard;
use crate::tracking::validation::TrackingValidator;
use crate::tracking::windows::TrailingWindow;

#[tracing::instrument(
    name = "Get goal dashboard",
    skip(pool, claims, settings),
    fields(username = %claims.username)
)]
pub async fn get_goal_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    settings: web::Data<DashboardSettings>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    let window = TrailingWindow::new(settings.goal_window_days).ending_on(local_today());

    let goals = or_respond!(db_result(goals_for_user(&pool, user_id).await));
    // Weight goals read the latest entry ever recorded, so the full history is needed.
    let metrics = or_respond!(db_result(health_metrics_for_user(&pool, user_id).await));
    let sleep = or_respond!(db_result(sleep_records_in_range(&pool, user_id, window).await));

    tracing::info!("Evaluating {} goals", goals.len());
    let dashboard = goal_dashboard(goals, &metrics, &sleep, window);
    HttpResponse::Ok().json(ApiResponse::success("Goal dashboard", dashboard))
}

#[tracing::instrument(
    name = "Create goal",
    skip(pool, claims, form),
    fields(username = %claims.username, goal_type = %form.goal_type)
)]
pub async fn create_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<GoalForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    or_respond!(validated(TrackingValidator::new().validate_goal(&form)));

    let goal = or_respond!(db_result(insert_goal(&pool, user_id, &form).await));
    tracing::info!("Goal created: {}", goal.id);
    HttpResponse::Created().json(ApiResponse::success("Goal created", goal))
}

#[tracing::instrument(
    name = "Update goal",
    skip(pool, claims, form),
    fields(username = %claims.username, goal_id = %goal_id)
)]
pub async fn edit_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
    form: web::Json<GoalForm>,
) -> HttpResponse {
    let user_id = or_respond!(claimed_user_id(&claims));
    or_respond!(validated(TrackingValidator::new().validate_goal(&form)));

    let goal = or_respond!(require_record(
        update_goal(&pool, user_id, *goal_id, &form).await,
        "Goal not found"
    ));
    HttpResponse::Ok().json(ApiResponse::success("Goal updated", goal))
}
