use actix_web::{get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::DashboardSettings;
use crate::handlers::goal_handler::{create_goal, edit_goal, get_goal_dashboard};
use crate::middleware::auth::Claims;
use crate::models::goal::GoalForm;

#[get("/dashboard")]
async fn goal_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    settings: web::Data<DashboardSettings>,
) -> HttpResponse {
    get_goal_dashboard(pool, claims, settings).await
}

#[post("")]
async fn add_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<GoalForm>,
) -> HttpResponse {
    create_goal(pool, claims, form).await
}

#[put("/{goal_id}")]
async fn update_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
    form: web::Json<GoalForm>,
) -> HttpResponse {
    edit_goal(pool, claims, goal_id, form).await
}
