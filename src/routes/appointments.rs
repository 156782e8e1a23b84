use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::appointment_handler::{
    create_appointment, get_appointment, get_appointment_dashboard, remove_appointment,
};
use crate::middleware::auth::Claims;
use crate::models::appointment::AppointmentForm;

#[get("/dashboard")]
async fn appointment_dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    get_appointment_dashboard(pool, claims).await
}

#[post("")]
async fn add_appointment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    form: web::Json<AppointmentForm>,
) -> HttpResponse {
    create_appointment(pool, claims, form).await
}

#[get("/{appointment_id}")]
async fn appointment_detail(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    appointment_id: web::Path<Uuid>,
) -> HttpResponse {
    get_appointment(pool, claims, appointment_id).await
}

#[delete("/{appointment_id}")]
async fn delete_appointment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    appointment_id: web::Path<Uuid>,
) -> HttpResponse {
    remove_appointment(pool, claims, appointment_id).await
}
