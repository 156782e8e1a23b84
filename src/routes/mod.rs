use actix_web::web;

pub mod appointments;
pub mod auth;
pub mod backend_health;
pub mod goals;
pub mod health;
pub mod medications;
pub mod registration;
pub mod reports;
pub mod sleep;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    cfg.service(
        web::scope("/health")
            .wrap(AuthMiddleware)
            .service(health::health_dashboard)
            .service(health::add_health_entry)
            .service(health::health_entry)
            .service(health::edit_health_entry)
    );
    cfg.service(
        web::scope("/sleep")
            .wrap(AuthMiddleware)
            .service(sleep::sleep_dashboard)
            .service(sleep::add_sleep_record)
    );
    cfg.service(
        web::scope("/goals")
            .wrap(AuthMiddleware)
            .service(goals::goal_dashboard)
            .service(goals::add_goal)
            .service(goals::update_goal)
    );
    // Literal paths are registered before `/{medication_id}`
    cfg.service(
        web::scope("/medications")
            .wrap(AuthMiddleware)
            .service(medications::medication_dashboard)
            .service(medications::add_medication)
            .service(medications::update_medication_log)
            .service(medications::update_medication)
            .service(medications::add_dose_time)
    );
    cfg.service(
        web::scope("/appointments")
            .wrap(AuthMiddleware)
            .service(appointments::appointment_dashboard)
            .service(appointments::add_appointment)
            .service(appointments::appointment_detail)
            .service(appointments::delete_appointment)
    );
    cfg.service(
        web::scope("/reports")
            .wrap(AuthMiddleware)
            .service(reports::report_dashboard)
    );
}
