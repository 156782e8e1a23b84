pub mod appointment;
pub mod auth;
pub mod common;
pub mod goal;
pub mod health_metric;
pub mod medication;
pub mod report;
pub mod sleep;
pub mod user;
