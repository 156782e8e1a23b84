pub mod health_calculations;
pub mod password;
