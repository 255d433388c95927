pub mod app_error;
pub mod guard;
pub mod jwt;
pub mod session;
pub mod use_cases;
