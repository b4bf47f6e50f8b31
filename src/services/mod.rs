pub mod safety_service;
pub mod sos_service;
pub mod user_service;
