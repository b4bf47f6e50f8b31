pub mod health;
pub mod safety;
pub mod sos;
pub mod users;
