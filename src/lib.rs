pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod shutdown;
pub mod web;

pub use config::Config;
pub use database::Store;
pub use error::{ApiError, ApiResult};
