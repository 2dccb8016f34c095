// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and register every route

pub mod health;
pub mod photographers;
pub mod portfolios;

pub use health::config as health_config;
pub use photographers::config as photographers_config;
pub use portfolios::config as portfolios_config;

use crate::errors::ApiError;
use actix_web::web;

/// Register all routes plus extractor error handlers
/// DOCUMENTATION: Malformed form, JSON or path input is answered with the
/// same VALIDATION_ERROR body the services produce
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        ApiError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        ApiError::ValidationError(err.to_string()).into()
    }));

    health_config(cfg);
    photographers_config(cfg);
    portfolios_config(cfg);
}
