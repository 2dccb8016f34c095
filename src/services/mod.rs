// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod photographer_service;
pub mod portfolio_service;

pub use photographer_service::*;
pub use portfolio_service::*;
