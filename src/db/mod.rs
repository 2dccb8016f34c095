// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod photographer_repository;
pub mod portfolio_repository;

pub use photographer_repository::*;
pub use portfolio_repository::*;
