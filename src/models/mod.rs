// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod form;
pub mod photographer;
pub mod portfolio;
pub mod terms;

pub use photographer::*;
pub use portfolio::*;
pub use terms::*;
