// src/models/photographer.rs
// DOCUMENTATION: Photographer record and request DTOs
// PURPOSE: Serialization and boundary validation for the photographers table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form::{empty_as_none, lenient_bool};
use super::{Genre, Nationality, PhotographicStyle};

/// A photographer as stored in the photographers table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photographer {
    /// Auto-generated identifier
    pub id: i32,

    /// Display name, 3 to 20 characters
    pub name: String,

    pub genre: Option<Genre>,

    pub nationality: Option<Nationality>,

    pub photographic_style_name: Option<PhotographicStyle>,

    /// false once the photographer has been marked inactive
    pub is_alive: bool,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified (null until the first update)
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request DTO for creating a photographer
/// DOCUMENTATION: Parsed from the form body of POST /photographers
/// Enumerated fields are rejected during extraction when outside their vocabulary
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePhotographerRequest {
    #[validate(length(min = 3, max = 20))]
    pub name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub genre: Option<Genre>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub nationality: Option<Nationality>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub photographic_style_name: Option<PhotographicStyle>,

    /// Defaults to true when omitted or empty
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_alive: Option<bool>,
}

/// Request DTO for updating a photographer
/// DOCUMENTATION: JSON body of PATCH /photographers/{id}
/// Only these fields can change; absent or null fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePhotographerRequest {
    #[validate(length(min = 3, max = 20))]
    pub name: Option<String>,

    pub genre: Option<Genre>,

    pub nationality: Option<Nationality>,

    pub photographic_style_name: Option<PhotographicStyle>,

    pub is_alive: Option<bool>,
}

impl UpdatePhotographerRequest {
    /// The update applied by PATCH /photographer_state/{id}
    pub fn inactive() -> Self {
        Self {
            is_alive: Some(false),
            ..Default::default()
        }
    }
}
