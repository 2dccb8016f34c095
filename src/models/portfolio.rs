// src/models/portfolio.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form::empty_as_none;
use super::PhotographicStyle;

/// Portfolio entry owned by a single photographer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i32,
    pub photographer_id: i32,
    pub title: String,
    pub category: Option<PhotographicStyle>,
    /// Date the photo was taken
    pub photo_created_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a new portfolio entry (form body of POST /portfolios)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePortfolioRequest {
    pub photographer_id: i32,

    #[validate(length(min = 1, max = 50))]
    pub title: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<PhotographicStyle>,

    /// YYYY-MM-DD
    #[serde(default, deserialize_with = "empty_as_none")]
    pub photo_created_at: Option<NaiveDate>,
}

/// Partial update for a portfolio entry (JSON body of PATCH /portfolios/{id})
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePortfolioRequest {
    /// Moves the entry to another existing photographer
    pub photographer_id: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub title: Option<String>,

    pub category: Option<PhotographicStyle>,

    pub photo_created_at: Option<NaiveDate>,
}
