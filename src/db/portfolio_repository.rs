// src/db/portfolio_repository.rs
// DOCUMENTATION: Portfolio database operations
// PURPOSE: Handle create/read/update/filter for portfolio entries

use crate::errors::ApiError;
use crate::models::*;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const PORTFOLIO_COLUMNS: &str = r#"
    id, photographer_id, title, category, photo_created_at, created_at, updated_at
"#;

#[derive(Debug, FromRow)]
struct PortfolioRow {
    pub id: i32,
    pub photographer_id: i32,
    pub title: String,
    pub category: Option<String>,
    pub photo_created_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PortfolioRow {
    fn to_portfolio(self) -> Result<Portfolio, ApiError> {
        let category = parse_optional(self.category).map_err(|e| {
            log::error!("Portfolio {} has an invalid stored category: {}", self.id, e);
            ApiError::DatabaseError(e.to_string())
        })?;

        Ok(Portfolio {
            id: self.id,
            photographer_id: self.photographer_id,
            title: self.title,
            category,
            photo_created_at: self.photo_created_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn to_portfolios(rows: Vec<PortfolioRow>) -> Result<Vec<Portfolio>, ApiError> {
    rows.into_iter().map(PortfolioRow::to_portfolio).collect()
}

pub struct PortfolioRepository;

impl PortfolioRepository {
    /// Insert a portfolio entry
    /// DOCUMENTATION: The photographer_id foreign key is enforced by the database;
    /// callers check existence first to report a 404 instead of a constraint error
    pub async fn create(
        pool: &PgPool,
        req: &CreatePortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        let sql = format!(
            r#"
            INSERT INTO portfolios (
                photographer_id, title, category, photo_created_at, created_at
            )
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING {}
            "#,
            PORTFOLIO_COLUMNS
        );

        let row = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(req.photographer_id)
            .bind(&req.title)
            .bind(req.category.map(|c| c.as_str()))
            .bind(req.photo_created_at)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create portfolio: {}", e);
                ApiError::DatabaseError(format!("Create portfolio failed: {}", e))
            })?;

        let portfolio = row.to_portfolio()?;
        log::info!(
            "Created portfolio {} for photographer {}",
            portfolio.id,
            portfolio.photographer_id
        );
        Ok(portfolio)
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Portfolio, ApiError> {
        let sql = format!("SELECT {} FROM portfolios WHERE id = $1", PORTFOLIO_COLUMNS);

        let row = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching portfolio {}: {}", id, e);
                ApiError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Portfolio not found: {}", id);
                ApiError::NotFound(format!("Portfolio with id {} not found", id))
            })?;

        row.to_portfolio()
    }

    pub async fn get_all(pool: &PgPool) -> Result<Vec<Portfolio>, ApiError> {
        let sql = format!("SELECT {} FROM portfolios ORDER BY id", PORTFOLIO_COLUMNS);

        let rows = sqlx::query_as::<_, PortfolioRow>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list portfolios: {}", e);
                ApiError::DatabaseError(e.to_string())
            })?;

        to_portfolios(rows)
    }

    /// Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: &UpdatePortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        let sql = format!(
            r#"
            UPDATE portfolios
            SET photographer_id = COALESCE($1, photographer_id),
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                photo_created_at = COALESCE($4, photo_created_at),
                updated_at = NOW()
            WHERE id = $5
            RETURNING {}
            "#,
            PORTFOLIO_COLUMNS
        );

        let row = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(req.photographer_id)
            .bind(&req.title)
            .bind(req.category.map(|c| c.as_str()))
            .bind(req.photo_created_at)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Update failed for portfolio {}: {}", id, e);
                ApiError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Portfolio not found for update: {}", id);
                ApiError::NotFound(format!("Portfolio with id {} not found", id))
            })?;

        log::info!("Updated portfolio: {}", id);
        row.to_portfolio()
    }

    pub async fn filter_by_category(
        pool: &PgPool,
        category: PhotographicStyle,
    ) -> Result<Vec<Portfolio>, ApiError> {
        let sql = format!(
            "SELECT {} FROM portfolios WHERE category = $1 ORDER BY id",
            PORTFOLIO_COLUMNS
        );

        let rows = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(category.as_str())
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to filter portfolios by category {}: {}", category, e);
                ApiError::DatabaseError(e.to_string())
            })?;

        to_portfolios(rows)
    }

    /// Entries owned by one photographer
    pub async fn get_by_photographer(
        pool: &PgPool,
        photographer_id: i32,
    ) -> Result<Vec<Portfolio>, ApiError> {
        let sql = format!(
            "SELECT {} FROM portfolios WHERE photographer_id = $1 ORDER BY id",
            PORTFOLIO_COLUMNS
        );

        let rows = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(photographer_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!(
                    "Failed to fetch portfolios for photographer {}: {}",
                    photographer_id,
                    e
                );
                ApiError::DatabaseError(e.to_string())
            })?;

        to_portfolios(rows)
    }
}
