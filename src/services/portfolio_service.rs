// src/services/portfolio_service.rs
// DOCUMENTATION: Business logic for portfolio entries
// PURPOSE: Check photographer ownership before writing, then delegate to the repository

use crate::db::{PhotographerRepository, PortfolioRepository};
use crate::errors::ApiError;
use crate::models::{CreatePortfolioRequest, PhotographicStyle, Portfolio, UpdatePortfolioRequest};
use sqlx::PgPool;
use validator::Validate;

pub struct PortfolioService;

impl PortfolioService {
    /// Fail with NotFound unless the photographer exists
    async fn require_photographer(pool: &PgPool, photographer_id: i32) -> Result<(), ApiError> {
        if PhotographerRepository::exists(pool, photographer_id).await? {
            Ok(())
        } else {
            log::warn!(
                "Rejected portfolio write for missing photographer {}",
                photographer_id
            );
            Err(ApiError::NotFound(format!(
                "Photographer with id {} not found",
                photographer_id
            )))
        }
    }

    pub async fn create_portfolio(
        pool: &PgPool,
        req: CreatePortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        req.validate()?;
        Self::require_photographer(pool, req.photographer_id).await?;
        PortfolioRepository::create(pool, &req).await
    }

    pub async fn get_portfolio(pool: &PgPool, id: i32) -> Result<Portfolio, ApiError> {
        PortfolioRepository::get_by_id(pool, id).await
    }

    pub async fn list_portfolios(pool: &PgPool) -> Result<Vec<Portfolio>, ApiError> {
        PortfolioRepository::get_all(pool).await
    }

    pub async fn update_portfolio(
        pool: &PgPool,
        id: i32,
        req: UpdatePortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        req.validate()?;
        if let Some(photographer_id) = req.photographer_id {
            Self::require_photographer(pool, photographer_id).await?;
        }
        PortfolioRepository::update(pool, id, &req).await
    }

    pub async fn filter_by_category(
        pool: &PgPool,
        category: PhotographicStyle,
    ) -> Result<Vec<Portfolio>, ApiError> {
        PortfolioRepository::filter_by_category(pool, category).await
    }

    /// Portfolio entries of one photographer; NotFound if the photographer is unknown
    pub async fn list_for_photographer(
        pool: &PgPool,
        photographer_id: i32,
    ) -> Result<Vec<Portfolio>, ApiError> {
        Self::require_photographer(pool, photographer_id).await?;
        PortfolioRepository::get_by_photographer(pool, photographer_id).await
    }
}
