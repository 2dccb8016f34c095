// src/services/photographer_service.rs
// DOCUMENTATION: Business logic for photographers
// PURPOSE: Intermediary between handlers and repository

use crate::db::PhotographerRepository;
use crate::errors::ApiError;
use crate::models::{
    CreatePhotographerRequest, Genre, Nationality, Photographer, UpdatePhotographerRequest,
};
use sqlx::PgPool;
use validator::Validate;

pub struct PhotographerService;

impl PhotographerService {
    /// Create a new photographer
    pub async fn create_photographer(
        pool: &PgPool,
        req: CreatePhotographerRequest,
    ) -> Result<Photographer, ApiError> {
        req.validate()?;
        PhotographerRepository::create(pool, &req).await
    }

    pub async fn get_photographer(pool: &PgPool, id: i32) -> Result<Photographer, ApiError> {
        PhotographerRepository::get_by_id(pool, id).await
    }

    pub async fn list_photographers(pool: &PgPool) -> Result<Vec<Photographer>, ApiError> {
        PhotographerRepository::get_all(pool).await
    }

    /// Merge the supplied fields into an existing photographer
    pub async fn update_photographer(
        pool: &PgPool,
        id: i32,
        req: UpdatePhotographerRequest,
    ) -> Result<Photographer, ApiError> {
        req.validate()?;
        PhotographerRepository::update(pool, id, &req).await
    }

    /// Mark a photographer as no longer alive
    pub async fn set_inactive(pool: &PgPool, id: i32) -> Result<Photographer, ApiError> {
        Self::update_photographer(pool, id, UpdatePhotographerRequest::inactive()).await
    }

    pub async fn filter_by_genre(
        pool: &PgPool,
        genre: Genre,
    ) -> Result<Vec<Photographer>, ApiError> {
        PhotographerRepository::filter_by_genre(pool, genre).await
    }

    pub async fn filter_by_nationality(
        pool: &PgPool,
        nationality: Nationality,
    ) -> Result<Vec<Photographer>, ApiError> {
        PhotographerRepository::filter_by_nationality(pool, nationality).await
    }
}
