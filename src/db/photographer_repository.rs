// src/db/photographer_repository.rs
// DOCUMENTATION: Database access layer for photographers
// PURPOSE: One function per operation, each a single SQL statement

use crate::errors::ApiError;
use crate::models::*;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const PHOTOGRAPHER_COLUMNS: &str = r#"
    id, name, genre, nationality, photographic_style_name,
    is_alive, created_at, updated_at
"#;

/// Internal struct for mapping database rows to Photographer
/// DOCUMENTATION: Vocabulary columns are TEXT and parsed on the way out
#[derive(Debug, FromRow)]
struct PhotographerRow {
    pub id: i32,
    pub name: String,
    pub genre: Option<String>,
    pub nationality: Option<String>,
    pub photographic_style_name: Option<String>,
    pub is_alive: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PhotographerRow {
    /// Convert PhotographerRow to Photographer model
    fn to_photographer(self) -> Result<Photographer, ApiError> {
        let corrupt = |e: UnknownTerm| {
            log::error!("Photographer {} has an invalid stored value: {}", self.id, e);
            ApiError::DatabaseError(e.to_string())
        };

        Ok(Photographer {
            id: self.id,
            genre: parse_optional(self.genre).map_err(corrupt)?,
            nationality: parse_optional(self.nationality).map_err(corrupt)?,
            photographic_style_name: parse_optional(self.photographic_style_name)
                .map_err(corrupt)?,
            name: self.name,
            is_alive: self.is_alive,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn to_photographers(rows: Vec<PhotographerRow>) -> Result<Vec<Photographer>, ApiError> {
    rows.into_iter().map(PhotographerRow::to_photographer).collect()
}

fn not_found(id: i32) -> ApiError {
    log::warn!("Photographer not found: {}", id);
    ApiError::NotFound(format!("Photographer with id {} not found", id))
}

/// PhotographerRepository: All database operations for photographers
pub struct PhotographerRepository;

impl PhotographerRepository {
    /// Insert a photographer and return the stored row
    /// DOCUMENTATION: id and created_at come from the database
    pub async fn create(
        pool: &PgPool,
        req: &CreatePhotographerRequest,
    ) -> Result<Photographer, ApiError> {
        let sql = format!(
            r#"
            INSERT INTO photographers (
                name, genre, nationality, photographic_style_name, is_alive, created_at
            )
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING {}
            "#,
            PHOTOGRAPHER_COLUMNS
        );

        let row = sqlx::query_as::<_, PhotographerRow>(&sql)
            .bind(&req.name) // $1
            .bind(req.genre.map(|g| g.as_str())) // $2
            .bind(req.nationality.map(|n| n.as_str())) // $3
            .bind(req.photographic_style_name.map(|s| s.as_str())) // $4
            .bind(req.is_alive.unwrap_or(true)) // $5
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create photographer: {}", e);
                ApiError::DatabaseError(e.to_string())
            })?;

        let photographer = row.to_photographer()?;
        log::info!("Created photographer with id: {}", photographer.id);
        Ok(photographer)
    }

    /// Retrieve photographer by ID
    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Photographer, ApiError> {
        let sql = format!("SELECT {} FROM photographers WHERE id = $1", PHOTOGRAPHER_COLUMNS);

        let row = sqlx::query_as::<_, PhotographerRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching photographer {}: {}", id, e);
                ApiError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| not_found(id))?;

        row.to_photographer()
    }

    /// Whether a photographer with this id exists
    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
        let found: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM photographers WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await
                .map_err(|e| {
                    log::error!("Existence check failed for photographer {}: {}", id, e);
                    ApiError::DatabaseError(e.to_string())
                })?;

        Ok(found.0)
    }

    /// Every photographer, in insertion order
    pub async fn get_all(pool: &PgPool) -> Result<Vec<Photographer>, ApiError> {
        let sql = format!("SELECT {} FROM photographers ORDER BY id", PHOTOGRAPHER_COLUMNS);

        let rows = sqlx::query_as::<_, PhotographerRow>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list photographers: {}", e);
                ApiError::DatabaseError(e.to_string())
            })?;

        to_photographers(rows)
    }

    /// Update existing photographer
    /// DOCUMENTATION: Partial update - only provided fields are modified,
    /// updated_at is always restamped
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: &UpdatePhotographerRequest,
    ) -> Result<Photographer, ApiError> {
        let sql = format!(
            r#"
            UPDATE photographers
            SET name = COALESCE($1, name),
                genre = COALESCE($2, genre),
                nationality = COALESCE($3, nationality),
                photographic_style_name = COALESCE($4, photographic_style_name),
                is_alive = COALESCE($5, is_alive),
                updated_at = NOW()
            WHERE id = $6
            RETURNING {}
            "#,
            PHOTOGRAPHER_COLUMNS
        );

        let row = sqlx::query_as::<_, PhotographerRow>(&sql)
            .bind(&req.name)
            .bind(req.genre.map(|g| g.as_str()))
            .bind(req.nationality.map(|n| n.as_str()))
            .bind(req.photographic_style_name.map(|s| s.as_str()))
            .bind(req.is_alive)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Update failed for photographer {}: {}", id, e);
                ApiError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| not_found(id))?;

        log::info!("Updated photographer: {}", id);
        row.to_photographer()
    }

    pub async fn filter_by_genre(
        pool: &PgPool,
        genre: Genre,
    ) -> Result<Vec<Photographer>, ApiError> {
        Self::filter_by_column(pool, "genre", genre.as_str()).await
    }

    pub async fn filter_by_nationality(
        pool: &PgPool,
        nationality: Nationality,
    ) -> Result<Vec<Photographer>, ApiError> {
        Self::filter_by_column(pool, "nationality", nationality.as_str()).await
    }

    /// Exact-match filter on a vocabulary column
    /// `column` is always one of the literals above, never caller input
    async fn filter_by_column(
        pool: &PgPool,
        column: &'static str,
        value: &str,
    ) -> Result<Vec<Photographer>, ApiError> {
        let sql = format!(
            "SELECT {} FROM photographers WHERE {} = $1 ORDER BY id",
            PHOTOGRAPHER_COLUMNS, column
        );

        log::debug!("Filtering photographers by {} = {}", column, value);

        let rows = sqlx::query_as::<_, PhotographerRow>(&sql)
            .bind(value)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Filter by {} failed: {}", column, e);
                ApiError::DatabaseError(e.to_string())
            })?;

        to_photographers(rows)
    }
}
