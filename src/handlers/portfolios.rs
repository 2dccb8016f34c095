// src/handlers/portfolios.rs
// DOCUMENTATION: HTTP handlers for portfolio operations

use crate::errors::ApiError;
use crate::models::{CreatePortfolioRequest, PhotographicStyle, UpdatePortfolioRequest};
use crate::services::PortfolioService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// POST /portfolios
pub async fn create_portfolio(
    pool: web::Data<PgPool>,
    form: web::Form<CreatePortfolioRequest>,
) -> Result<impl Responder, ApiError> {
    let portfolio = PortfolioService::create_portfolio(pool.get_ref(), form.into_inner()).await?;
    Ok(HttpResponse::Created().json(portfolio))
}

/// GET /portfolios/{id}
pub async fn get_portfolio(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    let portfolio = PortfolioService::get_portfolio(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(portfolio))
}

/// GET /all_portfolios
pub async fn list_portfolios(pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    let portfolios = PortfolioService::list_portfolios(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(portfolios))
}

/// PATCH /portfolios/{id}
pub async fn update_portfolio(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<UpdatePortfolioRequest>,
) -> Result<impl Responder, ApiError> {
    let portfolio =
        PortfolioService::update_portfolio(pool.get_ref(), path.into_inner(), req.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(portfolio))
}

/// GET /portfolios_filter/{category}
pub async fn filter_by_category(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let category: PhotographicStyle = path.parse()?;
    let portfolios = PortfolioService::filter_by_category(pool.get_ref(), category).await?;
    Ok(HttpResponse::Ok().json(portfolios))
}

/// Configuration for portfolio routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/all_portfolios", web::get().to(list_portfolios))
        .route(
            "/portfolios_filter/{category}",
            web::get().to(filter_by_category),
        )
        .service(
            web::scope("/portfolios")
                .route("", web::post().to(create_portfolio))
                .route("/{id}", web::get().to(get_portfolio))
                .route("/{id}", web::patch().to(update_portfolio)),
        );
}
