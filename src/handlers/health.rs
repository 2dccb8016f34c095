// src/handlers/health.rs
// DOCUMENTATION: Health check and greeting handlers
// PURPOSE: Simple endpoints to verify service status

use crate::errors::ApiError;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

pub async fn health_check(pool: web::Data<PgPool>) -> impl Responder {
    let db_healthy = sqlx::query("SELECT 1")
        .execute(pool.get_ref())
        .await
        .map_err(|e| log::warn!("Health check could not reach database: {}", e))
        .is_ok();

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "photographers-api",
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy
    }))
}

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello Photographers World" }))
}

pub async fn say_hello(path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": format!("Hello {}", path.into_inner()) }))
}

/// GET /error
/// Always answers 400, for checking client error handling
pub async fn raise_error() -> Result<HttpResponse, ApiError> {
    Err(ApiError::InvalidInput("Bad Request".to_string()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/hello/{name}", web::get().to(say_hello))
        .route("/error", web::get().to(raise_error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_greetings() {
        let app = test::init_service(App::new().configure(config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Hello Photographers World");

        let req = test::TestRequest::get().uri("/hello/Ansel").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Hello Ansel");
    }

    #[actix_web::test]
    async fn test_error_route_returns_bad_request() {
        let app = test::init_service(App::new().configure(config)).await;

        let req = test::TestRequest::get().uri("/error").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_health_reports_database(pool: PgPool) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["db_healthy"], true);
    }
}
