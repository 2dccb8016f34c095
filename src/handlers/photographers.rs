// src/handlers/photographers.rs
// DOCUMENTATION: HTTP handlers for photographer operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::models::{CreatePhotographerRequest, Genre, Nationality, UpdatePhotographerRequest};
use crate::services::{PhotographerService, PortfolioService};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// POST /photographers
/// Create a photographer from a form body
pub async fn create_photographer(
    pool: web::Data<PgPool>,
    form: web::Form<CreatePhotographerRequest>,
) -> Result<impl Responder, ApiError> {
    let photographer =
        PhotographerService::create_photographer(pool.get_ref(), form.into_inner()).await?;
    Ok(HttpResponse::Created().json(photographer))
}

/// GET /photographers/{id}
pub async fn get_photographer(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    let photographer = PhotographerService::get_photographer(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photographer))
}

/// GET /all_photographers
pub async fn list_photographers(pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    let photographers = PhotographerService::list_photographers(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(photographers))
}

/// PATCH /photographers/{id}
/// Partial update from a JSON body
pub async fn update_photographer(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<UpdatePhotographerRequest>,
) -> Result<impl Responder, ApiError> {
    let photographer = PhotographerService::update_photographer(
        pool.get_ref(),
        path.into_inner(),
        req.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(photographer))
}

/// PATCH /photographer_state/{id}
/// Mark a photographer as no longer alive
pub async fn set_inactive(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    let photographer = PhotographerService::set_inactive(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photographer))
}

/// GET /photographers_genre_filter/{genre}
pub async fn filter_by_genre(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let genre: Genre = path.parse()?;
    let photographers = PhotographerService::filter_by_genre(pool.get_ref(), genre).await?;
    Ok(HttpResponse::Ok().json(photographers))
}

/// GET /photographers_nationality_filter/{nationality}
pub async fn filter_by_nationality(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let nationality: Nationality = path.parse()?;
    let photographers =
        PhotographerService::filter_by_nationality(pool.get_ref(), nationality).await?;
    Ok(HttpResponse::Ok().json(photographers))
}

/// GET /photographers/{id}/portfolios
pub async fn list_photographer_portfolios(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ApiError> {
    let portfolios =
        PortfolioService::list_for_photographer(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(portfolios))
}

/// Configuration for photographer routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/all_photographers", web::get().to(list_photographers))
        .route("/photographer_state/{id}", web::patch().to(set_inactive))
        .route(
            "/photographers_genre_filter/{genre}",
            web::get().to(filter_by_genre),
        )
        .route(
            "/photographers_nationality_filter/{nationality}",
            web::get().to(filter_by_nationality),
        )
        .service(
            web::scope("/photographers")
                .route("", web::post().to(create_photographer))
                .route("/{id}", web::get().to(get_photographer))
                .route("/{id}", web::patch().to(update_photographer))
                .route("/{id}/portfolios", web::get().to(list_photographer_portfolios)),
        );
}

#[cfg(test)]
mod tests {
    use crate::handlers;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use sqlx::PgPool;

    macro_rules! app {
        ($pool:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($pool.clone()))
                    .configure(handlers::configure),
            )
            .await
        };
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_with_defaults(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([("name", "Vivian Maier")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["name"], "Vivian Maier");
        assert_eq!(body["is_alive"], true);
        assert!(body["created_at"].is_string());
        assert!(body["updated_at"].is_null());
        assert!(body["genre"].is_null());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_with_vocabulary_fields(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([
                ("name", "Tina Modotti"),
                ("genre", "Femenino"),
                ("nationality", "Italia"),
                ("photographic_style_name", "Artístico"),
                ("is_alive", "false"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["nationality"], "Italia");
        assert_eq!(body["photographic_style_name"], "Artístico");
        assert_eq!(body["is_alive"], false);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_accepts_blank_fields_and_checkbox(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([
                ("name", "Vivian Maier"),
                ("genre", ""),
                ("nationality", ""),
                ("photographic_style_name", ""),
                ("is_alive", "on"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["genre"].is_null());
        assert!(body["nationality"].is_null());
        assert!(body["photographic_style_name"].is_null());
        assert_eq!(body["is_alive"], true);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([("name", "Diane Arbus"), ("is_alive", "0")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["is_alive"], false);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([("name", "Robert Capa"), ("is_alive", "")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["is_alive"], true);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_rejects_short_name(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([("name", "Al")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_rejects_unknown_nationality(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([("name", "Someone"), ("nationality", "Narnia")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_get_missing_returns_404(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::get().uri("/photographers/404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Photographer"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_non_numeric_id_is_rejected(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::get().uri("/photographers/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_missing_returns_404(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::patch()
            .uri("/photographers/9")
            .set_json(json!({"is_alive": false}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_only_touches_supplied_fields(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([("name", "Robert Frank"), ("nationality", "Estados Unidos")])
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/photographers/{}", id))
            .set_json(json!({"is_alive": false, "id": 999, "created_at": null}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["name"], "Robert Frank");
        assert_eq!(updated["nationality"], "Estados Unidos");
        assert_eq!(updated["created_at"], created["created_at"]);
        assert_eq!(updated["is_alive"], false);
        assert!(updated["updated_at"].is_string());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_set_inactive(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/photographers")
            .set_form([("name", "Diane Arbus")])
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/photographer_state/{}", created["id"]))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["is_alive"], false);
        assert_eq!(updated["name"], "Diane Arbus");

        let req = test::TestRequest::patch()
            .uri("/photographer_state/31337")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_and_filters(pool: PgPool) {
        let app = app!(pool);

        for (name, genre, nationality) in [
            ("Nan Goldin", "Femenino", "Estados Unidos"),
            ("Daido Moriyama", "Masculino", "Japón"),
            ("Rinko Kawauchi", "Femenino", "Japón"),
        ] {
            let req = test::TestRequest::post()
                .uri("/photographers")
                .set_form([("name", name), ("genre", genre), ("nationality", nationality)])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/all_photographers").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0]["name"], "Nan Goldin");

        let req = test::TestRequest::get()
            .uri("/photographers_genre_filter/Femenino")
            .to_request();
        let women: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(women.len(), 2);

        let req = test::TestRequest::get()
            .uri("/photographers_nationality_filter/Jap%C3%B3n")
            .to_request();
        let japanese: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(japanese.len(), 2);

        let req = test::TestRequest::get()
            .uri("/photographers_nationality_filter/Cuba")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cubans: Vec<Value> = test::read_body_json(resp).await;
        assert!(cubans.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_filter_rejects_unknown_genre(pool: PgPool) {
        let app = app!(pool);

        let req = test::TestRequest::get()
            .uri("/photographers_genre_filter/Otro")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
