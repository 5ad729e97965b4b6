//! API handlers for Bibliotheca REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod people;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{error::AppError, AppState};

/// JSON body that has passed its `validator` rules
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string that has passed its `validator` rules
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

/// Path parameters whose parse failures are reported as JSON errors
pub struct PathParam<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(PathParam(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/search", get(books::search_books))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/:id/assign", post(books::assign_book))
        .route("/books/:id/release", post(books::release_book))
        // People
        .route("/people", get(people::list_people).post(people::create_person))
        .route(
            "/people/:id",
            get(people::get_person)
                .put(people::update_person)
                .patch(people::update_person)
                .delete(people::delete_person),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
