//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, people};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bibliotheca API",
        version = "1.0.0",
        description = "Book lending library REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::assign_book,
        books::release_book,
        books::search_books,
        // People
        people::list_people,
        people::get_person,
        people::create_person,
        people::update_person,
        people::delete_person,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookDetails,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::AssignBook,
            crate::models::book::SearchHit,
            crate::models::book::SearchOutcome,
            // People
            crate::models::person::Person,
            crate::models::person::PersonDetails,
            crate::models::person::CreatePerson,
            crate::models::person::UpdatePerson,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and lending"),
        (name = "people", description = "Reader management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
