//! Book catalog and lending endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{
        AssignBook, Book, BookDetails, BookListQuery, CreateBook, SearchOutcome, SearchQuery,
        UpdateBook,
    },
};

use super::{PathParam, ValidatedJson, ValidatedQuery};

/// List books, optionally paginated and/or sorted by publication year
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookListQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>),
        (status = 400, description = "Invalid paging parameters")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<BookListQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list(&query).await?;
    Ok(Json(books))
}

/// Get a book with its owner, or with the people it can be assigned to
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<BookDetails>> {
    let details = state.services.books.show(id).await?;
    Ok(Json(details))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ValidatedJson(book): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update title, author and year of a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(book): ValidatedJson<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.update(id, book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign a book to a person (overwrites any current assignment)
#[utoipa::path(
    post,
    path = "/books/{id}/assign",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = AssignBook,
    responses(
        (status = 200, description = "Book assigned", body = Book),
        (status = 404, description = "Book or person not found")
    )
)]
pub async fn assign_book(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(request): ValidatedJson<AssignBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.assign(id, request.person_id).await?;
    Ok(Json(book))
}

/// Release a book from its current owner
#[utoipa::path(
    post,
    path = "/books/{id}/release",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book released", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn release_book(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.release(id).await?;
    Ok(Json(book))
}

/// Search books whose title starts with the given text
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matches, or a not_found status when nothing matched", body = SearchOutcome),
        (status = 400, description = "Missing title")
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> AppResult<Json<SearchOutcome>> {
    let outcome = state.services.books.search(&query.title).await?;
    Ok(Json(outcome))
}
