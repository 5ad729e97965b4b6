//! Book model and related types.
//!
//! The `book` table keeps the historical column names `id_person` and
//! `created_at`; queries alias them to `owner_id` and `assigned_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::person::Person;

/// Book row from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Current borrower, if any
    pub owner_id: Option<i32>,
    /// When the current borrower took the book
    pub assigned_at: Option<DateTime<Utc>>,
    /// Computed at read time, never stored
    #[sqlx(skip)]
    #[serde(default)]
    pub overdue: bool,
}

/// Book shown with either its current owner or the people it may be assigned to
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetails {
    pub book: Book,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Person>,
    /// Assignment candidates, present only while the book is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<Person>>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 2, max = 100, message = "Title must be between 2 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 2, max = 100, message = "Author must be between 2 and 100 characters"))]
    pub author: String,
    #[validate(range(min = 1500, message = "Year must be 1500 or later"))]
    pub year: i32,
}

/// Update book request. Lending state is not part of it.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 2, max = 100, message = "Title must be between 2 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 2, max = 100, message = "Author must be between 2 and 100 characters"))]
    pub author: String,
    #[validate(range(min = 1500, message = "Year must be 1500 or later"))]
    pub year: i32,
}

/// Assign book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssignBook {
    #[validate(range(min = 1, message = "Person id must be positive"))]
    pub person_id: i32,
}

/// Book listing query parameters
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookListQuery {
    /// Zero-based page number
    #[validate(range(min = 0, message = "Page must not be negative"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, message = "Books per page must be at least 1"))]
    pub books_per_page: Option<i64>,
    pub sort_by_year: Option<bool>,
}

/// Title prefix search parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Beginning of the title
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOrder {
    Id,
    Year,
}

impl BookOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            BookOrder::Id => "id",
            BookOrder::Year => "year, id",
        }
    }
}

/// How a listing request is served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    All,
    SortedByYear,
    Page {
        page: i64,
        per_page: i64,
        order: BookOrder,
    },
}

impl BookListQuery {
    /// Pagination needs both `page` and `books_per_page`; anything less falls
    /// back to a full listing.
    pub fn mode(&self) -> ListMode {
        let by_year = self.sort_by_year.unwrap_or(false);
        match (self.page, self.books_per_page) {
            (Some(page), Some(per_page)) => ListMode::Page {
                page,
                per_page,
                order: if by_year { BookOrder::Year } else { BookOrder::Id },
            },
            _ if by_year => ListMode::SortedByYear,
            _ => ListMode::All,
        }
    }
}

/// A search hit with the owner resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchHit {
    pub book: Book,
    pub owner: Option<Person>,
}

/// Result of a title prefix search. An empty match is not an error.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { results: Vec<SearchHit> },
    NotFound { message: String },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}
