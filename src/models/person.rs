//! Person (reader) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::Book;

/// Person row from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub year_of_birth: i32,
}

/// Person together with the books currently assigned to them
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonDetails {
    pub person: Person,
    /// Owned books, each with its `overdue` flag computed at read time
    pub books: Vec<Book>,
}

/// Create person request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePerson {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(range(min = 1900, message = "Year of birth must be 1900 or later"))]
    pub year_of_birth: i32,
}

/// Update person request (full replacement of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePerson {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(range(min = 1900, message = "Year of birth must be 1900 or later"))]
    pub year_of_birth: i32,
}
