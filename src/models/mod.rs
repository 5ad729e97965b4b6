//! Data models for Bibliotheca

pub mod book;
pub mod person;

// Re-export commonly used types
pub use book::{Book, BookDetails, BookListQuery, CreateBook, SearchOutcome, UpdateBook};
pub use person::{CreatePerson, Person, PersonDetails, UpdatePerson};
