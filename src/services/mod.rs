//! Business logic services

pub mod books;
pub mod people;

use std::sync::Arc;

use crate::{clock::Clock, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub people: people::PeopleService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository and time source
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self {
            books: books::BooksService::new(repository.clone(), clock.clone()),
            people: people::PeopleService::new(repository.clone(), clock),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn check_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
