//! People management service

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::AppResult,
    models::person::{CreatePerson, Person, PersonDetails, UpdatePerson},
    repository::{books, people, Repository},
};

#[derive(Clone)]
pub struct PeopleService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl PeopleService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// List all people
    pub async fn list(&self) -> AppResult<Vec<Person>> {
        let mut conn = self.repository.acquire().await?;
        people::list_all(&mut conn).await
    }

    /// Get person by ID
    pub async fn find_one(&self, id: i32) -> AppResult<Person> {
        let mut conn = self.repository.acquire().await?;
        people::get_by_id(&mut conn, id).await
    }

    /// Person with the books they hold, flagged when overdue
    pub async fn show(&self, id: i32) -> AppResult<PersonDetails> {
        let mut conn = self.repository.acquire().await?;
        let person = people::get_by_id(&mut conn, id).await?;
        let mut owned = books::find_by_owner(&mut conn, id).await?;

        let now = self.clock.now();
        let overdue = owned
            .iter_mut()
            .map(|book| book.mark_overdue(now))
            .filter(|overdue| *overdue)
            .count();
        if overdue > 0 {
            tracing::debug!("Person {} holds {} overdue book(s)", id, overdue);
        }

        Ok(PersonDetails {
            person,
            books: owned,
        })
    }

    /// Create a new person
    pub async fn create(&self, data: CreatePerson) -> AppResult<Person> {
        let mut tx = self.repository.begin().await?;
        let person = people::insert(&mut tx, &data).await?;
        tx.commit().await?;

        tracing::info!("Person created: id={}", person.id);
        Ok(person)
    }

    /// Update name and year of birth
    pub async fn update(&self, id: i32, data: UpdatePerson) -> AppResult<Person> {
        let mut tx = self.repository.begin().await?;
        let person = people::update(&mut tx, id, &data).await?;
        tx.commit().await?;
        Ok(person)
    }

    /// Delete a person, releasing whatever they hold
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        let released = books::release_all_for_owner(&mut tx, id).await?;
        people::delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Person deleted: id={} ({} book(s) released)", id, released);
        Ok(())
    }
}
