//! Book catalog and lending service

use std::{collections::HashMap, sync::Arc};

use chrono::SubsecRound;

use crate::{
    clock::Clock,
    error::AppResult,
    models::{
        book::{
            Book, BookDetails, BookListQuery, BookOrder, CreateBook, ListMode, SearchHit,
            SearchOutcome, UpdateBook,
        },
        person::Person,
    },
    repository::{books, people, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl BooksService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    fn flag_overdue(&self, books: &mut [Book]) {
        let now = self.clock.now();
        for book in books.iter_mut() {
            book.mark_overdue(now);
        }
    }

    /// List books: everything, everything by year, or a page
    pub async fn list(&self, query: &BookListQuery) -> AppResult<Vec<Book>> {
        let mut conn = self.repository.acquire().await?;
        let mut list = match query.mode() {
            ListMode::All => books::list_all(&mut conn, BookOrder::Id).await?,
            ListMode::SortedByYear => books::list_all(&mut conn, BookOrder::Year).await?,
            ListMode::Page { page, per_page, order } => {
                books::list_page(&mut conn, order, page, per_page).await?
            }
        };
        self.flag_overdue(&mut list);
        Ok(list)
    }

    /// Get a book by ID
    pub async fn find_one(&self, id: i32) -> AppResult<Book> {
        let mut conn = self.repository.acquire().await?;
        let mut book = books::get_by_id(&mut conn, id).await?;
        book.mark_overdue(self.clock.now());
        Ok(book)
    }

    /// Current owner of a book, if assigned
    pub async fn owner_of(&self, id: i32) -> AppResult<Option<Person>> {
        let mut conn = self.repository.acquire().await?;
        let book = books::get_by_id(&mut conn, id).await?;
        match book.owner_id {
            Some(owner_id) => Ok(Some(people::get_by_id(&mut conn, owner_id).await?)),
            None => Ok(None),
        }
    }

    /// Book with its owner, or with the people it can be assigned to
    pub async fn show(&self, id: i32) -> AppResult<BookDetails> {
        let mut conn = self.repository.acquire().await?;
        let mut book = books::get_by_id(&mut conn, id).await?;
        book.mark_overdue(self.clock.now());

        let (owner, candidates) = match book.owner_id {
            Some(owner_id) => (Some(people::get_by_id(&mut conn, owner_id).await?), None),
            None => (None, Some(people::list_all(&mut conn).await?)),
        };

        Ok(BookDetails {
            book,
            owner,
            people: candidates,
        })
    }

    /// Books currently assigned to a person
    pub async fn find_by_owner(&self, person_id: i32) -> AppResult<Vec<Book>> {
        let mut conn = self.repository.acquire().await?;
        let mut list = books::find_by_owner(&mut conn, person_id).await?;
        self.flag_overdue(&mut list);
        Ok(list)
    }

    /// Create a new book
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let mut tx = self.repository.begin().await?;
        let book = books::insert(&mut tx, &data).await?;
        tx.commit().await?;

        tracing::info!("Book created: id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Update title, author and year of a book
    pub async fn update(&self, id: i32, data: UpdateBook) -> AppResult<Book> {
        let mut tx = self.repository.begin().await?;
        let mut book = books::update_details(&mut tx, id, &data).await?;
        tx.commit().await?;

        book.mark_overdue(self.clock.now());
        Ok(book)
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        books::delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }

    /// Assign a book to a person. A book that is already assigned is handed
    /// over to the new person.
    pub async fn assign(&self, id: i32, person_id: i32) -> AppResult<Book> {
        let mut tx = self.repository.begin().await?;
        let mut book = books::get_by_id(&mut tx, id).await?;
        let person = people::get_by_id(&mut tx, person_id).await?;

        // TIMESTAMPTZ keeps microseconds
        let now = self.clock.now().trunc_subsecs(6);
        if let Some(previous) = book.assign(person.id, now) {
            tracing::info!(
                "Book {} reassigned from person {} to person {}",
                id,
                previous,
                person.id
            );
        }
        books::save_lending(&mut tx, &book).await?;
        tx.commit().await?;

        tracing::debug!("Book {} assigned to person {} at {}", id, person.id, now);
        Ok(book)
    }

    /// Release a book from its current owner
    pub async fn release(&self, id: i32) -> AppResult<Book> {
        let mut tx = self.repository.begin().await?;
        let mut book = books::get_by_id(&mut tx, id).await?;

        match book.release() {
            Some(previous) => tracing::debug!("Book {} released by person {}", id, previous),
            None => tracing::debug!("Book {} released while already available", id),
        }
        books::save_lending(&mut tx, &book).await?;
        tx.commit().await?;

        Ok(book)
    }

    /// Books whose title starts with `prefix`, each with its owner
    pub async fn search(&self, prefix: &str) -> AppResult<SearchOutcome> {
        let mut conn = self.repository.acquire().await?;
        let mut found = books::search_by_title_prefix(&mut conn, prefix).await?;
        if found.is_empty() {
            tracing::debug!("Title search {:?}: no match", prefix);
            return Ok(SearchOutcome::NotFound {
                message: "No books found".to_string(),
            });
        }
        self.flag_overdue(&mut found);

        let mut owner_ids: Vec<i32> = found.iter().filter_map(|b| b.owner_id).collect();
        owner_ids.sort_unstable();
        owner_ids.dedup();
        let owners: HashMap<i32, Person> = people::find_by_ids(&mut conn, &owner_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let results = found
            .into_iter()
            .map(|book| {
                let owner = book.owner_id.and_then(|id| owners.get(&id).cloned());
                SearchHit { book, owner }
            })
            .collect();

        Ok(SearchOutcome::Found { results })
    }

    /// Whether a book is overdue right now
    pub fn is_overdue(&self, book: &Book) -> bool {
        book.is_overdue_at(self.clock.now())
    }
}
