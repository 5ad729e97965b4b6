//! Books repository

use sqlx::PgConnection;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookOrder, CreateBook, UpdateBook},
};

const BOOK_COLUMNS: &str =
    "id, title, author, year, id_person AS owner_id, created_at AS assigned_at";

/// Turn user input into a `LIKE` pattern matching titles that start with it.
/// Wildcards in the input match literally.
pub fn title_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Get book by ID
pub async fn get_by_id(conn: &mut PgConnection, id: i32) -> AppResult<Book> {
    sqlx::query_as::<_, Book>(&format!("SELECT {} FROM book WHERE id = $1", BOOK_COLUMNS))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
}

/// All books in the given order
pub async fn list_all(conn: &mut PgConnection, order: BookOrder) -> AppResult<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>(&format!(
        "SELECT {} FROM book ORDER BY {}",
        BOOK_COLUMNS,
        order.as_sql()
    ))
    .fetch_all(&mut *conn)
    .await?;
    Ok(books)
}

/// One page of books; `page` is zero-based
pub async fn list_page(
    conn: &mut PgConnection,
    order: BookOrder,
    page: i64,
    per_page: i64,
) -> AppResult<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>(&format!(
        "SELECT {} FROM book ORDER BY {} LIMIT $1 OFFSET $2",
        BOOK_COLUMNS,
        order.as_sql()
    ))
    .bind(per_page)
    .bind(page.saturating_mul(per_page))
    .fetch_all(&mut *conn)
    .await?;
    Ok(books)
}

/// Books currently assigned to a person
pub async fn find_by_owner(conn: &mut PgConnection, person_id: i32) -> AppResult<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>(&format!(
        "SELECT {} FROM book WHERE id_person = $1 ORDER BY id",
        BOOK_COLUMNS
    ))
    .bind(person_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(books)
}

/// Books whose title starts with `prefix`
pub async fn search_by_title_prefix(conn: &mut PgConnection, prefix: &str) -> AppResult<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>(&format!(
        r"SELECT {} FROM book WHERE title LIKE $1 ESCAPE '\' ORDER BY id",
        BOOK_COLUMNS
    ))
    .bind(title_prefix_pattern(prefix))
    .fetch_all(&mut *conn)
    .await?;
    Ok(books)
}

/// Insert a new, unassigned book
pub async fn insert(conn: &mut PgConnection, data: &CreateBook) -> AppResult<Book> {
    let book = sqlx::query_as::<_, Book>(&format!(
        "INSERT INTO book (title, author, year) VALUES ($1, $2, $3) RETURNING {}",
        BOOK_COLUMNS
    ))
    .bind(&data.title)
    .bind(&data.author)
    .bind(data.year)
    .fetch_one(&mut *conn)
    .await?;
    Ok(book)
}

/// Replace title, author and year, leaving lending state alone
pub async fn update_details(conn: &mut PgConnection, id: i32, data: &UpdateBook) -> AppResult<Book> {
    sqlx::query_as::<_, Book>(&format!(
        "UPDATE book SET title = $2, author = $3, year = $4 WHERE id = $1 RETURNING {}",
        BOOK_COLUMNS
    ))
    .bind(id)
    .bind(&data.title)
    .bind(&data.author)
    .bind(data.year)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
}

/// Persist owner and assignment time of an in-memory book
pub async fn save_lending(conn: &mut PgConnection, book: &Book) -> AppResult<()> {
    let result = sqlx::query("UPDATE book SET id_person = $2, created_at = $3 WHERE id = $1")
        .bind(book.id)
        .bind(book.owner_id)
        .bind(book.assigned_at)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Book with id {} not found", book.id)));
    }
    Ok(())
}

/// Release every book held by a person; returns how many were released
pub async fn release_all_for_owner(conn: &mut PgConnection, person_id: i32) -> AppResult<u64> {
    let result = sqlx::query("UPDATE book SET id_person = NULL, created_at = NULL WHERE id_person = $1")
        .bind(person_id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

/// Delete a book
pub async fn delete(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM book WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Book with id {} not found", id)));
    }
    Ok(())
}
