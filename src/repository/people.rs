//! People repository

use sqlx::PgConnection;

use crate::{
    error::{AppError, AppResult},
    models::person::{CreatePerson, Person, UpdatePerson},
};

const PERSON_COLUMNS: &str = "id, name, yearofbirth AS year_of_birth";

/// Get person by ID
pub async fn get_by_id(conn: &mut PgConnection, id: i32) -> AppResult<Person> {
    sqlx::query_as::<_, Person>(&format!("SELECT {} FROM person WHERE id = $1", PERSON_COLUMNS))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person with id {} not found", id)))
}

/// List all people
pub async fn list_all(conn: &mut PgConnection) -> AppResult<Vec<Person>> {
    let people = sqlx::query_as::<_, Person>(&format!(
        "SELECT {} FROM person ORDER BY id",
        PERSON_COLUMNS
    ))
    .fetch_all(&mut *conn)
    .await?;
    Ok(people)
}

/// Fetch several people at once; unknown ids are skipped
pub async fn find_by_ids(conn: &mut PgConnection, ids: &[i32]) -> AppResult<Vec<Person>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let people = sqlx::query_as::<_, Person>(&format!(
        "SELECT {} FROM person WHERE id = ANY($1) ORDER BY id",
        PERSON_COLUMNS
    ))
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;
    Ok(people)
}

/// Insert a person
pub async fn insert(conn: &mut PgConnection, data: &CreatePerson) -> AppResult<Person> {
    let person = sqlx::query_as::<_, Person>(&format!(
        "INSERT INTO person (name, yearofbirth) VALUES ($1, $2) RETURNING {}",
        PERSON_COLUMNS
    ))
    .bind(&data.name)
    .bind(data.year_of_birth)
    .fetch_one(&mut *conn)
    .await?;
    Ok(person)
}

/// Replace name and year of birth
pub async fn update(conn: &mut PgConnection, id: i32, data: &UpdatePerson) -> AppResult<Person> {
    sqlx::query_as::<_, Person>(&format!(
        "UPDATE person SET name = $2, yearofbirth = $3 WHERE id = $1 RETURNING {}",
        PERSON_COLUMNS
    ))
    .bind(id)
    .bind(&data.name)
    .bind(data.year_of_birth)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Person with id {} not found", id)))
}

/// Delete a person. Their books must have been released first.
pub async fn delete(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM person WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Person with id {} not found", id)));
    }
    Ok(())
}
