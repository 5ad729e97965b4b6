//! People management endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::person::{CreatePerson, Person, PersonDetails, UpdatePerson},
};

use super::{PathParam, ValidatedJson};

/// List all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "List of people", body = Vec<Person>)
    )
)]
pub async fn list_people(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = state.services.people.list().await?;
    Ok(Json(people))
}

/// Get a person with the books they currently hold
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "people",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person details", body = PersonDetails),
        (status = 404, description = "Person not found")
    )
)]
pub async fn get_person(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<PersonDetails>> {
    let details = state.services.people.show(id).await?;
    Ok(Json(details))
}

/// Create a new person
#[utoipa::path(
    post,
    path = "/people",
    tag = "people",
    request_body = CreatePerson,
    responses(
        (status = 201, description = "Person created", body = Person),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_person(
    State(state): State<crate::AppState>,
    ValidatedJson(person): ValidatedJson<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let created = state.services.people.create(person).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing person
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = "people",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn update_person(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(person): ValidatedJson<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let updated = state.services.people.update(id, person).await?;
    Ok(Json(updated))
}

/// Delete a person; any books they hold are released
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = "people",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn delete_person(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<StatusCode> {
    state.services.people.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
