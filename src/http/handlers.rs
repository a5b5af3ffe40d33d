//! Request handlers for the `/books` routes.
//!
//! Each handler takes the store lock once for the whole operation and maps
//! the outcome onto the response envelope.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use bookshelf_lib::{BookInput, ListFilters};
use tracing::{debug, info};

use super::SharedStore;
use super::query::ListQuery;
use super::response::{BookData, BooksData, CreatedData, Envelope};
use crate::error::{ApiError, ApiResult, Operation};

fn payload(body: Result<Json<BookInput>, JsonRejection>) -> ApiResult<BookInput> {
    body.map(|Json(input)| input)
        .map_err(|rejection| ApiError::InvalidPayload(rejection.body_text()))
}

/// `POST /books`
pub async fn add_book(
    State(store): State<SharedStore>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Envelope<CreatedData>)> {
    let input = payload(body)?;
    let book_id = store
        .write()
        .await
        .create_book(input)
        .map_err(ApiError::during(Operation::Add))?;

    info!(%book_id, "Book added");
    Ok((
        StatusCode::CREATED,
        Envelope::success(CreatedData { book_id }).with_message("Book added successfully"),
    ))
}

/// Query pairs for the listing. An undecodable query string lists unfiltered.
fn list_query(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> ListQuery {
    match query {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Ignoring undecodable query string");
            ListQuery::default()
        }
    }
}

/// `GET /books`
pub async fn list_books(
    State(store): State<SharedStore>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Envelope<BooksData> {
    let filters = ListFilters::from(list_query(query));
    let books = store.read().await.list_books(&filters);
    Envelope::success(BooksData { books })
}

/// `GET /books/{id}`
pub async fn get_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> ApiResult<Envelope<BookData>> {
    let book = store
        .read()
        .await
        .get_book(&id)
        .cloned()
        .map_err(ApiError::during(Operation::Get))?;

    Ok(Envelope::success(BookData { book }))
}

/// `PUT /books/{id}`
pub async fn update_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<Envelope<BookData>> {
    let input = payload(body)?;
    let book = store
        .write()
        .await
        .update_book(&id, input)
        .map_err(ApiError::during(Operation::Update))?;

    info!(book_id = %book.id, "Book updated");
    Ok(Envelope::success(BookData { book }).with_message("Book updated successfully"))
}

/// `DELETE /books/{id}`
pub async fn delete_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> ApiResult<Envelope<()>> {
    store
        .write()
        .await
        .delete_book(&id)
        .map_err(ApiError::during(Operation::Delete))?;

    info!(book_id = %id, "Book deleted");
    Ok(Envelope::<()>::ok("Book deleted successfully"))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
