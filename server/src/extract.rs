//! Custom Axum extractors
//!
//! Wrap the stock `Json`, `Path` and `Query` extractors so that their
//! rejections come back as 422 validation errors naming the bad input.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::validation::FieldError;

/// JSON request body.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(&rejection).into()),
        }
    }
}

fn json_rejection(rejection: &JsonRejection) -> FieldError {
    let text = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => data_error(detail_of(&text)),
        JsonRejection::JsonSyntaxError(_) => {
            FieldError::new(&["body"], "json_invalid", detail_of(&text))
        }
        _ => FieldError::new(&["body"], "json_invalid", text),
    }
}

/// Drop the rejection's generic lead-in, keeping the deserializer message.
fn detail_of(text: &str) -> &str {
    text.split_once(": ").map_or(text, |(_, detail)| detail)
}

/// Turn a deserializer message into a located field error.
///
/// Messages look like ``missing field `todo_name` at line 1 column 2`` or
/// `priority: invalid priority code 9 ... at line 1 column 40`.
fn data_error(message: &str) -> FieldError {
    let message = message
        .rfind(" at line ")
        .map_or(message, |at| &message[..at]);

    if let Some(field) = missing_field(message) {
        return FieldError::body(field, "missing", "Field required");
    }

    match message.split_once(": ") {
        Some((path, msg)) if is_field_path(path) => {
            let loc: Vec<&str> = std::iter::once("body").chain(path.split('.')).collect();
            FieldError::new(&loc, "value_error", msg)
        }
        _ => FieldError::new(&["body"], "value_error", message),
    }
}

fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

fn is_field_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}

/// Integer `{todo_id}` path segment.
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(todo_id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                FieldError::new(
                    &["path", "todo_id"],
                    "int_parsing",
                    "Input should be a valid integer, unable to parse string as an integer",
                )
            })?;
        Ok(Self(todo_id))
    }
}

/// `?first_n=` query of the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub first_n: Option<i64>,
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                FieldError::new(
                    &["query", "first_n"],
                    "int_parsing",
                    "Input should be a valid integer, unable to parse string as an integer",
                )
            })?;
        Ok(params)
    }
}
