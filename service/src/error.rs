use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    serde::json::{self, Json},
    Request, Response,
};
use shared::data::Model;
use thiserror::Error;

/// Message sent to clients in place of internal failure details.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum Error {
    #[error("An error occured whilst trying to access the database: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("No model with id {0} could be found.")]
    ModelNotFound(String),
    #[error("Empty payload")]
    EmptyPayload,
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Invalid value for query parameter '{parameter}': {reason}")]
    InvalidQuery {
        parameter: &'static str,
        reason: String,
    },
}

impl From<json::Error<'_>> for Error {
    fn from(value: json::Error<'_>) -> Self {
        match value {
            json::Error::Parse(body, _) if body.trim().is_empty() => Error::EmptyPayload,
            json::Error::Parse(_, e) => Error::InvalidPayload(e.to_string()),
            json::Error::Io(e) => Error::InvalidPayload(e.to_string()),
        }
    }
}

pub enum ModelResult {
    Created(Model),
    NoContent,
}

pub trait ErrorResponder {
    fn response(&self) -> (Status, String);
}

impl ErrorResponder for Error {
    fn response(&self) -> (Status, String) {
        match self {
            Error::DatabaseError(_) => (Status::InternalServerError, GENERIC_FAILURE.into()),
            Error::ModelNotFound(_) => (Status::NotFound, self.to_string()),
            Error::EmptyPayload | Error::InvalidPayload(_) | Error::InvalidQuery { .. } => {
                (Status::BadRequest, self.to_string())
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        if let Error::DatabaseError(e) = &self {
            error!("Storage failure: {e}");
        }

        let (status, body) = self.response();
        Response::build()
            .status(status)
            .header(ContentType::Plain)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl<'r> Responder<'r, 'static> for ModelResult {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ModelResult::Created(model) => Response::build_from(Json(model).respond_to(request)?)
                .status(Status::Created)
                .ok(),
            ModelResult::NoContent => Response::build().status(Status::NoContent).ok(),
        }
    }
}
