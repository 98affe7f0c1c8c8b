use axum::http::StatusCode as HttpStatusCode;
use strum_macros::{Display, EnumIter};

/// Named HTTP statuses used by [`ApiResponse`](super::ApiResponse).
///
/// The variant name doubles as the error `code` in response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum StatusCode {
    Ok,
    Created,
    NoContent,
    BadRequest,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalServerError,
}

impl From<StatusCode> for HttpStatusCode {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::Ok => HttpStatusCode::OK,
            StatusCode::Created => HttpStatusCode::CREATED,
            StatusCode::NoContent => HttpStatusCode::NO_CONTENT,
            StatusCode::BadRequest => HttpStatusCode::BAD_REQUEST,
            StatusCode::NotFound => HttpStatusCode::NOT_FOUND,
            StatusCode::Conflict => HttpStatusCode::CONFLICT,
            StatusCode::UnprocessableEntity => HttpStatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::InternalServerError => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
