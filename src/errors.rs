use crate::storage::StoreError;
use crate::visitors::VisitorError;
use axum::http::StatusCode;
use tracing::error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        error!("{err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}

impl From<VisitorError> for AppError {
    fn from(err: VisitorError) -> Self {
        match err {
            VisitorError::EmptyName => Self::bad_request(err.to_string()),
            VisitorError::AlreadyExists(_) => Self::conflict(err.to_string()),
            VisitorError::NotFound(_) => Self::not_found(err.to_string()),
            VisitorError::Store(err) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visitor_errors_map_to_statuses() {
        let cases = [
            (VisitorError::EmptyName, StatusCode::BAD_REQUEST),
            (VisitorError::AlreadyExists("Ana".into()), StatusCode::CONFLICT),
            (VisitorError::NotFound("Ana".into()), StatusCode::NOT_FOUND),
            (
                VisitorError::Store(StoreError::NotFound {
                    collection: "visitors".into(),
                    key: "Ana".into(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }

    #[test]
    fn duplicate_message_is_user_visible() {
        let err = AppError::from(VisitorError::AlreadyExists("Ana".into()));
        assert_eq!(err.message, "visitor Ana already exists");
    }
}
