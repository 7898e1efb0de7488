use crate::models::UnknownValue;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Rejection for requests that cannot be turned into a dashboard event.
/// Events that parse but change nothing are not errors.
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
}

impl From<UnknownValue> for AppError {
    fn from(err: UnknownValue) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metric, Weekday};

    #[test]
    fn unknown_weekday_maps_to_bad_request() {
        let err: AppError = "Caturday".parse::<Weekday>().unwrap_err().into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "unknown weekday 'Caturday'");
    }

    #[test]
    fn rejection_body_carries_the_message() {
        let err: AppError = "steps".parse::<Metric>().unwrap_err().into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
