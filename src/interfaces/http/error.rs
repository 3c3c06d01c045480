use crate::domain::error::ApiError;
use crate::domain::model::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(%status, error = %message, "request failed");
        } else {
            info!(%status, error = %message, "request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
