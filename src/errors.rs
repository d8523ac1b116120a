//! HTTP-visible error types.
//!
//! Every error a webhook caller can observe maps to a status code and a
//! JSON string body, mirroring what the Meta webhook caller expects.

use derive_more::{Display, Error};
use ntex::{http, web};

/// Errors caused by the inbound request itself.
#[derive(Debug, Display, Error)]
pub enum UserError {
    #[display("Error, no query parameters")]
    NoQueryParameters,
    #[display("Error, wrong mode")]
    WrongMode,
    #[display("Error, wrong validation token")]
    WrongVerifyToken,
    #[display("Error, invalid challenge")]
    InvalidChallenge,
    #[display("Error, malformed payload: {_0}")]
    MalformedPayload(#[error(not(source))] String),
    #[display("Unsupported method")]
    UnsupportedMethod,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        logfire::warn!("{error}", error = self.to_string());

        web::HttpResponse::build(self.status_code()).json(&self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::WrongMode | UserError::WrongVerifyToken => http::StatusCode::FORBIDDEN,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

/// Errors raised while talking to the translation or send APIs.
#[derive(Debug, Display, Error)]
pub enum ServerError {
    #[display("Error, external service failure: {_0}")]
    ExternalServiceError(#[error(not(source))] String),
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        logfire::error!("{error}", error = self.to_string());

        web::HttpResponse::build(self.status_code()).json(&self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            UserError::NoQueryParameters.status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::WrongMode.status_code(),
            http::StatusCode::FORBIDDEN
        );
        assert_eq!(
            UserError::WrongVerifyToken.status_code(),
            http::StatusCode::FORBIDDEN
        );
        assert_eq!(
            UserError::UnsupportedMethod.status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::ExternalServiceError("boom".into()).status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
