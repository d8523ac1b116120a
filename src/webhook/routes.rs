use crate::errors;
use ntex::web::{self, error::WebResponseError};

/// Configures webhook routes for the WhatsApp integration.
///
/// These routes are public endpoints that don't require authentication
/// beyond the verify-token handshake.
///
/// # Routes
/// - `GET /webhook/whatsapp` - WhatsApp webhook verification
/// - `POST /webhook/whatsapp` - WhatsApp webhook receiver
pub fn whatsapp(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook/whatsapp")
            .service((super::whatsapp::verify, super::whatsapp::receive)),
    );
}

/// Fallback for any method the webhook does not support.
pub async fn unsupported_method(req: web::HttpRequest) -> web::HttpResponse {
    errors::UserError::UnsupportedMethod.error_response(&req)
}
