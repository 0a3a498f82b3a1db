use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates;
use astra::Response;
use tracing::{error, warn};

/// Converts a ServerError into the rendered error page with the
/// matching status code. This is the last stop for every handler
/// error, so internal details get logged here and a safe message goes
/// to the page.
pub fn error_to_response(err: ServerError) -> Response {
    let status = match &err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Unauthorized(_) => 401,
        ServerError::Forbidden(_) => 403,
        ServerError::Network(_) | ServerError::Upstream { .. } => 502,
        ServerError::DbError(_) | ServerError::InternalError => 500,
    };
    match status {
        500 => error!("request failed: {err}"),
        404 => {}
        _ => warn!("request failed: {err}"),
    }
    html_with_status(status, templates::error_page(status, &err.user_message()))
}
