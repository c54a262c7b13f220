use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

use crate::error::GENERIC_ERROR_BODY;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "The requested resource was not found.".into(),
        status: 404
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> &'static str {
    GENERIC_ERROR_BODY
}
