use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use tracing::error;

pub const GENERIC_ERROR_BODY: &str = "An error occurred. Check server logs.";

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("environment variable {0} has an invalid value")]
    InvalidVar(&'static str),
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("server error: {0}")]
    Serve(#[from] rocket::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        error!("{} {} failed: {}", req.method(), req.uri(), self);

        rocket::Response::build_from(GENERIC_ERROR_BODY.respond_to(req)?)
            .status(Status::InternalServerError)
            .ok()
    }
}
