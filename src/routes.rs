use rocket::{State, get, post, http::Status, serde::json::Json};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{BreedVote, Greeting};
use crate::queries::Queries;

pub struct AppState {
    pub db: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { db: pool }
    }
}

#[get("/")]
pub async fn index() -> Json<Greeting> {
    Json(Greeting {
        msg: "Hello! There's nothing interesting for GET /".into(),
    })
}

#[get("/leaderboard")]
pub async fn leaderboard(state: &State<AppState>) -> Result<Json<Vec<BreedVote>>, ApiError> {
    Queries::leaderboard(&state.db).await.map(Json)
}

#[post("/breeds/<name>")]
pub async fn cast_vote(state: &State<AppState>, name: &str) -> Result<Json<Vec<BreedVote>>, ApiError> {
    let row = Queries::record_vote(&state.db, name).await?;
    Ok(Json(vec![row]))
}

#[get("/health-check")]
pub async fn health_check(state: &State<AppState>) -> Result<&'static str, ApiError> {
    Queries::ping(&state.db).await?;
    Ok("system ok")
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
