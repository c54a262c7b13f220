use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::BreedVote;

const LEADERBOARD_LIMIT: i64 = 10;

pub struct Queries;

impl Queries {
    pub async fn leaderboard(pool: &PgPool) -> Result<Vec<BreedVote>, ApiError> {
        let rows = sqlx::query_as::<_, BreedVote>(
            "SELECT breed_name, votes FROM breed_votes ORDER BY votes DESC LIMIT $1",
        )
        .bind(LEADERBOARD_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    pub async fn record_vote(pool: &PgPool, name: &str) -> Result<BreedVote, ApiError> {
        let row = sqlx::query_as::<_, BreedVote>(
            "INSERT INTO breed_votes (breed_name) VALUES ($1)
             ON CONFLICT (breed_name) DO UPDATE SET votes = breed_votes.votes + 1
             RETURNING breed_name, votes",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn ping(pool: &PgPool) -> Result<(), ApiError> {
        sqlx::query("SELECT now()").execute(pool).await?;
        Ok(())
    }
}
