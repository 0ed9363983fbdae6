use crate::database::Database;

/// How many rows the leaderboard commands show.
pub const DEFAULT_LEADERBOARD_SIZE: u32 = 10;

/// One leaderboard row: a display name and the ranked value.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub username: String,
    pub value: i64,
}

/// Top accounts by lifetime experience. Ties break on the identifier so the
/// ordering is reproducible.
pub async fn top_by_experience(db: &Database, limit: u32) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let limit_i64 = i64::from(limit.clamp(1, 100));

    let rows: Vec<LeaderboardEntry> = sqlx::query_as(
        "SELECT username, experience AS value FROM users
         ORDER BY experience DESC, user_id ASC
         LIMIT $1",
    )
    .bind(limit_i64)
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

/// Top accounts by balance, same identifier tiebreak.
pub async fn top_by_balance(db: &Database, limit: u32) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let limit_i64 = i64::from(limit.clamp(1, 100));

    let rows: Vec<LeaderboardEntry> = sqlx::query_as(
        "SELECT username, balance AS value FROM users
         ORDER BY balance DESC, user_id ASC
         LIMIT $1",
    )
    .bind(limit_i64)
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}
