use anyhow::Context as _;

use crate::{database::Database, model::account::UserAccount};

#[derive(sqlx::FromRow)]
struct AccountRow {
    user_id: i64,
    username: String,
    balance: i64,
    experience: i64,
    work_started_at: Option<i64>,
}

/// Insert an account row for a user we have never seen. Returns true when a
/// new row was created; an existing row is left untouched.
pub async fn ensure_account(db: &Database, user_id: u64, username: &str) -> anyhow::Result<bool> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let result = sqlx::query(
        "INSERT INTO users (user_id, username, balance, experience)
         VALUES ($1, $2, 0, 0)
         ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(user_id_i64)
    .bind(username)
    .execute(db.pool())
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_account(db: &Database, user_id: u64) -> anyhow::Result<Option<UserAccount>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<AccountRow> = sqlx::query_as(
        "SELECT user_id, username, balance, experience, work_started_at
         FROM users
         WHERE user_id = $1",
    )
    .bind(user_id_i64)
    .fetch_optional(db.pool())
    .await?;

    row.map(to_account).transpose()
}

/// Rename an account. Callers sanitize the name first; returns false when the
/// user has no row to rename.
pub async fn update_username(db: &Database, user_id: u64, username: &str) -> anyhow::Result<bool> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let result = sqlx::query("UPDATE users SET username = $1 WHERE user_id = $2")
        .bind(username)
        .bind(user_id_i64)
        .execute(db.pool())
        .await?;

    Ok(result.rows_affected() > 0)
}

fn to_account(row: AccountRow) -> anyhow::Result<UserAccount> {
    Ok(UserAccount {
        user_id: u64::try_from(row.user_id).context("user_id row out of u64 range")?,
        username: row.username,
        balance: row.balance,
        experience: row.experience,
        work_started_at: row.work_started_at,
    })
}
