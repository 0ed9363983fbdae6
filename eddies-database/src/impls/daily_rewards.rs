use anyhow::Context as _;
use chrono::NaiveDate;

use crate::{database::Database, model::leveling::level_for_experience};

/// Amounts granted by one daily claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyReward {
    pub eddies: i64,
    pub experience: i64,
}

/// Result of a claim attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    Granted(DailyReward),
    AlreadyClaimed,
    UnknownUser,
}

/// Reward scale for a level: `5 + 2L` eddies and `10 + 5L` experience.
pub fn reward_for_level(level: i64) -> DailyReward {
    DailyReward {
        eddies: 5 + 2 * level,
        experience: 10 + 5 * level,
    }
}

/// Grant the daily reward at most once per calendar date. The ledger read,
/// the ledger upsert, and the account credit commit together or not at all.
pub async fn claim_daily_reward(
    db: &Database,
    user_id: u64,
    today: NaiveDate,
) -> anyhow::Result<ClaimOutcome> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let mut tx = db.pool().begin().await?;

    let last_claim: Option<NaiveDate> = sqlx::query_scalar(
        "SELECT last_claim_date FROM daily_rewards WHERE user_id = $1 FOR UPDATE",
    )
    .bind(user_id_i64)
    .fetch_optional(&mut *tx)
    .await?;

    if last_claim == Some(today) {
        tx.rollback().await?;
        return Ok(ClaimOutcome::AlreadyClaimed);
    }

    let experience: Option<i64> =
        sqlx::query_scalar("SELECT experience FROM users WHERE user_id = $1")
            .bind(user_id_i64)
            .fetch_optional(&mut *tx)
            .await?;

    let Some(experience) = experience else {
        tx.rollback().await?;
        return Ok(ClaimOutcome::UnknownUser);
    };

    let reward = reward_for_level(level_for_experience(experience));

    sqlx::query(
        "INSERT INTO daily_rewards (user_id, last_claim_date)
         VALUES ($1, $2)
         ON CONFLICT (user_id) DO UPDATE SET last_claim_date = EXCLUDED.last_claim_date",
    )
    .bind(user_id_i64)
    .bind(today)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE users SET balance = balance + $1, experience = experience + $2 WHERE user_id = $3",
    )
    .bind(reward.eddies)
    .bind(reward.experience)
    .bind(user_id_i64)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(ClaimOutcome::Granted(reward))
}

#[cfg(test)]
mod tests {
    use super::reward_for_level;

    #[test]
    fn reward_scales_linearly_with_level() {
        let level_one = reward_for_level(1);
        assert_eq!(level_one.eddies, 7);
        assert_eq!(level_one.experience, 15);

        let level_ten = reward_for_level(10);
        assert_eq!(level_ten.eddies, 25);
        assert_eq!(level_ten.experience, 60);
    }
}
