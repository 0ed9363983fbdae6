use anyhow::Context as _;
use tracing::info;

use crate::{
    database::Database,
    impls::{accounts::get_account, jobs::job_for_level},
    model::{job::JobDefinition, leveling::level_for_experience},
};

/// Hours one shift runs for; the payout is always this fixed multiple no
/// matter how long settlement lags behind the clock.
pub const SHIFT_HOURS: i64 = 4;

/// Shift length in seconds.
pub const SHIFT_SECONDS: i64 = SHIFT_HOURS * 60 * 60;

/// Result of asking to start a shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartShiftOutcome {
    Started,
    AlreadyWorking,
    UnknownUser,
}

/// What a user is doing right now, resolved against their current level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShiftStatus {
    Idle {
        job_name: String,
    },
    OnShift {
        job_name: String,
        remaining_seconds: i64,
    },
}

/// Payout of one completed shift: (eddies, experience).
pub fn shift_reward(job: &JobDefinition) -> (i64, i64) {
    (job.salary * SHIFT_HOURS, job.experience_rate * SHIFT_HOURS)
}

/// Seconds left on a shift started at `started_at`, zero once it is due.
pub fn remaining_shift_seconds(started_at: i64, now: i64) -> i64 {
    (started_at + SHIFT_SECONDS - now).max(0)
}

/// Begin a shift. The NULL check inside the update is the gate: of two racing
/// starts exactly one wins, and the loser sees the row already claimed.
pub async fn start_shift(
    db: &Database,
    user_id: u64,
    now: i64,
) -> anyhow::Result<StartShiftOutcome> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let result = sqlx::query(
        "UPDATE users SET work_started_at = $1
         WHERE user_id = $2 AND work_started_at IS NULL",
    )
    .bind(now)
    .bind(user_id_i64)
    .execute(db.pool())
    .await?;

    if result.rows_affected() > 0 {
        return Ok(StartShiftOutcome::Started);
    }

    let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE user_id = $1")
        .bind(user_id_i64)
        .fetch_optional(db.pool())
        .await?;

    Ok(if exists.is_some() {
        StartShiftOutcome::AlreadyWorking
    } else {
        StartShiftOutcome::UnknownUser
    })
}

#[derive(sqlx::FromRow)]
struct DueWorkerRow {
    user_id: i64,
    experience: i64,
}

/// Settle every shift that has run its four hours: credit the payout for the
/// job the user's current level qualifies for and clear the shift marker.
///
/// Each row is settled by one conditional update that re-checks eligibility,
/// so concurrent or repeated sweeps credit a shift exactly once. Returns the
/// number of shifts settled.
pub async fn settle_due_shifts(db: &Database, now: i64) -> anyhow::Result<u64> {
    let cutoff = now - SHIFT_SECONDS;

    let due: Vec<DueWorkerRow> = sqlx::query_as(
        "SELECT user_id, experience FROM users
         WHERE work_started_at IS NOT NULL AND work_started_at <= $1",
    )
    .bind(cutoff)
    .fetch_all(db.pool())
    .await?;

    let mut settled = 0_u64;
    for worker in due {
        // Level is read at settlement, not at shift start: crossing a level
        // threshold mid-shift pays the whole shift at the new job's rate.
        let level = level_for_experience(worker.experience);
        let job = job_for_level(db, level).await?;
        let (earned_eddies, earned_experience) = shift_reward(&job);

        let result = sqlx::query(
            "UPDATE users
             SET balance = balance + $1,
                 experience = experience + $2,
                 work_started_at = NULL
             WHERE user_id = $3
               AND work_started_at IS NOT NULL
               AND work_started_at <= $4",
        )
        .bind(earned_eddies)
        .bind(earned_experience)
        .bind(worker.user_id)
        .bind(cutoff)
        .execute(db.pool())
        .await?;

        if result.rows_affected() > 0 {
            settled += 1;
            info!(
                user_id = worker.user_id,
                job = %job.name,
                earned_eddies,
                earned_experience,
                "settled completed shift"
            );
        }
    }

    Ok(settled)
}

/// Report what a user is doing: their current job while idle, or the job plus
/// the time left while a shift is running.
pub async fn shift_status(
    db: &Database,
    user_id: u64,
    now: i64,
) -> anyhow::Result<Option<ShiftStatus>> {
    let Some(account) = get_account(db, user_id).await? else {
        return Ok(None);
    };

    let level = level_for_experience(account.experience);
    let job = job_for_level(db, level).await?;

    Ok(Some(match account.work_started_at {
        Some(started_at) if now - started_at < SHIFT_SECONDS => ShiftStatus::OnShift {
            job_name: job.name,
            remaining_seconds: remaining_shift_seconds(started_at, now),
        },
        _ => ShiftStatus::Idle { job_name: job.name },
    }))
}

#[cfg(test)]
mod tests {
    use super::{SHIFT_SECONDS, remaining_shift_seconds, shift_reward};
    use crate::model::job::JobDefinition;

    fn job(salary: i64, experience_rate: i64) -> JobDefinition {
        JobDefinition {
            required_level: 1,
            name: "Scav Runner".to_owned(),
            salary,
            experience_rate,
        }
    }

    #[test]
    fn reward_is_the_fixed_four_hour_multiple() {
        assert_eq!(shift_reward(&job(1, 1)), (4, 4));
        assert_eq!(shift_reward(&job(16, 7)), (64, 28));
    }

    #[test]
    fn unemployed_shift_settles_to_nothing() {
        assert_eq!(shift_reward(&JobDefinition::unemployed()), (0, 0));
    }

    #[test]
    fn remaining_time_counts_down_and_stops_at_zero() {
        assert_eq!(remaining_shift_seconds(100, 100), SHIFT_SECONDS);
        assert_eq!(remaining_shift_seconds(100, 101), SHIFT_SECONDS - 1);
        assert_eq!(remaining_shift_seconds(100, 100 + SHIFT_SECONDS), 0);
        assert_eq!(remaining_shift_seconds(100, 100 + SHIFT_SECONDS + 500), 0);
    }
}
