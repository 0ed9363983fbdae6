use std::path::Path;

use anyhow::Context as _;

use crate::{database::Database, model::job::JobDefinition};

/// Built-in job ladder applied on first startup: (required level, name,
/// salary per hour, experience per hour).
const DEFAULT_JOBS: &[(i64, &str, i64, i64)] = &[
    (1, "Scav Runner", 2, 1),
    (3, "Vending Tech", 4, 2),
    (6, "Bartender", 7, 3),
    (10, "Ripperdoc Assistant", 11, 5),
    (15, "Netrunner", 16, 7),
    (21, "Corpo Analyst", 22, 10),
    (28, "Fixer", 30, 14),
    (36, "Arasaka Exec", 40, 19),
];

#[derive(sqlx::FromRow)]
struct JobRow {
    required_level: i64,
    name: String,
    salary: i64,
    experience_rate: i64,
}

/// Resolve the job a level qualifies for: the highest gate at or below it.
/// Falls back to the unemployed sentinel when nothing gates that low.
pub async fn job_for_level(db: &Database, level: i64) -> anyhow::Result<JobDefinition> {
    let row: Option<JobRow> = sqlx::query_as(
        "SELECT required_level, name, salary, experience_rate
         FROM jobs
         WHERE required_level <= $1
         ORDER BY required_level DESC
         LIMIT 1",
    )
    .bind(level)
    .fetch_optional(db.pool())
    .await?;

    Ok(match row {
        Some(row) => JobDefinition {
            required_level: row.required_level,
            name: row.name,
            salary: row.salary,
            experience_rate: row.experience_rate,
        },
        None => JobDefinition::unemployed(),
    })
}

/// Insert the built-in ladder, leaving any operator-edited rows alone.
pub async fn seed_default_jobs(db: &Database) -> anyhow::Result<()> {
    for &(required_level, name, salary, experience_rate) in DEFAULT_JOBS {
        sqlx::query(
            "INSERT INTO jobs (required_level, name, salary, experience_rate)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (required_level) DO NOTHING",
        )
        .bind(required_level)
        .bind(name)
        .bind(salary)
        .bind(experience_rate)
        .execute(db.pool())
        .await?;
    }

    Ok(())
}

/// Parse a JSON catalog override file.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<Vec<JobDefinition>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read job catalog at {}", path.display()))?;
    let jobs: Vec<JobDefinition> =
        serde_json::from_str(&raw).context("job catalog is not valid JSON")?;

    if jobs.is_empty() {
        anyhow::bail!("job catalog file defines no jobs");
    }

    Ok(jobs)
}

/// Swap the whole catalog for the rows of an override file, atomically.
pub async fn replace_catalog(db: &Database, jobs: &[JobDefinition]) -> anyhow::Result<()> {
    let mut tx = db.pool().begin().await?;

    sqlx::query("DELETE FROM jobs").execute(&mut *tx).await?;

    for job in jobs {
        sqlx::query(
            "INSERT INTO jobs (required_level, name, salary, experience_rate)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(job.required_level)
        .bind(&job.name)
        .bind(job.salary)
        .bind(job.experience_rate)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_JOBS;

    #[test]
    fn default_ladder_gates_strictly_ascend() {
        for pair in DEFAULT_JOBS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn every_tier_pays_something() {
        for &(_, _, salary, rate) in DEFAULT_JOBS {
            assert!(salary > 0);
            assert!(rate > 0);
        }
    }

    #[test]
    fn higher_tiers_never_pay_worse() {
        for pair in DEFAULT_JOBS.windows(2) {
            assert!(pair[0].2 <= pair[1].2);
            assert!(pair[0].3 <= pair[1].3);
        }
    }
}
