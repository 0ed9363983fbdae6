use serde::Deserialize;

/// Display name used when no catalog entry gates at or below a level.
pub const UNEMPLOYED_JOB_NAME: &str = "Unemployed";

/// One row of the static job catalog.
#[derive(Clone, Debug, Deserialize)]
pub struct JobDefinition {
    pub required_level: i64,
    pub name: String,
    /// Eddies earned per hour on shift.
    pub salary: i64,
    /// Experience earned per hour on shift.
    pub experience_rate: i64,
}

impl JobDefinition {
    /// Sentinel returned when the catalog has nothing for a level.
    pub fn unemployed() -> Self {
        Self {
            required_level: 0,
            name: UNEMPLOYED_JOB_NAME.to_owned(),
            salary: 0,
            experience_rate: 0,
        }
    }
}
