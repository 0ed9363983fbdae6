/// A player's persistent economy row.
#[derive(Clone, Debug)]
pub struct UserAccount {
    pub user_id: u64,
    pub username: String,
    pub balance: i64,
    pub experience: i64,
    /// Unix seconds at which the running shift began; `None` while idle.
    pub work_started_at: Option<i64>,
}
