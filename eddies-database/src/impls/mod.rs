pub mod accounts;
pub mod daily_rewards;
pub mod jobs;
pub mod leaderboard;
pub mod work;
