use poise::serenity_prelude as serenity;

use eddies_database::model::account::UserAccount;
use eddies_database::model::leveling::{experience_for_next_level, level_for_experience};
use eddies_utils::embed::DEFAULT_EMBED_COLOR;

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{}`", usage)
}

/// Shown when a command targets an account that was never created. The
/// onboarding handler creates one on any message, so this is rare.
pub fn no_account_message() -> &'static str {
    "No account yet. Say something in chat first!"
}

/// Profile card: balance, level, experience progress, and what the user is
/// doing right now.
pub fn profile_embed(account: &UserAccount, job_line: &str) -> serenity::CreateEmbed {
    let level = level_for_experience(account.experience);
    let next_threshold = experience_for_next_level(level);

    serenity::CreateEmbed::new()
        .title(format!("{}'s profile", account.username))
        .color(DEFAULT_EMBED_COLOR)
        .field("Balance", format!("{} eddies", account.balance), true)
        .field("Level", level.to_string(), true)
        .field(
            "Experience",
            format!("{}/{}", account.experience, next_threshold),
            true,
        )
        .field("Job", job_line.to_owned(), false)
}

/// Leaderboard embed: one pre-formatted line per ranked entry.
pub fn leaderboard_embed(title: &str, lines: &[String]) -> serenity::CreateEmbed {
    let description = if lines.is_empty() {
        "No one is on the board yet.".to_owned()
    } else {
        lines.join("\n")
    };

    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
}
