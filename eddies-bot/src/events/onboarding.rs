use poise::serenity_prelude as serenity;
use tracing::{error, info};

use eddies_core::Data;
use eddies_database::Database;
use eddies_database::impls::accounts::ensure_account;
use eddies_utils::parse::sanitize_username;

/// Register an account the first time a user says anything, and greet them.
pub async fn handle_message_onboarding(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) {
    // Ignore bots and webhooks.
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let created = match ensure_author_account(&data.db, &message.author).await {
        Ok(created) => created,
        Err(source) => {
            error!(?source, "failed to ensure player account");
            return;
        }
    };

    if !created {
        return;
    }

    info!(user_id = message.author.id.get(), "registered new player");

    let welcome = format!(
        "Hey {}! 🎉 Welcome to Eddies! Work shifts, claim your daily reward, \
         and climb the leaderboards. Try `{}help` to get started.",
        display_name_for(&message.author),
        eddies_utils::COMMAND_PREFIX,
    );

    if let Err(source) = message.channel_id.say(&ctx.http, welcome).await {
        error!(?source, "failed to send welcome message");
    }
}

/// Insert the author's account if missing, under a sanitized name or the
/// `user<id>` fallback. Returns true when a new account was created.
pub async fn ensure_author_account(db: &Database, user: &serenity::User) -> anyhow::Result<bool> {
    ensure_account(db, user.id.get(), &display_name_for(user)).await
}

fn display_name_for(user: &serenity::User) -> String {
    match sanitize_username(&user.name) {
        Some(name) => name.to_owned(),
        None => format!("user{}", user.id.get()),
    }
}
