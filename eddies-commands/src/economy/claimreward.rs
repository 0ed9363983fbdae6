use eddies_core::{Context, Error};
use eddies_database::impls::daily_rewards::{ClaimOutcome, claim_daily_reward};
use eddies_utils::time::today_local;

use crate::CommandMeta;
use crate::economy::embeds::no_account_message;

pub const META: CommandMeta = CommandMeta {
    name: "claimreward",
    desc: "Claim your once-a-day reward.",
    category: "economy",
    usage: "!claimreward",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn claimreward(ctx: Context<'_>) -> Result<(), Error> {
    let outcome = claim_daily_reward(&ctx.data().db, ctx.author().id.get(), today_local()).await?;

    let reply = match outcome {
        ClaimOutcome::Granted(reward) => format!(
            "You received {} eddies and {} experience. Come back tomorrow!",
            reward.eddies, reward.experience
        ),
        ClaimOutcome::AlreadyClaimed => "You already claimed today's reward!".to_owned(),
        ClaimOutcome::UnknownUser => no_account_message().to_owned(),
    };

    ctx.say(reply).await?;
    Ok(())
}
