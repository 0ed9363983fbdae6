use eddies_core::{Context, Error};
use eddies_database::impls::work::{StartShiftOutcome, start_shift};
use eddies_utils::time::now_unix_secs;

use crate::CommandMeta;
use crate::economy::embeds::no_account_message;

pub const META: CommandMeta = CommandMeta {
    name: "work",
    desc: "Start a four-hour shift at your current job.",
    category: "economy",
    usage: "!work",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn work(ctx: Context<'_>) -> Result<(), Error> {
    let outcome = start_shift(&ctx.data().db, ctx.author().id.get(), now_unix_secs()).await?;

    let reply = match outcome {
        StartShiftOutcome::Started => "You're off to work! Your pay lands in 4 hours.",
        StartShiftOutcome::AlreadyWorking => "You're already on shift!",
        StartShiftOutcome::UnknownUser => no_account_message(),
    };

    ctx.say(reply).await?;
    Ok(())
}
