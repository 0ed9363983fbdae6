use eddies_core::{Context, Error};
use eddies_database::impls::accounts::get_account;
use eddies_database::impls::work::{ShiftStatus, shift_status};
use eddies_utils::formatting::format_remaining_shift;
use eddies_utils::time::now_unix_secs;

use crate::CommandMeta;
use crate::economy::embeds::{no_account_message, profile_embed};

pub const META: CommandMeta = CommandMeta {
    name: "profile",
    desc: "Show your balance, level, and job.",
    category: "economy",
    usage: "!profile",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn profile(ctx: Context<'_>) -> Result<(), Error> {
    let db = &ctx.data().db;
    let user_id = ctx.author().id.get();

    let Some(account) = get_account(db, user_id).await? else {
        ctx.say(no_account_message()).await?;
        return Ok(());
    };

    let job_line = match shift_status(db, user_id, now_unix_secs()).await? {
        Some(ShiftStatus::OnShift {
            job_name,
            remaining_seconds,
        }) => format!(
            "On shift: {}, {} left",
            job_name,
            format_remaining_shift(remaining_seconds)
        ),
        Some(ShiftStatus::Idle { job_name }) => job_name,
        None => no_account_message().to_owned(),
    };

    ctx.send(poise::CreateReply::default().embed(profile_embed(&account, &job_line)))
        .await?;

    Ok(())
}
