use eddies_core::{Context, Error};
use eddies_database::impls::accounts::update_username;
use eddies_utils::parse::sanitize_username;

use crate::CommandMeta;
use crate::economy::embeds::{no_account_message, usage_message};

pub const META: CommandMeta = CommandMeta {
    name: "setname",
    desc: "Change your display name.",
    category: "economy",
    usage: "!setname <name>",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn setname(
    ctx: Context<'_>,
    #[description = "Your new name"]
    #[rest]
    name: Option<String>,
) -> Result<(), Error> {
    let Some(raw) = name else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let Some(clean) = sanitize_username(&raw) else {
        ctx.say("Names are 1-20 letters or digits, nothing else.")
            .await?;
        return Ok(());
    };

    if update_username(&ctx.data().db, ctx.author().id.get(), clean).await? {
        ctx.say(format!("Your name is now **{}**.", clean)).await?;
    } else {
        ctx.say(no_account_message()).await?;
    }

    Ok(())
}
