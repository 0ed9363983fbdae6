use eddies_core::{Context, Error};
use eddies_utils::embed::build_basic_embed;

use crate::utility::embeds::grouped_help_description;
use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    let description = grouped_help_description(&commands);
    ctx.send(
        poise::CreateReply::default().embed(build_basic_embed("Available Commands", description)),
    )
    .await?;

    Ok(())
}
