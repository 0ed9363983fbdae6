use eddies_core::{Context, Error};
use eddies_database::impls::leaderboard::{DEFAULT_LEADERBOARD_SIZE, top_by_balance};

use crate::CommandMeta;
use crate::economy::embeds::leaderboard_embed;

pub const META: CommandMeta = CommandMeta {
    name: "topcash",
    desc: "Top 10 players by balance.",
    category: "economy",
    usage: "!topcash",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn topcash(ctx: Context<'_>) -> Result<(), Error> {
    let entries = top_by_balance(&ctx.data().db, DEFAULT_LEADERBOARD_SIZE).await?;

    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            format!("{}. **{}** — {} eddies", rank + 1, entry.username, entry.value)
        })
        .collect();

    ctx.send(poise::CreateReply::default().embed(leaderboard_embed("💰 Top 10 by balance", &lines)))
        .await?;

    Ok(())
}
