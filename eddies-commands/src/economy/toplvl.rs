use eddies_core::{Context, Error};
use eddies_database::impls::leaderboard::{DEFAULT_LEADERBOARD_SIZE, top_by_experience};
use eddies_database::model::leveling::level_for_experience;

use crate::CommandMeta;
use crate::economy::embeds::leaderboard_embed;

pub const META: CommandMeta = CommandMeta {
    name: "toplvl",
    desc: "Top 10 players by level.",
    category: "economy",
    usage: "!toplvl",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn toplvl(ctx: Context<'_>) -> Result<(), Error> {
    let entries = top_by_experience(&ctx.data().db, DEFAULT_LEADERBOARD_SIZE).await?;

    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            format!(
                "{}. **{}** — level {}",
                rank + 1,
                entry.username,
                level_for_experience(entry.value)
            )
        })
        .collect();

    ctx.send(poise::CreateReply::default().embed(leaderboard_embed("🏆 Top 10 by level", &lines)))
        .await?;

    Ok(())
}
