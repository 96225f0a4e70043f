use serenity::{all::CommandInteraction, builder::CreateEmbed};

use crate::{
    common::options::Options,
    models::{
        command::{CommandContext, CommandContextReply},
        handler::Handler,
        response::{Response, ResponseResult},
    },
};

use super::{parse_message_id, parse_winners};

pub async fn reroll(
    handler: &Handler,
    ctx: &CommandContext,
    cmd: &CommandInteraction,
    options: &Options<'_>,
) -> ResponseResult {
    let id = parse_message_id(options.get_string("id"))?;
    let winners = parse_winners(options.get_integer("winners"))?;

    ctx.defer(cmd).await?;

    let winners = handler.engine.reroll(id, winners).await?;

    ctx.reply(
        cmd,
        Response::new()
            .embed(
                CreateEmbed::new()
                    .title("Successfully rerolled giveaway")
                    .description(format!("Drew {} new winner(s).", winners.len())),
            )
            .ephemeral(true),
    )
    .await
}
