use serenity::{all::CommandInteraction, builder::CreateEmbed};

use crate::{
    common::options::Options,
    models::{
        command::{CommandContext, CommandContextReply},
        handler::Handler,
        response::{Response, ResponseResult},
    },
};

use super::parse_message_id;

pub async fn end(
    handler: &Handler,
    ctx: &CommandContext,
    cmd: &CommandInteraction,
    options: &Options<'_>,
) -> ResponseResult {
    let id = parse_message_id(options.get_string("id"))?;

    ctx.defer(cmd).await?;

    let winners = handler.engine.end(id).await?;

    ctx.reply(
        cmd,
        Response::new()
            .embed(
                CreateEmbed::new()
                    .title("Successfully ended giveaway")
                    .description(format!("Drew {} winner(s).", winners.len())),
            )
            .ephemeral(true),
    )
    .await
}
