use serenity::{
    all::CommandInteraction,
    builder::{CreateCommand, CreateEmbed, CreateMessage},
};

use crate::models::{
    command::{Command, CommandContext, CommandContextReply},
    handler::Handler,
    response::{Response, ResponseError, ResponseResult},
};

pub struct PingCommand;

#[async_trait::async_trait]
impl Command for PingCommand {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("ping").description("Check the bot's latency")
    }

    async fn router(
        &self,
        handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult {
        ctx.defer(cmd).await?;

        let start = std::time::Instant::now();
        let message = match cmd
            .channel_id
            .send_message(&ctx.ctx, CreateMessage::new().content("Pinging..."))
            .await
        {
            Ok(message) => message,
            Err(err) => {
                return Err(ResponseError::Serenity(err));
            }
        };
        let latency = start.elapsed();
        if let Err(err) = message.delete(&ctx.ctx).await {
            return Err(ResponseError::Serenity(err));
        }

        let running = handler.engine.status().await.len();

        ctx.reply(
            cmd,
            Response::new()
                .embed(
                    CreateEmbed::new()
                        .title("Pong! 🏓")
                        .fields(vec![
                            (
                                "Latency",
                                pretty_duration::pretty_duration(&latency, None),
                                true,
                            ),
                            (
                                "Uptime",
                                pretty_duration::pretty_duration(
                                    &handler.start_time.elapsed(),
                                    None,
                                ),
                                true,
                            ),
                            ("Running giveaways", running.to_string(), true),
                        ])
                        .color(0xeb966d),
                )
                .ephemeral(true),
        )
        .await
    }
}
