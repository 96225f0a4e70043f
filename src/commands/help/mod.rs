use serenity::{
    all::CommandInteraction,
    builder::{CreateCommand, CreateEmbed, CreateEmbedFooter},
    model::Timestamp,
};

use crate::models::{
    command::{Command, CommandContext, CommandContextReply},
    handler::Handler,
    response::{Response, ResponseResult},
};

const COMMANDS: [(&str, &str); 6] = [
    ("/ping", "Check the bot's latency."),
    (
        "/giveaway start <duration> <prize> [winners]",
        "Start a giveaway. Duration can be in days (d), hours (h) or minutes (m), like `1d`, `2h` or `30m`.",
    ),
    (
        "/giveaway end <id>",
        "End a giveaway now and announce the winners.",
    ),
    (
        "/giveaway reroll <id> [winners]",
        "Reroll winners for an ended giveaway.",
    ),
    ("/giveaway status", "List the running giveaways."),
    ("/help", "Show this list."),
];

pub struct HelpCommand;

#[async_trait::async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("help").description("List the bot's commands")
    }

    async fn router(
        &self,
        _handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult {
        ctx.reply(
            cmd,
            Response::new()
                .embed(
                    CreateEmbed::new()
                        .title("Bot Commands")
                        .description("Here are the commands you can use:")
                        .fields(COMMANDS.map(|(name, value)| (name, value, false)))
                        .footer(CreateEmbedFooter::new("Bot Help"))
                        .timestamp(Timestamp::now())
                        .color(0xfdca4c),
                )
                .ephemeral(true),
        )
        .await
    }
}
