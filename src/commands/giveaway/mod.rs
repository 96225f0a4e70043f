use std::str::FromStr;

use serenity::{
    all::{CommandInteraction, CommandOptionType, MessageId},
    builder::{CreateCommand, CreateCommandOption},
};

use crate::{
    common::options::Options,
    engine::INVALID_WINNERS,
    models::{
        command::{Command, CommandContext},
        error::GiveawayError,
        handler::Handler,
        response::{ResponseError, ResponseResult},
    },
};

pub mod end;
pub mod reroll;
pub mod start;
pub mod status;

const INVALID_MESSAGE_ID: &str = "Invalid message ID. Use the ID of the giveaway message.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
enum GiveawaySubcommand {
    Start,
    End,
    Reroll,
    Status,
}

/// Accepts a bare message ID or a message link and returns the message ID.
pub fn parse_message_id(input: Option<String>) -> Result<MessageId, GiveawayError> {
    let input = input.unwrap_or_default();
    let id = input.trim().trim_end_matches('/').rsplit('/').next().unwrap_or_default();

    match id.parse::<u64>() {
        Ok(id) if id > 0 => Ok(MessageId::new(id)),
        _ => Err(GiveawayError::Validation(INVALID_MESSAGE_ID)),
    }
}

/// Reads an optional winner count option, which must be positive when given.
pub fn parse_winners(value: Option<i64>) -> Result<Option<usize>, GiveawayError> {
    match value {
        None => Ok(None),
        Some(winners) => usize::try_from(winners)
            .ok()
            .filter(|winners| *winners > 0)
            .map(Some)
            .ok_or(GiveawayError::Validation(INVALID_WINNERS)),
    }
}

fn id_option(description: &'static str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "id", description).required(true)
}

fn winners_option(description: &'static str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "winners", description)
        .min_int_value(1)
        .required(false)
}

pub struct GiveawayCommand;

#[async_trait::async_trait]
impl Command for GiveawayCommand {
    fn name(&self) -> &'static str {
        "giveaway"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("giveaway")
            .description("Giveaway commands")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    GiveawaySubcommand::Start.to_string(),
                    "Start a new giveaway",
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "duration",
                        "How long the giveaway runs, like 1d, 2h or 30m",
                    )
                    .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "prize",
                        "The prize for the giveaway",
                    )
                    .required(true),
                )
                .add_sub_option(winners_option(
                    "The number of winners for the giveaway (default: 1)",
                )),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    GiveawaySubcommand::End.to_string(),
                    "End a giveaway now and draw its winners",
                )
                .add_sub_option(id_option("The message ID of the giveaway to end")),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    GiveawaySubcommand::Reroll.to_string(),
                    "Draw new winners for an ended giveaway",
                )
                .add_sub_option(id_option("The message ID of the giveaway to reroll"))
                .add_sub_option(winners_option(
                    "The number of winners to draw (default: the original count)",
                )),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                GiveawaySubcommand::Status.to_string(),
                "List the running giveaways",
            ))
            .dm_permission(false)
    }

    async fn router(
        &self,
        handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult {
        let options = Options {
            options: cmd.data.options(),
        };

        match options
            .subcommand()
            .and_then(|name| GiveawaySubcommand::from_str(name).ok())
        {
            Some(GiveawaySubcommand::Start) => start::start(handler, ctx, cmd, &options).await,
            Some(GiveawaySubcommand::End) => end::end(handler, ctx, cmd, &options).await,
            Some(GiveawaySubcommand::Reroll) => reroll::reroll(handler, ctx, cmd, &options).await,
            Some(GiveawaySubcommand::Status) => status::status(handler, ctx, cmd).await,
            None => Err(ResponseError::Execution(
                "Invalid command",
                Some("You must specify a subcommand to use this command!".to_string()),
            )),
        }
    }
}
