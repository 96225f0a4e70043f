use std::time::Duration;

use serenity::{all::CommandInteraction, builder::CreateEmbed};

use crate::{
    common::{duration::parse_duration, options::Options},
    engine::{INVALID_DURATION, MISSING_PRIZE},
    models::{
        command::{CommandContext, CommandContextReply},
        error::GiveawayError,
        handler::Handler,
        response::{Response, ResponseResult},
    },
};

use super::parse_winners;

#[derive(Debug, PartialEq, Eq)]
pub struct StartRequest {
    pub duration: Duration,
    pub winners: usize,
    pub prize: String,
}

impl StartRequest {
    pub fn parse(
        duration: Option<String>,
        winners: Option<i64>,
        prize: Option<String>,
    ) -> Result<StartRequest, GiveawayError> {
        let duration = duration
            .as_deref()
            .and_then(parse_duration)
            .ok_or(GiveawayError::Validation(INVALID_DURATION))?;
        let prize = prize
            .map(|prize| prize.trim().to_string())
            .filter(|prize| !prize.is_empty())
            .ok_or(GiveawayError::Validation(MISSING_PRIZE))?;

        Ok(StartRequest {
            duration,
            winners: parse_winners(winners)?.unwrap_or(1),
            prize,
        })
    }
}

pub async fn start(
    handler: &Handler,
    ctx: &CommandContext,
    cmd: &CommandInteraction,
    options: &Options<'_>,
) -> ResponseResult {
    let request = StartRequest::parse(
        options.get_string("duration"),
        options.get_integer("winners"),
        options.get_string("prize"),
    )?;

    ctx.defer(cmd).await?;

    let message_id = handler
        .engine
        .start(
            cmd.channel_id,
            request.duration,
            request.winners,
            &request.prize,
        )
        .await?;

    ctx.reply(
        cmd,
        Response::new()
            .embed(
                CreateEmbed::new()
                    .title("Giveaway started")
                    .description(format!(
                        "**{}** is now running.\nGiveaway ID: `{message_id}`\nUse this ID to end or reroll the giveaway.",
                        request.prize
                    ))
                    .color(0x00ff00),
            )
            .ephemeral(true),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::INVALID_WINNERS;

    #[test]
    fn parses_a_ten_minute_giveaway() {
        let request = StartRequest::parse(
            Some("10m".to_string()),
            Some(1),
            Some("Gift Card".to_string()),
        )
        .unwrap();

        assert_eq!(
            request,
            StartRequest {
                duration: Duration::from_millis(600_000),
                winners: 1,
                prize: "Gift Card".to_string(),
            }
        );
    }

    #[test]
    fn winners_default_to_one() {
        let request =
            StartRequest::parse(Some("1h".to_string()), None, Some("Nitro".to_string()))
                .unwrap();

        assert_eq!(request.winners, 1);
    }

    #[test]
    fn rejects_unparseable_duration() {
        assert_eq!(
            StartRequest::parse(Some("soon".to_string()), Some(1), Some("Nitro".to_string())),
            Err(GiveawayError::Validation(INVALID_DURATION))
        );
    }

    #[test]
    fn rejects_blank_prize() {
        assert_eq!(
            StartRequest::parse(Some("1h".to_string()), Some(1), Some("   ".to_string())),
            Err(GiveawayError::Validation(MISSING_PRIZE))
        );
    }

    #[test]
    fn rejects_non_positive_winners() {
        assert_eq!(
            StartRequest::parse(Some("1h".to_string()), Some(0), Some("Nitro".to_string())),
            Err(GiveawayError::Validation(INVALID_WINNERS))
        );
    }
}
